//! Tests for argument parsing and the patch runner

#[cfg(test)]
mod tests {
    use clap::Parser;
    use monotile::io::cli::{Cli, PatchRunner, PatchSize, parse_clip};
    use monotile::io::configuration::{DEFAULT_GENERATIONS, DEFAULT_RNG_SEED, DEFAULT_SCALE};
    use monotile::lattice::ClipRect;
    use monotile::{MetatileType, TilingError};
    use std::path::Path;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("monotile").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    fn quiet_cli(output: &Path, args: &[&str]) -> Cli {
        let output = output.to_string_lossy().to_string();
        let mut all = vec!["--quiet", "--output", output.as_str()];
        all.extend_from_slice(args);
        parse(&all)
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.seed_type, MetatileType::P);
        assert_eq!(cli.generations, DEFAULT_GENERATIONS);
        assert_eq!(cli.scale, DEFAULT_SCALE);
        assert_eq!(cli.rng_seed, DEFAULT_RNG_SEED);
        assert!(cli.clip.is_none());
        assert!(cli.patch.is_none());
        assert!(cli.should_show_progress());
        assert!(!cli.no_overwrite);
    }

    #[test]
    fn test_flags() {
        let cli = parse(&["-t", "h", "-g", "2", "-s", "6", "--clip", "0,0,40,30", "-q", "-n"]);
        assert_eq!(cli.seed_type, MetatileType::H);
        assert_eq!(cli.generations, 2);
        assert_eq!(cli.scale, 6);
        assert_eq!(cli.clip, Some(ClipRect::new(0, 40, 0, 30)));
        assert!(!cli.should_show_progress());
        assert!(cli.no_overwrite);

        let cli = parse(&["--patch", "60x40", "--rng-seed", "7"]);
        assert_eq!(cli.patch, Some(PatchSize { width: 60, height: 40 }));
        assert_eq!(cli.rng_seed, 7);
    }

    #[test]
    fn test_rejects_bad_values() {
        let bad = [
            vec!["monotile", "-t", "Q"],
            vec!["monotile", "--clip", "1,2,3"],
            vec!["monotile", "--patch", "10by10"],
            vec!["monotile", "-g", "-1"],
        ];
        for args in bad {
            assert!(Cli::try_parse_from(args.iter().copied()).is_err(), "{args:?} was accepted");
        }
    }

    // Windows left of the origin start with a minus sign
    #[test]
    fn test_clip_with_negative_corner() {
        let cli = parse(&["-g", "4", "--clip", "-60,0,60,80"]);
        assert_eq!(cli.generations, 4);
        assert_eq!(cli.clip, Some(ClipRect::new(-60, 60, 0, 80)));

        let cli = parse(&["--clip", "-60,-40,-10,-5", "-q"]);
        assert_eq!(cli.clip, Some(ClipRect::new(-60, -10, -40, -5)));
        assert!(cli.quiet);
    }

    #[test]
    fn test_patch_size_parsing() {
        assert_eq!("12x8".parse::<PatchSize>().ok(), Some(PatchSize { width: 12, height: 8 }));
        assert_eq!(" 5 X 6 ".parse::<PatchSize>().ok(), Some(PatchSize { width: 5, height: 6 }));
        assert!("0x8".parse::<PatchSize>().is_err());
        assert!("12".parse::<PatchSize>().is_err());
        assert!("axb".parse::<PatchSize>().is_err());
    }

    #[test]
    fn test_clip_parsing() {
        assert_eq!(parse_clip("-10, -5, 10, 5").ok(), Some(ClipRect::new(-10, 10, -5, 5)));
        assert!(parse_clip("10,0,0,5").is_err());
        assert!(parse_clip("0,0,1,x").is_err());
        assert!(parse_clip("").is_err());
    }

    #[test]
    fn test_validate_limits() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output = temp_dir.path().join("hats.png");

        assert!(quiet_cli(&output, &["-g", "9"]).validate().is_err());
        assert!(quiet_cli(&output, &["-s", "0"]).validate().is_err());
        assert!(quiet_cli(&output, &["-s", "65"]).validate().is_err());
        assert!(quiet_cli(&output, &[]).validate().is_ok());

        std::fs::write(&output, b"existing").expect("write placeholder");
        assert!(quiet_cli(&output, &["-n"]).validate().is_err());
        assert!(quiet_cli(&output, &[]).validate().is_ok());
    }

    #[test]
    fn test_run_writes_png() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output = temp_dir.path().join("gen1.png");
        let cli = quiet_cli(&output, &["-g", "1"]);

        let summary = PatchRunner::new(cli).run().expect("run succeeds");
        assert_eq!(summary.generation, 1);
        assert_eq!(summary.metatiles, 11);
        assert_eq!(summary.hats, 26);
        assert_eq!(summary.output, output);
        assert!(output.exists());
    }

    #[test]
    fn test_run_random_board() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output = temp_dir.path().join("board.png");
        let cli = quiet_cli(&output, &["--patch", "120x120", "--rng-seed", "3"]);

        let summary = PatchRunner::new(cli).run().expect("run succeeds");
        assert!(summary.hats > 0);
        assert!(summary.hats < summary.metatiles * 4);
        assert!(output.exists());
    }

    #[test]
    fn test_run_reports_empty_patch() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output = temp_dir.path().join("empty.png");
        let cli = quiet_cli(&output, &["-g", "1", "--clip", "5000,5000,5100,5100"]);

        let result = PatchRunner::new(cli).run();
        assert!(matches!(result, Err(TilingError::EmptyPatch { generation: 1 })));
        assert!(!output.exists());
    }
}
