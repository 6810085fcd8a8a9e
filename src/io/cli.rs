//! Command-line interface for growing a patch and rendering its hats

use crate::io::configuration::{
    DEFAULT_GENERATIONS, DEFAULT_OUTPUT, DEFAULT_RNG_SEED, DEFAULT_SCALE, DEFAULT_SEED_TYPE,
    MAX_GENERATIONS, MAX_SCALE,
};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::io::image::export_hats_as_png;
use crate::io::progress::GenerationProgress;
use crate::lattice::ClipRect;
use crate::metatile::{MetatileSet, MetatileType};
use crate::patch::PatchParams;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Requested board size in planar units
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatchSize {
    /// Extent along `2x + y`
    pub width: i32,
    /// Extent along `y`
    pub height: i32,
}

impl FromStr for PatchSize {
    type Err = TilingError;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = s
            .split_once(['x', 'X'])
            .and_then(|(w, h)| Some((w.trim().parse().ok()?, h.trim().parse().ok()?)));
        match parsed {
            Some((width, height)) if width > 0 && height > 0 => Ok(Self { width, height }),
            _ => Err(invalid_parameter(
                "patch",
                &s,
                &"expected WIDTHxHEIGHT with positive integers",
            )),
        }
    }
}

/// Parse a clip window given as `X0,Y0,X1,Y1` in planar units
///
/// # Errors
///
/// Returns an error unless the input is four integers with `X0 <= X1` and
/// `Y0 <= Y1`.
pub fn parse_clip(s: &str) -> Result<ClipRect> {
    let values: Vec<i32> = s
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| invalid_parameter("clip", &s, &e))?;

    match values.as_slice() {
        &[x0, y0, x1, y1] if x0 <= x1 && y0 <= y1 => Ok(ClipRect::new(x0, x1, y0, y1)),
        _ => Err(invalid_parameter(
            "clip",
            &s,
            &"expected X0,Y0,X1,Y1 with X0 <= X1 and Y0 <= Y1",
        )),
    }
}

#[derive(Parser)]
#[command(name = "monotile")]
#[command(
    author,
    version,
    about = "Generate patches of the hat aperiodic monotile"
)]
/// Command-line arguments for the patch generator
pub struct Cli {
    /// Seed metatile type (H, T, P or F)
    #[arg(short = 't', long, default_value = DEFAULT_SEED_TYPE)]
    pub seed_type: MetatileType,

    /// Number of substitution generations
    #[arg(short, long, default_value_t = DEFAULT_GENERATIONS)]
    pub generations: usize,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Pixels per lattice unit
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Keep only hats inside X0,Y0,X1,Y1 (planar units: 2x+y across, y up)
    #[arg(
        long,
        value_name = "X0,Y0,X1,Y1",
        value_parser = parse_clip,
        allow_hyphen_values = true
    )]
    pub clip: Option<ClipRect>,

    /// Cut a random WIDTHxHEIGHT board from a P-seeded patch
    #[arg(short, long, value_name = "WIDTHxHEIGHT")]
    pub patch: Option<PatchSize>,

    /// Random seed for board selection
    #[arg(short, long, default_value_t = DEFAULT_RNG_SEED)]
    pub rng_seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Refuse to replace an existing output file
    #[arg(short, long)]
    pub no_overwrite: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check argument ranges that clap cannot express
    ///
    /// # Errors
    ///
    /// Returns an error for a generation count above [`MAX_GENERATIONS`], a
    /// scale outside `1..=MAX_SCALE`, or an existing output with
    /// `--no-overwrite`.
    pub fn validate(&self) -> Result<()> {
        if self.generations > MAX_GENERATIONS {
            return Err(invalid_parameter(
                "generations",
                &self.generations,
                &format!("at most {MAX_GENERATIONS} generations are supported"),
            ));
        }
        if self.scale == 0 || self.scale > MAX_SCALE {
            return Err(invalid_parameter(
                "scale",
                &self.scale,
                &format!("must be between 1 and {MAX_SCALE}"),
            ));
        }
        if self.no_overwrite && self.output.exists() {
            return Err(invalid_parameter(
                "output",
                &self.output.display(),
                &"file already exists",
            ));
        }
        Ok(())
    }
}

/// What a run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSummary {
    /// Generation the patch was grown to
    pub generation: usize,
    /// Metatiles in that generation
    pub metatiles: usize,
    /// Hats rendered after clipping
    pub hats: usize,
    /// Where the image was written
    pub output: PathBuf,
}

/// Grows a patch according to CLI arguments and writes the rendering
pub struct PatchRunner {
    cli: Cli,
}

impl PatchRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Grow, clip and render
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation fails, no hat survives
    /// clipping, or the image cannot be written.
    pub fn run(&self) -> Result<PatchSummary> {
        self.cli.validate()?;

        let (set, clip) = if let Some(size) = self.cli.patch {
            let mut rng = StdRng::seed_from_u64(self.cli.rng_seed);
            let params = PatchParams::randomise(size.width, size.height, &mut rng)?;
            info!(
                generations = params.generations,
                x = params.x,
                y = params.y,
                "selected random board"
            );
            (
                self.grow(MetatileType::P, params.generations),
                Some(params.clip()),
            )
        } else {
            (
                self.grow(self.cli.seed_type, self.cli.generations),
                self.cli.clip,
            )
        };

        let hats = set.hats(clip.as_ref());
        if hats.is_empty() {
            return Err(TilingError::EmptyPatch {
                generation: set.generation(),
            });
        }

        export_hats_as_png(&hats, self.cli.scale, &self.cli.output)?;
        info!(
            generation = set.generation(),
            metatiles = set.len(),
            hats = hats.len(),
            output = %self.cli.output.display(),
            "wrote patch"
        );

        Ok(PatchSummary {
            generation: set.generation(),
            metatiles: set.len(),
            hats: hats.len(),
            output: self.cli.output.clone(),
        })
    }

    fn grow(&self, seed: MetatileType, generations: usize) -> MetatileSet {
        let progress = if self.cli.should_show_progress() {
            GenerationProgress::new(generations)
        } else {
            GenerationProgress::hidden(generations)
        };

        let set = (0..generations).fold(MetatileSet::seed(seed), |set, _| {
            let next = set.expand();
            progress.record(&next);
            next
        });

        progress.finish();
        set
    }
}
