//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use monotile::TilingError;
    use monotile::io::error::invalid_parameter;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("scale", &0, &"must be between 1 and 64");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'scale' = '0': must be between 1 and 64"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_empty_patch_display() {
        let error = TilingError::EmptyPatch { generation: 3 };
        assert!(error.to_string().contains("generation 3"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_file_system_error_chains_source() {
        let error = TilingError::FileSystem {
            path: PathBuf::from("out/hats.png"),
            operation: "create directory",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("create directory"));
        assert!(message.contains("out/hats.png"));
        assert_eq!(error.source().map(ToString::to_string).as_deref(), Some("denied"));
    }

    #[test]
    fn test_image_export_chains_source() {
        let source = image::ImageError::IoError(std::io::Error::other("no space"));
        let error = TilingError::ImageExport {
            path: PathBuf::from("hats.png"),
            source,
        };
        assert!(error.to_string().starts_with("Failed to export image to 'hats.png'"));
        assert!(error.source().is_some());
    }
}
