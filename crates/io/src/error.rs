//! Error types for ncbump-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the ncbump-io crate.
///
/// This enum covers path validation, missing time-axis pieces, and failures
/// surfaced by the NetCDF library, so callers can tell "file is bad" apart
/// from "time axis is bad".
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when an input path does not carry the `.nc` extension.
    #[error("invalid input file (missing .nc extension): {}", path.display())]
    InvalidExtension {
        /// Path that was rejected.
        path: PathBuf,
    },

    /// Returned when a dataset has no `time` variable.
    #[error("no 'time' variable in {}", path.display())]
    MissingTimeVariable {
        /// Path to the dataset that was inspected.
        path: PathBuf,
    },

    /// Returned when the time variable carries no `units` attribute.
    #[error("time variable in {} has no 'units' attribute", path.display())]
    MissingUnits {
        /// Path to the dataset that was inspected.
        path: PathBuf,
    },

    /// Returned when copying the input dataset to the output path fails.
    #[error("failed to copy {} to {}: {reason}", from.display(), to.display())]
    Copy {
        /// Source path.
        from: PathBuf,
        /// Destination path.
        to: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },
}

impl From<netcdf::Error> for IoError {
    fn from(e: netcdf::Error) -> Self {
        IoError::Netcdf {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.nc"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.nc");
    }

    #[test]
    fn display_invalid_extension() {
        let err = IoError::InvalidExtension {
            path: PathBuf::from("/tmp/data.txt"),
        };
        assert_eq!(
            err.to_string(),
            "invalid input file (missing .nc extension): /tmp/data.txt"
        );
    }

    #[test]
    fn display_missing_time_variable() {
        let err = IoError::MissingTimeVariable {
            path: PathBuf::from("/data/obs.nc"),
        };
        assert_eq!(err.to_string(), "no 'time' variable in /data/obs.nc");
    }

    #[test]
    fn display_missing_units() {
        let err = IoError::MissingUnits {
            path: PathBuf::from("/data/obs.nc"),
        };
        assert_eq!(
            err.to_string(),
            "time variable in /data/obs.nc has no 'units' attribute"
        );
    }

    #[test]
    fn display_copy() {
        let err = IoError::Copy {
            from: PathBuf::from("/a.nc"),
            to: PathBuf::from("/b.nc"),
            reason: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to copy /a.nc to /b.nc: permission denied"
        );
    }

    #[test]
    fn from_netcdf_error() {
        let nc_err = netcdf::Error::Str("test nc error".to_string());
        let err: IoError = nc_err.into();
        assert!(matches!(err, IoError::Netcdf { .. }));
        assert!(err.to_string().contains("test nc error"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
