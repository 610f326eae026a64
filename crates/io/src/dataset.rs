//! NetCDF dataset access: open, time-axis read, value replace, attributes.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use netcdf::AttributeValue;
use tracing::debug;

use crate::error::IoError;

/// Name of the time coordinate variable.
const TIME_VAR: &str = "time";

/// Calendar assumed when the time variable carries no `calendar` attribute.
const DEFAULT_CALENDAR: &str = "gregorian";

/// Raw time axis as stored in a file: numeric offsets plus the CF metadata
/// needed to interpret them. Opaque to everything but the calendar codec.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxis {
    /// Numeric offsets, in the order stored in the file.
    pub values: Vec<f64>,
    /// The `units` attribute, verbatim.
    pub units: String,
    /// The `calendar` attribute, or `"gregorian"` if absent.
    pub calendar: String,
}

/// Open a NetCDF dataset at `path` for mutation.
///
/// The path must carry a `.nc` extension and exist on disk; the file itself
/// is validated by the NetCDF library on open. The returned handle releases
/// the dataset when dropped.
pub fn open_dataset(path: &Path) -> Result<netcdf::FileMut, IoError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("nc") => {}
        _ => {
            return Err(IoError::InvalidExtension {
                path: path.to_path_buf(),
            });
        }
    }
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "opening dataset in append mode");
    Ok(netcdf::append(path)?)
}

/// Copy the dataset at `from` to `to`, so a rebase can target a fresh file
/// instead of mutating its input.
pub fn copy_dataset(from: &Path, to: &Path) -> Result<(), IoError> {
    if !from.exists() {
        return Err(IoError::FileNotFound {
            path: from.to_path_buf(),
        });
    }
    fs::copy(from, to).map_err(|e| IoError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!(from = %from.display(), to = %to.display(), "dataset copied");
    Ok(())
}

/// Read the `time` variable's values together with its `units` and
/// `calendar` attributes.
///
/// `path` is only used for error reporting.
pub fn read_time_axis(file: &netcdf::File, path: &Path) -> Result<TimeAxis, IoError> {
    let var = file
        .variable(TIME_VAR)
        .ok_or_else(|| IoError::MissingTimeVariable {
            path: path.to_path_buf(),
        })?;

    let values = var.get_values::<f64, _>(..)?;

    let units: String = var
        .attribute_value("units")
        .ok_or_else(|| IoError::MissingUnits {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IoError::Netcdf {
            reason: format!("failed to read 'units' attribute: {e}"),
        })?
        .try_into()
        .map_err(|e: netcdf::Error| IoError::Netcdf {
            reason: format!("'units' attribute is not a string: {e}"),
        })?;

    let calendar = var
        .attribute_value("calendar")
        .and_then(|res| res.ok())
        .and_then(|av| match av {
            AttributeValue::Str(s) => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| DEFAULT_CALENDAR.to_string());

    debug!(
        n = values.len(),
        units = %units,
        calendar = %calendar,
        "time axis read"
    );
    Ok(TimeAxis {
        values,
        units,
        calendar,
    })
}

/// Replace the `time` variable's values in a single put.
///
/// `path` is only used for error reporting.
pub fn replace_time_values(
    file: &mut netcdf::FileMut,
    values: &[f64],
    path: &Path,
) -> Result<(), IoError> {
    let mut var = file
        .variable_mut(TIME_VAR)
        .ok_or_else(|| IoError::MissingTimeVariable {
            path: path.to_path_buf(),
        })?;
    var.put_values(values, ..)?;
    Ok(())
}

/// Record `stamp` as the dataset's creation time: a numeric
/// `creation_timestamp` (unix seconds) global attribute plus a matching
/// human-readable `creation_date` string.
pub fn set_creation_attrs(file: &mut netcdf::FileMut, stamp: NaiveDateTime) -> Result<(), IoError> {
    let unix_seconds = stamp.and_utc().timestamp() as f64;
    file.add_attribute("creation_timestamp", unix_seconds)?;
    file.add_attribute(
        "creation_date",
        stamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    )?;
    Ok(())
}
