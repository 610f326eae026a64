//! # ncbump-io
//!
//! Thin boundary over the NetCDF storage engine: open a dataset, read the
//! `time` variable with its CF metadata, replace its values in one call,
//! and record creation-time attributes. The numeric values are opaque here;
//! interpreting them is the codec's job in `ncbump-time`.

mod dataset;
mod error;

pub use dataset::{
    TimeAxis, copy_dataset, open_dataset, read_time_axis, replace_time_values, set_creation_attrs,
};
pub use error::IoError;
