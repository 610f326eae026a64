//! # ncbump-time
//!
//! Pure time arithmetic for rebasing a CF time axis. No I/O: everything in
//! this crate is a function over its inputs, with "now" abstracted behind
//! the [`Clock`] trait.
//!
//! The pieces, in pipeline order:
//!
//! | Module | Description |
//! |--------|-------------|
//! | `units` | CF `units` attribute parsing (`"<unit> since <epoch>"`) |
//! | `codec` | Numeric offsets ↔ calendar datetimes, per unit and calendar |
//! | `delta` | Inter-sample step resolution |
//! | `sequence` | Replacement axis generation from an anchor and step |
//! | `clock` | Injectable "now" source |
//! | `instant` | `YYYY-MM-DDTHH:MM:SSZ` boundary parsing |
//! | `error` | Error types |

mod clock;
mod codec;
mod delta;
mod error;
mod instant;
mod sequence;
mod units;

pub use clock::{Clock, FixedClock, SystemClock};
pub use codec::{Calendar, decode_times, encode_times};
pub use delta::resolve_delta;
pub use error::TimeError;
pub use instant::parse_instant;
pub use sequence::generate_sequence;
pub use units::{CfUnits, TimeUnit};
