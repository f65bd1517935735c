//! # Result Model
//!
//! In-memory result structures handed to the report writer by the upstream
//! peak-detection pipeline: samples, peaks, peak groups and their matched
//! compounds.
//!
//! Everything here is produced upstream. The report writer only reads these
//! types, with one exception: it overwrites [`PeakGroup::meta_group_id`] on
//! child groups it decides to emit.

mod compound;
mod group;
mod peak;
mod sample;


pub use compound::Compound;
pub use group::{PeakGroup, QuantType};
pub use peak::Peak;
pub use sample::{sort_samples, Sample};
