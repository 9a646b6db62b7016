//! Validated value types at the scoring boundary.
//!
//! Request bodies arrive as loosely-typed `*Input` structs and are converted
//! with `TryFrom`. Conversion rejects bad shapes but never rewrites the
//! strings the scorer reads: an empty string is the only "absent" value.

pub mod availability;
pub mod candidate;
pub mod job;
