//! Domain layer - pure form rules with no I/O.
//!
//! - `foundation` - identifiers, section enums, errors, lenient deserializers
//! - `geography` - scope, reference tables, cascade resolver
//! - `submission` - the form record, field access, visibility, progress, validation
//! - `draft` - draft keys and snapshot format

pub mod draft;
pub mod foundation;
pub mod geography;
pub mod submission;
