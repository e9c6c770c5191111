//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, section enums, error types, and the forgiving
//! deserializers used for values read back from storage.

mod errors;
mod ids;
pub mod lenient;
mod section_id;
mod section_status;

pub use errors::ValidationError;
pub use ids::SubmissionId;
pub use section_id::SectionId;
pub use section_status::SectionStatus;
