//! Submission - the study form, its fields, and the rules derived from them.

pub mod codes;
mod field;
pub mod form;
pub mod progress;
pub mod record;
pub mod validation;
pub mod visibility;

pub use codes::{CausalityMode, MethodClass, YesNo};
pub use field::{FieldError, FieldValue, FormField};
pub use form::{AnswerWithLink, StudyForm};
pub use progress::{compute_progress, is_section_complete, FormProgress};
pub use record::{from_persisted_record, to_api_record};
pub use validation::validate_for_submit;
pub use visibility::{
    is_research_details_visible, is_research_details_visible_for_codes, DisclosureRule,
    RESEARCH_DETAILS_RULE,
};
