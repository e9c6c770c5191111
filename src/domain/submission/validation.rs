//! Submit-time validation.
//!
//! Completeness is checked section by section with the same predicates the
//! progress bar uses; format and cross-field rules are checked on top.

use crate::domain::foundation::{SectionId, ValidationError};

use super::form::{filled, AnswerWithLink, StudyForm};
use super::visibility::is_research_details_visible;

/// Returns every rule `form` breaks, or `Ok(())` if it can be submitted.
pub fn validate_for_submit(form: &StudyForm) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    require_text(&mut errors, "studyId", &form.study_id);
    require_text(&mut errors, "studyTitle", &form.study_title);
    require_text(&mut errors, "leadCenter", &form.lead_center);
    require_list(&mut errors, "otherCenters", &form.other_centers);
    require_text(&mut errors, "contactName", &form.contact_name);
    require_text(&mut errors, "contactEmail", &form.contact_email);
    if filled(&form.contact_email) {
        if let Err(reason) = check_email(form.contact_email.trim()) {
            errors.push(ValidationError::invalid_format("contactEmail", reason));
        }
    }

    require_text(&mut errors, "studyType", &form.study_type);
    require_text(&mut errors, "timing", &form.timing);
    require_text(&mut errors, "analyticalScope", &form.analytical_scope);
    require_some(&mut errors, "geographicScope", form.geographic_scope.is_some());
    if let Some(field) = form.geographic_scope.and_then(|s| s.editable_field()) {
        require_list(&mut errors, field.field_name(), form.geography.get(field));
    }
    require_text(&mut errors, "resultLevel", &form.result_level);
    require_some(&mut errors, "causalityMode", form.causality_mode.is_some());
    require_some(&mut errors, "methodClass", form.method_class.is_some());
    require_text(&mut errors, "primaryIndicator", &form.primary_indicator);

    if is_research_details_visible(form.causality_mode, form.method_class)
        && !super::progress::is_section_complete(form, SectionId::C)
    {
        errors.push(ValidationError::empty_field("keyResearchQuestions"));
    }

    require_some(&mut errors, "startDate", form.start_date.is_some());
    require_some(&mut errors, "expectedEndDate", form.expected_end_date.is_some());
    if let (Some(start), Some(end)) = (form.start_date, form.expected_end_date) {
        if end < start {
            errors.push(ValidationError::inconsistent(
                "expectedEndDate",
                "must not be before the start date",
            ));
        }
    }
    require_text(&mut errors, "dataCollectionStatus", &form.data_collection_status);
    require_text(&mut errors, "analysisStatus", &form.analysis_status);

    require_some(&mut errors, "funded", form.funded.is_some());
    match form.total_cost_usd {
        None => errors.push(ValidationError::empty_field("totalCostUSD")),
        Some(cost) if !cost.is_finite() || cost < 0.0 => errors.push(
            ValidationError::invalid_format("totalCostUSD", "must be a non-negative amount"),
        ),
        Some(_) => {}
    }
    check_answer(&mut errors, "proposalAvailable", &form.proposal_available);

    check_answer(&mut errors, "manuscriptDeveloped", &form.manuscript_developed);
    check_answer(&mut errors, "policyBriefDeveloped", &form.policy_brief_developed);
    check_answer(&mut errors, "relatedToPastStudy", &form.related_to_past_study);
    require_list(&mut errors, "intendedPrimaryUser", &form.intended_primary_user);
    require_text(&mut errors, "commissioningSource", &form.commissioning_source);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn require_text(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if !filled(value) {
        errors.push(ValidationError::empty_field(field));
    }
}

fn require_list(errors: &mut Vec<ValidationError>, field: &str, values: &[String]) {
    if values.is_empty() {
        errors.push(ValidationError::empty_field(field));
    }
}

fn require_some(errors: &mut Vec<ValidationError>, field: &str, present: bool) {
    if !present {
        errors.push(ValidationError::empty_field(field));
    }
}

/// A "yes" must come with a link; the link of a "no" is ignored.
fn check_answer(errors: &mut Vec<ValidationError>, field: &str, value: &AnswerWithLink) {
    use super::codes::YesNo;

    match value.answer {
        None => errors.push(ValidationError::empty_field(format!("{field}.answer"))),
        Some(YesNo::Yes) => {
            let link = value.link.trim();
            if link.is_empty() {
                errors.push(ValidationError::empty_field(format!("{field}.link")));
            } else if !(link.starts_with("https://") || link.starts_with("http://")) {
                errors.push(ValidationError::invalid_format(
                    format!("{field}.link"),
                    "must be an http(s) URL",
                ));
            }
        }
        Some(YesNo::No) => {}
    }
}

fn check_email(email: &str) -> Result<(), &'static str> {
    let (local, domain) = email.split_once('@').ok_or("missing @ symbol")?;
    if local.is_empty() || domain.contains('@') {
        return Err("malformed address");
    }
    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return Err("malformed domain");
    }
    if email.chars().any(char::is_whitespace) {
        return Err("contains whitespace");
    }
    Ok(())
}
