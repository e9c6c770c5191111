//! FormProgress value object - completion tracking across form sections.
//!
//! Each section has a fixed predicate over its own fields. Section C only
//! counts while it is visible, so the denominator is 5 or 6.

use serde::Serialize;

use crate::domain::foundation::{SectionId, SectionStatus};

use super::form::{filled, StudyForm};

/// A snapshot of how much of the form is answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormProgress {
    pub completed: usize,
    pub total: usize,
    statuses: Vec<(SectionId, SectionStatus)>,
}

impl FormProgress {
    /// Returns the status of one section.
    pub fn status(&self, section: SectionId) -> SectionStatus {
        self.statuses
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, status)| *status)
            .unwrap_or_default()
    }

    /// Returns all section statuses in form order.
    pub fn section_statuses(&self) -> &[(SectionId, SectionStatus)] {
        &self.statuses
    }

    /// Returns the completion percentage (0-100), rounded down.
    pub fn percent_complete(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100) / self.total) as u8
    }

    /// Returns true if every applicable section is complete.
    pub fn is_complete(&self) -> bool {
        self.completed == self.total
    }

    /// Returns the first applicable section that is not complete.
    pub fn first_incomplete(&self) -> Option<SectionId> {
        self.statuses
            .iter()
            .find(|(_, status)| *status == SectionStatus::Incomplete)
            .map(|(section, _)| *section)
    }
}

/// Returns true if `section`'s completeness predicate holds for `form`.
///
/// Section C uses a looser "started" rule: any one of its fields filled.
pub fn is_section_complete(form: &StudyForm, section: SectionId) -> bool {
    match section {
        SectionId::A => {
            [
                &form.study_id,
                &form.study_title,
                &form.lead_center,
                &form.contact_name,
                &form.contact_email,
            ]
            .iter()
            .all(|v| filled(v))
                && !form.other_centers.is_empty()
        }
        SectionId::B => {
            [
                &form.study_type,
                &form.timing,
                &form.analytical_scope,
                &form.result_level,
                &form.primary_indicator,
            ]
            .iter()
            .all(|v| filled(v))
                && form.geographic_scope.is_some()
                && form.causality_mode.is_some()
                && form.method_class.is_some()
        }
        SectionId::C => [
            &form.key_research_questions,
            &form.unit_of_analysis,
            &form.treatment_intervention,
        ]
        .iter()
        .any(|v| filled(v)),
        SectionId::D => {
            form.start_date.is_some()
                && form.expected_end_date.is_some()
                && filled(&form.data_collection_status)
                && filled(&form.analysis_status)
        }
        SectionId::E => {
            form.funded.is_some()
                && form.total_cost_usd.is_some()
                && form.proposal_available.is_answered()
        }
        SectionId::F => {
            form.manuscript_developed.is_answered()
                && form.policy_brief_developed.is_answered()
                && form.related_to_past_study.is_answered()
                && !form.intended_primary_user.is_empty()
                && filled(&form.commissioning_source)
        }
    }
}

/// Computes the progress snapshot for `form`.
pub fn compute_progress(form: &StudyForm, section_c_visible: bool) -> FormProgress {
    let statuses: Vec<(SectionId, SectionStatus)> = SectionId::all()
        .iter()
        .map(|&section| {
            let status = if section.is_conditional() && !section_c_visible {
                SectionStatus::NotApplicable
            } else if is_section_complete(form, section) {
                SectionStatus::Complete
            } else {
                SectionStatus::Incomplete
            };
            (section, status)
        })
        .collect();

    FormProgress {
        completed: statuses.iter().filter(|(_, s)| s.is_complete()).count(),
        total: statuses.iter().filter(|(_, s)| s.is_applicable()).count(),
        statuses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::geography::GeographicScope;
    use crate::domain::submission::codes::{CausalityMode, MethodClass, YesNo};
    use crate::domain::submission::form::AnswerWithLink;

    fn fill_a(form: &mut StudyForm) {
        form.study_id = "MEL-2024-001".to_string();
        form.study_title = "Drought-tolerant maize adoption".to_string();
        form.lead_center = "CIMMYT".to_string();
        form.contact_name = "A. Researcher".to_string();
        form.contact_email = "a.researcher@example.org".to_string();
        form.other_centers = vec!["IITA".to_string()];
    }

    fn fill_b(form: &mut StudyForm) {
        form.study_type = "impact_evaluation".to_string();
        form.timing = "ex_post".to_string();
        form.analytical_scope = "project".to_string();
        form.geographic_scope = Some(GeographicScope::Global);
        form.result_level = "outcome".to_string();
        form.causality_mode = Some(CausalityMode::C0Descriptive);
        form.method_class = Some(MethodClass::Qualitative);
        form.primary_indicator = "Adoption rate".to_string();
    }

    fn fill_d(form: &mut StudyForm) {
        form.start_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        form.expected_end_date = NaiveDate::from_ymd_opt(2025, 6, 30);
        form.data_collection_status = "ongoing".to_string();
        form.analysis_status = "not_started".to_string();
    }

    fn fill_e(form: &mut StudyForm) {
        form.funded = Some(YesNo::Yes);
        form.total_cost_usd = Some(250_000.0);
        form.proposal_available = AnswerWithLink::no();
    }

    fn fill_f(form: &mut StudyForm) {
        form.manuscript_developed = AnswerWithLink::no();
        form.policy_brief_developed = AnswerWithLink::no();
        form.related_to_past_study = AnswerWithLink::yes("https://example.org/past");
        form.intended_primary_user = vec!["policy_makers".to_string()];
        form.commissioning_source = "Donor".to_string();
    }

    // ───────────────────────────────────────────────────────────────
    // Counting
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn empty_form_is_zero_of_five() {
        let progress = compute_progress(&StudyForm::new(), false);
        assert_eq!((progress.completed, progress.total), (0, 5));
        assert_eq!(progress.status(SectionId::C), SectionStatus::NotApplicable);
    }

    #[test]
    fn filling_section_a_counts_one() {
        let mut form = StudyForm::new();
        fill_a(&mut form);
        let progress = compute_progress(&form, false);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.status(SectionId::A), SectionStatus::Complete);
    }

    #[test]
    fn section_a_needs_another_center() {
        let mut form = StudyForm::new();
        fill_a(&mut form);
        form.other_centers.clear();
        assert!(!is_section_complete(&form, SectionId::A));
    }

    #[test]
    fn whitespace_does_not_count_as_filled() {
        let mut form = StudyForm::new();
        fill_a(&mut form);
        form.study_title = "   ".to_string();
        assert!(!is_section_complete(&form, SectionId::A));
    }

    #[test]
    fn visible_c_raises_total_before_any_c_data() {
        let mut form = StudyForm::new();
        fill_a(&mut form);
        let progress = compute_progress(&form, true);
        assert_eq!((progress.completed, progress.total), (1, 6));

        form.unit_of_analysis = "Household".to_string();
        let progress = compute_progress(&form, true);
        assert_eq!((progress.completed, progress.total), (2, 6));
    }

    #[test]
    fn hidden_c_data_is_not_counted() {
        let mut form = StudyForm::new();
        form.key_research_questions = "Does it work?".to_string();
        let progress = compute_progress(&form, false);
        assert_eq!((progress.completed, progress.total), (0, 5));
    }

    #[test]
    fn all_sections_filled_is_complete() {
        let mut form = StudyForm::new();
        fill_a(&mut form);
        fill_b(&mut form);
        fill_d(&mut form);
        fill_e(&mut form);
        fill_f(&mut form);
        let progress = compute_progress(&form, false);
        assert!(progress.is_complete());
        assert_eq!(progress.percent_complete(), 100);
        assert_eq!(progress.first_incomplete(), None);
    }

    // ───────────────────────────────────────────────────────────────
    // Field-type rules
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn section_e_ignores_link_but_needs_answer() {
        let mut form = StudyForm::new();
        fill_e(&mut form);
        form.proposal_available = AnswerWithLink {
            answer: None,
            link: "https://example.org/proposal".to_string(),
        };
        assert!(!is_section_complete(&form, SectionId::E));

        form.proposal_available = AnswerWithLink::yes("");
        assert!(is_section_complete(&form, SectionId::E));
    }

    #[test]
    fn section_d_needs_both_dates() {
        let mut form = StudyForm::new();
        fill_d(&mut form);
        form.expected_end_date = None;
        assert!(!is_section_complete(&form, SectionId::D));
    }

    #[test]
    fn section_f_needs_intended_user() {
        let mut form = StudyForm::new();
        fill_f(&mut form);
        form.intended_primary_user.clear();
        assert!(!is_section_complete(&form, SectionId::F));
    }

    // ───────────────────────────────────────────────────────────────
    // Snapshot helpers
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn first_incomplete_skips_hidden_c() {
        let mut form = StudyForm::new();
        fill_a(&mut form);
        fill_b(&mut form);
        let progress = compute_progress(&form, false);
        assert_eq!(progress.first_incomplete(), Some(SectionId::D));

        let progress = compute_progress(&form, true);
        assert_eq!(progress.first_incomplete(), Some(SectionId::C));
    }

    #[test]
    fn percent_rounds_down() {
        let mut form = StudyForm::new();
        fill_a(&mut form);
        assert_eq!(compute_progress(&form, true).percent_complete(), 16);
        assert_eq!(compute_progress(&form, false).percent_complete(), 20);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let mut form = StudyForm::new();
        fill_a(&mut form);
        fill_e(&mut form);
        assert_eq!(compute_progress(&form, true), compute_progress(&form, true));
    }

    #[test]
    fn statuses_are_in_form_order() {
        let progress = compute_progress(&StudyForm::new(), true);
        let order: Vec<_> = progress.section_statuses().iter().map(|(s, _)| *s).collect();
        assert_eq!(order, SectionId::all().to_vec());
    }
}
