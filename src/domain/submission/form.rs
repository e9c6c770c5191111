//! StudyForm - the authoritative in-memory state of one submission form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::lenient;
use crate::domain::geography::{GeographicScope, GeographySelection};

use super::codes::{CausalityMode, MethodClass, YesNo};

/// A yes/no answer with an optional supporting link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerWithLink {
    #[serde(deserialize_with = "lenient::code::deserialize")]
    pub answer: Option<YesNo>,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub link: String,
}

impl AnswerWithLink {
    pub fn yes(link: impl Into<String>) -> Self {
        Self {
            answer: Some(YesNo::Yes),
            link: link.into(),
        }
    }

    pub fn no() -> Self {
        Self {
            answer: Some(YesNo::No),
            link: String::new(),
        }
    }

    /// Present once an answer is chosen; the link does not count.
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}

/// All field values of sections A to F.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudyForm {
    // A. Study identification
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub study_id: String,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub study_title: String,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub lead_center: String,
    #[serde(deserialize_with = "lenient::list::deserialize")]
    pub other_centers: Vec<String>,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub contact_name: String,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub contact_email: String,

    // B. Study classification
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub study_type: String,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub timing: String,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub analytical_scope: String,
    #[serde(deserialize_with = "lenient::code::deserialize")]
    pub geographic_scope: Option<GeographicScope>,
    #[serde(flatten)]
    pub geography: GeographySelection,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub result_level: String,
    #[serde(deserialize_with = "lenient::code::deserialize")]
    pub causality_mode: Option<CausalityMode>,
    #[serde(deserialize_with = "lenient::code::deserialize")]
    pub method_class: Option<MethodClass>,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub primary_indicator: String,

    // C. Research details
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub key_research_questions: String,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub unit_of_analysis: String,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub treatment_intervention: String,

    // D. Timeline and status
    #[serde(with = "lenient::date")]
    pub start_date: Option<NaiveDate>,
    #[serde(with = "lenient::date")]
    pub expected_end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub data_collection_status: String,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub analysis_status: String,

    // E. Funding and resources
    #[serde(deserialize_with = "lenient::code::deserialize")]
    pub funded: Option<YesNo>,
    #[serde(rename = "totalCostUSD", deserialize_with = "lenient::number::deserialize")]
    pub total_cost_usd: Option<f64>,
    #[serde(deserialize_with = "lenient::or_default::deserialize")]
    pub proposal_available: AnswerWithLink,

    // F. Outputs and uptake
    #[serde(deserialize_with = "lenient::or_default::deserialize")]
    pub manuscript_developed: AnswerWithLink,
    #[serde(deserialize_with = "lenient::or_default::deserialize")]
    pub policy_brief_developed: AnswerWithLink,
    #[serde(deserialize_with = "lenient::or_default::deserialize")]
    pub related_to_past_study: AnswerWithLink,
    #[serde(deserialize_with = "lenient::list::deserialize")]
    pub intended_primary_user: Vec<String>,
    #[serde(deserialize_with = "lenient::text::deserialize")]
    pub commissioning_source: String,
}

impl StudyForm {
    /// An empty form for a new submission.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Non-empty after trimming.
pub(crate) fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_and_flattened_geography() {
        let mut form = StudyForm::new();
        form.study_title = "Soil health survey".to_string();
        form.geography.countries = vec!["KE".to_string()];
        form.total_cost_usd = Some(1200.0);

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["studyTitle"], "Soil health survey");
        assert_eq!(value["countries"], json!(["KE"]));
        assert_eq!(value["subnationalUnits"], json!([]));
        assert_eq!(value["totalCostUSD"], json!(1200.0));
        assert_eq!(value["startDate"], json!(null));
    }

    #[test]
    fn dates_serialize_as_plain_dates() {
        let form = StudyForm {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            ..Default::default()
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["startDate"], "2024-01-15");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let form: StudyForm = serde_json::from_value(json!({ "studyId": "MEL-001" })).unwrap();
        assert_eq!(form.study_id, "MEL-001");
        assert!(form.other_centers.is_empty());
        assert_eq!(form.geographic_scope, None);
        assert!(!form.proposal_available.is_answered());
    }

    #[test]
    fn unreadable_values_are_dropped_per_field() {
        let form: StudyForm = serde_json::from_value(json!({
            "studyTitle": "Kept",
            "geographicScope": "continental",
            "causalityMode": 3,
            "startDate": "sometime",
            "totalCostUSD": "n/a",
            "otherCenters": null,
            "countries": null,
            "proposalAvailable": null,
        }))
        .unwrap();
        assert_eq!(form.study_title, "Kept");
        assert_eq!(form.geographic_scope, None);
        assert_eq!(form.causality_mode, None);
        assert_eq!(form.start_date, None);
        assert_eq!(form.total_cost_usd, None);
        assert!(form.other_centers.is_empty());
        assert!(form.geography.countries.is_empty());
        assert_eq!(form.proposal_available, AnswerWithLink::default());
    }

    #[test]
    fn answer_presence_ignores_link() {
        assert!(AnswerWithLink::no().is_answered());
        let link_only = AnswerWithLink {
            answer: None,
            link: "https://example.org".to_string(),
        };
        assert!(!link_only.is_answered());
    }

    #[test]
    fn filled_trims_whitespace() {
        assert!(!filled("   "));
        assert!(filled(" x "));
    }
}
