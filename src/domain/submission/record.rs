//! Conversion between the in-memory form and the API's key-value record.
//!
//! The API exchanges dates as `YYYY-MM-DD` strings. Records fetched for
//! editing may carry numbers as strings and dates as full timestamps;
//! those are coerced back into typed values field by field.

use serde_json::Value;
use tracing::warn;

use super::form::StudyForm;

/// Serializes `form` into the record the remote API expects.
///
/// A non-finite cost is sent as `null`.
pub fn to_api_record(form: &StudyForm) -> Result<Value, serde_json::Error> {
    serde_json::to_value(form)
}

/// Builds the initial edit-mode state from a previously submitted record.
///
/// Unknown keys are ignored. A record that is not a JSON object yields an
/// empty form.
pub fn from_persisted_record(record: Value) -> StudyForm {
    if !record.is_object() {
        warn!("Persisted record is not an object, starting from an empty form");
        return StudyForm::default();
    }
    serde_json::from_value(record).unwrap_or_else(|e| {
        warn!(error = %e, "Persisted record could not be read, starting from an empty form");
        StudyForm::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    use crate::domain::geography::GeographicScope;
    use crate::domain::submission::codes::{MethodClass, YesNo};

    #[test]
    fn api_record_formats_dates_as_plain_dates() {
        let form = StudyForm {
            start_date: NaiveDate::from_ymd_opt(2024, 2, 29),
            expected_end_date: NaiveDate::from_ymd_opt(2026, 12, 1),
            ..Default::default()
        };
        let record = to_api_record(&form).unwrap();
        assert_eq!(record["startDate"], "2024-02-29");
        assert_eq!(record["expectedEndDate"], "2026-12-01");
    }

    #[test]
    fn api_record_never_carries_nan() {
        let form = StudyForm {
            study_title: "Kept".to_string(),
            total_cost_usd: Some(f64::NAN),
            ..Default::default()
        };
        let record = to_api_record(&form).unwrap();
        assert_eq!(record["studyTitle"], "Kept");
        assert!(record["totalCostUSD"].is_null());
    }

    #[test]
    fn persisted_record_is_coerced_into_typed_values() {
        let form = from_persisted_record(json!({
            "id": "b7b3c1de-0000-0000-0000-000000000000",
            "studyTitle": "Maize",
            "geographicScope": "national",
            "countries": ["KE", "TZ"],
            "regions": ["ESA"],
            "methodClass": "quantitative",
            "startDate": "2024-01-15",
            "expectedEndDate": "2025-01-15T00:00:00Z",
            "totalCostUSD": "125000",
            "funded": "yes",
            "proposalAvailable": { "answer": "yes", "link": "https://example.org/p" },
            "createdAt": "2024-01-20T08:00:00Z",
        }));

        assert_eq!(form.study_title, "Maize");
        assert_eq!(form.geographic_scope, Some(GeographicScope::National));
        assert_eq!(form.geography.countries, vec!["KE", "TZ"]);
        assert_eq!(form.method_class, Some(MethodClass::Quantitative));
        assert_eq!(form.start_date, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(form.expected_end_date, NaiveDate::from_ymd_opt(2025, 1, 15));
        assert_eq!(form.total_cost_usd, Some(125_000.0));
        assert_eq!(form.funded, Some(YesNo::Yes));
        assert_eq!(form.proposal_available.link, "https://example.org/p");
    }

    #[test]
    fn unparseable_values_become_empty() {
        let form = from_persisted_record(json!({
            "studyTitle": "Kept",
            "startDate": "soon",
            "totalCostUSD": "lots",
        }));
        assert_eq!(form.study_title, "Kept");
        assert_eq!(form.start_date, None);
        assert_eq!(form.total_cost_usd, None);
    }

    #[test]
    fn non_object_record_yields_empty_form() {
        assert_eq!(from_persisted_record(json!([1, 2, 3])), StudyForm::default());
        assert_eq!(from_persisted_record(Value::Null), StudyForm::default());
    }

    #[test]
    fn api_record_reads_back_unchanged() {
        let form = from_persisted_record(json!({
            "studyId": "MEL-7",
            "countries": ["NG"],
            "startDate": "2024-05-01",
            "totalCostUSD": 10.5,
        }));
        assert_eq!(from_persisted_record(to_api_record(&form).unwrap()), form);
    }
}
