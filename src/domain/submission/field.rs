//! Field-level access to the form, keyed by the rendering layer's field names.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::foundation::SectionId;
use crate::domain::geography::{GeographicScope, GeographyField};

use super::codes::{CausalityMode, MethodClass, YesNo};
use super::form::{AnswerWithLink, StudyForm};

/// Every editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    StudyId,
    StudyTitle,
    LeadCenter,
    OtherCenters,
    ContactName,
    ContactEmail,
    StudyType,
    Timing,
    AnalyticalScope,
    GeographicScope,
    Regions,
    Countries,
    SubnationalUnits,
    ResultLevel,
    CausalityMode,
    MethodClass,
    PrimaryIndicator,
    KeyResearchQuestions,
    UnitOfAnalysis,
    TreatmentIntervention,
    StartDate,
    ExpectedEndDate,
    DataCollectionStatus,
    AnalysisStatus,
    Funded,
    TotalCostUsd,
    ProposalAvailable,
    ManuscriptDeveloped,
    PolicyBriefDeveloped,
    RelatedToPastStudy,
    IntendedPrimaryUser,
    CommissioningSource,
}

/// A value handed in by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free text or a single option code. Empty text clears a coded field.
    Text(String),
    List(Vec<String>),
    Date(Option<NaiveDate>),
    Number(Option<f64>),
    Answer(AnswerWithLink),
}

/// Errors raised when a value cannot be written to a field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field '{field}' expects {expected}")]
    TypeMismatch {
        field: FormField,
        expected: &'static str,
    },

    #[error("Field '{field}' does not accept code '{code}'")]
    InvalidCode { field: FormField, code: String },

    #[error("Field '{field}' needs a finite number")]
    NonFiniteNumber { field: FormField },

    #[error("Field '{field}' is not editable under the current geographic scope")]
    ReadOnly { field: FormField },
}

const ALL_FIELDS: &[FormField] = &[
    FormField::StudyId,
    FormField::StudyTitle,
    FormField::LeadCenter,
    FormField::OtherCenters,
    FormField::ContactName,
    FormField::ContactEmail,
    FormField::StudyType,
    FormField::Timing,
    FormField::AnalyticalScope,
    FormField::GeographicScope,
    FormField::Regions,
    FormField::Countries,
    FormField::SubnationalUnits,
    FormField::ResultLevel,
    FormField::CausalityMode,
    FormField::MethodClass,
    FormField::PrimaryIndicator,
    FormField::KeyResearchQuestions,
    FormField::UnitOfAnalysis,
    FormField::TreatmentIntervention,
    FormField::StartDate,
    FormField::ExpectedEndDate,
    FormField::DataCollectionStatus,
    FormField::AnalysisStatus,
    FormField::Funded,
    FormField::TotalCostUsd,
    FormField::ProposalAvailable,
    FormField::ManuscriptDeveloped,
    FormField::PolicyBriefDeveloped,
    FormField::RelatedToPastStudy,
    FormField::IntendedPrimaryUser,
    FormField::CommissioningSource,
];

impl FormField {
    pub fn all() -> &'static [FormField] {
        ALL_FIELDS
    }

    /// The camelCase name used by the rendering layer and the API.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::StudyId => "studyId",
            FormField::StudyTitle => "studyTitle",
            FormField::LeadCenter => "leadCenter",
            FormField::OtherCenters => "otherCenters",
            FormField::ContactName => "contactName",
            FormField::ContactEmail => "contactEmail",
            FormField::StudyType => "studyType",
            FormField::Timing => "timing",
            FormField::AnalyticalScope => "analyticalScope",
            FormField::GeographicScope => "geographicScope",
            FormField::Regions => "regions",
            FormField::Countries => "countries",
            FormField::SubnationalUnits => "subnationalUnits",
            FormField::ResultLevel => "resultLevel",
            FormField::CausalityMode => "causalityMode",
            FormField::MethodClass => "methodClass",
            FormField::PrimaryIndicator => "primaryIndicator",
            FormField::KeyResearchQuestions => "keyResearchQuestions",
            FormField::UnitOfAnalysis => "unitOfAnalysis",
            FormField::TreatmentIntervention => "treatmentIntervention",
            FormField::StartDate => "startDate",
            FormField::ExpectedEndDate => "expectedEndDate",
            FormField::DataCollectionStatus => "dataCollectionStatus",
            FormField::AnalysisStatus => "analysisStatus",
            FormField::Funded => "funded",
            FormField::TotalCostUsd => "totalCostUSD",
            FormField::ProposalAvailable => "proposalAvailable",
            FormField::ManuscriptDeveloped => "manuscriptDeveloped",
            FormField::PolicyBriefDeveloped => "policyBriefDeveloped",
            FormField::RelatedToPastStudy => "relatedToPastStudy",
            FormField::IntendedPrimaryUser => "intendedPrimaryUser",
            FormField::CommissioningSource => "commissioningSource",
        }
    }

    /// The section this field is rendered in.
    pub fn section(&self) -> SectionId {
        use FormField as F;
        match self {
            F::StudyId | F::StudyTitle | F::LeadCenter | F::OtherCenters | F::ContactName
            | F::ContactEmail => SectionId::A,
            F::StudyType | F::Timing | F::AnalyticalScope | F::GeographicScope | F::Regions
            | F::Countries | F::SubnationalUnits | F::ResultLevel | F::CausalityMode
            | F::MethodClass | F::PrimaryIndicator => SectionId::B,
            F::KeyResearchQuestions | F::UnitOfAnalysis | F::TreatmentIntervention => SectionId::C,
            F::StartDate | F::ExpectedEndDate | F::DataCollectionStatus | F::AnalysisStatus => {
                SectionId::D
            }
            F::Funded | F::TotalCostUsd | F::ProposalAvailable => SectionId::E,
            F::ManuscriptDeveloped
            | F::PolicyBriefDeveloped
            | F::RelatedToPastStudy
            | F::IntendedPrimaryUser
            | F::CommissioningSource => SectionId::F,
        }
    }

    /// The geography array this field edits, if it is one.
    pub fn geography_field(&self) -> Option<GeographyField> {
        match self {
            FormField::Regions => Some(GeographyField::Regions),
            FormField::Countries => Some(GeographyField::Countries),
            FormField::SubnationalUnits => Some(GeographyField::SubnationalUnits),
            _ => None,
        }
    }

    /// True for the two answers that decide whether Section C applies.
    pub fn is_disclosure_trigger(&self) -> bool {
        matches!(self, FormField::CausalityMode | FormField::MethodClass)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FormField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

impl StudyForm {
    /// Reads a field as a [`FieldValue`].
    pub fn get(&self, field: FormField) -> FieldValue {
        use FormField as F;
        let code = |c: Option<&'static str>| FieldValue::Text(c.unwrap_or_default().to_string());
        match field {
            F::StudyId => FieldValue::Text(self.study_id.clone()),
            F::StudyTitle => FieldValue::Text(self.study_title.clone()),
            F::LeadCenter => FieldValue::Text(self.lead_center.clone()),
            F::OtherCenters => FieldValue::List(self.other_centers.clone()),
            F::ContactName => FieldValue::Text(self.contact_name.clone()),
            F::ContactEmail => FieldValue::Text(self.contact_email.clone()),
            F::StudyType => FieldValue::Text(self.study_type.clone()),
            F::Timing => FieldValue::Text(self.timing.clone()),
            F::AnalyticalScope => FieldValue::Text(self.analytical_scope.clone()),
            F::GeographicScope => code(self.geographic_scope.map(|s| s.code())),
            F::Regions => FieldValue::List(self.geography.regions.clone()),
            F::Countries => FieldValue::List(self.geography.countries.clone()),
            F::SubnationalUnits => FieldValue::List(self.geography.subnational_units.clone()),
            F::ResultLevel => FieldValue::Text(self.result_level.clone()),
            F::CausalityMode => code(self.causality_mode.map(|c| c.code())),
            F::MethodClass => code(self.method_class.map(|m| m.code())),
            F::PrimaryIndicator => FieldValue::Text(self.primary_indicator.clone()),
            F::KeyResearchQuestions => FieldValue::Text(self.key_research_questions.clone()),
            F::UnitOfAnalysis => FieldValue::Text(self.unit_of_analysis.clone()),
            F::TreatmentIntervention => FieldValue::Text(self.treatment_intervention.clone()),
            F::StartDate => FieldValue::Date(self.start_date),
            F::ExpectedEndDate => FieldValue::Date(self.expected_end_date),
            F::DataCollectionStatus => FieldValue::Text(self.data_collection_status.clone()),
            F::AnalysisStatus => FieldValue::Text(self.analysis_status.clone()),
            F::Funded => code(self.funded.map(|y| y.code())),
            F::TotalCostUsd => FieldValue::Number(self.total_cost_usd),
            F::ProposalAvailable => FieldValue::Answer(self.proposal_available.clone()),
            F::ManuscriptDeveloped => FieldValue::Answer(self.manuscript_developed.clone()),
            F::PolicyBriefDeveloped => FieldValue::Answer(self.policy_brief_developed.clone()),
            F::RelatedToPastStudy => FieldValue::Answer(self.related_to_past_study.clone()),
            F::IntendedPrimaryUser => FieldValue::List(self.intended_primary_user.clone()),
            F::CommissioningSource => FieldValue::Text(self.commissioning_source.clone()),
        }
    }

    /// Writes `value` into `field` after checking its type.
    ///
    /// An unrecognised geographic scope code is stored as "no scope" rather
    /// than rejected; other coded fields reject unknown codes.
    pub fn set(&mut self, field: FormField, value: FieldValue) -> Result<(), FieldError> {
        use FormField as F;
        match field {
            F::StudyId => self.study_id = text(field, value)?,
            F::StudyTitle => self.study_title = text(field, value)?,
            F::LeadCenter => self.lead_center = text(field, value)?,
            F::OtherCenters => self.other_centers = list(field, value)?,
            F::ContactName => self.contact_name = text(field, value)?,
            F::ContactEmail => self.contact_email = text(field, value)?,
            F::StudyType => self.study_type = text(field, value)?,
            F::Timing => self.timing = text(field, value)?,
            F::AnalyticalScope => self.analytical_scope = text(field, value)?,
            F::GeographicScope => {
                let raw = text(field, value)?;
                self.geographic_scope = GeographicScope::parse(&raw);
                if self.geographic_scope.is_none() && !raw.trim().is_empty() {
                    tracing::warn!(code = %raw, "Unrecognised geographic scope, treating as unset");
                }
            }
            F::Regions => self.geography.regions = list(field, value)?,
            F::Countries => self.geography.countries = list(field, value)?,
            F::SubnationalUnits => self.geography.subnational_units = list(field, value)?,
            F::ResultLevel => self.result_level = text(field, value)?,
            F::CausalityMode => self.causality_mode = coded(field, value, CausalityMode::parse)?,
            F::MethodClass => self.method_class = coded(field, value, MethodClass::parse)?,
            F::PrimaryIndicator => self.primary_indicator = text(field, value)?,
            F::KeyResearchQuestions => self.key_research_questions = text(field, value)?,
            F::UnitOfAnalysis => self.unit_of_analysis = text(field, value)?,
            F::TreatmentIntervention => self.treatment_intervention = text(field, value)?,
            F::StartDate => self.start_date = date(field, value)?,
            F::ExpectedEndDate => self.expected_end_date = date(field, value)?,
            F::DataCollectionStatus => self.data_collection_status = text(field, value)?,
            F::AnalysisStatus => self.analysis_status = text(field, value)?,
            F::Funded => self.funded = coded(field, value, YesNo::parse)?,
            F::TotalCostUsd => self.total_cost_usd = number(field, value)?,
            F::ProposalAvailable => self.proposal_available = answer(field, value)?,
            F::ManuscriptDeveloped => self.manuscript_developed = answer(field, value)?,
            F::PolicyBriefDeveloped => self.policy_brief_developed = answer(field, value)?,
            F::RelatedToPastStudy => self.related_to_past_study = answer(field, value)?,
            F::IntendedPrimaryUser => self.intended_primary_user = list(field, value)?,
            F::CommissioningSource => self.commissioning_source = text(field, value)?,
        }
        Ok(())
    }
}

fn text(field: FormField, value: FieldValue) -> Result<String, FieldError> {
    match value {
        FieldValue::Text(s) => Ok(s),
        _ => Err(FieldError::TypeMismatch { field, expected: "text" }),
    }
}

fn list(field: FormField, value: FieldValue) -> Result<Vec<String>, FieldError> {
    match value {
        FieldValue::List(items) => Ok(items),
        _ => Err(FieldError::TypeMismatch { field, expected: "a list" }),
    }
}

fn date(field: FormField, value: FieldValue) -> Result<Option<NaiveDate>, FieldError> {
    match value {
        FieldValue::Date(d) => Ok(d),
        _ => Err(FieldError::TypeMismatch { field, expected: "a date" }),
    }
}

fn number(field: FormField, value: FieldValue) -> Result<Option<f64>, FieldError> {
    match value {
        FieldValue::Number(Some(n)) if !n.is_finite() => Err(FieldError::NonFiniteNumber { field }),
        FieldValue::Number(n) => Ok(n),
        _ => Err(FieldError::TypeMismatch { field, expected: "a number" }),
    }
}

fn answer(field: FormField, value: FieldValue) -> Result<AnswerWithLink, FieldError> {
    match value {
        FieldValue::Answer(a) => Ok(a),
        _ => Err(FieldError::TypeMismatch {
            field,
            expected: "an answer with link",
        }),
    }
}

fn coded<T>(
    field: FormField,
    value: FieldValue,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, FieldError> {
    let raw = text(field, value)?;
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse(&raw)
        .map(Some)
        .ok_or(FieldError::InvalidCode { field, code: raw })
}
