//! GeographicScope enum and the role each geography field plays under it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How wide a study's geographic coverage is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeographicScope {
    Global,
    Regional,
    National,
    SubNational,
    SiteSpecific,
}

/// One of the three geography selection arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeographyField {
    Regions,
    Countries,
    SubnationalUnits,
}

/// Whether a geography field takes user input, is computed, or is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRole {
    Editable,
    Derived,
    Inactive,
}

impl GeographicScope {
    /// Returns all scopes in display order.
    pub fn all() -> &'static [GeographicScope] {
        &[
            GeographicScope::Global,
            GeographicScope::Regional,
            GeographicScope::National,
            GeographicScope::SubNational,
            GeographicScope::SiteSpecific,
        ]
    }

    /// Parses a wire code. Unknown codes yield `None`.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "global" => Some(GeographicScope::Global),
            "regional" => Some(GeographicScope::Regional),
            "national" => Some(GeographicScope::National),
            "sub_national" => Some(GeographicScope::SubNational),
            "site_specific" => Some(GeographicScope::SiteSpecific),
            _ => None,
        }
    }

    /// Returns the wire code.
    pub fn code(&self) -> &'static str {
        match self {
            GeographicScope::Global => "global",
            GeographicScope::Regional => "regional",
            GeographicScope::National => "national",
            GeographicScope::SubNational => "sub_national",
            GeographicScope::SiteSpecific => "site_specific",
        }
    }

    /// The array the user edits under this scope, if any.
    pub fn editable_field(&self) -> Option<GeographyField> {
        match self {
            GeographicScope::Regional => Some(GeographyField::Regions),
            GeographicScope::National => Some(GeographyField::Countries),
            GeographicScope::SubNational => Some(GeographyField::SubnationalUnits),
            GeographicScope::Global | GeographicScope::SiteSpecific => None,
        }
    }
}

impl fmt::Display for GeographicScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl GeographyField {
    /// Returns the camelCase form field name.
    pub fn field_name(&self) -> &'static str {
        match self {
            GeographyField::Regions => "regions",
            GeographyField::Countries => "countries",
            GeographyField::SubnationalUnits => "subnationalUnits",
        }
    }

    /// Position in the hierarchy; larger values sit lower (subnational → country → region).
    fn depth(&self) -> u8 {
        match self {
            GeographyField::Regions => 0,
            GeographyField::Countries => 1,
            GeographyField::SubnationalUnits => 2,
        }
    }
}

/// Classifies `field` under `scope`.
///
/// Fields above the editable one in the hierarchy are derived from it;
/// everything else is inactive. A missing scope makes every field inactive.
pub fn field_role(scope: Option<GeographicScope>, field: GeographyField) -> FieldRole {
    let Some(editable) = scope.and_then(|s| s.editable_field()) else {
        return FieldRole::Inactive;
    };

    if field == editable {
        FieldRole::Editable
    } else if field.depth() < editable.depth() {
        FieldRole::Derived
    } else {
        FieldRole::Inactive
    }
}
