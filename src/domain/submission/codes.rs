//! Coded answers that drive form logic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How strongly the study claims cause and effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CausalityMode {
    #[serde(rename = "c0_descriptive")]
    C0Descriptive,
    #[serde(rename = "c1_associational")]
    C1Associational,
    #[serde(rename = "c2_causal")]
    C2Causal,
}

/// Broad class of research method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodClass {
    Qualitative,
    Quantitative,
    MixedMethods,
    ExperimentalQuasi,
}

/// A yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YesNo {
    Yes,
    No,
}

impl CausalityMode {
    pub fn all() -> &'static [CausalityMode] {
        &[
            CausalityMode::C0Descriptive,
            CausalityMode::C1Associational,
            CausalityMode::C2Causal,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            CausalityMode::C0Descriptive => "c0_descriptive",
            CausalityMode::C1Associational => "c1_associational",
            CausalityMode::C2Causal => "c2_causal",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.code() == code.trim())
    }

    pub fn label(&self) -> &'static str {
        match self {
            CausalityMode::C0Descriptive => "Descriptive",
            CausalityMode::C1Associational => "Associational",
            CausalityMode::C2Causal => "Causal (counterfactual)",
        }
    }
}

impl MethodClass {
    pub fn all() -> &'static [MethodClass] {
        &[
            MethodClass::Qualitative,
            MethodClass::Quantitative,
            MethodClass::MixedMethods,
            MethodClass::ExperimentalQuasi,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            MethodClass::Qualitative => "qualitative",
            MethodClass::Quantitative => "quantitative",
            MethodClass::MixedMethods => "mixed_methods",
            MethodClass::ExperimentalQuasi => "experimental_quasi",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.code() == code.trim())
    }

    pub fn label(&self) -> &'static str {
        match self {
            MethodClass::Qualitative => "Qualitative",
            MethodClass::Quantitative => "Quantitative",
            MethodClass::MixedMethods => "Mixed methods",
            MethodClass::ExperimentalQuasi => "Experimental / quasi-experimental",
        }
    }
}

impl YesNo {
    pub fn code(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No => "no",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        match code.trim() {
            "yes" => Some(YesNo::Yes),
            "no" => Some(YesNo::No),
            _ => None,
        }
    }
}

impl fmt::Display for CausalityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for MethodClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
