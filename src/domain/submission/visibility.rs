//! Section C disclosure rule.
//!
//! The rule is kept as data so the server-side validator can be checked
//! against the same table (see `tests/fixtures/research_details_visibility.json`).

use super::codes::{CausalityMode, MethodClass};

/// Answers that make a conditional section relevant. Any single match is enough.
#[derive(Debug, Clone, Copy)]
pub struct DisclosureRule {
    pub causality_modes: &'static [CausalityMode],
    pub method_classes: &'static [MethodClass],
}

impl DisclosureRule {
    /// Returns true if either answer triggers the rule.
    pub fn matches(&self, causality: Option<CausalityMode>, method: Option<MethodClass>) -> bool {
        causality.is_some_and(|c| self.causality_modes.contains(&c))
            || method.is_some_and(|m| self.method_classes.contains(&m))
    }
}

/// Section C: causal studies, or quantitative and experimental designs.
pub const RESEARCH_DETAILS_RULE: DisclosureRule = DisclosureRule {
    causality_modes: &[CausalityMode::C2Causal],
    method_classes: &[MethodClass::Quantitative, MethodClass::ExperimentalQuasi],
};

/// Returns true if Section C (Research Details) applies.
pub fn is_research_details_visible(
    causality: Option<CausalityMode>,
    method: Option<MethodClass>,
) -> bool {
    RESEARCH_DETAILS_RULE.matches(causality, method)
}

/// Same as [`is_research_details_visible`] over raw wire codes.
///
/// Unknown codes count as absent.
pub fn is_research_details_visible_for_codes(causality: Option<&str>, method: Option<&str>) -> bool {
    is_research_details_visible(
        causality.and_then(CausalityMode::parse),
        method.and_then(MethodClass::parse),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn causalities() -> Vec<Option<CausalityMode>> {
        std::iter::once(None)
            .chain(CausalityMode::all().iter().copied().map(Some))
            .collect()
    }

    fn methods() -> Vec<Option<MethodClass>> {
        std::iter::once(None)
            .chain(MethodClass::all().iter().copied().map(Some))
            .collect()
    }

    #[test]
    fn truth_table_matches_rule() {
        for c in causalities() {
            for m in methods() {
                let expected = c == Some(CausalityMode::C2Causal)
                    || matches!(m, Some(MethodClass::Quantitative) | Some(MethodClass::ExperimentalQuasi));
                assert_eq!(is_research_details_visible(c, m), expected, "{:?} / {:?}", c, m);
                // Stateless: a second call agrees.
                assert_eq!(is_research_details_visible(c, m), expected);
            }
        }
    }

    #[test]
    fn descriptive_qualitative_is_hidden() {
        assert!(!is_research_details_visible(
            Some(CausalityMode::C0Descriptive),
            Some(MethodClass::Qualitative)
        ));
    }

    #[test]
    fn either_trigger_alone_is_enough() {
        assert!(is_research_details_visible(Some(CausalityMode::C2Causal), None));
        assert!(is_research_details_visible(None, Some(MethodClass::Quantitative)));
        assert!(is_research_details_visible(None, Some(MethodClass::ExperimentalQuasi)));
    }

    #[test]
    fn mixed_methods_does_not_trigger() {
        assert!(!is_research_details_visible(None, Some(MethodClass::MixedMethods)));
    }

    #[test]
    fn both_absent_is_hidden() {
        assert!(!is_research_details_visible(None, None));
    }

    #[test]
    fn raw_codes_treat_unknown_as_absent() {
        assert!(is_research_details_visible_for_codes(Some("c2_causal"), Some("bogus")));
        assert!(!is_research_details_visible_for_codes(Some("bogus"), Some("qualitative")));
        assert!(!is_research_details_visible_for_codes(None, None));
    }
}
