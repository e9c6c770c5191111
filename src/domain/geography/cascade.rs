//! Geographic cascade resolver.
//!
//! Keeps the three geography arrays consistent with the selected scope:
//! a scope change clears whatever no longer applies, and an edit to the
//! editable array recomputes the arrays derived from it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::lenient;

use super::reference::{countries_for_subnational, regions_for_countries};
use super::scope::{GeographicScope, GeographyField};

/// The three geography arrays of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeographySelection {
    #[serde(default, deserialize_with = "lenient::list::deserialize")]
    pub regions: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list::deserialize")]
    pub countries: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list::deserialize")]
    pub subnational_units: Vec<String>,
}

impl GeographySelection {
    /// Returns the values of one array.
    pub fn get(&self, field: GeographyField) -> &[String] {
        match field {
            GeographyField::Regions => &self.regions,
            GeographyField::Countries => &self.countries,
            GeographyField::SubnationalUnits => &self.subnational_units,
        }
    }

    /// Replaces the values of one array.
    pub fn set(&mut self, field: GeographyField, values: Vec<String>) {
        match field {
            GeographyField::Regions => self.regions = values,
            GeographyField::Countries => self.countries = values,
            GeographyField::SubnationalUnits => self.subnational_units = values,
        }
    }

    /// Returns true if all three arrays are empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.countries.is_empty() && self.subnational_units.is_empty()
    }
}

/// Derived arrays to write back after an edit. `None` means unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeUpdate {
    pub regions: Option<Vec<String>>,
    pub countries: Option<Vec<String>>,
}

impl CascadeUpdate {
    /// Returns true if nothing needs writing.
    pub fn is_noop(&self) -> bool {
        self.regions.is_none() && self.countries.is_none()
    }

    /// Writes the update into `selection`. Returns whether anything changed.
    pub fn apply(self, selection: &mut GeographySelection) -> bool {
        let mut changed = false;
        if let Some(countries) = self.countries {
            selection.countries = countries;
            changed = true;
        }
        if let Some(regions) = self.regions {
            selection.regions = regions;
            changed = true;
        }
        changed
    }
}

/// Computes the selection after the scope moves from `previous` to `new`.
///
/// Switching scope never carries an irrelevant selection over. Only a move
/// to `national` keeps anything: the country list, which becomes the
/// editable array. `None` stands for an unset or unrecognised scope and
/// clears everything.
pub fn on_scope_changed(
    previous: Option<GeographicScope>,
    new: Option<GeographicScope>,
    current: &GeographySelection,
) -> GeographySelection {
    let mut next = current.clone();

    if previous == Some(GeographicScope::SubNational) {
        next.subnational_units.clear();
    }

    match new {
        Some(GeographicScope::National) => {
            next.regions.clear();
            next.subnational_units.clear();
        }
        Some(GeographicScope::Regional)
        | Some(GeographicScope::SubNational)
        | Some(GeographicScope::Global)
        | Some(GeographicScope::SiteSpecific)
        | None => {
            next = GeographySelection::default();
        }
    }

    debug!(?previous, ?new, "Geographic scope changed");
    next
}

/// Recomputes the arrays derived from the editable one under `scope`.
///
/// Only values that differ from `current` are returned, so running this
/// twice on the same input yields a no-op the second time.
pub fn on_editable_array_changed(
    scope: Option<GeographicScope>,
    current: &GeographySelection,
) -> CascadeUpdate {
    match scope {
        Some(GeographicScope::National) => {
            let regions = regions_for_countries(&current.countries);
            CascadeUpdate {
                regions: changed(&current.regions, regions),
                countries: None,
            }
        }
        Some(GeographicScope::SubNational) => {
            let countries = countries_for_subnational(&current.subnational_units);
            let regions = regions_for_countries(&countries);
            CascadeUpdate {
                regions: changed(&current.regions, regions),
                countries: changed(&current.countries, countries),
            }
        }
        _ => CascadeUpdate::default(),
    }
}

fn changed(current: &[String], derived: Vec<String>) -> Option<Vec<String>> {
    (current != derived.as_slice()).then_some(derived)
}
