//! Geography - scope, reference tables, and the region/country/subnational cascade.

pub mod cascade;
pub mod reference;
mod scope;

pub use cascade::{on_editable_array_changed, on_scope_changed, CascadeUpdate, GeographySelection};
pub use reference::{countries_for_subnational, regions_for_countries};
pub use scope::{field_role, FieldRole, GeographicScope, GeographyField};
