//! Geography reference tables.
//!
//! Static membership data: every country belongs to one region and every
//! subnational unit to one country. Codes follow ISO 3166-1 alpha-2 for
//! countries and ISO 3166-2 for subnational units.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

/// A region of the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
}

/// A country and the region that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

/// A first-level administrative unit and the country that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnationalUnit {
    pub code: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}

const fn region(code: &'static str, name: &'static str) -> Region {
    Region { code, name }
}

const fn country(code: &'static str, name: &'static str, region: &'static str) -> Country {
    Country { code, name, region }
}

const fn unit(code: &'static str, name: &'static str, country: &'static str) -> SubnationalUnit {
    SubnationalUnit { code, name, country }
}

pub static REGIONS: &[Region] = &[
    region("ESA", "Eastern and Southern Africa"),
    region("WCA", "West and Central Africa"),
    region("CWANA", "Central and West Asia and North Africa"),
    region("SA", "South Asia"),
    region("SEA", "Southeast Asia"),
    region("EAP", "East Asia and Pacific"),
    region("LAC", "Latin America and the Caribbean"),
];

pub static COUNTRIES: &[Country] = &[
    // Eastern and Southern Africa
    country("KE", "Kenya", "ESA"),
    country("ET", "Ethiopia", "ESA"),
    country("TZ", "Tanzania", "ESA"),
    country("UG", "Uganda", "ESA"),
    country("RW", "Rwanda", "ESA"),
    country("MW", "Malawi", "ESA"),
    country("ZM", "Zambia", "ESA"),
    country("ZW", "Zimbabwe", "ESA"),
    country("MZ", "Mozambique", "ESA"),
    country("MG", "Madagascar", "ESA"),
    country("ZA", "South Africa", "ESA"),
    // West and Central Africa
    country("NG", "Nigeria", "WCA"),
    country("GH", "Ghana", "WCA"),
    country("ML", "Mali", "WCA"),
    country("BF", "Burkina Faso", "WCA"),
    country("NE", "Niger", "WCA"),
    country("SN", "Senegal", "WCA"),
    country("CI", "Côte d'Ivoire", "WCA"),
    country("CM", "Cameroon", "WCA"),
    country("CD", "Democratic Republic of the Congo", "WCA"),
    country("BJ", "Benin", "WCA"),
    // Central and West Asia and North Africa
    country("EG", "Egypt", "CWANA"),
    country("MA", "Morocco", "CWANA"),
    country("TN", "Tunisia", "CWANA"),
    country("SD", "Sudan", "CWANA"),
    country("JO", "Jordan", "CWANA"),
    country("LB", "Lebanon", "CWANA"),
    country("TR", "Türkiye", "CWANA"),
    country("UZ", "Uzbekistan", "CWANA"),
    country("KZ", "Kazakhstan", "CWANA"),
    country("AF", "Afghanistan", "CWANA"),
    // South Asia
    country("IN", "India", "SA"),
    country("BD", "Bangladesh", "SA"),
    country("NP", "Nepal", "SA"),
    country("PK", "Pakistan", "SA"),
    country("LK", "Sri Lanka", "SA"),
    // Southeast Asia
    country("VN", "Viet Nam", "SEA"),
    country("KH", "Cambodia", "SEA"),
    country("LA", "Lao PDR", "SEA"),
    country("MM", "Myanmar", "SEA"),
    country("PH", "Philippines", "SEA"),
    country("ID", "Indonesia", "SEA"),
    country("TH", "Thailand", "SEA"),
    // East Asia and Pacific
    country("CN", "China", "EAP"),
    country("PG", "Papua New Guinea", "EAP"),
    country("FJ", "Fiji", "EAP"),
    // Latin America and the Caribbean
    country("MX", "Mexico", "LAC"),
    country("GT", "Guatemala", "LAC"),
    country("HN", "Honduras", "LAC"),
    country("NI", "Nicaragua", "LAC"),
    country("HT", "Haiti", "LAC"),
    country("CO", "Colombia", "LAC"),
    country("PE", "Peru", "LAC"),
    country("BO", "Bolivia", "LAC"),
    country("BR", "Brazil", "LAC"),
];

pub static SUBNATIONAL_UNITS: &[SubnationalUnit] = &[
    unit("KE-01", "Baringo", "KE"),
    unit("KE-02", "Bomet", "KE"),
    unit("KE-03", "Bungoma", "KE"),
    unit("KE-04", "Busia", "KE"),
    unit("KE-14", "Kisumu", "KE"),
    unit("KE-30", "Nairobi City", "KE"),
    unit("ET-AA", "Addis Ababa", "ET"),
    unit("ET-AM", "Amara", "ET"),
    unit("ET-OR", "Oromia", "ET"),
    unit("ET-TI", "Tigray", "ET"),
    unit("TZ-01", "Arusha", "TZ"),
    unit("TZ-02", "Dar es Salaam", "TZ"),
    unit("TZ-05", "Kagera", "TZ"),
    unit("UG-C", "Central", "UG"),
    unit("UG-N", "Northern", "UG"),
    unit("MW-N", "Northern", "MW"),
    unit("MW-S", "Southern", "MW"),
    unit("NG-LA", "Lagos", "NG"),
    unit("NG-KN", "Kano", "NG"),
    unit("NG-OY", "Oyo", "NG"),
    unit("NG-BO", "Borno", "NG"),
    unit("GH-AA", "Greater Accra", "GH"),
    unit("GH-NP", "Northern", "GH"),
    unit("ML-4", "Ségou", "ML"),
    unit("IN-BR", "Bihar", "IN"),
    unit("IN-UP", "Uttar Pradesh", "IN"),
    unit("IN-OD", "Odisha", "IN"),
    unit("IN-MH", "Maharashtra", "IN"),
    unit("BD-A", "Barishal", "BD"),
    unit("BD-C", "Dhaka", "BD"),
    unit("BD-F", "Rangpur", "BD"),
    unit("NP-P1", "Koshi", "NP"),
    unit("PK-PB", "Punjab", "PK"),
    unit("EG-C", "Cairo", "EG"),
    unit("MA-06", "Casablanca-Settat", "MA"),
    unit("VN-HN", "Ha Noi", "VN"),
    unit("VN-SG", "Ho Chi Minh", "VN"),
    unit("KH-12", "Phnom Penh", "KH"),
    unit("PH-00", "National Capital Region", "PH"),
    unit("MX-OAX", "Oaxaca", "MX"),
    unit("MX-CHP", "Chiapas", "MX"),
    unit("GT-16", "Alta Verapaz", "GT"),
    unit("CO-CAU", "Cauca", "CO"),
    unit("PE-CUS", "Cusco", "PE"),
];

static REGION_INDEX: Lazy<HashMap<&'static str, &'static Region>> =
    Lazy::new(|| REGIONS.iter().map(|r| (r.code, r)).collect());

static COUNTRY_INDEX: Lazy<HashMap<&'static str, &'static Country>> =
    Lazy::new(|| COUNTRIES.iter().map(|c| (c.code, c)).collect());

static SUBNATIONAL_INDEX: Lazy<HashMap<&'static str, &'static SubnationalUnit>> =
    Lazy::new(|| SUBNATIONAL_UNITS.iter().map(|u| (u.code, u)).collect());

/// Looks up a region by code.
pub fn find_region(code: &str) -> Option<&'static Region> {
    REGION_INDEX.get(code).copied()
}

/// Looks up a country by code.
pub fn find_country(code: &str) -> Option<&'static Country> {
    COUNTRY_INDEX.get(code).copied()
}

/// Looks up a subnational unit by code.
pub fn find_subnational_unit(code: &str) -> Option<&'static SubnationalUnit> {
    SUBNATIONAL_INDEX.get(code).copied()
}

/// Countries belonging to `region`, in table order.
pub fn countries_in_region(region: &str) -> Vec<&'static Country> {
    COUNTRIES.iter().filter(|c| c.region == region).collect()
}

/// Subnational units belonging to `country`, in table order.
pub fn subnational_units_in_country(country: &str) -> Vec<&'static SubnationalUnit> {
    SUBNATIONAL_UNITS
        .iter()
        .filter(|u| u.country == country)
        .collect()
}

/// Every region owning at least one of `countries`.
///
/// First-seen order, no duplicates. Unknown country codes are skipped.
pub fn regions_for_countries<S: AsRef<str>>(countries: &[S]) -> Vec<String> {
    dedup_parents(countries, |code| find_country(code).map(|c| c.region))
}

/// The parent country of each of `units`.
///
/// First-seen order, no duplicates. Unknown unit codes are skipped.
pub fn countries_for_subnational<S: AsRef<str>>(units: &[S]) -> Vec<String> {
    dedup_parents(units, |code| find_subnational_unit(code).map(|u| u.country))
}

fn dedup_parents<S, F>(codes: &[S], parent: F) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(&str) -> Option<&'static str>,
{
    let mut seen = HashSet::new();
    codes
        .iter()
        .filter_map(|code| parent(code.as_ref()))
        .filter(|p| seen.insert(*p))
        .map(str::to_string)
        .collect()
}
