//! Option lists backing the selection fields

pub const DESIGNATION_PLACEHOLDER: &str = "Select a designation";
pub const COUNTRY_PLACEHOLDER: &str = "Select a country";

const DEFAULT_DESIGNATIONS: &[&str] = &[
    "Limited",
    "Ltd.",
    "Private Limited",
    "Pte. Ltd.",
    "LLC",
    "Inc.",
    "Corporation",
];

const DEFAULT_COUNTRIES: &[&str] = &[
    "Singapore",
    "Hong Kong",
    "United Kingdom",
    "United States",
    "Estonia",
    "Cayman Islands",
    "British Virgin Islands",
    "Seychelles",
    "United Arab Emirates",
];

/// Choices for the two dropdowns and the jurisdiction multi-select.
///
/// `designations` and `countries` carry the placeholder at index 0, so a
/// dropdown index maps straight onto these lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    designations: Vec<String>,
    countries: Vec<String>,
    jurisdictions: Vec<String>,
}

impl Catalog {
    /// Build a catalog from bare option labels, prepending placeholders
    pub fn new(
        designations: Vec<String>,
        countries: Vec<String>,
        jurisdictions: Vec<String>,
    ) -> Self {
        let with_placeholder = |placeholder: &str, options: Vec<String>| {
            std::iter::once(placeholder.to_string())
                .chain(options)
                .collect::<Vec<_>>()
        };
        Self {
            designations: with_placeholder(DESIGNATION_PLACEHOLDER, designations),
            countries: with_placeholder(COUNTRY_PLACEHOLDER, countries),
            jurisdictions,
        }
    }

    pub fn designations(&self) -> &[String] {
        &self.designations
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn jurisdictions(&self) -> &[String] {
        &self.jurisdictions
    }

    /// Label for a dropdown index; the placeholder and out-of-range indices yield `None`
    pub fn designation(&self, index: usize) -> Option<&str> {
        selected(&self.designations, index)
    }

    pub fn country(&self, index: usize) -> Option<&str> {
        selected(&self.countries, index)
    }

    pub fn jurisdiction(&self, index: usize) -> Option<&str> {
        self.jurisdictions.get(index).map(String::as_str)
    }
}

fn selected(options: &[String], index: usize) -> Option<&str> {
    if index == 0 {
        return None;
    }
    options.get(index).map(String::as_str)
}

impl Default for Catalog {
    fn default() -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self::new(
            owned(DEFAULT_DESIGNATIONS),
            owned(DEFAULT_COUNTRIES),
            owned(DEFAULT_COUNTRIES),
        )
    }
}
