//! Field rules: sanitation, reserved literals and the per-field error messages

use super::catalog::Catalog;
use super::field::FieldName;
use super::form_state::FormSnapshot;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::LazyLock;

pub const FULL_NAME_ERROR: &str = r#"Full name is required and "Korporatio" is not allowed."#;
pub const EMAIL_ERROR: &str =
    r#"Email is required and must be a valid format. "korporatio@email.com" is not allowed."#;
pub const COMPANY_NAME_ERROR: &str = r#"Company name is required and "Korporatio" is not allowed."#;
pub const ALT_COMPANY_NAME_ERROR: &str =
    "Alternative Company name is required and cannot be same with company name.";
pub const DESIGNATION_ERROR: &str = "Please select a designation from the list.";
pub const OPERATION_COUNTRY_ERROR: &str = "Please select a operation country from the list.";
pub const TARGET_COUNTRIES_ERROR: &str = "Please select 1 to 3 target jurisdictions";
pub const NUM_SHARES_ERROR: &str = "Please enter number of shares at least 1 share.";
pub const ISSUED_SHARES_ERROR: &str = "Please input the valid issued shares.";
pub const ALL_SHARES_ISSUED_ERROR: &str = "Please choose Yes or No.";

pub const MIN_TARGET_COUNTRIES: usize = 1;
pub const MAX_TARGET_COUNTRIES: usize = 3;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

impl FieldName {
    /// The literal shown when this field breaks its rule
    pub fn error_message(&self) -> &'static str {
        match self {
            Self::FullName => FULL_NAME_ERROR,
            Self::Email => EMAIL_ERROR,
            Self::CompanyName => COMPANY_NAME_ERROR,
            Self::AltCompanyName => ALT_COMPANY_NAME_ERROR,
            Self::CompanyDesignation => DESIGNATION_ERROR,
            Self::OperationCountry => OPERATION_COUNTRY_ERROR,
            Self::TargetCountries => TARGET_COUNTRIES_ERROR,
            Self::NumShares => NUM_SHARES_ERROR,
            Self::AllSharesIssued => ALL_SHARES_ISSUED_ERROR,
            Self::IssuedShares => ISSUED_SHARES_ERROR,
        }
    }
}

/// Values that are well-formed but refused by business rule.
///
/// Matching is case-insensitive after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedValues {
    /// Refused for the full name and company name
    pub names: Vec<String>,
    /// Refused for the email address
    pub emails: Vec<String>,
}

impl ReservedValues {
    pub fn is_reserved_name(&self, value: &str) -> bool {
        contains_normalized(&self.names, value)
    }

    pub fn is_reserved_email(&self, value: &str) -> bool {
        contains_normalized(&self.emails, value)
    }
}

impl Default for ReservedValues {
    fn default() -> Self {
        Self {
            names: vec!["korporatio".to_string()],
            emails: vec!["korporatio@email.com".to_string()],
        }
    }
}

fn contains_normalized(list: &[String], value: &str) -> bool {
    let value = value.trim().to_lowercase();
    list.iter().any(|reserved| reserved.trim().to_lowercase() == value)
}

/// Keep only the ASCII digits of a share count
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize raw input for a field: digits-only for share counts, trimmed otherwise
pub fn sanitize(field: FieldName, raw: &str) -> String {
    if field.is_numeric() {
        sanitize_digits(raw)
    } else {
        raw.trim().to_string()
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Compare two decimal digit strings by numeric value, ignoring leading zeros
pub fn compare_counts(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// A share count with at least one digit and a value of one or more
pub fn is_positive_count(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit())
        && value.chars().any(|c| c != '0')
}

/// Evaluate one field's rule against the current snapshot.
///
/// Text is judged as blur would store it, so half-typed input with stray
/// whitespace gets the same verdict it will get on commit.
/// Returns the error literal when the rule fails.
pub fn evaluate(
    field: FieldName,
    snapshot: &FormSnapshot,
    reserved: &ReservedValues,
    catalog: &Catalog,
) -> Option<&'static str> {
    let ok = match field {
        FieldName::FullName | FieldName::CompanyName => {
            let value = snapshot.text(field).trim();
            !value.is_empty() && !reserved.is_reserved_name(value)
        }
        FieldName::Email => {
            let value = snapshot.text(field).trim();
            !value.is_empty() && is_valid_email(value) && !reserved.is_reserved_email(value)
        }
        FieldName::AltCompanyName => {
            let value = snapshot.text(field).trim();
            !value.is_empty() && value != snapshot.text(FieldName::CompanyName).trim()
        }
        FieldName::CompanyDesignation => catalog.designation(snapshot.choice(field)).is_some(),
        FieldName::OperationCountry => catalog.country(snapshot.choice(field)).is_some(),
        FieldName::TargetCountries => {
            let count = snapshot.target_countries().len();
            (MIN_TARGET_COUNTRIES..=MAX_TARGET_COUNTRIES).contains(&count)
        }
        FieldName::NumShares => is_positive_count(snapshot.text(field)),
        FieldName::IssuedShares => {
            let issued = snapshot.text(field);
            let total = snapshot.text(FieldName::NumShares);
            let numeric = !issued.is_empty() && issued.chars().all(|c| c.is_ascii_digit());
            // The ceiling only applies once a share count is entered
            numeric && (total.is_empty() || compare_counts(issued, total) != Ordering::Greater)
        }
        FieldName::AllSharesIssued => snapshot.all_shares_issued().is_some(),
    };

    if ok {
        None
    } else {
        Some(field.error_message())
    }
}
