//! Form field value objects

use std::collections::BTreeSet;

/// Every field of the intake form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FullName,
    Email,
    CompanyName,
    AltCompanyName,
    CompanyDesignation,
    OperationCountry,
    TargetCountries,
    NumShares,
    AllSharesIssued,
    IssuedShares,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::CompanyName,
        FieldName::AltCompanyName,
        FieldName::CompanyDesignation,
        FieldName::OperationCountry,
        FieldName::TargetCountries,
        FieldName::NumShares,
        FieldName::AllSharesIssued,
        FieldName::IssuedShares,
    ];

    /// Stable camelCase key used in logs and the submitted payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::CompanyName => "companyName",
            Self::AltCompanyName => "altCompanyName",
            Self::CompanyDesignation => "companyDesignation",
            Self::OperationCountry => "operationCountry",
            Self::TargetCountries => "targetCountries",
            Self::NumShares => "numShares",
            Self::AllSharesIssued => "allSharesIssued",
            Self::IssuedShares => "issuedShares",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::CompanyName => "Company Name",
            Self::AltCompanyName => "Alternative Company Name",
            Self::CompanyDesignation => "Company Designation",
            Self::OperationCountry => "Country of Operation",
            Self::TargetCountries => "Target Jurisdictions (1-3)",
            Self::NumShares => "Number of Shares",
            Self::AllSharesIssued => "Are all shares issued?",
            Self::IssuedShares => "Issued Shares",
        }
    }

    /// All intake fields are required
    pub fn is_required(&self) -> bool {
        true
    }

    /// Share counts keep only the digits the user types
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::NumShares | Self::IssuedShares)
    }

    /// Fields edited by typing characters
    pub fn is_text_entry(&self) -> bool {
        matches!(
            self,
            Self::FullName
                | Self::Email
                | Self::CompanyName
                | Self::AltCompanyName
                | Self::NumShares
                | Self::IssuedShares
        )
    }

    /// Value a freshly initialized form holds for this field
    pub fn initial_value(&self) -> FieldValue {
        match self {
            Self::CompanyDesignation | Self::OperationCountry => FieldValue::Choice(0),
            Self::TargetCountries => FieldValue::Choices(BTreeSet::new()),
            Self::AllSharesIssued => FieldValue::Answer(None),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Dropdown index, 0 is the placeholder entry
    Choice(usize),
    Choices(BTreeSet<usize>),
    /// Yes/No radio, `None` until answered
    Answer(Option<bool>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    pub fn as_choice(&self) -> usize {
        match self {
            FieldValue::Choice(i) => *i,
            _ => 0,
        }
    }

    pub fn as_choices(&self) -> Option<&BTreeSet<usize>> {
        match self {
            FieldValue::Choices(set) => Some(set),
            _ => None,
        }
    }

    pub fn as_answer(&self) -> Option<bool> {
        match self {
            FieldValue::Answer(answer) => *answer,
            _ => None,
        }
    }
}

/// Per-field state: current value, whether the user has left the field, and
/// the message to display when the value breaks its rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: FieldValue,
    pub touched: bool,
    pub error: Option<String>,
}

impl FieldState {
    pub fn new(value: FieldValue) -> Self {
        Self {
            value,
            touched: false,
            error: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Error to render, suppressed until the field has been touched
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched {
            self.error.as_deref()
        } else {
            None
        }
    }
}
