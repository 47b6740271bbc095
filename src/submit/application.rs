//! The validated application handed to a submit handler

use crate::state::{Catalog, FieldName, FormSnapshot};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Form contents with selection indices resolved to their labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub session_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub alt_company_name: String,
    pub company_designation: String,
    pub operation_country: String,
    pub target_countries: Vec<String>,
    pub num_shares: String,
    pub all_shares_issued: bool,
    pub issued_shares: String,
}

impl Application {
    /// Build from a snapshot that passed a submit attempt.
    ///
    /// Returns `None` while the snapshot cannot be submitted.
    pub fn from_snapshot(
        snapshot: &FormSnapshot,
        catalog: &Catalog,
        session_id: Uuid,
        submitted_at: DateTime<Utc>,
    ) -> Option<Self> {
        if !snapshot.can_submit() {
            return None;
        }

        let text = |field| snapshot.text(field).to_string();
        let target_countries = snapshot
            .target_countries()
            .into_iter()
            .map(|i| catalog.jurisdiction(i).map(str::to_string))
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            session_id,
            submitted_at,
            full_name: text(FieldName::FullName),
            email: text(FieldName::Email),
            company_name: text(FieldName::CompanyName),
            alt_company_name: text(FieldName::AltCompanyName),
            company_designation: catalog
                .designation(snapshot.choice(FieldName::CompanyDesignation))?
                .to_string(),
            operation_country: catalog
                .country(snapshot.choice(FieldName::OperationCountry))?
                .to_string(),
            target_countries,
            num_shares: text(FieldName::NumShares),
            all_shares_issued: snapshot.all_shares_issued()?,
            issued_shares: text(FieldName::IssuedShares),
        })
    }
}
