//! Form snapshot: the complete state of one intake session

use super::field::{FieldName, FieldState, FieldValue};
use std::collections::{BTreeMap, BTreeSet};

/// All field states plus the derived submit eligibility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    fields: BTreeMap<FieldName, FieldState>,
    can_submit: bool,
}

impl FormSnapshot {
    pub fn new() -> Self {
        let fields = FieldName::ALL
            .iter()
            .map(|name| (*name, FieldState::new(name.initial_value())))
            .collect();
        let mut snapshot = Self {
            fields,
            can_submit: false,
        };
        snapshot.refresh_can_submit();
        snapshot
    }

    pub fn field(&self, name: FieldName) -> &FieldState {
        // Every FieldName is inserted in `new` and never removed
        &self.fields[&name]
    }

    pub(crate) fn field_mut(&mut self, name: FieldName) -> &mut FieldState {
        self.fields
            .entry(name)
            .or_insert_with(|| FieldState::new(name.initial_value()))
    }

    /// Fields in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldState)> {
        self.fields.iter().map(|(name, state)| (*name, state))
    }

    pub fn text(&self, name: FieldName) -> &str {
        self.field(name).value.as_text()
    }

    pub fn choice(&self, name: FieldName) -> usize {
        self.field(name).value.as_choice()
    }

    pub fn target_countries(&self) -> BTreeSet<usize> {
        self.field(FieldName::TargetCountries)
            .value
            .as_choices()
            .cloned()
            .unwrap_or_default()
    }

    /// Tri-state radio: unset, yes, no
    pub fn all_shares_issued(&self) -> Option<bool> {
        self.field(FieldName::AllSharesIssued).value.as_answer()
    }

    /// Issued shares are locked to the share count while all shares are issued
    pub fn is_read_only(&self, name: FieldName) -> bool {
        name == FieldName::IssuedShares && self.all_shares_issued() == Some(true)
    }

    pub fn can_submit(&self) -> bool {
        self.can_submit
    }

    pub fn first_invalid(&self) -> Option<FieldName> {
        self.iter()
            .find(|(name, state)| name.is_required() && !state.is_valid())
            .map(|(name, _)| name)
    }

    pub(crate) fn set_value(&mut self, name: FieldName, value: FieldValue) {
        self.field_mut(name).value = value;
    }

    pub(crate) fn refresh_can_submit(&mut self) {
        self.can_submit = self
            .fields
            .iter()
            .filter(|(name, _)| name.is_required())
            .all(|(_, state)| state.is_valid());
    }
}

impl Default for FormSnapshot {
    fn default() -> Self {
        Self::new()
    }
}
