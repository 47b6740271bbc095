//! Validation engine: reduces input events onto a `FormSnapshot`

use super::catalog::Catalog;
use super::field::{FieldName, FieldState, FieldValue};
use super::form_state::FormSnapshot;
use super::rules::{self, ReservedValues};
use std::collections::BTreeSet;

/// Applies the intake rules to a snapshot in response to user events.
///
/// Every operation recomputes the affected field, any field that depends on
/// it, and the snapshot's submit eligibility. Errors are derived purely from
/// current values; `touched` only controls when they start to show.
#[derive(Debug, Clone, Default)]
pub struct FormValidationEngine {
    reserved: ReservedValues,
    catalog: Catalog,
}

impl FormValidationEngine {
    pub fn new(reserved: ReservedValues, catalog: Catalog) -> Self {
        Self { reserved, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Keystroke-level update. Share fields drop non-digits immediately and a
    /// touched field is re-validated so its message clears once fixed.
    pub fn on_field_input<'a>(
        &self,
        snapshot: &'a mut FormSnapshot,
        field: FieldName,
        raw: &str,
    ) -> &'a FieldState {
        if !field.is_text_entry() || snapshot.is_read_only(field) {
            return snapshot.field(field);
        }

        let value = if field.is_numeric() {
            rules::sanitize_digits(raw)
        } else {
            raw.to_string()
        };
        snapshot.set_value(field, FieldValue::Text(value));
        if snapshot.field(field).touched {
            self.revalidate(snapshot, field);
        }
        self.refresh_dependents(snapshot, field);
        snapshot.refresh_can_submit();
        snapshot.field(field)
    }

    /// Commit a text or share field when focus leaves it
    pub fn on_field_blur<'a>(
        &self,
        snapshot: &'a mut FormSnapshot,
        field: FieldName,
        raw: &str,
    ) -> &'a FieldState {
        if !field.is_text_entry() {
            return snapshot.field(field);
        }

        if !snapshot.is_read_only(field) {
            snapshot.set_value(field, FieldValue::Text(rules::sanitize(field, raw)));
        }
        snapshot.field_mut(field).touched = true;
        self.revalidate(snapshot, field);
        self.refresh_dependents(snapshot, field);
        snapshot.refresh_can_submit();
        snapshot.field(field)
    }

    pub fn on_designation_select<'a>(
        &self,
        snapshot: &'a mut FormSnapshot,
        index: usize,
    ) -> &'a FieldState {
        self.select(snapshot, FieldName::CompanyDesignation, index)
    }

    pub fn on_operation_country_select<'a>(
        &self,
        snapshot: &'a mut FormSnapshot,
        index: usize,
    ) -> &'a FieldState {
        self.select(snapshot, FieldName::OperationCountry, index)
    }

    /// Replace the jurisdiction selection set
    pub fn on_target_country_toggle<'a>(
        &self,
        snapshot: &'a mut FormSnapshot,
        selections: BTreeSet<usize>,
    ) -> &'a FieldState {
        let field = FieldName::TargetCountries;
        let selections = selections
            .into_iter()
            .filter(|i| self.catalog.jurisdiction(*i).is_some())
            .collect();
        snapshot.set_value(field, FieldValue::Choices(selections));
        snapshot.field_mut(field).touched = true;
        self.revalidate(snapshot, field);
        snapshot.refresh_can_submit();
        snapshot.field(field)
    }

    /// Flip one jurisdiction in the current selection
    pub fn toggle_target_country<'a>(
        &self,
        snapshot: &'a mut FormSnapshot,
        index: usize,
    ) -> &'a FieldState {
        let mut selections = snapshot.target_countries();
        if !selections.remove(&index) {
            selections.insert(index);
        }
        self.on_target_country_toggle(snapshot, selections)
    }

    /// Answer the radio. Yes locks issued shares to the share count, no unlocks it.
    pub fn on_all_shares_issued_select<'a>(
        &self,
        snapshot: &'a mut FormSnapshot,
        all_issued: bool,
    ) -> &'a FormSnapshot {
        let field = FieldName::AllSharesIssued;
        snapshot.set_value(field, FieldValue::Answer(Some(all_issued)));
        snapshot.field_mut(field).touched = true;
        self.revalidate(snapshot, field);

        if all_issued {
            self.lock_issued_shares(snapshot);
        } else if snapshot.field(FieldName::IssuedShares).touched {
            self.revalidate(snapshot, FieldName::IssuedShares);
        }
        tracing::debug!(all_issued, "all shares issued answered");

        snapshot.refresh_can_submit();
        snapshot
    }

    /// Validate every field, surfacing errors on fields the user never visited
    pub fn on_submit_attempt<'a>(&self, snapshot: &'a mut FormSnapshot) -> &'a FormSnapshot {
        if snapshot.all_shares_issued() == Some(true) {
            self.lock_issued_shares(snapshot);
        }
        for field in FieldName::ALL {
            if field.is_required() {
                snapshot.field_mut(field).touched = true;
            }
        }
        self.validate_all(snapshot);
        tracing::debug!(
            can_submit = snapshot.can_submit(),
            first_invalid = snapshot.first_invalid().map(|f| f.key()),
            "submit attempted"
        );
        snapshot
    }

    /// Re-evaluate every touched field from current values
    pub fn validate_all<'a>(&self, snapshot: &'a mut FormSnapshot) -> &'a FormSnapshot {
        for field in FieldName::ALL {
            if snapshot.field(field).touched {
                self.revalidate(snapshot, field);
            }
        }
        snapshot.refresh_can_submit();
        snapshot
    }

    /// Back to a blank form
    pub fn reset(&self, snapshot: &mut FormSnapshot) {
        *snapshot = FormSnapshot::new();
    }

    fn select<'a>(
        &self,
        snapshot: &'a mut FormSnapshot,
        field: FieldName,
        index: usize,
    ) -> &'a FieldState {
        snapshot.set_value(field, FieldValue::Choice(index));
        snapshot.field_mut(field).touched = true;
        self.revalidate(snapshot, field);
        snapshot.refresh_can_submit();
        snapshot.field(field)
    }

    /// A read-only field mirrors another one and never carries its own error
    fn revalidate(&self, snapshot: &mut FormSnapshot, field: FieldName) {
        let error = if snapshot.is_read_only(field) {
            None
        } else {
            rules::evaluate(field, snapshot, &self.reserved, &self.catalog)
        };
        let state = snapshot.field_mut(field);
        if state.error.as_deref() != error {
            tracing::debug!(field = field.key(), error, "field validity changed");
        }
        state.error = error.map(str::to_string);
    }

    fn lock_issued_shares(&self, snapshot: &mut FormSnapshot) {
        let total = snapshot.text(FieldName::NumShares).to_string();
        snapshot.set_value(FieldName::IssuedShares, FieldValue::Text(total));
        snapshot.field_mut(FieldName::IssuedShares).error = None;
    }

    fn refresh_dependents(&self, snapshot: &mut FormSnapshot, field: FieldName) {
        match field {
            FieldName::CompanyName if snapshot.field(FieldName::AltCompanyName).touched => {
                self.revalidate(snapshot, FieldName::AltCompanyName);
            }
            FieldName::NumShares => {
                if snapshot.all_shares_issued() == Some(true) {
                    self.lock_issued_shares(snapshot);
                } else if snapshot.field(FieldName::IssuedShares).touched {
                    self.revalidate(snapshot, FieldName::IssuedShares);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::rules::*;
    use pretty_assertions::assert_eq;

    fn engine() -> FormValidationEngine {
        FormValidationEngine::default()
    }

    fn error_of(snapshot: &FormSnapshot, field: FieldName) -> Option<&str> {
        snapshot.field(field).error.as_deref()
    }

    /// A snapshot where every rule passes
    fn valid_snapshot(engine: &FormValidationEngine) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new();
        engine.on_field_blur(&mut snapshot, FieldName::FullName, "Jane Doe");
        engine.on_field_blur(&mut snapshot, FieldName::Email, "jane@example.com");
        engine.on_field_blur(&mut snapshot, FieldName::CompanyName, "Acme");
        engine.on_field_blur(&mut snapshot, FieldName::AltCompanyName, "Acme Holdings");
        engine.on_designation_select(&mut snapshot, 1);
        engine.on_operation_country_select(&mut snapshot, 2);
        engine.on_target_country_toggle(&mut snapshot, BTreeSet::from([0, 3]));
        engine.on_field_blur(&mut snapshot, FieldName::NumShares, "1000");
        engine.on_all_shares_issued_select(&mut snapshot, false);
        engine.on_field_blur(&mut snapshot, FieldName::IssuedShares, "500");
        snapshot
    }

    mod blur {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_required_text_fields_report_their_error() {
            let engine = engine();
            for field in FieldName::ALL.into_iter().filter(|f| f.is_text_entry()) {
                let mut snapshot = FormSnapshot::new();
                let state = engine.on_field_blur(&mut snapshot, field, "   ");
                assert!(state.touched);
                assert_eq!(state.error.as_deref(), Some(field.error_message()), "{field:?}");
            }
        }

        #[test]
        fn test_reserved_name_rejected_in_any_case() {
            let engine = engine();
            for field in [FieldName::FullName, FieldName::CompanyName] {
                for variant in ["korporatio", "Korporatio", "KORPORATIO", "KorPoratio"] {
                    let mut snapshot = FormSnapshot::new();
                    let state = engine.on_field_blur(&mut snapshot, field, variant);
                    assert_eq!(state.error.as_deref(), Some(field.error_message()));
                }
            }
        }

        #[test]
        fn test_valid_name_clears_error() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::FullName, "");
            let state = engine.on_field_blur(&mut snapshot, FieldName::FullName, "Jane Doe");
            assert_eq!(state.error, None);
        }

        #[test]
        fn test_email_rules() {
            let engine = engine();
            let cases = [
                ("", Some(EMAIL_ERROR)),
                ("not-an-email", Some(EMAIL_ERROR)),
                ("korporatio@email.com", Some(EMAIL_ERROR)),
                ("KORPORATIO@Email.Com", Some(EMAIL_ERROR)),
                ("jane@example.com", None),
            ];
            for (input, expected) in cases {
                let mut snapshot = FormSnapshot::new();
                let state = engine.on_field_blur(&mut snapshot, FieldName::Email, input);
                assert_eq!(state.error.as_deref(), expected, "{input}");
            }
        }

        #[test]
        fn test_alt_name_must_differ_from_company_name() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::CompanyName, "korporatio");
            let state =
                engine.on_field_blur(&mut snapshot, FieldName::AltCompanyName, "korporatio");
            assert_eq!(state.error.as_deref(), Some(ALT_COMPANY_NAME_ERROR));
        }

        #[test]
        fn test_alt_name_comparison_is_case_sensitive() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::CompanyName, "Acme");
            let state = engine.on_field_blur(&mut snapshot, FieldName::AltCompanyName, "ACME");
            assert_eq!(state.error, None);
        }

        #[test]
        fn test_changing_company_name_rechecks_alt_name() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::CompanyName, "Acme");
            engine.on_field_blur(&mut snapshot, FieldName::AltCompanyName, "Beta");
            assert_eq!(error_of(&snapshot, FieldName::AltCompanyName), None);

            engine.on_field_blur(&mut snapshot, FieldName::CompanyName, "Beta");
            assert_eq!(
                error_of(&snapshot, FieldName::AltCompanyName),
                Some(ALT_COMPANY_NAME_ERROR)
            );
        }

        #[test]
        fn test_share_count_is_sanitized() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            let state = engine.on_field_blur(&mut snapshot, FieldName::NumShares, "Abc123");
            assert_eq!(state.value, FieldValue::Text("123".to_string()));
            assert_eq!(state.error, None);

            let state = engine.on_field_blur(&mut snapshot, FieldName::NumShares, "ABC");
            assert_eq!(state.value, FieldValue::Text(String::new()));
            assert_eq!(state.error.as_deref(), Some(NUM_SHARES_ERROR));
        }

        #[test]
        fn test_zero_shares_rejected() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            let state = engine.on_field_blur(&mut snapshot, FieldName::NumShares, "0");
            assert_eq!(state.error.as_deref(), Some(NUM_SHARES_ERROR));
        }

        #[test]
        fn test_issued_shares_above_total_rejected() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::NumShares, "100");
            engine.on_all_shares_issued_select(&mut snapshot, false);
            let state = engine.on_field_blur(&mut snapshot, FieldName::IssuedShares, "150");
            assert_eq!(state.error.as_deref(), Some(ISSUED_SHARES_ERROR));
        }

        #[test]
        fn test_issued_shares_equal_to_total_accepted() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::NumShares, "100");
            engine.on_all_shares_issued_select(&mut snapshot, false);
            let state = engine.on_field_blur(&mut snapshot, FieldName::IssuedShares, "100");
            assert_eq!(state.error, None);
        }

        #[test]
        fn test_raising_total_clears_issued_error() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::NumShares, "100");
            engine.on_all_shares_issued_select(&mut snapshot, false);
            engine.on_field_blur(&mut snapshot, FieldName::IssuedShares, "150");
            engine.on_field_blur(&mut snapshot, FieldName::NumShares, "200");
            assert_eq!(error_of(&snapshot, FieldName::IssuedShares), None);
        }

        #[test]
        fn test_selection_fields_ignore_blur() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            let state = engine.on_field_blur(&mut snapshot, FieldName::CompanyDesignation, "x");
            assert!(!state.touched);
        }
    }

    mod input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_untouched_field_stays_silent() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            let state = engine.on_field_input(&mut snapshot, FieldName::Email, "jan");
            assert!(!state.touched);
            assert_eq!(state.error, None);
        }

        #[test]
        fn test_touched_field_clears_once_fixed() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::Email, "jane");
            assert_eq!(error_of(&snapshot, FieldName::Email), Some(EMAIL_ERROR));

            let state = engine.on_field_input(&mut snapshot, FieldName::Email, "jane@example.com");
            assert_eq!(state.error, None);
        }

        #[test]
        fn test_share_input_keeps_digits_only() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            let state = engine.on_field_input(&mut snapshot, FieldName::NumShares, "12x");
            assert_eq!(state.value.as_text(), "12");
        }

        #[test]
        fn test_whitespace_only_name_stays_invalid() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::FullName, "");

            let state = engine.on_field_input(&mut snapshot, FieldName::FullName, "   ");
            assert_eq!(state.value.as_text(), "   ");
            assert_eq!(state.error.as_deref(), Some(FULL_NAME_ERROR));
            assert!(!snapshot.can_submit());
        }

        #[test]
        fn test_trailing_space_email_accepted_while_typing() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::Email, "jane");

            let state = engine.on_field_input(&mut snapshot, FieldName::Email, "jane@example.com ");
            assert_eq!(state.error, None);
        }

        #[test]
        fn test_padded_alt_name_matching_company_rejected() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::CompanyName, "Acme");
            engine.on_field_blur(&mut snapshot, FieldName::AltCompanyName, "Other");

            let state = engine.on_field_input(&mut snapshot, FieldName::AltCompanyName, "Acme ");
            assert_eq!(state.error.as_deref(), Some(ALT_COMPANY_NAME_ERROR));
        }

        #[test]
        fn test_read_only_issued_shares_ignores_input() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::NumShares, "100");
            engine.on_all_shares_issued_select(&mut snapshot, true);
            let state = engine.on_field_input(&mut snapshot, FieldName::IssuedShares, "5");
            assert_eq!(state.value.as_text(), "100");
        }
    }

    mod selections {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_designation_placeholder_rejected() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            let state = engine.on_designation_select(&mut snapshot, 0);
            assert_eq!(state.error.as_deref(), Some(DESIGNATION_ERROR));
            let state = engine.on_designation_select(&mut snapshot, 2);
            assert_eq!(state.error, None);
        }

        #[test]
        fn test_operation_country_placeholder_rejected() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            let state = engine.on_operation_country_select(&mut snapshot, 0);
            assert_eq!(state.error.as_deref(), Some(OPERATION_COUNTRY_ERROR));
            let state = engine.on_operation_country_select(&mut snapshot, 1);
            assert_eq!(state.error, None);
        }

        #[test]
        fn test_out_of_range_selection_rejected() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            let state = engine.on_designation_select(&mut snapshot, 500);
            assert_eq!(state.error.as_deref(), Some(DESIGNATION_ERROR));
        }

        #[test]
        fn test_target_country_count_boundaries() {
            let engine = engine();
            let cases: [(&[usize], bool); 6] = [
                (&[], false),
                (&[0], true),
                (&[0, 1], true),
                (&[0, 1, 2], true),
                (&[0, 1, 2, 3], false),
                (&[0, 1, 2, 3, 4], false),
            ];
            for (selection, valid) in cases {
                let mut snapshot = FormSnapshot::new();
                let set = selection.iter().copied().collect();
                let state = engine.on_target_country_toggle(&mut snapshot, set);
                let expected = if valid { None } else { Some(TARGET_COUNTRIES_ERROR) };
                assert_eq!(state.error.as_deref(), expected, "{selection:?}");
            }
        }

        #[test]
        fn test_toggle_adds_and_removes() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.toggle_target_country(&mut snapshot, 2);
            assert_eq!(snapshot.target_countries(), BTreeSet::from([2]));
            let state = engine.toggle_target_country(&mut snapshot, 2);
            assert_eq!(state.error.as_deref(), Some(TARGET_COUNTRIES_ERROR));
            assert!(snapshot.target_countries().is_empty());
        }

        #[test]
        fn test_unknown_jurisdictions_dropped() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_target_country_toggle(&mut snapshot, BTreeSet::from([1, 999]));
            assert_eq!(snapshot.target_countries(), BTreeSet::from([1]));
        }
    }

    mod all_shares_issued {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_yes_locks_issued_to_total() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::NumShares, "100");
            engine.on_all_shares_issued_select(&mut snapshot, true);

            assert_eq!(snapshot.text(FieldName::IssuedShares), "100");
            assert!(snapshot.is_read_only(FieldName::IssuedShares));
            assert_eq!(error_of(&snapshot, FieldName::IssuedShares), None);
        }

        #[test]
        fn test_yes_follows_later_total_changes() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::NumShares, "100");
            engine.on_all_shares_issued_select(&mut snapshot, true);
            engine.on_field_blur(&mut snapshot, FieldName::NumShares, "250");
            assert_eq!(snapshot.text(FieldName::IssuedShares), "250");

            engine.on_field_input(&mut snapshot, FieldName::NumShares, "25");
            assert_eq!(snapshot.text(FieldName::IssuedShares), "25");
        }

        #[test]
        fn test_yes_clears_previous_issued_error() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::NumShares, "100");
            engine.on_all_shares_issued_select(&mut snapshot, false);
            engine.on_field_blur(&mut snapshot, FieldName::IssuedShares, "150");
            assert_eq!(
                error_of(&snapshot, FieldName::IssuedShares),
                Some(ISSUED_SHARES_ERROR)
            );

            engine.on_all_shares_issued_select(&mut snapshot, true);
            assert_eq!(error_of(&snapshot, FieldName::IssuedShares), None);
        }

        #[test]
        fn test_no_unlocks_issued() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::NumShares, "100");
            engine.on_all_shares_issued_select(&mut snapshot, true);
            engine.on_all_shares_issued_select(&mut snapshot, false);

            assert!(!snapshot.is_read_only(FieldName::IssuedShares));
            let state = engine.on_field_blur(&mut snapshot, FieldName::IssuedShares, "40");
            assert_eq!(state.value.as_text(), "40");
            assert_eq!(state.error, None);
        }

        #[test]
        fn test_locked_issued_shares_stays_clean_without_total() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_all_shares_issued_select(&mut snapshot, true);
            engine.on_submit_attempt(&mut snapshot);

            assert!(snapshot.is_read_only(FieldName::IssuedShares));
            assert_eq!(error_of(&snapshot, FieldName::IssuedShares), None);
            assert_eq!(
                error_of(&snapshot, FieldName::NumShares),
                Some(NUM_SHARES_ERROR)
            );
        }

        #[test]
        fn test_answer_clears_radio_error() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_submit_attempt(&mut snapshot);
            assert_eq!(
                error_of(&snapshot, FieldName::AllSharesIssued),
                Some(ALL_SHARES_ISSUED_ERROR)
            );
            engine.on_all_shares_issued_select(&mut snapshot, false);
            assert_eq!(error_of(&snapshot, FieldName::AllSharesIssued), None);
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blank_form_surfaces_every_error() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            let snapshot = engine.on_submit_attempt(&mut snapshot);

            assert!(!snapshot.can_submit());
            for (field, state) in snapshot.iter() {
                assert!(state.touched);
                assert_eq!(state.error.as_deref(), Some(field.error_message()), "{field:?}");
            }
        }

        #[test]
        fn test_untouched_radio_reported_at_submit() {
            let engine = engine();
            let mut snapshot = FormSnapshot::new();
            engine.on_field_blur(&mut snapshot, FieldName::NumShares, "10");
            assert_eq!(error_of(&snapshot, FieldName::AllSharesIssued), None);

            engine.on_submit_attempt(&mut snapshot);
            assert_eq!(
                error_of(&snapshot, FieldName::AllSharesIssued),
                Some(ALL_SHARES_ISSUED_ERROR)
            );
        }

        #[test]
        fn test_valid_form_can_submit() {
            let engine = engine();
            let mut snapshot = valid_snapshot(&engine);
            let snapshot = engine.on_submit_attempt(&mut snapshot);
            assert!(snapshot.can_submit());
            assert_eq!(snapshot.first_invalid(), None);
        }

        #[test]
        fn test_single_invalid_field_blocks_submit() {
            let engine = engine();
            let mut snapshot = valid_snapshot(&engine);
            engine.on_field_blur(&mut snapshot, FieldName::Email, "korporatio@email.com");
            let snapshot = engine.on_submit_attempt(&mut snapshot);
            assert!(!snapshot.can_submit());
            assert_eq!(snapshot.first_invalid(), Some(FieldName::Email));
        }

        #[test]
        fn test_revalidating_valid_snapshot_is_idempotent() {
            let engine = engine();
            let mut snapshot = valid_snapshot(&engine);
            engine.on_submit_attempt(&mut snapshot);
            let before = snapshot.clone();

            engine.validate_all(&mut snapshot);
            assert_eq!(snapshot, before);
            engine.on_submit_attempt(&mut snapshot);
            assert_eq!(snapshot, before);
        }

        #[test]
        fn test_reset_returns_blank_form() {
            let engine = engine();
            let mut snapshot = valid_snapshot(&engine);
            engine.reset(&mut snapshot);
            assert_eq!(snapshot, FormSnapshot::new());
        }
    }

    #[test]
    fn test_custom_reserved_values() {
        let engine = FormValidationEngine::new(
            ReservedValues {
                names: vec!["Acme".into()],
                emails: vec!["admin@acme.io".into()],
            },
            Catalog::default(),
        );
        let mut snapshot = FormSnapshot::new();
        let state = engine.on_field_blur(&mut snapshot, FieldName::CompanyName, "ACME");
        assert_eq!(state.error.as_deref(), Some(COMPANY_NAME_ERROR));
        let state = engine.on_field_blur(&mut snapshot, FieldName::FullName, "korporatio");
        assert_eq!(state.error, None);
        let state = engine.on_field_blur(&mut snapshot, FieldName::Email, "Admin@Acme.io");
        assert_eq!(state.error.as_deref(), Some(EMAIL_ERROR));
    }
}
