use chrono::{DateTime, Local};

use super::lead::{LeadForm, Validation};
use super::session::{FlagStore, PopupFlags};
use super::submit::LeadPayload;

/// Lead popup visibility plus the auto-open policy.
///
/// The auto-open timer handle belongs to the component; `auto_open_pending`
/// mirrors whether it should still be alive.
pub struct Popup<S> {
    flags: PopupFlags<S>,
    open: bool,
    auto_open_pending: bool,
    submitting: bool,
}

impl<S: FlagStore> Popup<S> {
    pub fn new(store: S) -> Self {
        Self {
            flags: PopupFlags::new(store),
            open: false,
            auto_open_pending: false,
            submitting: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[cfg(test)]
    pub fn auto_open_pending(&self) -> bool {
        self.auto_open_pending
    }

    /// Whether an auto-open timer should be started for this page view.
    pub fn schedule_auto_open(&mut self) -> bool {
        if self.flags.form_submitted() || self.flags.auto_shown() {
            return false;
        }
        self.auto_open_pending = true;
        true
    }

    pub fn auto_open_fired(&mut self) -> bool {
        if !self.auto_open_pending {
            return false;
        }
        self.auto_open_pending = false;
        if self.flags.form_submitted() || self.open {
            return false;
        }
        self.flags.mark_auto_shown();
        self.open = true;
        true
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Validates before anything is dispatched. `Ok(None)` means a submission
    /// is already in flight; an invalid form never enters the submitting state.
    pub fn prepare_submit(
        &mut self,
        form: &LeadForm,
        at: DateTime<Local>,
    ) -> Result<Option<LeadPayload>, Validation> {
        let validation = form.validate();
        if !validation.is_valid() {
            return Err(validation);
        }
        if !self.begin_submit() {
            return Ok(None);
        }
        Ok(Some(LeadPayload::new(form, at)))
    }

    fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Returns whether a pending auto-open timer has to be cancelled.
    pub fn submitted(&mut self) -> bool {
        self.submitting = false;
        self.flags.mark_form_submitted();
        self.open = false;
        std::mem::take(&mut self.auto_open_pending)
    }

    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::session::{MemoryStore, AUTO_SHOWN_KEY, FORM_SUBMITTED_KEY};
    use crate::form::lead::Field;
    use chrono::TimeZone;

    fn filled() -> LeadForm {
        LeadForm {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "+91 98765 43210".into(),
            message: String::new(),
        }
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 5, 4, 10, 30, 0).unwrap()
    }

    #[test]
    fn empty_name_never_reaches_the_network() {
        let mut popup = Popup::new(MemoryStore::default());
        popup.open();
        let form = LeadForm {
            name: String::new(),
            ..filled()
        };

        let validation = popup.prepare_submit(&form, now()).unwrap_err();
        assert!(!validation.is_valid());
        assert_eq!(validation.first_message(), Some("Your Name is required"));
        let flagged: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|field| validation.has_error(*field))
            .collect();
        assert_eq!(flagged, vec![Field::Name]);
        assert!(!popup.is_submitting());
        assert!(popup.is_open());
    }

    #[test]
    fn valid_form_yields_one_payload_at_a_time() {
        let mut popup = Popup::new(MemoryStore::default());
        let payload = popup.prepare_submit(&filled(), now()).unwrap();
        assert_eq!(payload.map(|p| p.name), Some("Asha Rao".to_string()));
        assert!(popup.is_submitting());

        assert_eq!(popup.prepare_submit(&filled(), now()), Ok(None));
    }

    #[test]
    fn auto_opens_once_per_session() {
        let mut popup = Popup::new(MemoryStore::default());
        assert!(popup.schedule_auto_open());
        assert!(popup.auto_open_fired());
        assert!(popup.is_open());
        assert_eq!(popup.flags.store_value(AUTO_SHOWN_KEY).as_deref(), Some("true"));

        popup.close();
        assert!(!popup.schedule_auto_open());
    }

    #[test]
    fn submission_cancels_pending_auto_open() {
        let mut popup = Popup::new(MemoryStore::default());
        assert!(popup.schedule_auto_open());
        popup.open();
        assert!(matches!(popup.prepare_submit(&filled(), now()), Ok(Some(_))));
        assert_eq!(popup.prepare_submit(&filled(), now()), Ok(None));

        assert!(popup.submitted());
        assert!(!popup.is_open());
        assert!(!popup.auto_open_pending());
        assert_eq!(
            popup.flags.store_value(FORM_SUBMITTED_KEY).as_deref(),
            Some("true")
        );
        assert!(!popup.auto_open_fired());
        assert!(!popup.schedule_auto_open());
    }

    #[test]
    fn already_submitted_session_never_auto_opens() {
        let store = MemoryStore::default();
        store.set(FORM_SUBMITTED_KEY, "true");
        let mut popup = Popup::new(store);
        assert!(!popup.schedule_auto_open());
        assert!(!popup.auto_open_fired());
    }

    #[test]
    fn failure_allows_retry() {
        let mut popup = Popup::new(MemoryStore::default());
        popup.open();
        assert!(matches!(popup.prepare_submit(&filled(), now()), Ok(Some(_))));
        popup.submit_failed();
        assert!(popup.is_open());
        assert!(!popup.is_submitting());
        assert!(matches!(popup.prepare_submit(&filled(), now()), Ok(Some(_))));
    }

    #[test]
    fn manual_open_suppresses_auto_open() {
        let mut popup = Popup::new(MemoryStore::default());
        popup.schedule_auto_open();
        popup.open();
        assert!(!popup.auto_open_fired());
        assert!(!popup.auto_open_pending());
    }
}
