use std::slice;

use crate::domain::{SignupRecord, WaitlistEmail};
use crate::store::{StoreError, WaitlistStore};

pub const MSG_INVALID_EMAIL: &str = "Enter a valid email address.";
pub const MSG_PENDING: &str = "Starting early access...";
pub const MSG_ACCEPTED: &str = "You are on the list. We will email you soon.";
pub const MSG_ALREADY_REGISTERED: &str = "You are already on the list.";
pub const MSG_REJECTED: &str = "Could not join right now. Please try again.";
pub const MSG_NOT_CONFIGURED: &str = "The waitlist is not set up yet. Please check back soon.";

pub const LABEL_BUSY: &str = "Please wait...";
pub const LABEL_ACCEPTED: &str = "Added OK";
pub const LABEL_ALREADY_REGISTERED: &str = "Already Added";

/// What to do with a submit attempt before anything visible happens.
#[derive(Debug, PartialEq)]
pub enum Preflight {
    /// Honeypot tripped: a bot filled the field no real user sees. Drop the
    /// attempt silently, whatever the email looks like.
    Skip,
    /// Email failed the shape check; prompt the user, touch nothing else.
    Invalid,
    Proceed(WaitlistEmail),
}

pub fn preflight(email: &str, honeypot: &str) -> Preflight {
    if !honeypot.trim().is_empty() {
        return Preflight::Skip;
    }
    match WaitlistEmail::parse(email) {
        Ok(parsed) => Preflight::Proceed(parsed),
        Err(_) => Preflight::Invalid,
    }
}

/// Result of one submission attempt. Built per attempt, consumed immediately
/// to drive the form, never retained.
#[derive(Debug, PartialEq)]
pub enum SubmissionOutcome {
    Accepted(SignupRecord),
    AlreadyRegistered,
    Rejected(StoreError),
    NotConfigured,
}

/// Runs one insert against the store, if there is one. All store errors are
/// absorbed here; the caller always gets a terminal outcome.
pub async fn submit<S: WaitlistStore>(
    store: Option<&S>,
    record: SignupRecord,
) -> SubmissionOutcome {
    let Some(store) = store else {
        return SubmissionOutcome::NotConfigured;
    };
    match store.insert(slice::from_ref(&record)).await {
        Ok(_) => SubmissionOutcome::Accepted(record),
        Err(err) if err.is_unique_violation() => SubmissionOutcome::AlreadyRegistered,
        Err(err) => SubmissionOutcome::Rejected(err),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Error => "error",
        }
    }
}

/// A line rendered into the form's status element.
#[derive(Debug, Clone, PartialEq)]
pub struct FormStatus {
    pub message: &'static str,
    pub tone: Option<Tone>,
}

impl FormStatus {
    pub fn pending() -> Self {
        Self {
            message: MSG_PENDING,
            tone: None,
        }
    }

    pub fn invalid_email() -> Self {
        Self {
            message: MSG_INVALID_EMAIL,
            tone: Some(Tone::Error),
        }
    }
}

/// How one outcome shows up on the form. A duplicate email reads as success
/// to the user even though nothing new was written.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeView {
    pub status: FormStatus,
    pub submitted_label: Option<&'static str>,
    pub clears_form: bool,
}

impl OutcomeView {
    pub fn for_outcome(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Accepted(_) => Self {
                status: FormStatus {
                    message: MSG_ACCEPTED,
                    tone: Some(Tone::Success),
                },
                submitted_label: Some(LABEL_ACCEPTED),
                clears_form: true,
            },
            SubmissionOutcome::AlreadyRegistered => Self {
                status: FormStatus {
                    message: MSG_ALREADY_REGISTERED,
                    tone: Some(Tone::Success),
                },
                submitted_label: Some(LABEL_ALREADY_REGISTERED),
                clears_form: false,
            },
            SubmissionOutcome::Rejected(_) => Self {
                status: FormStatus {
                    message: MSG_REJECTED,
                    tone: Some(Tone::Error),
                },
                submitted_label: None,
                clears_form: false,
            },
            SubmissionOutcome::NotConfigured => Self {
                status: FormStatus {
                    message: MSG_NOT_CONFIGURED,
                    tone: Some(Tone::Error),
                },
                submitted_label: None,
                clears_form: false,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.submitted_label.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::domain::WaitlistEmail;

    struct FakeStore {
        result: RefCell<Option<Result<Vec<SignupRecord>, StoreError>>>,
        inserts: RefCell<Vec<Vec<SignupRecord>>>,
    }

    impl FakeStore {
        fn returning(result: Result<Vec<SignupRecord>, StoreError>) -> Self {
            Self {
                result: RefCell::new(Some(result)),
                inserts: RefCell::new(Vec::new()),
            }
        }
    }

    impl WaitlistStore for FakeStore {
        async fn insert(&self, records: &[SignupRecord]) -> Result<Vec<SignupRecord>, StoreError> {
            self.inserts.borrow_mut().push(records.to_vec());
            self.result
                .borrow_mut()
                .take()
                .expect("fake store called more than once")
        }
    }

    fn record(email: &str, source: &str) -> SignupRecord {
        SignupRecord::new(WaitlistEmail::parse(email).unwrap(), source, "test-agent")
    }

    fn unique_violation() -> StoreError {
        StoreError::Rejected {
            code: "23505".to_string(),
            message: "duplicate key value violates unique constraint".to_string(),
        }
    }

    #[test]
    fn filled_honeypot_skips_a_valid_email() {
        assert_eq!(preflight("someone@quarterly.app", "Acme Ltd"), Preflight::Skip);
    }

    #[test]
    fn filled_honeypot_skips_before_validation_runs() {
        // A bot with a bad email gets the same silent no-op, not an error.
        assert_eq!(preflight("not-an-email", "Acme Ltd"), Preflight::Skip);
    }

    #[test]
    fn whitespace_only_honeypot_does_not_trip() {
        let parsed = WaitlistEmail::parse("someone@quarterly.app").unwrap();
        assert_eq!(
            preflight("someone@quarterly.app", "   "),
            Preflight::Proceed(parsed)
        );
    }

    #[test]
    fn empty_honeypot_with_bad_email_is_invalid() {
        assert_eq!(preflight("not-an-email", ""), Preflight::Invalid);
    }

    #[test]
    fn preflight_normalizes_the_email_it_passes_on() {
        match preflight("Test@Example.com ", "") {
            Preflight::Proceed(email) => assert_eq!(email.as_ref(), "test@example.com"),
            other => panic!("expected Proceed, got {other:?}"),
        }
    }

    #[test]
    fn store_success_is_accepted() {
        let rec = record("someone@quarterly.app", "hero");
        let store = FakeStore::returning(Ok(vec![rec.clone()]));
        let outcome = block_on(submit(Some(&store), rec.clone()));
        assert_eq!(outcome, SubmissionOutcome::Accepted(rec));
    }

    #[test]
    fn unique_violation_is_already_registered() {
        let store = FakeStore::returning(Err(unique_violation()));
        let outcome = block_on(submit(Some(&store), record("someone@quarterly.app", "hero")));
        assert_eq!(outcome, SubmissionOutcome::AlreadyRegistered);
    }

    #[test]
    fn other_store_errors_are_rejected() {
        let err = StoreError::Rejected {
            code: "42501".to_string(),
            message: "permission denied".to_string(),
        };
        let store = FakeStore::returning(Err(err.clone()));
        let outcome = block_on(submit(Some(&store), record("someone@quarterly.app", "hero")));
        assert_eq!(outcome, SubmissionOutcome::Rejected(err));
    }

    #[test]
    fn transport_errors_are_rejected() {
        let store =
            FakeStore::returning(Err(StoreError::Transport("connection refused".to_string())));
        let outcome = block_on(submit(Some(&store), record("someone@quarterly.app", "hero")));
        assert!(matches!(outcome, SubmissionOutcome::Rejected(_)));
    }

    #[test]
    fn missing_store_short_circuits_to_not_configured() {
        let outcome = block_on(submit(
            None::<&FakeStore>,
            record("someone@quarterly.app", "hero"),
        ));
        assert_eq!(outcome, SubmissionOutcome::NotConfigured);
    }

    #[test]
    fn store_receives_single_element_batch_with_normalized_email() {
        let rec = SignupRecord::new(
            WaitlistEmail::parse("Test@Example.com ").unwrap(),
            "hero",
            "test-agent",
        );
        let store = FakeStore::returning(Ok(vec![rec.clone()]));
        block_on(submit(Some(&store), rec));

        let inserts = store.inserts.borrow();
        assert_eq!(inserts.len(), 1);
        assert_eq!(
            inserts[0],
            vec![SignupRecord {
                email: "test@example.com".to_string(),
                source: "hero".to_string(),
                user_agent: "test-agent".to_string(),
            }]
        );
    }

    #[test]
    fn accepted_clears_the_form_and_marks_submitted() {
        let view = OutcomeView::for_outcome(&SubmissionOutcome::Accepted(record(
            "someone@quarterly.app",
            "hero",
        )));
        assert_eq!(view.status.message, MSG_ACCEPTED);
        assert_eq!(view.status.tone, Some(Tone::Success));
        assert_eq!(view.submitted_label, Some(LABEL_ACCEPTED));
        assert!(view.clears_form);
        assert!(view.is_success());
    }

    #[test]
    fn duplicate_reads_as_success_without_clearing() {
        let view = OutcomeView::for_outcome(&SubmissionOutcome::AlreadyRegistered);
        assert_eq!(view.status.message, MSG_ALREADY_REGISTERED);
        assert_eq!(view.status.tone, Some(Tone::Success));
        assert_eq!(view.submitted_label, Some(LABEL_ALREADY_REGISTERED));
        assert!(!view.clears_form);
        assert!(view.is_success());
    }

    #[test]
    fn rejection_is_an_error_with_default_label() {
        let view = OutcomeView::for_outcome(&SubmissionOutcome::Rejected(StoreError::Transport(
            "timed out".to_string(),
        )));
        assert_eq!(view.status.message, MSG_REJECTED);
        assert_eq!(view.status.tone, Some(Tone::Error));
        assert_eq!(view.submitted_label, None);
        assert!(!view.is_success());
    }

    #[test]
    fn not_configured_tells_the_user() {
        let view = OutcomeView::for_outcome(&SubmissionOutcome::NotConfigured);
        assert_eq!(view.status.message, MSG_NOT_CONFIGURED);
        assert_eq!(view.status.tone, Some(Tone::Error));
        assert!(!view.is_success());
    }
}
