//! Navigation hand-off
//!
//! [`BookingFlow`] drives one form session and forwards its end to a
//! [`Navigator`]: a submitted draft goes to `proceed`, an abandoned one is
//! dropped and `go_back` is called. Once either happens the session is over
//! and further commands are ignored.

use chrono::NaiveDate;

use super::draft::ReservationDraft;
use super::form::{BookingPolicy, FormCommand, ReservationForm, Submission};

/// Receives the end of a booking session
///
/// Implemented by whatever owns screen navigation. `proceed` is
/// fire-and-forget: the flow does not look at what happens next.
pub trait Navigator {
    /// Advance to the next step with a finalized draft
    fn proceed(&mut self, draft: ReservationDraft);

    /// Return to the previous screen; the draft is already gone
    fn go_back(&mut self);
}

/// What a submit attempt did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft handed to the navigator; the session has ended
    HandedOff,
    /// Submission not allowed; nothing was handed off and the session continues
    Blocked,
    /// The session had already ended
    Inactive,
}

/// A single booking session bound to a navigator
pub struct BookingFlow<N: Navigator> {
    form: Option<ReservationForm>,
    navigator: N,
}

impl<N: Navigator> BookingFlow<N> {
    /// Mount the booking form with a blank draft dated `today`
    pub fn start(navigator: N, today: NaiveDate, policy: BookingPolicy) -> Self {
        tracing::debug!(%today, date_policy = %policy.dates, "Booking session started");
        Self {
            form: Some(ReservationForm::new(today, policy)),
            navigator,
        }
    }

    /// Apply a form command; ignored once the session has ended
    pub fn dispatch(&mut self, command: FormCommand) {
        match self.form.take() {
            Some(form) => self.form = Some(form.apply(command)),
            None => tracing::debug!(?command, "Ignored command for ended booking session"),
        }
    }

    /// Submit the current draft
    pub fn submit(&mut self) -> SubmitOutcome {
        let Some(form) = self.form.take() else {
            return SubmitOutcome::Inactive;
        };

        match form.submit() {
            Submission::HandedOff(draft) => {
                tracing::info!(
                    check_in = %draft.check_in,
                    check_out = %draft.check_out,
                    "Reservation handed off"
                );
                self.navigator.proceed(draft);
                SubmitOutcome::HandedOff
            }
            Submission::Blocked(form) => {
                self.form = Some(form);
                SubmitOutcome::Blocked
            }
        }
    }

    /// Abandon the session, discarding the draft unconditionally
    pub fn go_back(&mut self) {
        if self.form.take().is_some() {
            tracing::info!("Booking abandoned, draft discarded");
            self.navigator.go_back();
        }
    }

    /// Read model of the live session; `None` once it has ended
    pub fn form(&self) -> Option<&ReservationForm> {
        self.form.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.form.is_some()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }
}

/// Navigator that records every call, for tests and dry runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNavigator {
    pub proceeded: Vec<ReservationDraft>,
    pub back_count: usize,
}

impl Navigator for RecordingNavigator {
    fn proceed(&mut self, draft: ReservationDraft) {
        self.proceeded.push(draft);
    }

    fn go_back(&mut self) {
        self.back_count += 1;
    }
}
