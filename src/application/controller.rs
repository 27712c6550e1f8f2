//! Form controller: owns the entered values, their validation errors and the
//! submission lifecycle.
//!
//! Submission is `Idle -> Submitting -> Idle`. A valid submit schedules the
//! hand-off to the gateway for `now + gateway.delay()`; [`FormController::poll`]
//! completes it once that instant has passed. Time is always passed in, so the
//! controller never sleeps.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::notification::Notification;
use crate::domain::{compute_progress, validate, ApplicationData, Field, FieldErrors, Progress};
use crate::infrastructure::{SimulatedGateway, SubmissionGateway};

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    Submitting {
        ready_at: Instant,
        payload: ApplicationData,
    },
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed for this many fields; nothing was sent.
    Rejected(usize),
    /// The application will be delivered at `ready_at`.
    Started { ready_at: Instant },
    /// A submission is already in flight; the call was ignored.
    InFlight,
}

#[derive(Debug)]
pub struct FormController {
    fields: ApplicationData,
    errors: FieldErrors,
    phase: Phase,
    gateway: Box<dyn SubmissionGateway>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(Box::new(SimulatedGateway::default()))
    }
}

impl FormController {
    pub fn new(gateway: Box<dyn SubmissionGateway>) -> Self {
        Self {
            fields: ApplicationData::default(),
            errors: FieldErrors::new(),
            phase: Phase::Idle,
            gateway,
        }
    }

    pub fn fields(&self) -> &ApplicationData {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn progress(&self) -> Progress {
        compute_progress(&self.fields)
    }

    /// Sets a field's value and clears that field's error, if any.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
        if self.errors.remove(field).is_some() {
            debug!(%field, "cleared validation error after edit");
        }
    }

    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.submitting() {
            return SubmitOutcome::InFlight;
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            let count = errors.len();
            info!(invalid_fields = count, "submit rejected by validation");
            self.errors = errors;
            return SubmitOutcome::Rejected(count);
        }

        self.errors.clear();
        let ready_at = now + self.gateway.delay();
        self.phase = Phase::Submitting {
            ready_at,
            payload: self.fields.clone(),
        };
        info!(delay_ms = self.gateway.delay().as_millis() as u64, "submission started");
        SubmitOutcome::Started { ready_at }
    }

    /// Finishes an in-flight submission once its delay has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Notification> {
        let ready = matches!(&self.phase, Phase::Submitting { ready_at, .. } if now >= *ready_at);
        if !ready {
            return None;
        }

        let Phase::Submitting { payload, .. } = std::mem::replace(&mut self.phase, Phase::Idle)
        else {
            return None;
        };

        match self.gateway.deliver(&payload) {
            Ok(receipt) => {
                info!(reference = receipt.reference, "submission complete, form reset");
                self.fields = ApplicationData::default();
                self.errors.clear();
                Some(Notification::submitted())
            }
            Err(err) => {
                warn!(error = %err, "submission failed, keeping entered data");
                Some(Notification::submission_failed(&err))
            }
        }
    }
}
