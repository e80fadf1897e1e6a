//! Order submission state machine.
//!
//! `Idle -> Submitting -> {Succeeded, Failed} -> Idle`. Only one order can be
//! in flight at a time; the state itself is the lock.

use crate::checkout::OrderConfirmation;
use crate::error::{CheckoutError, OrderSubmitError};
use tracing::debug;

/// Where an order submission stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// Request sent, awaiting the answer. Form and submit are locked.
    Submitting,
    /// Order placed; waiting to be acknowledged.
    Succeeded(OrderConfirmation),
    /// Order failed; waiting to be acknowledged.
    Failed(OrderSubmitError),
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded(_) => "succeeded",
            SubmissionState::Failed(_) => "failed",
        }
    }

    /// Check if this is `Succeeded` or `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded(_) | SubmissionState::Failed(_)
        )
    }
}

/// Guards the one-order-at-a-time rule.
#[derive(Debug, Clone, Default)]
pub struct OrderSubmitter {
    state: SubmissionState,
}

impl OrderSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Check if an order is in flight.
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Move to `Submitting`.
    ///
    /// A terminal state left unacknowledged is acknowledged implicitly, so a
    /// failed attempt never blocks a retry.
    pub fn begin(&mut self) -> Result<(), CheckoutError> {
        if self.is_submitting() {
            return Err(CheckoutError::AlreadySubmitting);
        }
        self.transition(SubmissionState::Submitting);
        Ok(())
    }

    /// Move `Submitting -> Succeeded`.
    pub fn succeed(&mut self, confirmation: OrderConfirmation) -> Result<(), CheckoutError> {
        self.finish(SubmissionState::Succeeded(confirmation))
    }

    /// Move `Submitting -> Failed`.
    pub fn fail(&mut self, error: OrderSubmitError) -> Result<(), CheckoutError> {
        self.finish(SubmissionState::Failed(error))
    }

    fn finish(&mut self, next: SubmissionState) -> Result<(), CheckoutError> {
        if !self.is_submitting() {
            return Err(CheckoutError::InvalidTransition {
                from: self.state.as_str(),
                to: next.as_str(),
            });
        }
        self.transition(next);
        Ok(())
    }

    /// Return to `Idle` from a terminal state, handing back the outcome.
    ///
    /// Does nothing while idle or submitting.
    pub fn acknowledge(&mut self) -> Option<SubmissionState> {
        if !self.state.is_terminal() {
            return None;
        }
        let outcome = std::mem::take(&mut self.state);
        debug!(from = outcome.as_str(), "submission acknowledged");
        Some(outcome)
    }

    /// Abandon an in-flight submission without recording an outcome.
    pub fn cancel(&mut self) {
        if self.is_submitting() {
            self.transition(SubmissionState::Idle);
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!(from = self.state.as_str(), to = next.as_str(), "submission transition");
        self.state = next;
    }
}
