//! Application status transitions and the counter changes each one implies.

use entity::ta_application::ApplicationStatus;

use crate::server::{data::module::CounterDelta, error::workflow::WorkflowError};

/// A coordinator's decision on a pending application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

/// Returns the status an application moves to when `decision` is applied.
///
/// `pending` is the only state that accepts a decision, both outcomes are terminal.
pub fn transition(
    current: ApplicationStatus,
    decision: Decision,
) -> Result<ApplicationStatus, WorkflowError> {
    match (current, decision) {
        (ApplicationStatus::Pending, Decision::Accept) => Ok(ApplicationStatus::Accepted),
        (ApplicationStatus::Pending, Decision::Reject) => Ok(ApplicationStatus::Rejected),
        (ApplicationStatus::Accepted | ApplicationStatus::Rejected, _) => {
            Err(WorkflowError::AlreadyProcessed(current))
        }
    }
}

/// Module counter changes recorded when a decision is made
pub fn decision_delta(decision: Decision) -> CounterDelta {
    match decision {
        Decision::Accept => CounterDelta {
            reviewed: 1,
            accepted: 1,
            ..Default::default()
        },
        // The position is released back to the pool
        Decision::Reject => CounterDelta {
            reviewed: 1,
            remaining: 1,
            ..Default::default()
        },
    }
}

/// Module counter changes that undo an application in `status` when it is deleted
pub fn withdrawal_delta(status: ApplicationStatus) -> CounterDelta {
    match status {
        ApplicationStatus::Pending => CounterDelta {
            applied: -1,
            remaining: 1,
            ..Default::default()
        },
        ApplicationStatus::Accepted => CounterDelta {
            applied: -1,
            remaining: 1,
            reviewed: -1,
            accepted: -1,
        },
        // Rejection already released the position
        ApplicationStatus::Rejected => CounterDelta {
            applied: -1,
            reviewed: -1,
            ..Default::default()
        },
    }
}

/// Whether deleting an application in `status` returns its weekly hours to the ledger
pub fn withdrawal_refunds_hours(status: ApplicationStatus) -> bool {
    match status {
        ApplicationStatus::Pending | ApplicationStatus::Accepted => true,
        // Refunded when it was rejected
        ApplicationStatus::Rejected => false,
    }
}
