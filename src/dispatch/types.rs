use std::fmt;
use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Create,
    Delete,
    /// Tags listing calls. Never carried by a descriptor.
    List,
}

impl OperationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::List => "list",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Delete => "Delete",
            Self::List => "List",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Action {
    Create(serde_json::Value),
    Delete,
}

/// What a descriptor asks the executor to do, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperationRequest<'desc> {
    Create { payload: &'desc serde_json::Value },
    Delete,
}

/// One operation to perform. Immutable once built.
///
/// Only creates and deletes are dispatched; listing goes through
/// [`OperationExecutor::list_targets`](super::OperationExecutor::list_targets)
/// and is tagged [`OperationKind::List`] where it is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDescriptor {
    target: String,
    action: Action,
}

impl OperationDescriptor {
    #[must_use]
    pub const fn create(target: String, payload: serde_json::Value) -> Self {
        Self {
            target,
            action: Action::Create(payload),
        }
    }

    #[must_use]
    pub const fn delete(target: String) -> Self {
        Self {
            target,
            action: Action::Delete,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self.action {
            Action::Create(_) => OperationKind::Create,
            Action::Delete => OperationKind::Delete,
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub const fn payload(&self) -> Option<&serde_json::Value> {
        match &self.action {
            Action::Create(payload) => Some(payload),
            Action::Delete => None,
        }
    }

    #[must_use]
    pub const fn request(&self) -> OperationRequest<'_> {
        match &self.action {
            Action::Create(payload) => OperationRequest::Create { payload },
            Action::Delete => OperationRequest::Delete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No response was received.
    Transport,
    /// A response arrived with an unexpected status.
    Status(u16),
    /// The operation exceeded its time bound.
    Timeout,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl OperationFailure {
    #[must_use]
    pub const fn transport(message: String) -> Self {
        Self {
            kind: FailureKind::Transport,
            message,
        }
    }

    #[must_use]
    pub const fn status(status: u16, message: String) -> Self {
        Self {
            kind: FailureKind::Status(status),
            message,
        }
    }

    #[must_use]
    pub fn timeout(limit: Duration) -> Self {
        Self {
            kind: FailureKind::Timeout,
            message: format!("Timed out after {:.2}s", limit.as_secs_f64()),
        }
    }
}

impl fmt::Display for OperationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::Status(status) => {
                write!(f, "Status code: {}, Error: {}", status, self.message)
            }
            FailureKind::Transport => {
                write!(f, "Status code: No response, Error: {}", self.message)
            }
            FailureKind::Timeout => f.write_str(&self.message),
        }
    }
}

/// What an executor reports for a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub status: Option<u16>,
    pub failure: Option<OperationFailure>,
}

impl ExecutionOutcome {
    #[must_use]
    pub const fn success(status: u16) -> Self {
        Self {
            status: Some(status),
            failure: None,
        }
    }

    #[must_use]
    pub const fn failed(failure: OperationFailure) -> Self {
        let status = match failure.kind {
            FailureKind::Status(status) => Some(status),
            FailureKind::Transport | FailureKind::Timeout => None,
        };
        Self {
            status,
            failure: Some(failure),
        }
    }
}

/// Result of running one descriptor, timed by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeRecord {
    pub kind: OperationKind,
    pub target: String,
    pub duration: Duration,
    pub status: Option<u16>,
    pub failure: Option<OperationFailure>,
}

impl OutcomeRecord {
    pub(crate) fn from_outcome(
        descriptor: &OperationDescriptor,
        duration: Duration,
        outcome: ExecutionOutcome,
    ) -> Self {
        Self {
            kind: descriptor.kind(),
            target: descriptor.target().to_owned(),
            duration,
            status: outcome.status,
            failure: outcome.failure,
        }
    }

    pub(crate) fn timed_out(descriptor: &OperationDescriptor, limit: Duration) -> Self {
        Self {
            kind: descriptor.kind(),
            target: descriptor.target().to_owned(),
            duration: limit,
            status: None,
            failure: Some(OperationFailure::timeout(limit)),
        }
    }

    pub(crate) fn aborted(descriptor: &OperationDescriptor) -> Self {
        Self {
            kind: descriptor.kind(),
            target: descriptor.target().to_owned(),
            duration: Duration::ZERO,
            status: None,
            failure: Some(OperationFailure::transport(
                "dispatch worker stopped before recording a result".to_owned(),
            )),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}
