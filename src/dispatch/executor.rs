use async_trait::async_trait;

use crate::error::AppResult;

use super::types::{ExecutionOutcome, OperationDescriptor};

/// Performs the network call behind a descriptor.
///
/// Implementations are shared across every worker of a parallel batch, so
/// they must be safe for concurrent use. Retries, if any, happen inside
/// [`execute`](OperationExecutor::execute) and are invisible to the caller
/// apart from the time they take.
#[async_trait]
pub trait OperationExecutor: Send + Sync {
    /// Runs one operation. Failures are reported in the outcome, never as a
    /// panic or an error return.
    async fn execute(&self, descriptor: &OperationDescriptor) -> ExecutionOutcome;

    /// Lists the identifiers of every resource currently on the server.
    ///
    /// # Errors
    ///
    /// Returns an error when the listing request fails or cannot be decoded.
    async fn list_targets(&self) -> AppResult<Vec<String>>;
}
