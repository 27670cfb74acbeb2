//! Operation model and the bounded-concurrency dispatcher.
//!
//! A batch is a list of [`OperationDescriptor`]s. The [`Dispatcher`] runs each
//! one through an [`OperationExecutor`] exactly once, either in input order or
//! through a fixed pool of worker tasks, and returns one [`OutcomeRecord`] per
//! descriptor. Individual failures never stop the batch.
mod dispatcher;
mod executor;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatcher::{DispatchSettings, Dispatcher};
pub use executor::OperationExecutor;
pub use types::{
    ExecutionOutcome, FailureKind, OperationDescriptor, OperationFailure, OperationKind,
    OperationRequest, OutcomeRecord,
};
