//! Run orchestration: turns validated arguments into a plan, then drives
//! the create, delete, or list batches and their reports.
mod batch;
mod plan;
mod runner;


pub use batch::{run_create_batch, run_delete_batch, run_list};
pub use plan::RunPlan;
pub use runner::{RunOutcome, execute_plan, run};
