//! Shared utilities

pub mod process;

#[cfg(test)]
pub(crate) mod fake_executor;

pub use process::{ExecutionResult, Executor, ProcessError, SystemExecutor};
