//! `pipeline-processing` is a small library for running filter-then-transform pipelines over
//! in-memory sequences.
//!
//! The primary entrypoint is [`processing::process`], which keeps the elements accepted by a
//! predicate and maps each of them through a transform, in input order, in a single pass.
//!
//! ## Quick example
//!
//! ```rust
//! use pipeline_processing::processing::process;
//!
//! let data = vec![1, 2, 3, 4, 5];
//! let out = process(&data, |x| x % 2 == 0, |x| x * 10);
//! assert_eq!(out, vec![20, 40]);
//! ```
//!
//! ## Fallible callbacks
//!
//! When either callback can fail, use [`processing::try_process`]. The first error aborts the
//! pass and is returned exactly as the callback produced it; no partial output is returned.
//!
//! ```rust
//! use pipeline_processing::processing::try_process;
//!
//! let data = vec!["1", "2", "x", "4"];
//! let out: Result<Vec<i64>, std::num::ParseIntError> =
//!     try_process(&data, |_| Ok(true), |s| s.parse::<i64>());
//! assert!(out.is_err());
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the pure pipeline functions (filter/map/process)
//! - [`execution`]: an engine that runs the same pipeline with observer events and metrics
//! - [`error`]: error types used by the execution engine
//!
//! ## Observed execution
//!
//! ```rust
//! use std::sync::Arc;
//! use pipeline_processing::execution::{ExecutionEngine, ExecutionOptions, StdErrExecutionObserver};
//!
//! # fn main() -> Result<(), pipeline_processing::ExecutionError> {
//! let engine = ExecutionEngine::new(ExecutionOptions {
//!     chunk_size: 2,
//!     ..Default::default()
//! })?
//! .with_observer(Arc::new(StdErrExecutionObserver));
//!
//! let words = vec!["a", "bb", "ccc"];
//! let out = engine.process(&words, |s| s.len() > 1, |s| s.to_uppercase());
//! assert_eq!(out, vec!["BB".to_string(), "CCC".to_string()]);
//! assert_eq!(engine.metrics().snapshot().items_accepted, 2);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod execution;
pub mod processing;

pub use error::{ExecutionError, ExecutionResult};
