//! Execution engine for running processing pipelines with progress reporting.
//!
//! This module sits "above" [`crate::processing`] and provides:
//!
//! - Chunked progress events for the fused filter-then-transform pipeline
//! - Real-time metrics + observer hooks for monitoring
//!
//! Evaluation is always sequential; chunking only controls how often progress is reported.
//! Results, ordering and failure behavior are identical to [`crate::processing::process`] and
//! [`crate::processing::try_process`].

mod observer;

use std::convert::Infallible;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

use crate::error::{ExecutionError, ExecutionResult};
use crate::processing;

pub use observer::{
    CompositeObserver, ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot, ExecutionObserver,
    FileObserver, StdErrExecutionObserver,
};

/// Configuration for the [`ExecutionEngine`].
#[derive(Clone)]
pub struct ExecutionOptions {
    /// Number of input elements per progress chunk.
    pub chunk_size: usize,
    /// Optional observer for execution events.
    pub observer: Option<Arc<dyn ExecutionObserver>>,
}

impl fmt::Debug for ExecutionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionOptions")
            .field("chunk_size", &self.chunk_size)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            chunk_size: 4_096,
            observer: None,
        }
    }
}

/// An observable runner for filter-then-transform pipelines.
pub struct ExecutionEngine {
    opts: ExecutionOptions,
    metrics: Arc<ExecutionMetrics>,
}

impl fmt::Debug for ExecutionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionEngine")
            .field("opts", &self.opts)
            .field("metrics", &self.metrics.snapshot())
            .finish()
    }
}

impl ExecutionEngine {
    /// Create a new engine with the given options.
    ///
    /// Returns [`ExecutionError::InvalidOptions`] if `chunk_size == 0`.
    pub fn new(opts: ExecutionOptions) -> ExecutionResult<Self> {
        if opts.chunk_size == 0 {
            return Err(ExecutionError::InvalidOptions {
                message: "chunk_size must be > 0".to_string(),
            });
        }

        Ok(Self {
            opts,
            metrics: Arc::new(ExecutionMetrics::new()),
        })
    }

    /// Attach an observer for execution events, replacing any configured one.
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        self.opts.observer = Some(observer);
        self
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Run [`processing::process`] with progress events and metrics.
    pub fn process<T, U, P, F>(&self, data: &[T], mut filter_func: P, mut transform_func: F) -> Vec<U>
    where
        P: FnMut(&T) -> bool,
        F: FnMut(&T) -> U,
    {
        let res = self.try_process(
            data,
            |item| Ok::<_, Infallible>(filter_func(item)),
            |item| Ok(transform_func(item)),
        );
        match res {
            Ok(out) => out,
            Err(never) => match never {},
        }
    }

    /// Run [`processing::try_process`] with progress events and metrics.
    ///
    /// On the first callback failure the engine emits [`ExecutionEvent::RunFailed`] with the
    /// index of the offending element and returns the callback's error unchanged.
    pub fn try_process<T, U, E, P, F>(
        &self,
        data: &[T],
        mut filter_func: P,
        mut transform_func: F,
    ) -> Result<Vec<U>, E>
    where
        P: FnMut(&T) -> Result<bool, E>,
        F: FnMut(&T) -> Result<U, E>,
    {
        let start = Instant::now();
        self.metrics.begin_run();
        self.emit(ExecutionEvent::RunStarted {
            input_len: data.len(),
        });

        let mut out = Vec::new();
        let mut visited = 0usize;

        for range in chunk_ranges(data.len(), self.opts.chunk_size) {
            self.metrics.on_chunk_start();
            self.emit(ExecutionEvent::ChunkStarted {
                start_index: range.start,
                len: range.len(),
            });

            let chunk = processing::try_process(
                &data[range],
                |item| {
                    visited += 1;
                    self.metrics.on_item_processed();
                    let keep = filter_func(item);
                    if matches!(keep, Ok(false)) {
                        self.metrics.on_item_rejected();
                    }
                    keep
                },
                |item| {
                    let value = transform_func(item);
                    if value.is_ok() {
                        self.metrics.on_item_accepted();
                    }
                    value
                },
            );

            match chunk {
                Ok(mut values) => {
                    let accepted = values.len();
                    out.append(&mut values);
                    self.emit(ExecutionEvent::ChunkFinished { accepted });
                    self.metrics.on_chunk_end();
                }
                Err(err) => {
                    self.metrics.on_failure();
                    self.metrics.end_run(start.elapsed());
                    self.emit(ExecutionEvent::RunFailed {
                        item_index: visited.saturating_sub(1),
                        elapsed: start.elapsed(),
                    });
                    return Err(err);
                }
            }
        }

        self.metrics.end_run(start.elapsed());
        self.emit(ExecutionEvent::RunFinished {
            elapsed: start.elapsed(),
            metrics: self.metrics.snapshot(),
        });

        Ok(out)
    }

    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.opts.observer {
            obs.on_event(&event);
        }
    }
}

fn chunk_ranges(len: usize, chunk_size: usize) -> Vec<Range<usize>> {
    if len == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(len.div_ceil(chunk_size));
    let mut start = 0usize;
    while start < len {
        let end = (start + chunk_size).min(len);
        out.push(start..end);
        start = end;
    }
    out
}
