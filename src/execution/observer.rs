use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// Execution events emitted by the engine.
///
/// A successful run emits `RunStarted`, then a `ChunkStarted`/`ChunkFinished` pair per chunk,
/// then `RunFinished`. A failed run ends with `RunFailed` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ExecutionEvent {
    RunStarted { input_len: usize },
    ChunkStarted { start_index: usize, len: usize },
    ChunkFinished { accepted: usize },
    RunFailed { item_index: usize, elapsed: Duration },
    RunFinished {
        elapsed: Duration,
        metrics: ExecutionMetricsSnapshot,
    },
}

/// Observer hook for execution events.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// A simple stderr logger for execution events.
#[derive(Debug, Default)]
pub struct StdErrExecutionObserver;

impl ExecutionObserver for StdErrExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        match event {
            ExecutionEvent::RunFailed { item_index, elapsed } => {
                eprintln!("[pipeline][failed] item_index={item_index} elapsed={elapsed:?}")
            }
            ExecutionEvent::RunFinished { metrics, .. } => eprintln!("[pipeline][ok] {metrics}"),
            other => eprintln!("[pipeline] {other:?}"),
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ExecutionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ExecutionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ExecutionObserver for CompositeObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

#[derive(Serialize)]
struct LogLine<'a> {
    ts: u64,
    #[serde(flatten)]
    event: &'a ExecutionEvent,
}

/// Appends execution events to a local log file, one JSON object per line.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl ExecutionObserver for FileObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        let line = LogLine { ts: unix_ts(), event };
        if let Ok(json) = serde_json::to_string(&line) {
            self.append_line(&json);
        }
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

/// Real-time metrics for an execution run.
///
/// The engine updates these counters during execution; callers can snapshot them at any time.
/// All counters are reset when a new run begins.
pub struct ExecutionMetrics {
    run_id: AtomicU64,
    elapsed_ns: AtomicU64,

    items_processed: AtomicU64,
    items_accepted: AtomicU64,
    items_rejected: AtomicU64,
    chunks_started: AtomicU64,
    chunks_finished: AtomicU64,
    failures: AtomicU64,
}

impl ExecutionMetrics {
    pub fn new() -> Self {
        Self {
            run_id: AtomicU64::new(0),
            elapsed_ns: AtomicU64::new(0),
            items_processed: AtomicU64::new(0),
            items_accepted: AtomicU64::new(0),
            items_rejected: AtomicU64::new(0),
            chunks_started: AtomicU64::new(0),
            chunks_finished: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }
    }

    pub fn begin_run(&self) {
        let _ = self.run_id.fetch_add(1, Ordering::SeqCst);

        self.elapsed_ns.store(0, Ordering::SeqCst);
        self.items_processed.store(0, Ordering::SeqCst);
        self.items_accepted.store(0, Ordering::SeqCst);
        self.items_rejected.store(0, Ordering::SeqCst);
        self.chunks_started.store(0, Ordering::SeqCst);
        self.chunks_finished.store(0, Ordering::SeqCst);
        self.failures.store(0, Ordering::SeqCst);
    }

    pub fn end_run(&self, elapsed: Duration) {
        self.elapsed_ns
            .store(elapsed.as_nanos().min(u64::MAX as u128) as u64, Ordering::SeqCst);
    }

    pub fn on_item_processed(&self) {
        let _ = self.items_processed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_item_accepted(&self) {
        let _ = self.items_accepted.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_item_rejected(&self) {
        let _ = self.items_rejected.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_chunk_start(&self) {
        let _ = self.chunks_started.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_chunk_end(&self) {
        let _ = self.chunks_finished.fetch_add(1, Ordering::SeqCst);
    }

    pub fn on_failure(&self) {
        let _ = self.failures.fetch_add(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> ExecutionMetricsSnapshot {
        let elapsed_ns = self.elapsed_ns.load(Ordering::SeqCst);
        let elapsed = if elapsed_ns > 0 {
            Some(Duration::from_nanos(elapsed_ns))
        } else {
            None
        };

        ExecutionMetricsSnapshot {
            run_id: self.run_id.load(Ordering::SeqCst),
            elapsed,
            items_processed: self.items_processed.load(Ordering::SeqCst),
            items_accepted: self.items_accepted.load(Ordering::SeqCst),
            items_rejected: self.items_rejected.load(Ordering::SeqCst),
            chunks_started: self.chunks_started.load(Ordering::SeqCst),
            chunks_finished: self.chunks_finished.load(Ordering::SeqCst),
            failures: self.failures.load(Ordering::SeqCst),
        }
    }
}

impl Default for ExecutionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExecutionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ExecutionMetrics").field(&self.snapshot()).finish()
    }
}

/// Immutable snapshot of [`ExecutionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionMetricsSnapshot {
    pub run_id: u64,
    pub elapsed: Option<Duration>,
    pub items_processed: u64,
    pub items_accepted: u64,
    pub items_rejected: u64,
    pub chunks_started: u64,
    pub chunks_finished: u64,
    pub failures: u64,
}

impl fmt::Display for ExecutionMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "run_id={}, items_processed={}, accepted={}, rejected={}, chunks={}/{}, failures={}, elapsed={:?}",
            self.run_id,
            self.items_processed,
            self.items_accepted,
            self.items_rejected,
            self.chunks_finished,
            self.chunks_started,
            self.failures,
            self.elapsed
        )
    }
}
