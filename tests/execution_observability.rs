use std::sync::{Arc, Mutex};

use pipeline_processing::execution::{
    CompositeObserver, ExecutionEngine, ExecutionEvent, ExecutionObserver, ExecutionOptions, FileObserver,
    StdErrExecutionObserver,
};

#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<ExecutionEvent>>,
}

impl ExecutionObserver for RecordingObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

fn options_with(observer: Arc<dyn ExecutionObserver>) -> ExecutionOptions {
    ExecutionOptions {
        chunk_size: 2,
        observer: Some(observer),
    }
}

#[test]
fn composite_observer_fans_out_to_every_observer() {
    let a = Arc::new(RecordingObserver::default());
    let b = Arc::new(RecordingObserver::default());
    let observers: Vec<Arc<dyn ExecutionObserver>> = vec![a.clone(), b.clone(), Arc::new(StdErrExecutionObserver)];
    let composite = CompositeObserver::new(observers);
    let engine = ExecutionEngine::new(options_with(Arc::new(composite))).unwrap();

    let out = engine.process(&["a", "bb", "ccc"], |s| s.len() > 1, |s| s.to_uppercase());
    assert_eq!(out, vec!["BB".to_string(), "CCC".to_string()]);

    let a_events = a.events.lock().unwrap().clone();
    let b_events = b.events.lock().unwrap().clone();
    assert_eq!(a_events, b_events);
    assert_eq!(a_events.first(), Some(&ExecutionEvent::RunStarted { input_len: 3 }));
    assert!(matches!(a_events.last(), Some(ExecutionEvent::RunFinished { .. })));
}

#[test]
fn file_observer_appends_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("pipeline.log");
    let engine = ExecutionEngine::new(options_with(Arc::new(FileObserver::new(&log_path)))).unwrap();

    let out = engine.process(&[1, 2, 3], |x| *x != 2, |x| x * 2);
    assert_eq!(out, vec![2, 6]);

    let contents = std::fs::read_to_string(&log_path).unwrap();
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    // run_started, 2 x (chunk_started, chunk_finished), run_finished
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0]["event"], "run_started");
    assert_eq!(lines[0]["input_len"], 3);
    assert!(lines[0]["ts"].as_u64().is_some());
    assert_eq!(lines[2]["event"], "chunk_finished");
    assert_eq!(lines[2]["accepted"], 1);
    assert_eq!(lines[5]["event"], "run_finished");
    assert_eq!(lines[5]["metrics"]["items_accepted"], 2);
    assert_eq!(lines[5]["metrics"]["items_rejected"], 1);
}

#[test]
fn file_observer_ignores_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be opened for appending.
    let engine = ExecutionEngine::new(options_with(Arc::new(FileObserver::new(dir.path())))).unwrap();
    let out = engine.process(&[1, 2], |_| true, |x| *x);
    assert_eq!(out, vec![1, 2]);
}

#[test]
fn failed_run_is_logged_and_error_returned_unchanged() {
    let obs = Arc::new(RecordingObserver::default());
    let engine = ExecutionEngine::new(options_with(obs.clone())).unwrap();

    let out: Result<Vec<i64>, std::num::ParseIntError> =
        engine.try_process(&["10", "20", "oops", "40"], |_| Ok(true), |s| s.parse::<i64>());
    let err = out.unwrap_err();
    assert_eq!(err, "oops".parse::<i64>().unwrap_err());

    let events = obs.events.lock().unwrap().clone();
    assert!(matches!(
        events.last(),
        Some(ExecutionEvent::RunFailed { item_index: 2, .. })
    ));
    assert_eq!(engine.metrics().snapshot().failures, 1);
}

#[test]
fn metrics_reset_between_runs() {
    let obs = Arc::new(RecordingObserver::default());
    let engine = ExecutionEngine::new(options_with(obs)).unwrap();
    let metrics = engine.metrics();

    let _: Result<Vec<u8>, &str> = engine.try_process(&[1u8], |_| Err("nope"), |x| Ok(*x));
    assert_eq!(metrics.snapshot().failures, 1);

    let _ = engine.process(&[1u8, 2, 3], |_| true, |x| *x);
    let snap = metrics.snapshot();
    assert_eq!(snap.run_id, 2);
    assert_eq!(snap.failures, 0);
    assert_eq!(snap.items_accepted, 3);
}
