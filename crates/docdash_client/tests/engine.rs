use std::path::Path;
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use docdash_client::{
    Backend, BackendError, ChannelEventSink, EngineEvent, EngineHandle, FailureKind,
    QueryResponse, StatsSnapshot, UploadReceipt,
};

/// Backend double that records the order of calls and answers instantly.
#[derive(Default)]
struct ScriptedBackend {
    calls: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl Backend for ScriptedBackend {
    async fn upload(&self, _path: &Path, filename: &str) -> Result<UploadReceipt, BackendError> {
        self.calls.lock().unwrap().push(format!("upload:{filename}"));
        if filename.ends_with(".txt") {
            Ok(UploadReceipt { chunks_count: 2 })
        } else {
            Err(BackendError {
                kind: FailureKind::HttpStatus(500),
                message: "Error processing document".to_string(),
            })
        }
    }

    async fn query(&self, query: &str) -> Result<QueryResponse, BackendError> {
        self.calls.lock().unwrap().push(format!("query:{query}"));
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(QueryResponse {
            success: true,
            answer: Some(format!("echo {query}")),
            sources: None,
            error: None,
        })
    }

    async fn stats(&self) -> Result<StatsSnapshot, BackendError> {
        self.calls.lock().unwrap().push("stats".to_string());
        Ok(StatsSnapshot {
            total_documents: 2,
            total_chunks: 9,
        })
    }
}

fn engine() -> (EngineHandle, mpsc::Receiver<EngineEvent>, Arc<ScriptedBackend>) {
    docdash_logging::initialize_for_tests();
    let backend = Arc::new(ScriptedBackend::default());
    let (tx, rx) = mpsc::channel();
    let handle = EngineHandle::new(backend.clone(), Arc::new(ChannelEventSink::new(tx)))
        .expect("engine starts");
    (handle, rx, backend)
}

fn next_event(rx: &mpsc::Receiver<EngineEvent>) -> EngineEvent {
    rx.recv_timeout(Duration::from_secs(5)).expect("engine event")
}

#[test]
fn upload_completion_echoes_batch_and_index() {
    let (engine, rx, backend) = engine();

    engine.upload(7, 1, "/tmp/ignored.txt", "ignored.txt");
    match next_event(&rx) {
        EngineEvent::UploadCompleted {
            batch_id,
            index,
            result,
        } => {
            assert_eq!((batch_id, index), (7, 1));
            assert_eq!(result.unwrap().chunks_count, 2);
        }
        other => panic!("unexpected event {other:?}"),
    }

    engine.upload(7, 2, "/tmp/ignored.pdf", "ignored.pdf");
    match next_event(&rx) {
        EngineEvent::UploadCompleted { result, .. } => {
            assert_eq!(result.unwrap_err().message, "Error processing document");
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(
        *backend.calls.lock().unwrap(),
        vec!["upload:ignored.txt", "upload:ignored.pdf"]
    );
}

#[test]
fn query_completion_measures_latency() {
    let (engine, rx, _backend) = engine();

    engine.query(3, "hello");
    match next_event(&rx) {
        EngineEvent::QueryCompleted {
            generation,
            query,
            elapsed,
            result,
        } => {
            assert_eq!(generation, 3);
            assert_eq!(query, "hello");
            assert!(elapsed >= Duration::from_millis(20));
            assert_eq!(result.unwrap().answer.as_deref(), Some("echo hello"));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn stats_refresh_reports_snapshot() {
    let (engine, rx, _backend) = engine();

    engine.refresh_stats();
    assert_eq!(
        next_event(&rx),
        EngineEvent::StatsLoaded(Ok(StatsSnapshot {
            total_documents: 2,
            total_chunks: 9,
        }))
    );
}
