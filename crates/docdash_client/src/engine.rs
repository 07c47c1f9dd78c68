use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Instant;

use docdash_logging::{dash_debug, dash_info};

use crate::{Backend, BatchId, EngineEvent, Generation};

/// Receives engine events on the worker's runtime threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Upload {
        batch_id: BatchId,
        index: usize,
        path: PathBuf,
        filename: String,
    },
    Query {
        generation: Generation,
        query: String,
    },
    RefreshStats,
}

/// Runs backend calls on a tokio runtime owned by a worker thread. Callers
/// enqueue from any thread; completions go to the [`EventSink`].
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(backend: Arc<dyn Backend>, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("docdash-engine")
            .build()?;

        thread::Builder::new()
            .name("docdash-engine-dispatch".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let backend = backend.clone();
                    let sink = sink.clone();
                    runtime.spawn(async move {
                        handle_command(backend.as_ref(), command, sink.as_ref()).await;
                    });
                }
                dash_debug!("Engine command channel closed; shutting down");
            })?;

        Ok(Self { cmd_tx })
    }

    pub fn upload(
        &self,
        batch_id: BatchId,
        index: usize,
        path: impl Into<PathBuf>,
        filename: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::Upload {
            batch_id,
            index,
            path: path.into(),
            filename: filename.into(),
        });
    }

    pub fn query(&self, generation: Generation, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Query {
            generation,
            query: query.into(),
        });
    }

    pub fn refresh_stats(&self) {
        let _ = self.cmd_tx.send(EngineCommand::RefreshStats);
    }
}

async fn handle_command(backend: &dyn Backend, command: EngineCommand, sink: &dyn EventSink) {
    match command {
        EngineCommand::Upload {
            batch_id,
            index,
            path,
            filename,
        } => {
            let result = backend.upload(&path, &filename).await;
            dash_info!(
                "Upload batch={} index={} file={} ok={}",
                batch_id,
                index,
                filename,
                result.is_ok()
            );
            sink.emit(EngineEvent::UploadCompleted {
                batch_id,
                index,
                result,
            });
        }
        EngineCommand::Query { generation, query } => {
            let started = Instant::now();
            let result = backend.query(&query).await;
            let elapsed = started.elapsed();
            dash_info!(
                "Query generation={} finished in {:.3}s ok={}",
                generation,
                elapsed.as_secs_f64(),
                result.is_ok()
            );
            sink.emit(EngineEvent::QueryCompleted {
                generation,
                query,
                elapsed,
                result,
            });
        }
        EngineCommand::RefreshStats => {
            sink.emit(EngineEvent::StatsLoaded(backend.stats().await));
        }
    }
}
