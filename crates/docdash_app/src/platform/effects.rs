use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use docdash_client::{
    ClientSettings, EngineEvent, EngineHandle, EventSink, QueryResponse, ReqwestBackend,
};
use docdash_core::{Effect, Msg, QueryResult, SourceRef};
use docdash_logging::{dash_debug, dash_info, dash_warn};

use super::app::AppEvent;
use super::persistence::PreferenceStore;

/// Executes effects emitted by `update` and feeds results back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    preferences: PreferenceStore,
    events: mpsc::Sender<AppEvent>,
}

impl EffectRunner {
    pub fn new(
        settings: ClientSettings,
        state_dir: PathBuf,
        events: mpsc::Sender<AppEvent>,
    ) -> anyhow::Result<Self> {
        let backend = ReqwestBackend::new(settings).context("building HTTP client")?;
        let sink = MsgSink {
            events: events.clone(),
        };
        let engine = EngineHandle::new(Arc::new(backend), Arc::new(sink))
            .context("starting backend engine")?;
        Ok(Self {
            engine,
            preferences: PreferenceStore::new(state_dir),
            events,
        })
    }

    pub fn load_dark_mode(&self) -> bool {
        self.preferences.load_dark_mode()
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RefreshStats => {
                    dash_debug!("RefreshStats");
                    self.engine.refresh_stats();
                }
                Effect::UploadFile {
                    batch_id,
                    index,
                    file,
                } => {
                    dash_info!(
                        "UploadFile batch={} index={} name={}",
                        batch_id,
                        index,
                        file.name
                    );
                    self.engine.upload(batch_id, index, file.path, file.name);
                }
                Effect::SubmitQuery { generation, query } => {
                    dash_info!(
                        "SubmitQuery generation={} query_len={}",
                        generation,
                        query.len()
                    );
                    self.engine.query(generation, query);
                }
                Effect::ScheduleDismiss { id, after } => {
                    let events = self.events.clone();
                    thread::spawn(move || {
                        thread::sleep(after);
                        let _ = events.send(AppEvent::Msg(Msg::NotificationExpired(id)));
                    });
                }
                Effect::PersistTheme { dark_mode } => {
                    self.preferences.save_dark_mode(dark_mode);
                }
            }
        }
    }
}

struct MsgSink {
    events: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.events.send(AppEvent::Msg(engine_event_to_msg(event)));
    }
}

fn engine_event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::UploadCompleted {
            batch_id,
            index,
            result,
        } => Msg::UploadFinished {
            batch_id,
            index,
            result: match result {
                Ok(receipt) => Ok(receipt.chunks_count),
                Err(err) => {
                    dash_warn!("Upload {}/{} failed: {}", batch_id, index, err);
                    Err(err.message)
                }
            },
        },
        EngineEvent::QueryCompleted {
            generation,
            query,
            elapsed,
            result,
        } => match result {
            Ok(response) => Msg::QueryAnswered {
                generation,
                query,
                result: query_result(response),
                elapsed,
            },
            Err(err) => {
                dash_warn!("Query generation={} failed: {}", generation, err);
                Msg::QueryTransportFailed {
                    generation,
                    message: err.message,
                }
            }
        },
        EngineEvent::StatsLoaded(Ok(snapshot)) => Msg::StatsLoaded {
            total_documents: snapshot.total_documents,
            total_chunks: snapshot.total_chunks,
        },
        EngineEvent::StatsLoaded(Err(err)) => Msg::StatsFailed(err.to_string()),
    }
}

fn query_result(response: QueryResponse) -> QueryResult {
    if !response.success {
        return QueryResult::Failed {
            error_message: response
                .error
                .unwrap_or_else(|| "Unknown error".to_string()),
        };
    }
    QueryResult::Answered {
        answer: response.answer.unwrap_or_default(),
        sources: response
            .sources
            .unwrap_or_default()
            .into_iter()
            .map(|source| SourceRef {
                document_id: source.document_id,
                relevance_score: source.score,
                text_preview: source.text_preview,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use docdash_client::{BackendError, FailureKind, SourceWire, StatsSnapshot, UploadReceipt};

    use super::*;

    #[test]
    fn upload_events_carry_chunks_or_message() {
        let ok = engine_event_to_msg(EngineEvent::UploadCompleted {
            batch_id: 2,
            index: 0,
            result: Ok(UploadReceipt { chunks_count: 5 }),
        });
        assert_eq!(
            ok,
            Msg::UploadFinished {
                batch_id: 2,
                index: 0,
                result: Ok(5)
            }
        );

        let failed = engine_event_to_msg(EngineEvent::UploadCompleted {
            batch_id: 2,
            index: 1,
            result: Err(BackendError {
                kind: FailureKind::HttpStatus(400),
                message: "Unsupported file type".to_string(),
            }),
        });
        assert_eq!(
            failed,
            Msg::UploadFinished {
                batch_id: 2,
                index: 1,
                result: Err("Unsupported file type".to_string())
            }
        );
    }

    #[test]
    fn answered_query_keeps_sources_in_order() {
        let msg = engine_event_to_msg(EngineEvent::QueryCompleted {
            generation: 4,
            query: "q".to_string(),
            elapsed: Duration::from_millis(1200),
            result: Ok(QueryResponse {
                success: true,
                answer: Some("A".to_string()),
                sources: Some(vec![
                    SourceWire {
                        document_id: "b.txt".to_string(),
                        score: 0.4,
                        text_preview: "second".to_string(),
                    },
                    SourceWire {
                        document_id: "a.pdf".to_string(),
                        score: 0.9,
                        text_preview: "first".to_string(),
                    },
                ]),
                error: None,
            }),
        });

        let Msg::QueryAnswered { result, .. } = msg else {
            panic!("expected QueryAnswered, got {msg:?}");
        };
        let QueryResult::Answered { answer, sources } = result else {
            panic!("expected an answer");
        };
        assert_eq!(answer, "A");
        let ids: Vec<_> = sources.iter().map(|s| s.document_id.as_str()).collect();
        assert_eq!(ids, ["b.txt", "a.pdf"]);
    }

    #[test]
    fn unsuccessful_reply_without_error_is_unknown() {
        let msg = engine_event_to_msg(EngineEvent::QueryCompleted {
            generation: 1,
            query: "q".to_string(),
            elapsed: Duration::ZERO,
            result: Ok(QueryResponse {
                success: false,
                answer: Some("ignored".to_string()),
                sources: None,
                error: None,
            }),
        });
        let Msg::QueryAnswered { result, .. } = msg else {
            panic!("expected QueryAnswered, got {msg:?}");
        };
        assert_eq!(
            result,
            QueryResult::Failed {
                error_message: "Unknown error".to_string()
            }
        );
    }

    #[test]
    fn transport_failure_and_stats_mapping() {
        let msg = engine_event_to_msg(EngineEvent::QueryCompleted {
            generation: 9,
            query: "q".to_string(),
            elapsed: Duration::ZERO,
            result: Err(BackendError {
                kind: FailureKind::Network,
                message: "connection refused".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::QueryTransportFailed {
                generation: 9,
                message: "connection refused".to_string()
            }
        );

        let stats = engine_event_to_msg(EngineEvent::StatsLoaded(Ok(StatsSnapshot {
            total_documents: 3,
            total_chunks: 11,
        })));
        assert_eq!(
            stats,
            Msg::StatsLoaded {
                total_documents: 3,
                total_chunks: 11
            }
        );

        let failed = engine_event_to_msg(EngineEvent::StatsLoaded(Err(BackendError {
            kind: FailureKind::HttpStatus(500),
            message: "boom".to_string(),
        })));
        assert!(matches!(failed, Msg::StatsFailed(_)));
    }
}
