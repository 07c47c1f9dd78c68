use docdash_logging::{dash_debug, dash_info, dash_warn};

use crate::query::RenderedQuery;
use crate::upload::{filter_supported, UploadStep};
use crate::{ActivityKind, AppState, Effect, Msg, QueryResult, Section, Severity};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started { dark_mode } => {
            state.set_dark_mode(dark_mode);
            state.set_section(Section::Dashboard);
            state.mark_dirty();
            vec![Effect::RefreshStats]
        }
        Msg::SectionSelected(section) => {
            if section != Section::Search && state.query_mut().invalidate() {
                dash_debug!("Left search while a query was in flight; its response is now stale");
            }
            state.set_section(section);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ThemeToggled => {
            let dark_mode = !state.is_dark_mode();
            state.set_dark_mode(dark_mode);
            let theme = if dark_mode { "dark" } else { "light" };
            vec![
                Effect::PersistTheme { dark_mode },
                state.notify(format!("Switched to {theme} theme"), Severity::Success),
            ]
        }
        Msg::FilterSelected(filter) => {
            if state.active_filter() != Some(filter) {
                state.set_active_filter(filter);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FilesSelected(files) => start_upload_batch(&mut state, files),
        Msg::UploadFinished {
            batch_id,
            index,
            result,
        } => {
            let (outcome, step) = state.upload_mut().complete(batch_id, index, result);
            let mut effects = Vec::new();
            if let Some(outcome) = outcome {
                if outcome.is_success() {
                    state
                        .stats_mut()
                        .record_activity(ActivityKind::Upload, format!("Uploaded {}", outcome.filename()));
                } else {
                    dash_warn!("Upload of {} failed", outcome.filename());
                }
                state.mark_dirty();
            }
            match step {
                UploadStep::Next {
                    batch_id,
                    index,
                    file,
                } => effects.push(Effect::UploadFile {
                    batch_id,
                    index,
                    file,
                }),
                UploadStep::Finished => {
                    dash_info!(
                        "Upload batch {} finished with {} outcome(s)",
                        batch_id,
                        state.upload().outcomes().len()
                    );
                    effects.push(Effect::RefreshStats);
                }
                UploadStep::Ignored => {
                    dash_debug!("Ignoring completion for batch {} index {}", batch_id, index);
                }
            }
            effects
        }
        Msg::QueryInputChanged(text) => {
            state.query_mut().set_input(text);
            state.mark_dirty();
            Vec::new()
        }
        Msg::QuerySubmitted => submit_query(&mut state),
        Msg::QueryAnswered {
            generation,
            query,
            result,
            elapsed,
        } => {
            let current = state.query_mut().settle(generation);
            if current {
                if let QueryResult::Failed { error_message } = &result {
                    dash_warn!("Query reported failure: {}", error_message);
                }
                state.query_mut().render(RenderedQuery {
                    query: query.clone(),
                    result,
                    elapsed,
                });
            } else {
                dash_debug!("Discarding stale query response (generation {})", generation);
            }
            let stats = state.stats_mut();
            stats.record_activity(ActivityKind::Search, query);
            stats.record_query_latency(elapsed.as_secs_f64());
            stats.increment_queries_today();
            state.mark_dirty();
            Vec::new()
        }
        Msg::QueryTransportFailed {
            generation,
            message,
        } => {
            if state.query_mut().settle(generation) {
                dash_warn!("Query transport failure: {}", message);
                vec![state.notify(format!("Search failed: {message}"), Severity::Error)]
            } else {
                dash_debug!("Discarding stale query failure (generation {})", generation);
                Vec::new()
            }
        }
        Msg::StatsLoaded {
            total_documents,
            total_chunks,
        } => {
            state
                .stats_mut()
                .refresh_authoritative(total_documents, total_chunks);
            state.mark_dirty();
            Vec::new()
        }
        Msg::StatsFailed(message) => {
            dash_warn!("Failed to load stats: {}", message);
            Vec::new()
        }
        Msg::ClearAllRequested => {
            if !state.is_clear_pending() {
                state.set_clear_pending(true);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ClearAllConfirmed => {
            if !state.is_clear_pending() {
                return (state, Vec::new());
            }
            state.set_clear_pending(false);
            let stats = state.stats_mut();
            stats.reset();
            stats.record_activity(ActivityKind::System, "Cleared all documents");
            vec![state.notify("All documents cleared successfully", Severity::Success)]
        }
        Msg::ClearAllCancelled => {
            if state.is_clear_pending() {
                state.set_clear_pending(false);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NotificationDismissed(id) | Msg::NotificationExpired(id) => {
            state.dismiss_notification(id);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn start_upload_batch(state: &mut AppState, files: Vec<crate::FileHandle>) -> Vec<Effect> {
    if state.upload().is_busy() {
        return vec![state.notify(
            "An upload is already in progress; wait for it to finish",
            Severity::Warning,
        )];
    }

    let selected = files.len();
    let valid = filter_supported(files);
    if valid.is_empty() {
        return vec![state.notify("Please select valid files (PDF, DOCX, TXT)", Severity::Error)];
    }
    dash_info!(
        "Starting upload batch: {} of {} selected file(s) accepted",
        valid.len(),
        selected
    );

    state.mark_dirty();
    match state.upload_mut().start(valid) {
        Some(UploadStep::Next {
            batch_id,
            index,
            file,
        }) => vec![Effect::UploadFile {
            batch_id,
            index,
            file,
        }],
        _ => Vec::new(),
    }
}

fn submit_query(state: &mut AppState) -> Vec<Effect> {
    if state.query().is_awaiting_reply() {
        dash_debug!("Ignoring submit while a query is outstanding");
        return Vec::new();
    }
    let query = state.query().input().trim().to_string();
    if query.is_empty() {
        return vec![state.notify("Please enter a question", Severity::Error)];
    }

    let generation = state.query_mut().begin();
    state.mark_dirty();
    dash_info!("Submitting query (generation {}, {} chars)", generation, query.len());
    vec![Effect::SubmitQuery { generation, query }]
}
