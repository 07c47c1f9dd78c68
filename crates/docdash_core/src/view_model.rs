use std::time::Duration;

use crate::charts::{charts_for, ChartSpec};
use crate::{
    AppState, NotificationId, QueryResult, SearchFilter, Section, Severity, UploadOutcome,
};

pub const EMPTY_ACTIVITY_TEXT: &str = "No recent activity";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub section: Section,
    pub dark_mode: bool,
    pub nav: Vec<NavItemView>,
    pub filters: Vec<FilterView>,
    pub header: HeaderView,
    pub activity: Vec<ActivityRowView>,
    pub notifications: Vec<NotificationView>,
    pub upload: UploadPanelView,
    pub search: SearchPanelView,
    pub clear_confirmation_pending: bool,
    pub charts: Vec<ChartSpec>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub section: Section,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView {
    pub filter: SearchFilter,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderView {
    /// e.g. `5 documents`
    pub documents_badge: String,
    /// e.g. `120 chunks`
    pub chunks_badge: String,
    pub total_documents: String,
    pub total_chunks: String,
    pub queries_today: String,
    /// e.g. `1.4s`
    pub avg_response_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRowView {
    pub icon: &'static str,
    pub description: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub icon: &'static str,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadPanelView {
    pub progress: Option<UploadProgressView>,
    pub results: Vec<UploadResultView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadProgressView {
    pub percent: f64,
    /// Rounded, e.g. `33%`.
    pub percent_label: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResultView {
    pub filename: String,
    pub success: bool,
    pub detail: String,
    /// Upper-cased extension, only on success cards.
    pub file_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchPanelView {
    pub query_input: String,
    pub submit_enabled: bool,
    pub loading: bool,
    pub result: Option<QueryResultView>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryResultView {
    Answer {
        question: String,
        /// Paragraphs split on blank lines, each holding its lines.
        paragraphs: Vec<Vec<String>>,
        latency: String,
        sources: Vec<SourceView>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceView {
    pub rank: usize,
    pub document_id: String,
    pub file_type: String,
    /// e.g. `87.3%`
    pub relevance: String,
    pub preview: String,
}

impl AppState {
    /// Derives everything the display needs. Reads only.
    pub fn view(&self) -> AppViewModel {
        let section = self.section();
        let stats = self.statistics();

        let nav = Section::ALL
            .into_iter()
            .map(|s| NavItemView {
                section: s,
                label: s.label(),
                active: s == section,
            })
            .collect();
        let filters = SearchFilter::ALL
            .into_iter()
            .map(|f| FilterView {
                filter: f,
                label: f.label(),
                active: self.active_filter() == Some(f),
            })
            .collect();

        let header = HeaderView {
            documents_badge: format!("{} documents", stats.total_documents()),
            chunks_badge: format!("{} chunks", stats.total_chunks()),
            total_documents: stats.total_documents().to_string(),
            total_chunks: stats.total_chunks().to_string(),
            queries_today: stats.queries_today().to_string(),
            avg_response_time: format!("{:.1}s", stats.avg_response_time()),
        };

        let activity = stats
            .recent_activity()
            .iter()
            .map(|entry| ActivityRowView {
                icon: entry.icon(),
                description: entry.description().to_string(),
                timestamp: entry.timestamp().to_string(),
            })
            .collect();

        let notifications = self
            .notifications()
            .visible()
            .iter()
            .map(|n| NotificationView {
                id: n.id,
                icon: n.severity.icon(),
                severity: n.severity,
                message: n.message.clone(),
            })
            .collect();

        let upload = UploadPanelView {
            progress: self.upload().progress().map(|p| UploadProgressView {
                percent: p.percent,
                percent_label: format!("{}%", p.percent.round() as u64),
                status: format!("Uploading {}...", p.current_file),
            }),
            results: self.upload().outcomes().iter().map(upload_result_view).collect(),
        };

        let query = self.query();
        let search = SearchPanelView {
            query_input: query.input().to_string(),
            submit_enabled: !query.is_awaiting_reply(),
            loading: query.is_submitting(),
            result: query.latest().map(|rendered| {
                query_result_view(&rendered.query, &rendered.result, rendered.elapsed)
            }),
        };

        AppViewModel {
            section,
            dark_mode: self.is_dark_mode(),
            nav,
            filters,
            header,
            activity,
            notifications,
            upload,
            search,
            clear_confirmation_pending: self.is_clear_pending(),
            charts: charts_for(section, self.is_dark_mode()),
            dirty: self.is_dirty(),
        }
    }
}

fn upload_result_view(outcome: &UploadOutcome) -> UploadResultView {
    match outcome {
        UploadOutcome::Uploaded {
            filename,
            chunks_processed,
        } => UploadResultView {
            filename: filename.clone(),
            success: true,
            detail: format!("{chunks_processed} chunks processed"),
            file_type: Some(file_type_label(filename).to_uppercase()),
        },
        UploadOutcome::Failed {
            filename,
            error_message,
        } => UploadResultView {
            filename: filename.clone(),
            success: false,
            detail: error_message.clone(),
            file_type: None,
        },
    }
}

fn query_result_view(query: &str, result: &QueryResult, elapsed: Duration) -> QueryResultView {
    match result {
        QueryResult::Answered { answer, sources } => QueryResultView::Answer {
            question: query.to_string(),
            paragraphs: split_answer(answer),
            latency: format!("Generated in {:.2}s", elapsed.as_secs_f64()),
            sources: sources
                .iter()
                .enumerate()
                .map(|(i, source)| SourceView {
                    rank: i + 1,
                    document_id: source.document_id.clone(),
                    file_type: file_type_label(&source.document_id).to_uppercase(),
                    relevance: format_relevance(source.relevance_score),
                    preview: source.text_preview.clone(),
                })
                .collect(),
        },
        QueryResult::Failed { error_message } => QueryResultView::Error {
            message: error_message.clone(),
        },
    }
}

/// Lower-cased text after the last `.`; the whole name when there is none.
pub fn file_type_label(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Relevance score in [0, 1] as a percentage with one decimal.
pub fn format_relevance(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

pub fn split_answer(answer: &str) -> Vec<Vec<String>> {
    answer
        .split("\n\n")
        .map(|para| para.split('\n').map(ToOwned::to_owned).collect())
        .collect()
}
