use std::time::Duration;

use crate::{
    BatchId, FileHandle, Generation, NotificationId, QueryResult, SearchFilter, Section,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Session start with the persisted theme preference.
    Started { dark_mode: bool },
    /// User picked a navigation entry.
    SectionSelected(Section),
    ThemeToggled,
    FilterSelected(SearchFilter),
    /// User dropped or picked files for upload.
    FilesSelected(Vec<FileHandle>),
    /// Engine completion for one file of a batch.
    UploadFinished {
        batch_id: BatchId,
        index: usize,
        /// Processed chunk count, or the message to show on the result card.
        result: Result<u64, String>,
    },
    /// User edited the query box.
    QueryInputChanged(String),
    /// User pressed search (button or Enter).
    QuerySubmitted,
    /// The backend answered, successfully or with a reported failure.
    QueryAnswered {
        generation: Generation,
        query: String,
        result: QueryResult,
        elapsed: Duration,
    },
    /// No usable response (network failure or malformed body).
    QueryTransportFailed {
        generation: Generation,
        message: String,
    },
    StatsLoaded {
        total_documents: u64,
        total_chunks: u64,
    },
    StatsFailed(String),
    ClearAllRequested,
    ClearAllConfirmed,
    ClearAllCancelled,
    /// User closed a notification.
    NotificationDismissed(NotificationId),
    /// Auto-removal timer fired.
    NotificationExpired(NotificationId),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
