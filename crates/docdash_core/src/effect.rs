use std::time::Duration;

use crate::{BatchId, FileHandle, Generation, NotificationId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch authoritative document/chunk counts.
    RefreshStats,
    /// Upload one file; the engine answers with `Msg::UploadFinished`.
    UploadFile {
        batch_id: BatchId,
        index: usize,
        file: FileHandle,
    },
    /// Send one query; the engine answers with `Msg::QueryAnswered` or
    /// `Msg::QueryTransportFailed`, echoing the generation.
    SubmitQuery { generation: Generation, query: String },
    /// Fire `Msg::NotificationExpired` after `after`.
    ScheduleDismiss { id: NotificationId, after: Duration },
    PersistTheme { dark_mode: bool },
}
