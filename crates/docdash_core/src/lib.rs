//! Docdash core: pure dashboard state machine and view-model helpers.
mod activity;
mod charts;
mod effect;
mod msg;
mod notifications;
mod query;
mod state;
mod stats;
mod update;
mod upload;
mod view_model;

pub use activity::{
    truncate_description, ActivityEntry, ActivityKind, ActivityLog, ACTIVITY_CAPACITY,
    DESCRIPTION_LIMIT,
};
pub use charts::{
    charts_for, grid_color, ChartId, ChartKind, ChartSeries, ChartSpec, GRID_COLOR_DARK,
    GRID_COLOR_LIGHT,
};
pub use effect::Effect;
pub use msg::Msg;
pub use notifications::{
    Notification, NotificationId, NotificationQueue, Severity, NOTIFICATION_LIFETIME,
};
pub use query::{Generation, QueryPhase, QueryPipeline, QueryResult, RenderedQuery, SourceRef};
pub use state::{AppState, SearchFilter, Section};
pub use stats::Statistics;
pub use update::update;
pub use upload::{
    filter_supported, BatchId, FileHandle, UploadOutcome, UploadPipeline, UploadProgress,
};
pub use view_model::{
    file_type_label, format_relevance, split_answer, ActivityRowView, AppViewModel, FilterView,
    HeaderView, NavItemView, NotificationView, QueryResultView, SearchPanelView, SourceView,
    UploadPanelView, UploadProgressView, UploadResultView, EMPTY_ACTIVITY_TEXT,
};
