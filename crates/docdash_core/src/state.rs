use crate::{Effect, NotificationQueue, QueryPipeline, Severity, Statistics, UploadPipeline};
use crate::notifications::NOTIFICATION_LIFETIME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Upload,
    Search,
    Documents,
    Analytics,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Upload,
        Section::Search,
        Section::Documents,
        Section::Analytics,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Upload => "Upload",
            Section::Search => "Search",
            Section::Documents => "Documents",
            Section::Analytics => "Analytics",
        }
    }

    /// Parses the lowercase section key (`dashboard`, `search`, ...).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.label().eq_ignore_ascii_case(key.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchFilter {
    All,
    Pdf,
    Docx,
    Txt,
}

impl SearchFilter {
    pub const ALL: [SearchFilter; 4] = [
        SearchFilter::All,
        SearchFilter::Pdf,
        SearchFilter::Docx,
        SearchFilter::Txt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SearchFilter::All => "All",
            SearchFilter::Pdf => "PDF",
            SearchFilter::Docx => "DOCX",
            SearchFilter::Txt => "TXT",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|filter| filter.label().eq_ignore_ascii_case(key.trim()))
    }
}

/// Session state owned by the controller and threaded through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    section: Section,
    dark_mode: bool,
    active_filter: Option<SearchFilter>,
    stats: Statistics,
    notifications: NotificationQueue,
    upload: UploadPipeline,
    query: QueryPipeline,
    clear_pending: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn active_filter(&self) -> Option<SearchFilter> {
        self.active_filter
    }

    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn upload(&self) -> &UploadPipeline {
        &self.upload
    }

    pub fn query(&self) -> &QueryPipeline {
        &self.query
    }

    pub fn is_clear_pending(&self) -> bool {
        self.clear_pending
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    pub(crate) fn set_dark_mode(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
    }

    pub(crate) fn set_active_filter(&mut self, filter: SearchFilter) {
        self.active_filter = Some(filter);
    }

    pub(crate) fn set_clear_pending(&mut self, pending: bool) {
        self.clear_pending = pending;
    }

    pub(crate) fn stats_mut(&mut self) -> &mut Statistics {
        &mut self.stats
    }

    pub(crate) fn upload_mut(&mut self) -> &mut UploadPipeline {
        &mut self.upload
    }

    pub(crate) fn query_mut(&mut self) -> &mut QueryPipeline {
        &mut self.query
    }

    /// Shows a notification and returns the effect that expires it.
    pub(crate) fn notify(&mut self, message: impl Into<String>, severity: Severity) -> Effect {
        let id = self.notifications.notify(message, severity);
        self.mark_dirty();
        Effect::ScheduleDismiss {
            id,
            after: NOTIFICATION_LIFETIME,
        }
    }

    pub(crate) fn dismiss_notification(&mut self, id: crate::NotificationId) {
        if self.notifications.dismiss(id) {
            self.mark_dirty();
        }
    }
}
