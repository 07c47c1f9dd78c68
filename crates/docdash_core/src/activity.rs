use std::collections::VecDeque;

/// Maximum number of entries kept in the recent-activity log.
pub const ACTIVITY_CAPACITY: usize = 10;
/// Query text longer than this is cut and suffixed with `...`.
pub const DESCRIPTION_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Upload,
    Search,
    System,
}

impl ActivityKind {
    pub fn icon(self) -> &'static str {
        match self {
            ActivityKind::Upload => "upload",
            ActivityKind::Search | ActivityKind::System => "search",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    kind: ActivityKind,
    description: String,
    timestamp: String,
}

impl ActivityEntry {
    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn icon(&self) -> &'static str {
        self.kind.icon()
    }
}

/// Bounded, newest-first log of user actions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry stamped with the local wall-clock time.
    ///
    /// For [`ActivityKind::Search`] the `text` is the raw query; it is
    /// truncated and wrapped as `Searched: "<query>"`.
    pub fn record(&mut self, kind: ActivityKind, text: impl Into<String>) {
        let timestamp = chrono::Local::now().format("%-I:%M:%S %p").to_string();
        self.record_at(kind, text, timestamp);
    }

    pub fn record_at(
        &mut self,
        kind: ActivityKind,
        text: impl Into<String>,
        timestamp: impl Into<String>,
    ) {
        let text = text.into();
        let description = match kind {
            ActivityKind::Search => format!("Searched: \"{}\"", truncate_description(&text)),
            ActivityKind::Upload | ActivityKind::System => text,
        };
        self.entries.push_front(ActivityEntry {
            kind,
            description,
            timestamp: timestamp.into(),
        });
        self.entries.truncate(ACTIVITY_CAPACITY);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cuts `text` to [`DESCRIPTION_LIMIT`] characters, appending `...` when
/// anything was removed.
pub fn truncate_description(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
