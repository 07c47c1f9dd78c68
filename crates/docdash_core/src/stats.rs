use crate::activity::{ActivityKind, ActivityLog};

/// Dashboard counters. Document and chunk totals only ever come from the
/// backend (or the clear-all reset); the rest is derived locally.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statistics {
    total_documents: u64,
    total_chunks: u64,
    queries_today: u64,
    avg_response_time: f64,
    recent_activity: ActivityLog,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh_authoritative(&mut self, total_documents: u64, total_chunks: u64) {
        self.total_documents = total_documents;
        self.total_chunks = total_chunks;
    }

    /// Folds a latency sample into the running average.
    ///
    /// A zero average is treated as "no samples yet", so a genuine 0 s
    /// response followed by a slower one reads as only the slower one.
    pub fn record_query_latency(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            return;
        }
        let seconds = seconds.max(0.0);
        self.avg_response_time = if self.avg_response_time == 0.0 {
            seconds
        } else {
            (self.avg_response_time + seconds) / 2.0
        };
    }

    pub fn increment_queries_today(&mut self) {
        self.queries_today += 1;
    }

    /// Zeroes the document counts; query metrics survive.
    pub fn reset(&mut self) {
        self.total_documents = 0;
        self.total_chunks = 0;
    }

    pub fn record_activity(&mut self, kind: ActivityKind, text: impl Into<String>) {
        self.recent_activity.record(kind, text);
    }

    pub fn total_documents(&self) -> u64 {
        self.total_documents
    }

    pub fn total_chunks(&self) -> u64 {
        self.total_chunks
    }

    pub fn queries_today(&self) -> u64 {
        self.queries_today
    }

    pub fn avg_response_time(&self) -> f64 {
        self.avg_response_time
    }

    pub fn recent_activity(&self) -> &ActivityLog {
        &self.recent_activity
    }
}
