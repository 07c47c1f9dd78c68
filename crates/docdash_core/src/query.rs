use std::time::Duration;

/// Token attached to each query submission; responses carrying an older
/// token are not rendered.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct SourceRef {
    pub document_id: String,
    pub relevance_score: f64,
    pub text_preview: String,
}

/// Backend answer to a query, in the backend's ranking order.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResult {
    Answered {
        answer: String,
        sources: Vec<SourceRef>,
    },
    Failed {
        error_message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryPhase {
    #[default]
    Idle,
    Submitting {
        generation: Generation,
    },
}

/// A result as it is shown in the search view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuery {
    pub query: String,
    pub result: QueryResult,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryPipeline {
    input: String,
    generation: Generation,
    phase: QueryPhase,
    /// Generation of the request still open at the backend. Survives
    /// `invalidate`; only that request's reply clears it.
    awaiting: Option<Generation>,
    latest: Option<RenderedQuery>,
}

impl QueryPipeline {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn phase(&self) -> QueryPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, QueryPhase::Submitting { .. })
    }

    /// True while a request is outstanding, even one whose reply will be
    /// discarded. New submissions wait for it.
    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting.is_some()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn latest(&self) -> Option<&RenderedQuery> {
        self.latest.as_ref()
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
    }

    /// Moves to `Submitting` under a fresh generation and clears the
    /// previously rendered result.
    pub(crate) fn begin(&mut self) -> Generation {
        self.generation += 1;
        self.phase = QueryPhase::Submitting {
            generation: self.generation,
        };
        self.awaiting = Some(self.generation);
        self.latest = None;
        self.generation
    }

    /// Stops showing the in-flight submission, if any. Its response will be
    /// treated as stale, and new submissions still wait for it.
    pub(crate) fn invalidate(&mut self) -> bool {
        if !self.is_submitting() {
            return false;
        }
        self.generation += 1;
        self.phase = QueryPhase::Idle;
        true
    }

    /// Records the reply for `generation`. Returns true when it is the
    /// submission currently shown as in flight; in that case the pipeline
    /// goes back to `Idle`.
    pub(crate) fn settle(&mut self, generation: Generation) -> bool {
        if self.awaiting == Some(generation) {
            self.awaiting = None;
        }
        match self.phase {
            QueryPhase::Submitting { generation: current } if current == generation => {
                self.phase = QueryPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn render(&mut self, rendered: RenderedQuery) {
        self.latest = Some(rendered);
    }
}
