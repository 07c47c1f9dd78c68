use std::path::PathBuf;

pub type BatchId = u64;

const SUPPORTED_MEDIA_TYPES: &[&str] = &[
    "application/pdf",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
];
const SUPPORTED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".txt"];

/// A file the user picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    /// Media type declared by whoever produced the handle, if any.
    pub media_type: Option<String>,
    pub path: PathBuf,
}

impl FileHandle {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self {
            name,
            media_type: None,
            path,
        }
    }

    /// PDF, DOCX or plain text, judged by declared media type or extension.
    pub fn is_supported(&self) -> bool {
        let by_type = self
            .media_type
            .as_deref()
            .is_some_and(|mt| SUPPORTED_MEDIA_TYPES.contains(&mt));
        let lower = self.name.to_lowercase();
        by_type || SUPPORTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    }
}

pub fn filter_supported(files: Vec<FileHandle>) -> Vec<FileHandle> {
    files.into_iter().filter(FileHandle::is_supported).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded {
        filename: String,
        chunks_processed: u64,
    },
    Failed {
        filename: String,
        error_message: String,
    },
}

impl UploadOutcome {
    pub fn filename(&self) -> &str {
        match self {
            UploadOutcome::Uploaded { filename, .. } | UploadOutcome::Failed { filename, .. } => {
                filename
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadProgress {
    pub percent: f64,
    pub current_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveBatch {
    id: BatchId,
    files: Vec<FileHandle>,
    current: usize,
}

/// What the caller should do after a file finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UploadStep {
    Next {
        batch_id: BatchId,
        index: usize,
        file: FileHandle,
    },
    Finished,
    /// Completion for a batch or index that is not in flight.
    Ignored,
}

/// Sequential upload state: at most one file of one batch is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadPipeline {
    next_batch_id: BatchId,
    active: Option<ActiveBatch>,
    outcomes: Vec<UploadOutcome>,
}

impl UploadPipeline {
    pub fn is_busy(&self) -> bool {
        self.active.is_some()
    }

    /// Outcomes of the current (or last finished) batch in submission order.
    pub fn outcomes(&self) -> &[UploadOutcome] {
        &self.outcomes
    }

    pub fn progress(&self) -> Option<UploadProgress> {
        let batch = self.active.as_ref()?;
        let file = batch.files.get(batch.current)?;
        Some(UploadProgress {
            percent: (batch.current + 1) as f64 / batch.files.len() as f64 * 100.0,
            current_file: file.name.clone(),
        })
    }

    /// Starts a batch of already-filtered files and returns the first one to
    /// submit. Previous outcomes are cleared.
    pub(crate) fn start(&mut self, files: Vec<FileHandle>) -> Option<UploadStep> {
        let first = files.first()?.clone();
        self.next_batch_id += 1;
        let id = self.next_batch_id;
        self.outcomes.clear();
        self.active = Some(ActiveBatch {
            id,
            files,
            current: 0,
        });
        Some(UploadStep::Next {
            batch_id: id,
            index: 0,
            file: first,
        })
    }

    pub(crate) fn complete(
        &mut self,
        batch_id: BatchId,
        index: usize,
        result: Result<u64, String>,
    ) -> (Option<UploadOutcome>, UploadStep) {
        let Some(batch) = self.active.as_mut() else {
            return (None, UploadStep::Ignored);
        };
        if batch.id != batch_id || batch.current != index {
            return (None, UploadStep::Ignored);
        }
        let filename = batch.files[index].name.clone();
        let outcome = match result {
            Ok(chunks_processed) => UploadOutcome::Uploaded {
                filename,
                chunks_processed,
            },
            Err(error_message) => UploadOutcome::Failed {
                filename,
                error_message,
            },
        };
        self.outcomes.push(outcome.clone());

        batch.current += 1;
        let step = match batch.files.get(batch.current) {
            Some(file) => UploadStep::Next {
                batch_id,
                index: batch.current,
                file: file.clone(),
            },
            None => {
                self.active = None;
                UploadStep::Finished
            }
        };
        (Some(outcome), step)
    }
}
