//! Docdash client: backend IO and effect execution.
mod backend;
mod engine;
mod persist;
mod types;

pub use backend::{Backend, ClientSettings, ReqwestBackend, DEFAULT_BASE_URL};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use types::{
    BackendError, BatchId, EngineEvent, FailureKind, Generation, QueryResponse, SourceWire,
    StatsSnapshot, UploadReceipt,
};
