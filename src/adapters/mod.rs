// Adapters layer: concrete implementations of the ports for external systems.

pub mod http;
pub mod notify;
pub mod storage;

pub use http::HttpCatalog;
pub use notify::{RecordingNotifier, TracingNotifier};
pub use storage::{FileStore, MemoryStore};
