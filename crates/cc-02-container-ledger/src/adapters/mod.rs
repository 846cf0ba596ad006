//! Adapters: in-memory substrate, registry-backed facility directory,
//! and event sinks.

pub mod event_sink;
pub mod memory_store;
pub mod registry_directory;

pub use event_sink::{NullEventSink, RecordingEventSink};
pub use memory_store::InMemoryCommitStore;
pub use registry_directory::RegistryDirectory;
