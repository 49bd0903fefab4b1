//! Content library
//!
//! Boundary to the per-user document store that saved content goes to. The core only
//! produces records with compatible field names; the user is always passed in
//! explicitly. Two local stores are provided: an in-memory one and a JSON-file one.

pub mod record;
pub mod store;

pub use record::{format_created_at, LibraryRecord, StoredRecord, UserId};
pub use store::{default_library_path, FileLibrary, LibraryStore, MemoryLibrary};
