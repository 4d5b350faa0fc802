//! Buffer module: Core data structures for chunked text storage.
//!
//! This module contains:
//! - [`ChunkedBuffer`]: The unrolled linked list of text chunks
//! - [`Chunks`]: Iterator over a buffer's chunks in document order
//! - [`ChunkStats`]: Chunk occupancy statistics
//! - [`BufferError`]: Errors for out-of-range operations

mod chunk;
mod chunked;
mod error;

pub use chunked::{ChunkStats, ChunkedBuffer, Chunks, DEFAULT_CHUNK_CAPACITY};
pub use error::{BufferError, Result};
