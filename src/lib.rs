//! # Unrolled
//!
//! A chunked text buffer for fast cut, copy and paste over large documents.
//!
//! The document is an unrolled linked list: a chain of chunks that each hold
//! up to a fixed number of characters. Edits locate the chunks at the edges
//! of a range and split, splice or merge only those, instead of shifting the
//! whole text.
//!
//! ## Core Concepts
//!
//! - **Bounded chunks**: Every chunk holds at most `capacity` characters
//! - **Move on cut**: Chunks fully inside a cut range change owner without copying
//! - **Copy on paste**: Pasted text is repacked into fresh chunks, the source is untouched
//! - **Local merge**: The two chunks left at the edges of a cut merge when they fit
//!
//! ## Example
//!
//! ```rust
//! use unrolled::ChunkedBuffer;
//!
//! let mut buffer = ChunkedBuffer::new(4);
//! buffer.insert("Hello World! ");
//! buffer.insert("Today is a good day");
//!
//! let greeting = buffer.cut_range(0, 13).unwrap();
//! buffer.paste_at(buffer.len(), &greeting).unwrap();
//! assert_eq!(buffer.materialize(), "Today is a good dayHello World! ");
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod editor;

// Re-exports for convenience
pub use buffer::{BufferError, ChunkStats, ChunkedBuffer, Chunks, Result, DEFAULT_CHUNK_CAPACITY};
pub use editor::{Dictionary, EditorConfig, TextEditor};
