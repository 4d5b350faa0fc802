//! Editor module: the editing surface built on [`ChunkedBuffer`].
//!
//! - [`TextEditor`]: Document plus a single clipboard for cut, copy and paste
//! - [`Dictionary`]: Known words for counting misspellings
//! - [`EditorConfig`]: Chunk capacity and word list location
//!
//! [`ChunkedBuffer`]: crate::buffer::ChunkedBuffer

mod config;
mod dictionary;
mod text_editor;

pub use config::{EditorConfig, CHUNK_CAPACITY_ENV, DEFAULT_DICTIONARY_PATH, DICTIONARY_ENV};
pub use dictionary::Dictionary;
pub use text_editor::TextEditor;
