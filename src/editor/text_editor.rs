//! Text Editor: document, clipboard and spell checking on top of the buffer.
//!
//! Offsets taken by the editor are signed so that callers doing offset
//! arithmetic get a [`BufferError::NegativeIndex`] instead of a wrapped
//! `usize`.

use super::config::EditorConfig;
use super::dictionary::Dictionary;
use crate::buffer::{BufferError, ChunkedBuffer, Result};

/// A minimal text editor with a single clipboard.
#[derive(Debug, Clone)]
pub struct TextEditor {
    /// The document being edited.
    document: ChunkedBuffer,
    /// Text from the last cut or copy.
    clipboard: Option<ChunkedBuffer>,
    /// Known words.
    dictionary: Dictionary,
}

impl TextEditor {
    /// Create an editor for `text` with the default configuration.
    ///
    /// The dictionary is read from the configured word list. If it cannot
    /// be read the editor starts with an empty dictionary.
    pub fn new(text: &str) -> Self {
        Self::with_config(text, &EditorConfig::default())
    }

    /// Create an editor with a custom configuration.
    pub fn with_config(text: &str, config: &EditorConfig) -> Self {
        let dictionary = match Dictionary::load(&config.dictionary_path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                tracing::warn!(
                    "Could not load dictionary from {}: {}",
                    config.dictionary_path.display(),
                    e
                );
                Dictionary::new()
            }
        };
        Self::with_dictionary(text, config, dictionary)
    }

    /// Create an editor with an already loaded dictionary.
    pub fn with_dictionary(text: &str, config: &EditorConfig, dictionary: Dictionary) -> Self {
        Self {
            document: ChunkedBuffer::from_text(config.chunk_capacity, text),
            clipboard: None,
            dictionary,
        }
    }

    /// Move `start..end` into the clipboard.
    ///
    /// `end` past the document end cuts to the end.
    ///
    /// # Errors
    ///
    /// Returns an invalid-range error for negative offsets, `end < start`
    /// or `start` past the document end. Neither the document nor the
    /// clipboard change on error.
    pub fn cut(&mut self, start: isize, end: isize) -> Result<()> {
        let (start, end) = Self::range(start, end)?;
        self.clipboard = Some(self.document.cut_range(start, end)?);
        Ok(())
    }

    /// Copy `start..end` into the clipboard.
    ///
    /// # Errors
    ///
    /// Same as [`TextEditor::cut`].
    pub fn copy(&mut self, start: isize, end: isize) -> Result<()> {
        let (start, end) = Self::range(start, end)?;
        self.clipboard = Some(self.document.copy_range(start, end)?);
        Ok(())
    }

    /// Insert the clipboard at `index`. The clipboard is kept.
    ///
    /// Placement follows [`ChunkedBuffer::paste_at`].
    ///
    /// # Errors
    ///
    /// [`BufferError::MissingArgument`] if nothing was cut or copied yet,
    /// an invalid-range error if `index` is negative or past the end.
    pub fn paste(&mut self, index: isize) -> Result<()> {
        let index = Self::offset(index)?;
        let clipboard = self
            .clipboard
            .as_ref()
            .ok_or(BufferError::MissingArgument("clipboard"))?;
        self.document.paste_at(index, clipboard)
    }

    /// The full document text.
    pub fn text(&self) -> String {
        self.document.materialize()
    }

    /// Number of space-separated tokens not found in the dictionary.
    pub fn misspellings(&self) -> usize {
        self.dictionary.count_misspellings(&self.document.materialize())
    }

    /// Document length in characters.
    pub const fn len(&self) -> usize {
        self.document.len()
    }

    /// Check if the document is empty.
    pub const fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// The document buffer.
    pub const fn document(&self) -> &ChunkedBuffer {
        &self.document
    }

    /// The clipboard buffer, if anything was cut or copied.
    pub const fn clipboard(&self) -> Option<&ChunkedBuffer> {
        self.clipboard.as_ref()
    }

    /// The dictionary used by [`TextEditor::misspellings`].
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn offset(index: isize) -> Result<usize> {
        usize::try_from(index).map_err(|_| BufferError::NegativeIndex(index))
    }

    fn range(start: isize, end: isize) -> Result<(usize, usize)> {
        let start = Self::offset(start)?;
        let end = Self::offset(end)?;
        Ok((start, end))
    }
}
