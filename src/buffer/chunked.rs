//! Chunked Buffer: an unrolled linked list of text chunks.
//!
//! This module provides the document store behind the editor, optimized for:
//! - Range cut, copy and paste without shifting the whole document
//! - Append that fills the tail chunk before allocating new ones
//! - Moving whole chunks out of a document on cut instead of copying them
//!
//! Offsets address `char`s. A range `start..end` is half-open and `end` is
//! clamped to the document length.

use std::fmt::{self, Write as _};

use tracing::{debug, trace};

use super::chunk::{Chunk, ChunkArena, ChunkId};
use super::error::{BufferError, Result};

/// Default number of characters per chunk.
pub const DEFAULT_CHUNK_CAPACITY: usize = 1500;

/// Where a global offset falls in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    /// The chunk holding the offset and the global offset of its first char.
    Found { chunk: ChunkId, start: usize },
    /// No chunk holds the offset (it is at or past the end).
    End,
}

/// Where a pasted chain gets linked in.
#[derive(Debug, Clone, Copy)]
enum Splice {
    Append,
    /// Between `anchor` and its successor, leaving `anchor` whole.
    After { anchor: ChunkId },
    /// Inside `anchor`, which is split after its first `offset` chars.
    Split { anchor: ChunkId, offset: usize },
}

/// An unrolled linked list of text chunks.
///
/// Every chunk holds at most `capacity` characters. Edits split, splice
/// and merge chunks locally, so cutting or pasting in the middle of a large
/// document touches only the chunks at the edges of the range.
///
/// A capacity of 0 means chunks are unbounded.
#[derive(Debug, Clone)]
pub struct ChunkedBuffer {
    /// Chunk storage.
    arena: ChunkArena,
    /// First chunk of the chain.
    head: Option<ChunkId>,
    /// Last chunk of the chain.
    tail: Option<ChunkId>,
    /// Maximum characters per chunk (0 = unbounded).
    capacity: usize,
    /// Total characters across all chunks.
    len: usize,
}

impl ChunkedBuffer {
    /// Create an empty buffer whose chunks hold at most `capacity` chars.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Characters per chunk. 0 means unbounded.
    pub const fn new(capacity: usize) -> Self {
        Self {
            arena: ChunkArena::new(),
            head: None,
            tail: None,
            capacity,
            len: 0,
        }
    }

    /// Create a buffer with unbounded chunks.
    pub const fn unbounded() -> Self {
        Self::new(0)
    }

    /// Create a buffer holding `text`.
    pub fn from_text(capacity: usize, text: &str) -> Self {
        let mut buffer = Self::new(capacity);
        buffer.insert(text);
        buffer
    }

    /// Characters per chunk this buffer was built with.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Document length in characters.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the document is empty.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chunks in the chain.
    pub fn chunk_count(&self) -> usize {
        self.arena.live()
    }

    /// Iterate over the chunks in document order.
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks {
            arena: &self.arena,
            cursor: self.head,
        }
    }

    /// Iterate over every character in document order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chunks().flat_map(|chunk| chunk.iter().copied())
    }

    /// Append `text` to the end of the document.
    ///
    /// The tail chunk is filled first, then the rest is split into chunks
    /// of exactly `capacity` characters with the last one taking the
    /// remainder.
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.extend_chars(text.chars());
        trace!(len = self.len, chunks = self.chunk_count(), "inserted text");
    }

    /// Copy `start..end` into a new, independent buffer.
    ///
    /// `end` is clamped to the document length. The source is unchanged
    /// and the copy shares no storage with it.
    ///
    /// # Errors
    ///
    /// [`BufferError::ReversedRange`] if `end < start`,
    /// [`BufferError::OutOfBounds`] if `start` is past the end.
    pub fn copy_range(&self, start: usize, end: usize) -> Result<Self> {
        let end = self.check_range(start, end)?;
        let mut copy = Self::new(self.capacity);
        if start == end {
            return Ok(copy);
        }

        let Location::Found {
            chunk,
            start: mut chunk_start,
        } = self.locate(start)
        else {
            return Err(self.out_of_bounds(start));
        };

        let mut cursor = Some(chunk);
        while let Some(id) = cursor {
            if chunk_start >= end {
                break;
            }
            let chunk = self.arena.get(id);
            let lo = start.saturating_sub(chunk_start);
            let hi = (end - chunk_start).min(chunk.len());
            copy.extend_chars(chunk.text[lo..hi].iter().copied());
            chunk_start += chunk.len();
            cursor = chunk.next;
        }

        debug!(start, end, copied = copy.len(), "copy range");
        Ok(copy)
    }

    /// Remove `start..end` from the document and return it as a new buffer.
    ///
    /// `end` is clamped to the document length. Chunks lying entirely
    /// inside the range are moved into the returned buffer rather than
    /// copied. Partial chunks at either edge are trimmed in place, and the
    /// two edge chunks are merged when their combined text fits one chunk.
    ///
    /// # Errors
    ///
    /// Same as [`ChunkedBuffer::copy_range`]. The document is not modified
    /// on error.
    pub fn cut_range(&mut self, start: usize, end: usize) -> Result<Self> {
        let end = self.check_range(start, end)?;
        let mut cut = Self::new(self.capacity);
        if start == end {
            return Ok(cut);
        }

        let Location::Found {
            chunk: first,
            start: first_start,
        } = self.locate(start)
        else {
            return Err(self.out_of_bounds(start));
        };

        let count = end - start;
        let offset = start - first_start;

        if offset + count < self.arena.get(first).len() {
            cut.extend_chars(self.arena.get_mut(first).text.drain(offset..offset + count));
            self.len -= count;
            debug!(start, end, len = self.len, "cut range within one chunk");
            return Ok(cut);
        }

        let fragment = self.arena.get_mut(first).text.split_off(offset);
        let mut taken = fragment.len();
        cut.extend_chars(fragment.into_iter());

        // Whole chunks inside the range change owner.
        let mut cursor = self.arena.get(first).next;
        let mut moved = 0;
        while let Some(id) = cursor {
            let len = self.arena.get(id).len();
            if start + taken + len > end {
                break;
            }
            let mut chunk = self.arena.take(id);
            cursor = chunk.next.take();
            taken += len;
            moved += 1;
            cut.adopt(chunk);
        }

        if let Some(id) = cursor {
            if taken < count {
                let prefix = count - taken;
                cut.extend_chars(self.arena.get_mut(id).text.drain(..prefix));
            }
        }

        let remainder = match cursor {
            Some(id) if self.arena.get(first).len() + self.arena.get(id).len() <= self.limit() => {
                let boundary = self.arena.take(id);
                let head = self.arena.get_mut(first);
                head.text.extend(boundary.text);
                head.next = boundary.next;
                trace!(chunk = first.index(), "merged edge chunks after cut");
                boundary.next
            }
            other => {
                self.arena.get_mut(first).next = other;
                other
            }
        };

        if remainder.is_none() {
            self.tail = Some(first);
        }
        self.len -= count;

        debug!(start, end, moved, len = self.len, "cut range");
        Ok(cut)
    }

    /// Insert a copy of `source` at offset `index`.
    ///
    /// The chunk holding `index` is the anchor. When `index` is the anchor's
    /// last char the copy is linked in right after the anchor, so it lands
    /// one past that char. Otherwise the anchor is split at `index` and the
    /// copy begins at `index`. Pasting at the document length appends. The
    /// source is only read, so the same buffer can be pasted any number of
    /// times.
    ///
    /// # Errors
    ///
    /// [`BufferError::OutOfBounds`] if `index` is past the end. The
    /// document is not modified on error.
    pub fn paste_at(&mut self, index: usize, source: &Self) -> Result<()> {
        if index > self.len {
            return Err(self.out_of_bounds(index));
        }

        let splice = if index == self.len {
            Splice::Append
        } else {
            match self.locate(index) {
                Location::Found { chunk, start } if index - start + 1 == self.arena.get(chunk).len() => {
                    Splice::After { anchor: chunk }
                }
                Location::Found { chunk, start } => Splice::Split {
                    anchor: chunk,
                    offset: index - start,
                },
                Location::End => Splice::Append,
            }
        };

        let Some((first, mut last, pasted)) = self.build_chain(source.chars()) else {
            return Ok(());
        };

        match splice {
            Splice::Append => self.link_back(first, last),
            Splice::After { anchor } => {
                let successor = self.arena.get(anchor).next;
                self.arena.get_mut(anchor).next = Some(first);
                self.arena.get_mut(last).next = successor;
                if successor.is_none() {
                    self.tail = Some(last);
                }
            }
            Splice::Split { anchor, offset } => {
                let (trailing, successor) = {
                    let chunk = self.arena.get_mut(anchor);
                    (chunk.text.split_off(offset), chunk.next)
                };
                let mut rest = Chunk::new(trailing);
                rest.next = successor;
                let rest = self.arena.alloc(rest);

                if offset == 0 {
                    // The anchor is empty now: it takes over the first pasted chunk.
                    let lead = self.arena.take(first);
                    if last == first {
                        last = anchor;
                    }
                    let chunk = self.arena.get_mut(anchor);
                    chunk.text = lead.text;
                    chunk.next = lead.next;
                } else {
                    self.arena.get_mut(anchor).next = Some(first);
                }

                self.arena.get_mut(last).next = Some(rest);
                if self.tail == Some(anchor) {
                    self.tail = Some(rest);
                }
                trace!(chunk = anchor.index(), offset, "split chunk for paste");
            }
        }

        self.len += pasted;
        debug!(index, pasted, len = self.len, "paste");
        Ok(())
    }

    /// Concatenate every chunk into the full document text.
    pub fn materialize(&self) -> String {
        let mut text = String::with_capacity(self.len);
        for chunk in self.chunks() {
            text.extend(chunk.iter());
        }
        text
    }

    /// Drop all content. Capacity is kept.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Get chunk occupancy statistics.
    pub fn stats(&self) -> ChunkStats {
        let mut stats = ChunkStats::default();
        for chunk in self.chunks() {
            stats.chunks += 1;
            stats.chars += chunk.len();
            if self.capacity > 0 && chunk.len() < self.capacity {
                stats.underfull += 1;
            }
        }
        stats.bytes_estimated = stats.chunks * std::mem::size_of::<Chunk>()
            + stats.chars * std::mem::size_of::<char>();
        stats
    }

    /// Largest chunk length this buffer allows.
    const fn limit(&self) -> usize {
        if self.capacity == 0 {
            usize::MAX
        } else {
            self.capacity
        }
    }

    /// Find the chunk holding global offset `index`.
    fn locate(&self, index: usize) -> Location {
        let mut start = 0;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let chunk = self.arena.get(id);
            if index < start + chunk.len() {
                return Location::Found { chunk: id, start };
            }
            start += chunk.len();
            cursor = chunk.next;
        }
        Location::End
    }

    /// Validate `start..end` and return the clamped end.
    fn check_range(&self, start: usize, end: usize) -> Result<usize> {
        if end < start {
            return Err(BufferError::ReversedRange { start, end });
        }
        if start > self.len {
            return Err(self.out_of_bounds(start));
        }
        Ok(end.min(self.len))
    }

    const fn out_of_bounds(&self, index: usize) -> BufferError {
        BufferError::OutOfBounds {
            index,
            len: self.len,
        }
    }

    /// Append characters, topping up the tail chunk before chaining more.
    fn extend_chars(&mut self, chars: impl Iterator<Item = char>) {
        let limit = self.limit();
        let mut chars = chars.peekable();

        if let Some(tail) = self.tail {
            let chunk = self.arena.get_mut(tail);
            let before = chunk.len();
            let room = chunk.room(limit);
            chunk.text.extend(chars.by_ref().take(room));
            self.len += chunk.len() - before;
        }

        if let Some((first, last, added)) = self.build_chain(chars) {
            self.link_back(first, last);
            self.len += added;
        }
    }

    /// Pack characters into a fresh, unattached chain of full chunks.
    ///
    /// Returns the first and last chunk of the chain and the number of
    /// characters in it, or `None` when there was nothing to pack.
    fn build_chain(
        &mut self,
        chars: impl Iterator<Item = char>,
    ) -> Option<(ChunkId, ChunkId, usize)> {
        let limit = self.limit();
        let mut chars = chars.peekable();
        let mut ends: Option<(ChunkId, ChunkId)> = None;
        let mut total = 0;

        while chars.peek().is_some() {
            let mut chunk = Chunk::with_capacity(self.capacity.min(DEFAULT_CHUNK_CAPACITY));
            chunk.text.extend(chars.by_ref().take(limit));
            total += chunk.len();
            let id = self.arena.alloc(chunk);
            ends = Some(match ends {
                None => (id, id),
                Some((first, last)) => {
                    self.arena.get_mut(last).next = Some(id);
                    (first, id)
                }
            });
        }

        ends.map(|(first, last)| (first, last, total))
    }

    /// Link an unattached chain after the current tail.
    fn link_back(&mut self, first: ChunkId, last: ChunkId) {
        match self.tail {
            Some(tail) => self.arena.get_mut(tail).next = Some(first),
            None => self.head = Some(first),
        }
        self.tail = Some(last);
    }

    /// Take ownership of a chunk detached from another buffer.
    fn adopt(&mut self, mut chunk: Chunk) {
        chunk.next = None;
        let len = chunk.len();
        let id = self.arena.alloc(chunk);
        self.link_back(id, id);
        self.len += len;
    }
}

impl Default for ChunkedBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_CAPACITY)
    }
}

impl fmt::Display for ChunkedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.chunks() {
            for &c in chunk {
                f.write_char(c)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the chunks of a [`ChunkedBuffer`] in document order.
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    arena: &'a ChunkArena,
    cursor: Option<ChunkId>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a [char];

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.arena.get(self.cursor?);
        self.cursor = chunk.next;
        Some(chunk.as_chars())
    }
}

/// Chunk occupancy statistics for a buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChunkStats {
    /// Number of chunks.
    pub chunks: usize,
    /// Number of characters.
    pub chars: usize,
    /// Chunks holding fewer characters than the capacity.
    pub underfull: usize,
    /// Estimated memory usage in bytes.
    pub bytes_estimated: usize,
}
