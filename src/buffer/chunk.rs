//! Chunk storage: bounded runs of characters kept in a per-buffer arena.
//!
//! Chunks never hold references to each other. Each one stores the
//! [`ChunkId`] of its successor, and the arena owns every chunk of a
//! single buffer. Moving a chunk between buffers is a `take` from one
//! arena followed by an `alloc` in the other; the character storage moves
//! along with it and is never copied.

/// Index of a chunk slot inside a [`ChunkArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkId(usize);

impl ChunkId {
    /// Raw slot index.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A contiguous run of characters and the link to the next chunk.
#[derive(Debug, Clone, Default)]
pub struct Chunk {
    /// Characters held by this chunk.
    pub(crate) text: Vec<char>,
    /// Successor in the chain.
    pub(crate) next: Option<ChunkId>,
}

impl Chunk {
    /// Create an unlinked chunk owning the given characters.
    pub(crate) const fn new(text: Vec<char>) -> Self {
        Self { text, next: None }
    }

    /// Create an unlinked chunk with room for `capacity` characters.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self::new(Vec::with_capacity(capacity))
    }

    /// Number of characters in this chunk.
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// The characters of this chunk.
    pub fn as_chars(&self) -> &[char] {
        &self.text
    }

    /// Remaining room before the chunk reaches `capacity`.
    pub(crate) const fn room(&self, capacity: usize) -> usize {
        capacity.saturating_sub(self.text.len())
    }
}

/// Slot arena holding every chunk of one buffer.
///
/// Freed slots are recycled before the arena grows.
#[derive(Debug, Clone, Default)]
pub(crate) struct ChunkArena {
    slots: Vec<Option<Chunk>>,
    free: Vec<ChunkId>,
}

impl ChunkArena {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store a chunk and return its id.
    pub(crate) fn alloc(&mut self, chunk: Chunk) -> ChunkId {
        if let Some(id) = self.free.pop() {
            self.slots[id.0] = Some(chunk);
            id
        } else {
            self.slots.push(Some(chunk));
            ChunkId(self.slots.len() - 1)
        }
    }

    /// Remove a chunk from the arena, handing its storage to the caller.
    pub(crate) fn take(&mut self, id: ChunkId) -> Chunk {
        let Some(chunk) = self.slots[id.0].take() else {
            unreachable!("chunk {} was freed twice", id.0);
        };
        self.free.push(id);
        chunk
    }

    pub(crate) fn get(&self, id: ChunkId) -> &Chunk {
        match &self.slots[id.0] {
            Some(chunk) => chunk,
            None => unreachable!("chunk {} was freed while still linked", id.0),
        }
    }

    pub(crate) fn get_mut(&mut self, id: ChunkId) -> &mut Chunk {
        match &mut self.slots[id.0] {
            Some(chunk) => chunk,
            None => unreachable!("chunk {} was freed while still linked", id.0),
        }
    }

    /// Number of live chunks.
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_room() {
        let chunk = Chunk::new("abc".chars().collect());
        assert_eq!(chunk.len(), 3);
        assert_eq!(chunk.room(4), 1);
        assert_eq!(chunk.room(2), 0);
    }

    #[test]
    #[should_panic(expected = "freed twice")]
    fn test_arena_rejects_double_take() {
        let mut arena = ChunkArena::new();
        let a = arena.alloc(Chunk::new(vec!['a']));
        arena.take(a);
        arena.take(a);
    }

    #[test]
    fn test_arena_recycles_slots() {
        let mut arena = ChunkArena::new();
        let a = arena.alloc(Chunk::new(vec!['a']));
        let b = arena.alloc(Chunk::new(vec!['b']));
        assert_eq!(arena.live(), 2);

        let taken = arena.take(a);
        assert_eq!(taken.as_chars(), &['a']);
        assert_eq!(arena.live(), 1);

        let c = arena.alloc(Chunk::new(vec!['c']));
        assert_eq!(c, a);
        assert_eq!(arena.get(b).as_chars(), &['b']);
        assert_eq!(arena.get(c).as_chars(), &['c']);
    }

    #[test]
    fn test_arena_get_mut_links() {
        let mut arena = ChunkArena::new();
        let a = arena.alloc(Chunk::with_capacity(4));
        let b = arena.alloc(Chunk::with_capacity(4));
        arena.get_mut(a).next = Some(b);
        assert_eq!(arena.get(a).next, Some(b));
        assert_eq!(arena.get(b).len(), 0);
    }
}
