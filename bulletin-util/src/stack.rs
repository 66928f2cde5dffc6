use crate::{BulletinId, Level};

#[derive(Debug, Clone)]
struct Entry<T> {
    id: BulletinId,
    level: Level,
    value: T,
}

/// Z-order of simultaneously visible bulletins.
///
/// Entries are kept bottom to top, ordered by [`Level`]. Entries sharing a
/// level are ordered by insertion: the one pushed last renders on top.
#[derive(Debug, Clone)]
pub struct BulletinStack<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for BulletinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BulletinStack<T> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Insert `value` above everything at or below `level`.
    ///
    /// An entry already using `id` is replaced and its value returned.
    pub fn push(&mut self, id: BulletinId, level: Level, value: T) -> Option<T> {
        let previous = self.remove(id);
        let index = self.entries.partition_point(|e| e.level <= level);
        self.entries.insert(index, Entry { id, level, value });
        previous
    }

    pub fn remove(&mut self, id: BulletinId) -> Option<T> {
        let pos = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(pos).value)
    }

    /// Remove and return the entry at the bottom of the stack.
    pub fn pop_bottom(&mut self) -> Option<(BulletinId, T)> {
        if self.entries.is_empty() {
            return None;
        }
        let entry = self.entries.remove(0);
        Some((entry.id, entry.value))
    }

    pub fn get(&self, id: BulletinId) -> Option<&T> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.value)
    }

    pub fn contains(&self, id: BulletinId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn level_of(&self, id: BulletinId) -> Option<Level> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.level)
    }

    pub fn topmost(&self) -> Option<(BulletinId, &T)> {
        self.entries.last().map(|e| (e.id, &e.value))
    }

    pub fn bottommost(&self) -> Option<(BulletinId, &T)> {
        self.entries.first().map(|e| (e.id, &e.value))
    }

    /// Entries at exactly `level`, bottom to top.
    pub fn at_level(&self, level: Level) -> impl Iterator<Item = (BulletinId, &T)> {
        self.entries
            .iter()
            .filter(move |e| e.level == level)
            .map(|e| (e.id, &e.value))
    }

    /// All entries, bottom to top.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (BulletinId, Level, &T)> {
        self.entries.iter().map(|e| (e.id, e.level, &e.value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
