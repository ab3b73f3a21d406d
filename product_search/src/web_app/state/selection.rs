// web_app/state/selection.rs - Ordered, id-unique selection set

use crate::web_app::model::Keyed;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectMode {
    /// Each selection replaces the previous one
    #[default]
    Single,
    /// Selections accumulate in insertion order
    Multiple,
}

impl SelectMode {
    pub fn from_allow_multiple(allow_multiple: bool) -> Self {
        if allow_multiple {
            SelectMode::Multiple
        } else {
            SelectMode::Single
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Selection<T> {
    mode: SelectMode,
    items: Vec<T>,
}

impl<T: Keyed + Clone> Selection<T> {
    pub fn new(mode: SelectMode) -> Self {
        Self {
            mode,
            items: Vec::new(),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.items.iter().any(|item| item.key() == *key)
    }

    /// Add `item`. Returns the updated set to report, or `None` when the
    /// item was already selected and nothing changed.
    pub fn select(&mut self, item: T) -> Option<&[T]> {
        if self.contains(&item.key()) {
            return None;
        }
        match self.mode {
            SelectMode::Single => {
                self.items.clear();
                self.items.push(item);
            }
            SelectMode::Multiple => self.items.push(item),
        }
        Some(&self.items)
    }

    /// Remove by key. Always returns the resulting set, which is reported
    /// even if it is empty or nothing matched.
    pub fn remove(&mut self, key: &T::Key) -> &[T] {
        self.items.retain(|item| item.key() != *key);
        &self.items
    }
}
