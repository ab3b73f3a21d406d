// web_app/state/dropdown.rs - Autocomplete dropdown state machine
//
// Open/closed flag, highlighted row, keyboard handling, client-side
// filtering and the decision of what the open dropdown shows. The
// SearchInput component is a thin reactive shell around these.

use crate::web_app::model::Product;

/// Rows from the end of the list at which "load more" triggers
pub const SENTINEL_OFFSET: usize = 4;

/// Keys the dropdown reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(NavKey::ArrowDown),
            "ArrowUp" => Some(NavKey::ArrowUp),
            "Enter" => Some(NavKey::Enter),
            "Escape" => Some(NavKey::Escape),
            _ => None,
        }
    }
}

/// Result of a key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Dropdown closed or list empty; the key was not consumed
    Ignored,
    Moved,
    Closed,
    /// Select the row at this index of the filtered list
    Select(usize),
    /// Enter with nothing highlighted
    NoHighlight,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dropdown {
    open: bool,
    highlighted: Option<usize>,
}

impl Dropdown {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pointer hover moves the cursor straight to the hovered row
    pub fn hover(&mut self, index: usize) {
        self.highlighted = Some(index);
    }

    /// Handle a navigation key against a filtered list of `len` rows.
    ///
    /// Escape closes whenever the dropdown is open; the other keys need rows.
    pub fn handle_key(&mut self, key: NavKey, len: usize) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::Ignored;
        }
        if key == NavKey::Escape {
            self.open = false;
            return KeyOutcome::Closed;
        }
        if len == 0 {
            return KeyOutcome::Ignored;
        }

        match key {
            NavKey::ArrowDown => {
                self.highlighted = Some(match self.highlighted {
                    None => 0,
                    Some(i) if i + 1 < len => i + 1,
                    Some(i) => i,
                });
                KeyOutcome::Moved
            }
            NavKey::ArrowUp => {
                if let Some(i) = self.highlighted {
                    self.highlighted = Some(i.saturating_sub(1));
                }
                KeyOutcome::Moved
            }
            NavKey::Enter => match self.highlighted {
                Some(i) if i < len => KeyOutcome::Select(i),
                _ => KeyOutcome::NoHighlight,
            },
            NavKey::Escape => KeyOutcome::Closed,
        }
    }
}

/// What the dropdown renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownView {
    Closed,
    Error,
    /// Nothing matched and nothing is loading
    Empty,
    /// Nothing to show yet, a fetch is in flight
    Loading,
    /// Rows, optionally followed by a loading row
    Results { loading_row: bool },
}

impl DropdownView {
    pub fn resolve(open: bool, is_error: bool, row_count: usize, is_loading: bool) -> Self {
        if !open {
            DropdownView::Closed
        } else if is_error {
            DropdownView::Error
        } else if row_count == 0 && !is_loading {
            DropdownView::Empty
        } else if row_count == 0 {
            DropdownView::Loading
        } else {
            DropdownView::Results {
                loading_row: is_loading,
            }
        }
    }
}

/// Local filter over already fetched products.
///
/// Empty query keeps everything; otherwise case-insensitive substring
/// match on the title.
pub fn filter_by_title(items: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Index of the row whose visibility requests the next page
pub fn sentinel_index(len: usize) -> Option<usize> {
    len.checked_sub(SENTINEL_OFFSET)
}
