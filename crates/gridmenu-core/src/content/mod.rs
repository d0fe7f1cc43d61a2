//! Game list collaborators.
//!
//! The menu never owns or mutates the backing list. Each frame it asks the
//! [`ItemSource`] for the list in the active [`SortMode`] and only reads its
//! length and entries.

mod static_catalog;

pub use static_catalog::{GameEntry, StaticCatalog};

/// Ordering applied to the backing list. Cycles in declaration order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortMode {
    #[default]
    Default,
    Alpha,
    Date,
    Product,
}

impl SortMode {
    pub const fn next(self) -> Self {
        match self {
            Self::Default => Self::Alpha,
            Self::Alpha => Self::Date,
            Self::Date => Self::Product,
            Self::Product => Self::Default,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Alpha => "Name",
            Self::Date => "Date",
            Self::Product => "Product",
        }
    }
}

/// One launchable entry.
pub trait GameItem {
    /// Opaque handle passed back to the launcher.
    type LaunchId: Copy;

    fn display_name(&self) -> &str;
    fn launch_id(&self) -> Self::LaunchId;
}

/// Launch identifier of the items served by `S`.
pub type LaunchIdOf<S> = <<S as ItemSource>::Item as GameItem>::LaunchId;

/// Read-only ordered view over a backing slice, optionally through an index
/// table holding a sorted permutation.
#[derive(Debug)]
pub struct ItemList<'a, T> {
    items: &'a [T],
    order: Option<&'a [usize]>,
}

impl<T> Clone for ItemList<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ItemList<'_, T> {}

impl<'a, T> ItemList<'a, T> {
    pub const fn new(items: &'a [T]) -> Self {
        Self { items, order: None }
    }

    pub const fn ordered(items: &'a [T], order: &'a [usize]) -> Self {
        Self {
            items,
            order: Some(order),
        }
    }

    pub fn len(&self) -> usize {
        match self.order {
            Some(order) => order.len(),
            None => self.items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        match self.order {
            Some(order) => order.get(index).and_then(|&slot| self.items.get(slot)),
            None => self.items.get(index),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        (0..self.len()).filter_map(|index| self.get(index))
    }
}

/// Backing list provider. Indices must stay stable for at least one frame.
pub trait ItemSource {
    type Item: GameItem;

    fn list(&self, sort: SortMode) -> ItemList<'_, Self::Item>;

    fn len(&self) -> usize {
        self.list(SortMode::Default).len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_mode_cycles() {
        let mut mode = SortMode::default();
        let mut seen = [SortMode::Default; 4];
        for slot in seen.iter_mut() {
            *slot = mode;
            mode = mode.next();
        }

        assert_eq!(
            seen,
            [
                SortMode::Default,
                SortMode::Alpha,
                SortMode::Date,
                SortMode::Product
            ]
        );
        assert_eq!(mode, SortMode::Default);
    }

    #[test]
    fn ordered_list_reads_through_permutation() {
        let items = ["a", "b", "c"];
        let order = [2, 0, 1];
        let list = ItemList::ordered(&items, &order);

        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0), Some(&"c"));
        assert_eq!(list.get(3), None);
        assert_eq!(list.iter().copied().collect::<std::vec::Vec<_>>(), ["c", "a", "b"]);
    }
}
