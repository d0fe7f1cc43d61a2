use core::cmp::Ordering;

use heapless::Vec;
use log::warn;

use super::{GameItem, ItemList, ItemSource, SortMode};

/// In-memory game record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GameEntry<'a> {
    pub name: &'a str,
    /// Product code, e.g. `T-8101N`; also the art lookup key.
    pub product: &'a str,
    /// Release date as `YYYYMMDD`.
    pub date: &'a str,
    /// Loader slot used to boot the disc image.
    pub slot: u16,
}

impl<'a> GameEntry<'a> {
    pub const fn new(name: &'a str, product: &'a str, date: &'a str, slot: u16) -> Self {
        Self {
            name,
            product,
            date,
            slot,
        }
    }
}

impl GameItem for GameEntry<'_> {
    type LaunchId = u16;

    fn display_name(&self) -> &str {
        self.name
    }

    fn launch_id(&self) -> Self::LaunchId {
        self.slot
    }
}

/// Static catalog with all sort orders precomputed.
///
/// Holds at most `N` entries; anything past that is dropped at construction.
#[derive(Debug, Clone)]
pub struct StaticCatalog<'a, const N: usize> {
    entries: &'a [GameEntry<'a>],
    by_name: Vec<usize, N>,
    by_date: Vec<usize, N>,
    by_product: Vec<usize, N>,
}

impl<'a, const N: usize> StaticCatalog<'a, N> {
    pub fn new(entries: &'a [GameEntry<'a>]) -> Self {
        let entries = if entries.len() > N {
            warn!(
                "catalog: truncating entries total={} capacity={}",
                entries.len(),
                N
            );
            &entries[..N]
        } else {
            entries
        };

        Self {
            entries,
            by_name: sorted_order(entries, |a, b| compare_ignore_ascii_case(a.name, b.name)),
            by_date: sorted_order(entries, |a, b| a.date.cmp(b.date)),
            by_product: sorted_order(entries, |a, b| a.product.cmp(b.product)),
        }
    }

    pub fn entries(&self) -> &'a [GameEntry<'a>] {
        self.entries
    }
}

impl<'a, const N: usize> ItemSource for StaticCatalog<'a, N> {
    type Item = GameEntry<'a>;

    fn list(&self, sort: SortMode) -> ItemList<'_, Self::Item> {
        match sort {
            SortMode::Default => ItemList::new(self.entries),
            SortMode::Alpha => ItemList::ordered(self.entries, &self.by_name),
            SortMode::Date => ItemList::ordered(self.entries, &self.by_date),
            SortMode::Product => ItemList::ordered(self.entries, &self.by_product),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

fn sorted_order<const N: usize, F>(entries: &[GameEntry<'_>], compare: F) -> Vec<usize, N>
where
    F: Fn(&GameEntry<'_>, &GameEntry<'_>) -> Ordering,
{
    let mut order: Vec<usize, N> = (0..entries.len().min(N)).collect();
    // Ties fall back to catalog position so every order is deterministic.
    order.sort_unstable_by(|&a, &b| compare(&entries[a], &entries[b]).then(a.cmp(&b)));
    order
}

fn compare_ignore_ascii_case(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|byte| byte.to_ascii_lowercase())
        .cmp(b.bytes().map(|byte| byte.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAMES: [GameEntry<'static>; 4] = [
        GameEntry::new("Soul Calibur", "T-1401N", "19990909", 3),
        GameEntry::new("crazy Taxi", "MK-51035", "20000124", 1),
        GameEntry::new("Jet Grind Radio", "MK-51058", "20001031", 7),
        GameEntry::new("Chu Chu Rocket", "MK-51049", "20000309", 2),
    ];

    fn names<'a>(catalog: &StaticCatalog<'a, 8>, sort: SortMode) -> [&'a str; 4] {
        let list = catalog.list(sort);
        let mut out = [""; 4];
        for (slot, entry) in out.iter_mut().zip(list.iter()) {
            *slot = entry.name;
        }
        out
    }

    #[test]
    fn default_order_is_catalog_order() {
        let catalog = StaticCatalog::<8>::new(&GAMES);
        assert_eq!(
            names(&catalog, SortMode::Default),
            ["Soul Calibur", "crazy Taxi", "Jet Grind Radio", "Chu Chu Rocket"]
        );
    }

    #[test]
    fn name_sort_ignores_ascii_case() {
        let catalog = StaticCatalog::<8>::new(&GAMES);
        assert_eq!(
            names(&catalog, SortMode::Alpha),
            ["Chu Chu Rocket", "crazy Taxi", "Jet Grind Radio", "Soul Calibur"]
        );
    }

    #[test]
    fn date_and_product_sorts() {
        let catalog = StaticCatalog::<8>::new(&GAMES);
        assert_eq!(
            names(&catalog, SortMode::Date),
            ["Soul Calibur", "crazy Taxi", "Chu Chu Rocket", "Jet Grind Radio"]
        );
        assert_eq!(
            names(&catalog, SortMode::Product),
            ["crazy Taxi", "Chu Chu Rocket", "Jet Grind Radio", "Soul Calibur"]
        );
    }

    #[test]
    fn every_order_has_the_same_length() {
        let catalog = StaticCatalog::<8>::new(&GAMES);
        for sort in [
            SortMode::Default,
            SortMode::Alpha,
            SortMode::Date,
            SortMode::Product,
        ] {
            assert_eq!(catalog.list(sort).len(), 4);
        }
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn oversized_input_is_truncated_to_capacity() {
        let catalog = StaticCatalog::<2>::new(&GAMES);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.list(SortMode::Alpha).len(), 2);
    }

    #[test]
    fn launch_id_is_loader_slot() {
        assert_eq!(GAMES[2].launch_id(), 7);
        assert_eq!(GAMES[2].display_name(), "Jet Grind Radio");
    }
}
