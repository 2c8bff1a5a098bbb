//! Shopping List Business Logic Helpers
//!
//! This module contains the pure functions behind the endpoints: payload
//! cleaning, the case-insensitive dedupe used by the recommended list, and
//! the reset merge.

use super::models::{ListEntry, RecommendedItem};

/// Trims every field and drops entries whose item is empty after trimming.
pub fn clean_entries(entries: Vec<ListEntry>) -> Vec<ListEntry> {
    entries
        .into_iter()
        .map(|e| ListEntry {
            item: e.item.trim().to_string(),
            quantity: e.quantity.trim().to_string(),
            category: e.category.trim().to_string(),
        })
        .filter(|e| !e.item.is_empty())
        .collect()
}

/// Trims every field and drops items whose name is empty after trimming.
pub fn clean_recommended(items: Vec<RecommendedItem>) -> Vec<RecommendedItem> {
    items
        .into_iter()
        .map(|r| RecommendedItem {
            item: r.item.trim().to_string(),
            category: r.category.trim().to_string(),
        })
        .filter(|r| !r.item.is_empty())
        .collect()
}

/// Dedupe key: the lowercased, trimmed item name.
fn item_key(item: &str) -> String {
    item.trim().to_lowercase()
}

/// Removes case-insensitive duplicates, keeping the first occurrence of each
/// item name (including its original casing and category).
pub fn dedupe_recommended(items: Vec<RecommendedItem>) -> Vec<RecommendedItem> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|r| {
            let key = item_key(&r.item);
            !key.is_empty() && seen.insert(key)
        })
        .collect()
}

/// Sorts items alphabetically by name, ignoring case. Ties on the folded key
/// fall back to the original string so the order is deterministic.
pub fn sort_recommended(items: &mut [RecommendedItem]) {
    items.sort_by(|a, b| {
        item_key(&a.item)
            .cmp(&item_key(&b.item))
            .then_with(|| a.item.cmp(&b.item))
    });
}

/// Folds the current shopping list into the recommended list.
///
/// Existing recommended items take priority on a name collision, so an item
/// keeps the casing and category it was first recommended with. The result
/// is deduped and sorted.
pub fn merge_into_recommended(
    existing: Vec<RecommendedItem>,
    entries: &[ListEntry],
) -> Vec<RecommendedItem> {
    let mut combined = existing;
    combined.extend(
        entries
            .iter()
            .map(|e| RecommendedItem::new(e.item.clone(), e.category.clone())),
    );

    let mut merged = dedupe_recommended(combined);
    sort_recommended(&mut merged);
    merged
}

/// Produces a human-readable one-line summary for a list of entries.
///
/// Example output: `"2x Apple, Milk"`.
pub fn format_entry_summary(entries: &[ListEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            if e.quantity.is_empty() {
                e.item.clone()
            } else {
                format!("{}x {}", e.quantity, e.item)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_entries_trims_and_drops_empty_items() {
        let cleaned = clean_entries(vec![
            ListEntry::new("  Milk ", " 2 ", " Drinks "),
            ListEntry::new("   ", "1", "Misc"),
            ListEntry::new("Bread", "", ""),
        ]);
        assert_eq!(
            cleaned,
            vec![
                ListEntry::new("Milk", "2", "Drinks"),
                ListEntry::new("Bread", "", ""),
            ]
        );
    }

    #[test]
    fn dedupe_is_case_insensitive_and_first_wins() {
        let deduped = dedupe_recommended(vec![
            RecommendedItem::new("Milk", "Drinks"),
            RecommendedItem::new("milk", "Dairy"),
            RecommendedItem::new("MILK", ""),
            RecommendedItem::new("Eggs", ""),
        ]);
        assert_eq!(
            deduped,
            vec![
                RecommendedItem::new("Milk", "Drinks"),
                RecommendedItem::new("Eggs", ""),
            ]
        );
    }

    #[test]
    fn sort_ignores_case() {
        let mut items = vec![
            RecommendedItem::new("bananas", ""),
            RecommendedItem::new("Apples", ""),
            RecommendedItem::new("cheese", ""),
        ];
        sort_recommended(&mut items);
        let names: Vec<_> = items.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(names, vec!["Apples", "bananas", "cheese"]);
    }

    #[test]
    fn merge_keeps_existing_recommended_on_collision() {
        let existing = vec![RecommendedItem::new("Milk", "Dairy")];
        let entries = vec![
            ListEntry::new("milk", "2", "Drinks"),
            ListEntry::new("Bread", "1", "Bakery"),
        ];

        let merged = merge_into_recommended(existing, &entries);
        assert_eq!(
            merged,
            vec![
                RecommendedItem::new("Bread", "Bakery"),
                RecommendedItem::new("Milk", "Dairy"),
            ]
        );
    }

    #[test]
    fn summary_skips_empty_quantities() {
        let entries = vec![
            ListEntry::new("Apple", "2", ""),
            ListEntry::new("Milk", "", "Drinks"),
        ];
        assert_eq!(format_entry_summary(&entries), "2x Apple, Milk");
    }
}
