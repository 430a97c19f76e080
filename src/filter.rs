//! Category Filtering
//!
//! Pure helpers for the category picker and the filtered item grid.

use std::collections::HashSet;

use crate::models::{Category, Item, ALL_CATEGORY};

/// Build a picker list: `"All"` first, then each name once in first-seen order.
/// A literal `"All"` in the input is folded into the sentinel.
fn with_all_sentinel<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    seen.insert(ALL_CATEGORY);

    let mut result = vec![ALL_CATEGORY.to_string()];
    for name in names {
        if seen.insert(name) {
            result.push(name.to_string());
        }
    }
    result
}

/// Provisional category names derived from the items' category fields
pub fn category_names_from_items(items: &[Item]) -> Vec<String> {
    with_all_sentinel(items.iter().map(|item| item.category.as_str()))
}

/// Canonical category names from `GET /categories`
pub fn category_names_from_categories(categories: &[Category]) -> Vec<String> {
    with_all_sentinel(categories.iter().map(|category| category.name.as_str()))
}

/// Items visible under `selected`.
///
/// `"All"` keeps everything; anything else is an exact, case-sensitive match.
pub fn filter_items(items: &[Item], selected: &str) -> Vec<Item> {
    if selected == ALL_CATEGORY {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.category == selected)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, category: &str) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            category: category.to_string(),
            image_name: String::new(),
        }
    }

    fn make_items(categories: &[&str]) -> Vec<Item> {
        categories
            .iter()
            .enumerate()
            .map(|(i, c)| make_item(i as u32 + 1, c))
            .collect()
    }

    #[test]
    fn test_derived_categories_first_seen_order() {
        let items = make_items(&["A", "B", "A", ""]);
        assert_eq!(category_names_from_items(&items), ["All", "A", "B", ""]);
    }

    #[test]
    fn test_derived_categories_empty_input() {
        assert_eq!(category_names_from_items(&[]), ["All"]);
    }

    #[test]
    fn test_all_appears_once_even_if_item_uses_it() {
        let items = make_items(&["All", "Books", "All"]);
        let names = category_names_from_items(&items);
        assert_eq!(names, ["All", "Books"]);
        assert_eq!(names.iter().filter(|n| *n == "All").count(), 1);
    }

    #[test]
    fn test_canonical_categories_deduplicated() {
        let categories = vec![
            Category { id: 1, name: "Footwear".into() },
            Category { id: 2, name: "Kitchen".into() },
            Category { id: 3, name: "Footwear".into() },
            Category { id: 4, name: "All".into() },
        ];
        assert_eq!(
            category_names_from_categories(&categories),
            ["All", "Footwear", "Kitchen"]
        );
    }

    #[test]
    fn test_filter_all_returns_everything() {
        let items = make_items(&["A", "B", ""]);
        assert_eq!(filter_items(&items, "All"), items);
    }

    #[test]
    fn test_filter_exact_match() {
        let items = make_items(&["A", "B", "A", "AB", "a"]);
        let filtered = filter_items(&items, "A");
        let ids: Vec<u32> = filtered.iter().map(|i| i.id).collect();
        assert_eq!(ids, [1, 3]);
        assert!(filtered.iter().all(|i| i.category == "A"));
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let items = make_items(&["A", "B"]);
        assert!(filter_items(&items, "Garden").is_empty());
    }

    #[test]
    fn test_filter_empty_category_bucket() {
        let items = make_items(&["A", "", "B", ""]);
        let ids: Vec<u32> = filter_items(&items, "").iter().map(|i| i.id).collect();
        assert_eq!(ids, [2, 4]);
    }
}
