//! Menu snapshot.
//!
//! The menu is reference data loaded once at startup. It is never mutated
//! afterwards; the service holds it behind an `Arc` and every request reads
//! the same snapshot.
//!
//! Two views are kept: the file entries exactly as parsed (served by
//! `GET /menu`) and the orderable items derived from them (used for pricing).

use serde_json::{Value, json};

/// An orderable dish: an entry with a string `name` and a numeric `price`.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// `None` when the entry lacks a string `name` or a numeric `price`.
    #[must_use]
    pub fn from_entry(entry: &Value) -> Option<Self> {
        let name = entry.get("name")?.as_str()?;
        let price = entry.get("price")?.as_f64()?;
        Some(Self::new(name, price))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Menu {
    entries: Vec<Value>,
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu from orderable items; each becomes a `{name, price}` entry.
    #[must_use]
    pub fn new(items: Vec<MenuItem>) -> Self {
        let entries = items
            .iter()
            .map(|item| json!({"name": item.name, "price": item.price}))
            .collect();
        Self { entries, items }
    }

    /// Keep `entries` verbatim. Entries that are not orderable stay visible
    /// in the listing but cannot be ordered.
    #[must_use]
    pub fn from_entries(entries: Vec<Value>) -> Self {
        let items = entries.iter().filter_map(MenuItem::from_entry).collect();
        Self { entries, items }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The entries as loaded.
    #[must_use]
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Exact, case-sensitive lookup by name. The first entry wins on duplicates.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_exact_match() {
        let menu = Menu::new(vec![MenuItem::new("Pizza", 12.5), MenuItem::new("Soup", 4.0)]);

        assert_eq!(menu.find("Pizza").map(|i| i.price), Some(12.5));
        assert!(menu.find("pizza").is_none());
        assert!(menu.find("Pizz").is_none());
    }

    #[test]
    fn entries_are_kept_verbatim() {
        let raw = vec![
            json!({"name": "Pizza", "price": 12, "category": "mains", "image": "pizza.jpg"}),
            json!({"name": "Soup", "price": 4.5}),
        ];

        let menu = Menu::from_entries(raw.clone());

        assert_eq!(menu.entries(), raw.as_slice());
        assert_eq!(menu.find("Pizza").map(|i| i.price), Some(12.0));
    }

    #[test]
    fn entries_without_numeric_price_are_listed_but_not_orderable() {
        let raw = vec![
            json!({"name": "Soup", "price": 4.5}),
            json!({"name": "Special", "price": "ask"}),
            json!({"price": 3}),
            json!("Water"),
        ];

        let menu = Menu::from_entries(raw);

        assert_eq!(menu.len(), 4);
        assert_eq!(menu.items(), [MenuItem::new("Soup", 4.5)]);
        assert!(menu.find("Special").is_none());
    }
}
