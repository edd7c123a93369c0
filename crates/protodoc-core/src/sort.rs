//! Name ordering for sibling fields and enum values
//!
//! Copyright (c) 2025 Protodoc Team
//! Licensed under the BSD-2-Clause license

/// An item ordered among its siblings by a single name key
pub trait SortKey {
    fn sort_key(&self) -> &str;
}

/// Stable ascending sort by each item's own key
pub fn sort_by_name<T: SortKey>(items: &mut [T]) {
    items.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
}
