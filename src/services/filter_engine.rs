//! Search filtering and category grouping.
//!
//! Both are recomputed from the full collection on every render; the
//! collection is small enough that nothing is cached.

use serde::Serialize;

use crate::types::category::Category;
use crate::types::entry::Entry;

/// The entries of one category, in collection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: Category,
    pub entries: Vec<&'a Entry>,
}

impl CategoryGroup<'_> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// True if `term` occurs, ignoring case, in the title, url, description or
/// category name. An empty term matches every entry.
pub fn matches(entry: &Entry, term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        entry.title.as_str(),
        entry.url.as_str(),
        entry.description.as_str(),
        entry.category.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Entries matching `term`, in their original order.
pub fn filter<'a>(entries: &'a [Entry], term: &str) -> Vec<&'a Entry> {
    entries.iter().filter(|e| matches(e, term)).collect()
}

/// Splits `entries` into one group per category, in `Category::ALL` order.
///
/// Always returns all eight groups; categories without entries get an
/// empty group.
pub fn group<'a, I>(entries: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut groups: Vec<CategoryGroup<'a>> = Category::ALL
        .iter()
        .map(|&category| CategoryGroup {
            category,
            entries: Vec::new(),
        })
        .collect();

    for entry in entries {
        groups[entry.category.index()].entries.push(entry);
    }
    groups
}

/// `filter` followed by `group`.
pub fn filter_and_group<'a>(entries: &'a [Entry], term: &str) -> Vec<CategoryGroup<'a>> {
    group(filter(entries, term))
}
