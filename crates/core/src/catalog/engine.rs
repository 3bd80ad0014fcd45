//! The catalogue derivation pipeline.
//!
//! Pure functions over an immutable resource snapshot: search filter, type
//! filter, category filter, sort, paginate, in that fixed order. The UI (or
//! the HTTP layer) owns a [`CatalogueQuery`] and re-derives the visible page
//! after every mutation; nothing here touches the network or storage.

use std::collections::HashSet;
use std::sync::Arc;

use crate::downloads::DownloadTracker;
use crate::resource::Resource;

use super::types::{CataloguePage, CatalogueQuery, SortOption};

/// Derive the visible page from the snapshot and query state.
///
/// `downloaded` feeds the downloaded-first sort; pass an empty set when the
/// sort option does not need it. The effective page is clamped into
/// `[1, total_pages]` so a stale cursor (e.g. after a page-size change)
/// never yields an empty page while matches exist.
pub fn visible_page(
    snapshot: &[Resource],
    query: &CatalogueQuery,
    downloaded: &HashSet<String>,
) -> CataloguePage {
    let mut filtered: Vec<&Resource> = snapshot.iter().collect();

    let search = query.search_text().trim().to_lowercase();
    if !search.is_empty() {
        filtered.retain(|r| {
            r.unit_name.to_lowercase().contains(&search)
                || r.file_name.to_lowercase().contains(&search)
        });
    }

    if let Some(selected) = query.selected_type() {
        filtered.retain(|r| r.resource_type == selected);
    }

    if !query.selected_categories().is_empty() {
        filtered.retain(|r| {
            query
                .selected_categories()
                .iter()
                .any(|c| c == &r.resource_type)
        });
    }

    // All comparators rely on sort_by/sort_by_key being stable: ties keep
    // the snapshot (newest-first) order.
    match query.sort() {
        SortOption::DateAsc => {
            filtered.sort_by_key(|r| r.year_completed.unwrap_or(0));
        }
        SortOption::DateDesc => {
            filtered.sort_by_key(|r| std::cmp::Reverse(r.year_completed.unwrap_or(0)));
        }
        SortOption::NameAsc => {
            filtered.sort_by(|a, b| a.unit_name.cmp(&b.unit_name));
        }
        SortOption::NameDesc => {
            filtered.sort_by(|a, b| b.unit_name.cmp(&a.unit_name));
        }
        SortOption::DownloadedFirst => {
            filtered.sort_by_key(|r| !downloaded.contains(&r.id));
        }
    }

    let total_count = filtered.len();
    let per_page = query.per_page();
    let total_pages = total_count.div_ceil(per_page);
    let page = query.page().min(total_pages).max(1);

    let start = (page - 1) * per_page;
    let items = filtered
        .into_iter()
        .skip(start)
        .take(per_page)
        .cloned()
        .collect();

    CataloguePage {
        items,
        total_count,
        total_pages,
        page,
    }
}

/// Category filter options: "all" plus each distinct resource type in
/// first-appearance order.
pub fn category_options(snapshot: &[Resource]) -> Vec<String> {
    let mut options = vec!["all".to_string()];
    let mut seen = HashSet::new();
    for resource in snapshot {
        if seen.insert(resource.resource_type.as_str()) {
            options.push(resource.resource_type.clone());
        }
    }
    options
}

/// Stateful facade over the pipeline: one immutable snapshot for the
/// session, one query state, and the download tracker for the
/// downloaded-first sort.
pub struct CatalogueEngine {
    snapshot: Vec<Resource>,
    query: CatalogueQuery,
    tracker: Arc<dyn DownloadTracker>,
}

impl CatalogueEngine {
    pub fn new(snapshot: Vec<Resource>, tracker: Arc<dyn DownloadTracker>) -> Self {
        Self {
            snapshot,
            query: CatalogueQuery::new(),
            tracker,
        }
    }

    pub fn query(&self) -> &CatalogueQuery {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut CatalogueQuery {
        &mut self.query
    }

    pub fn snapshot(&self) -> &[Resource] {
        &self.snapshot
    }

    pub fn category_options(&self) -> Vec<String> {
        category_options(&self.snapshot)
    }

    /// Recompute the visible page for the current query state.
    pub fn visible_page(&self) -> CataloguePage {
        let downloaded: HashSet<String> = self.tracker.downloaded_ids().into_iter().collect();
        visible_page(&self.snapshot, &self.query, &downloaded)
    }
}
