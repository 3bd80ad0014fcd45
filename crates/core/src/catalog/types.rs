//! Types for the catalogue engine.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// Allowed page sizes for the catalogue.
pub const PER_PAGE_OPTIONS: [usize; 4] = [18, 27, 36, 45];

/// Debounce window for search input, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Oldest exam year first (`year_completed`, missing treated as 0).
    DateAsc,
    /// Newest exam year first. The default, matching the snapshot order.
    #[default]
    DateDesc,
    /// Unit name A-Z.
    NameAsc,
    /// Unit name Z-A.
    NameDesc,
    /// Already-downloaded resources first, otherwise stable.
    DownloadedFirst,
}

/// Page layout. Affects rendering and the grid class, never filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LayoutType {
    Compact,
    #[default]
    Grid,
    Row,
}

impl LayoutType {
    /// CSS grid classes for this layout, as consumed by the dashboard.
    pub fn grid_classes(&self) -> &'static str {
        match self {
            LayoutType::Compact => {
                "grid-cols-1 xs:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-4"
            }
            LayoutType::Grid => "grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6",
            LayoutType::Row => "grid-cols-1 gap-4",
        }
    }
}

/// Mutable query state driving the filter -> sort -> paginate pipeline.
///
/// Fields are private; mutation goes through the setters so the page-reset
/// invariant cannot be bypassed: any change to search text, type, categories
/// or sort snaps the page back to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogueQuery {
    search_text: String,
    selected_type: Option<String>,
    selected_categories: Vec<String>,
    sort: SortOption,
    layout: LayoutType,
    page: usize,
    per_page: usize,
}

impl Default for CatalogueQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            selected_type: None,
            selected_categories: Vec::new(),
            sort: SortOption::default(),
            layout: LayoutType::default(),
            page: 1,
            per_page: PER_PAGE_OPTIONS[0],
        }
    }
}

impl CatalogueQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply debounced search text. Resets to page 1.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    /// Select a single resource type, or `None` for "all". Resets to page 1.
    pub fn set_resource_type(&mut self, value: Option<String>) {
        self.selected_type = value;
        self.page = 1;
    }

    /// Replace the multi-select category set. Resets to page 1.
    pub fn set_categories(&mut self, categories: Vec<String>) {
        self.selected_categories = categories;
        self.page = 1;
    }

    /// Change the sort order. Resets to page 1.
    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
        self.page = 1;
    }

    /// Change the layout. Does not touch pagination.
    pub fn set_layout(&mut self, layout: LayoutType) {
        self.layout = layout;
    }

    /// Jump to a page. Floored at 1; out-of-range pages are clamped at
    /// derivation time so the rendered page always stays in bounds.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the page size. Floored at 1; the UI offers [`PER_PAGE_OPTIONS`]
    /// but the pipeline itself takes any size.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_type(&self) -> Option<&str> {
        self.selected_type.as_deref()
    }

    pub fn selected_categories(&self) -> &[String] {
        &self.selected_categories
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn layout(&self) -> LayoutType {
        self.layout
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }
}

/// One derived page of the catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct CataloguePage {
    /// Resources visible on this page, in final order.
    pub items: Vec<Resource>,
    /// Size of the filtered set before slicing.
    pub total_count: usize,
    /// `ceil(total_count / per_page)`; 0 when the filtered set is empty.
    pub total_pages: usize,
    /// The effective (clamped) page that was sliced.
    pub page: usize,
}

impl CataloguePage {
    /// Distinct empty state: nothing matched the filters at all, as opposed
    /// to an in-range page that happens to have fewer items.
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_option_serialization() {
        assert_eq!(
            serde_json::to_string(&SortOption::DateDesc).unwrap(),
            "\"date-desc\""
        );
        assert_eq!(
            serde_json::to_string(&SortOption::DownloadedFirst).unwrap(),
            "\"downloaded-first\""
        );
        let parsed: SortOption = serde_json::from_str("\"name-asc\"").unwrap();
        assert_eq!(parsed, SortOption::NameAsc);
    }

    #[test]
    fn test_layout_serialization_and_default() {
        assert_eq!(
            serde_json::to_string(&LayoutType::Compact).unwrap(),
            "\"compact\""
        );
        assert_eq!(LayoutType::default(), LayoutType::Grid);
    }

    #[test]
    fn test_grid_classes_per_layout() {
        assert!(LayoutType::Compact.grid_classes().contains("xl:grid-cols-5"));
        assert!(LayoutType::Grid.grid_classes().contains("lg:grid-cols-3"));
        assert_eq!(LayoutType::Row.grid_classes(), "grid-cols-1 gap-4");
    }

    #[test]
    fn test_filter_mutations_reset_page() {
        let mut query = CatalogueQuery::new();
        query.set_page(4);
        query.set_search_text("algebra");
        assert_eq!(query.page(), 1);

        query.set_page(4);
        query.set_resource_type(Some("past_paper".to_string()));
        assert_eq!(query.page(), 1);

        query.set_page(4);
        query.set_categories(vec!["lesson_notes".to_string()]);
        assert_eq!(query.page(), 1);

        query.set_page(4);
        query.set_sort(SortOption::NameAsc);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_layout_and_per_page_do_not_reset_page() {
        let mut query = CatalogueQuery::new();
        query.set_page(3);
        query.set_layout(LayoutType::Row);
        query.set_per_page(27);
        assert_eq!(query.page(), 3);
        assert_eq!(query.per_page(), 27);
    }

    #[test]
    fn test_per_page_floored_at_one() {
        let mut query = CatalogueQuery::new();
        query.set_per_page(0);
        assert_eq!(query.per_page(), 1);
    }

    #[test]
    fn test_page_floored_at_one() {
        let mut query = CatalogueQuery::new();
        query.set_page(0);
        assert_eq!(query.page(), 1);
    }
}
