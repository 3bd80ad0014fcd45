//! Catalogue API handler - runs the filter/sort/paginate pipeline over the
//! verified snapshot for clients that want a derived page instead of the
//! raw list.

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use paperstack_core::{
    category_options, visible_page, CatalogueQuery, LayoutType, Resource, SortOption,
};

use crate::state::AppState;

use super::ErrorResponse;

#[derive(Debug, Deserialize)]
pub struct CatalogueParams {
    #[serde(default)]
    pub search: Option<String>,
    /// Single type filter; "all" or absent means no filter.
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    /// Comma-separated multi-select category filter.
    #[serde(default)]
    pub categories: Option<String>,
    #[serde(default)]
    pub sort: Option<SortOption>,
    #[serde(default)]
    pub layout: Option<LayoutType>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub per_page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CatalogueResponse {
    pub items: Vec<Resource>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page: usize,
    pub grid_classes: &'static str,
    pub category_options: Vec<String>,
}

/// GET /api/v1/catalogue
pub async fn get_catalogue(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CatalogueParams>,
) -> Result<Json<CatalogueResponse>, impl IntoResponse> {
    let snapshot = match state.resources().list_verified() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!("Failed to load catalogue snapshot: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ));
        }
    };

    let mut query = CatalogueQuery::new();
    if let Some(search) = params.search {
        query.set_search_text(search);
    }
    match params.resource_type.as_deref() {
        None | Some("all") | Some("") => {}
        Some(value) => query.set_resource_type(Some(value.to_string())),
    }
    if let Some(categories) = params.categories.as_deref() {
        let selected: Vec<String> = categories
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from)
            .collect();
        if !selected.is_empty() {
            query.set_categories(selected);
        }
    }
    if let Some(sort) = params.sort {
        query.set_sort(sort);
    }
    query.set_layout(params.layout.unwrap_or_default());
    query.set_per_page(
        params
            .per_page
            .unwrap_or(state.config().catalogue.default_per_page),
    );
    // Last, so the filter setters above cannot clobber an explicit cursor.
    query.set_page(params.page.unwrap_or(1));

    let downloaded: HashSet<String> = state.downloads().downloaded_ids().into_iter().collect();
    let page = visible_page(&snapshot, &query, &downloaded);

    Ok(Json(CatalogueResponse {
        grid_classes: query.layout().grid_classes(),
        category_options: category_options(&snapshot),
        items: page.items,
        total_count: page.total_count,
        total_pages: page.total_pages,
        page: page.page,
    }))
}
