//! The map page.

use axum::response::Html;

const MAP_PAGE: &str = include_str!("../../assets/map.html");

/// GET / - Map page
pub async fn map_page_handler() -> Html<&'static str> {
    Html(MAP_PAGE)
}
