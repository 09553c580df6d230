use axum::response::Html;
use axum::routing::get;
use axum::Router;

const INDEX_PAGE: &str = include_str!("index.html");

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Router for the landing page at `/`.
pub fn router() -> Router {
    Router::new().route("/", get(index))
}
