use axum::response::Html;

/// Landing page with forms for the three write/read operations.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../views/index.html"))
}
