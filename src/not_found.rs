//! Defines the page to display when a page or expense does not exist.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

pub struct NotFoundPage<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for NotFoundPage<'_> {
    fn default() -> Self {
        Self {
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. Check the address or head back to your expenses.",
        }
    }
}

impl IntoResponse for NotFoundPage<'_> {
    fn into_response(self) -> Response {
        (
            StatusCode::NOT_FOUND,
            Html(error_view("Not Found", "404", self.description, self.fix).into_string()),
        )
            .into_response()
    }
}

/// The fallback route handler for paths that do not match any route.
pub async fn get_404_not_found() -> Response {
    NotFoundPage::default().into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::test_utils::{assert_content_type, assert_valid_html, parse_html_document};

    use super::get_404_not_found;

    #[tokio::test]
    async fn renders_404_page() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
    }
}
