//! Errors raised by page handlers and database queries.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Page not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Headline and hint shown to the customer
    fn page_text(&self) -> (&'static str, &'static str) {
        match self {
            AppError::NotFound => (
                "Page not found",
                "That page isn't on our route. Our rates and discounts are on the pricing page.",
            ),
            AppError::Database(_) => (
                "Pricing data unavailable",
                "We couldn't load the latest rates. Please try again in a moment.",
            ),
            AppError::Template(_) => (
                "Something went wrong",
                "We couldn't render this page. Quotes are still available from /api/pricing/quote.",
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound => tracing::debug!("Unknown page requested"),
            AppError::Database(e) => tracing::error!("Database error: {}", e),
            AppError::Template(e) => tracing::error!("Template error: {}", e),
        }

        let status = self.status();
        let (headline, hint) = self.page_text();
        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{headline} | LuggageGuard</title></head>
<body>
    <main>
        <p>Error {code}</p>
        <h1>{headline}</h1>
        <p>{hint}</p>
        <a href="/">See pricing</a>
    </main>
</body>
</html>"#,
            code = status.as_u16(),
        );

        (status, Html(html)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
