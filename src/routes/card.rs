use std::sync::Arc;

use poem::web::Data;
use poem_openapi::{
    OpenApi, Tags,
    param::{Path, Query},
    payload::{Binary, Html, Json},
};

use crate::{
    AppState,
    core::request::{CardQuery, FileType, ParsedRequest},
    schemas::{
        card::{CACHE_CONTROL, CardResponse, HealthResponse},
        common::InternalServerErrorResponse,
    },
};

#[derive(Tags)]
enum ApiCardTags {
    Card,
}

pub struct ApiCard;

#[OpenApi()]
impl ApiCard {
    #[oai(path = "/health", method = "get")]
    async fn health(&self, state: Data<&Arc<AppState>>) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            browser_running: state.engine.is_browser_running(),
        })
    }

    /// Card image
    ///
    /// Render an Open Graph card for `<text>.<png|jpeg>`. The heading text is
    /// the path segment without its extension.
    ///
    /// # Example Request
    /// ```text
    /// GET /**Hello**%20World.png?md=1&theme=%23111&images=https://example.com/logo.svg
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[oai(path = "/:text", method = "get", tag = "ApiCardTags::Card")]
    async fn card(
        &self,
        Path(text): Path<String>,
        Query(theme): Query<Option<String>>,
        Query(md): Query<Option<String>>,
        #[oai(name = "fontSize")] Query(font_size): Query<Option<String>>,
        Query(images): Query<Option<Vec<String>>>,
        Query(widths): Query<Option<Vec<String>>>,
        Query(heights): Query<Option<Vec<String>>>,
        state: Data<&Arc<AppState>>,
    ) -> CardResponse {
        let request = ParsedRequest::parse(
            &text,
            CardQuery {
                theme,
                md,
                font_size,
                images: images.unwrap_or_default(),
                widths: widths.unwrap_or_default(),
                heights: heights.unwrap_or_default(),
            },
        );
        tracing::info!(
            "Rendering card: type={}, md={}, images={}",
            request.file_type.mime_type(),
            request.md,
            request.images.len()
        );

        let html = state.document.render(&request);
        if state.html_debug {
            return CardResponse::Document(Html(html));
        }

        let result = match state.engine.render(html, request.file_type).await {
            Ok(res) => res,
            Err(e) => {
                tracing::error!("Render error: {}", e);
                return CardResponse::InternalServerError(Json(InternalServerErrorResponse::new(
                    "route.card",
                    "card",
                    "Rendering failed",
                    &e.to_string(),
                )));
            }
        };

        tracing::info!("Render completed successfully, size: {} bytes", result.len());

        match request.file_type {
            FileType::Png => CardResponse::Png(Binary(result), CACHE_CONTROL.to_string()),
            FileType::Jpeg => CardResponse::Jpeg(Binary(result), CACHE_CONTROL.to_string()),
        }
    }
}
