use std::sync::Arc;

use anyhow::Result;
use poem::{
    EndpointExt, Route,
    middleware::{AddData, AddDataEndpoint, Cors, CorsEndpoint},
};
use poem_openapi::OpenApiService;

use crate::core::document::DocumentRenderer;
use crate::core::emoji::EmojiRenderer;
use crate::core::fonts::FontAssets;
use crate::core::renderer::RenderingEngine;
use crate::routes::card::ApiCard;
use crate::settings::Config;

pub mod core;
pub mod routes;
pub mod schemas;
pub mod settings;

pub struct AppState {
    pub engine: Arc<RenderingEngine>,
    pub document: DocumentRenderer,
    pub html_debug: bool,
}

impl AppState {
    /// Reads the font files once and wires the document renderer.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fonts = Arc::new(FontAssets::load(&config.fonts_dir())?);
        let emoji = EmojiRenderer::new(config.emoji_base_url()?);

        Ok(Self {
            engine: Arc::new(RenderingEngine::new()?),
            document: DocumentRenderer::new(fonts, emoji),
            html_debug: config.html_debug(),
        })
    }
}

pub fn init_openapi_route(
    app_state: Arc<AppState>,
    config: &Config,
) -> CorsEndpoint<AddDataEndpoint<Route, Arc<AppState>>> {
    let prefix = config.prefix.clone().unwrap_or("/".to_string());
    let openapi_route =
        OpenApiService::new(ApiCard, "Open Graph Card API", "1.0").server(prefix.clone());

    let openapi_json_endpoint = openapi_route.spec_endpoint();
    let ui = openapi_route.swagger_ui();
    Route::new()
        .nest("/docs", ui)
        .at("openapi.json", openapi_json_endpoint)
        .nest(prefix, openapi_route)
        .with(AddData::new(app_state))
        .with(Cors::new())
}
