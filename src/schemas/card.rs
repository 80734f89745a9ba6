use poem_openapi::{
    ApiResponse, Object,
    payload::{Binary, Html, Json},
};

use super::common::InternalServerErrorResponse;

pub const CACHE_CONTROL: &str =
    "public, immutable, no-transform, s-maxage=31536000, max-age=31536000";

#[derive(ApiResponse)]
pub enum CardResponse {
    /// PNG card image
    #[oai(status = 200, content_type = "image/png")]
    Png(
        Binary<Vec<u8>>,
        #[oai(header = "Cache-Control")] String,
    ),

    /// JPEG card image
    #[oai(status = 200, content_type = "image/jpeg")]
    Jpeg(
        Binary<Vec<u8>>,
        #[oai(header = "Cache-Control")] String,
    ),

    /// Card document, served instead of an image when HTML debugging is on
    #[oai(status = 200)]
    Document(Html<String>),

    #[oai(status = 500)]
    InternalServerError(Json<InternalServerErrorResponse>),
}

#[derive(Object, Debug)]
pub struct HealthResponse {
    pub status: String,

    /// Whether a headless browser is currently launched
    pub browser_running: bool,
}
