// src/web/embedded.rs
// Embedded static assets for single-binary distribution

use axum::{
    extract::Path,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Static assets (CSS)
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Get MIME type from file extension
pub fn mime_type(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Bytes of one embedded asset
pub fn asset(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|file| file.data)
}

/// Every embedded asset path, relative to the assets folder
pub fn asset_paths() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// GET /assets/{*path}
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    match asset(&path) {
        Some(data) => (
            [
                (header::CONTENT_TYPE, mime_type(&path)),
                (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
            ],
            data.into_owned(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type() {
        assert_eq!(mime_type("style.css"), "text/css");
        assert_eq!(mime_type("logo.png"), "image/png");
        assert_eq!(mime_type("blob"), "application/octet-stream");
    }

    #[test]
    fn test_stylesheet_is_embedded() {
        assert!(asset("style.css").is_some());
        assert!(asset_paths().any(|p| p == "style.css"));
        assert!(asset("missing.js").is_none());
    }
}
