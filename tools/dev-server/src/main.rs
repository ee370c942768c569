//! Development server for HackOS
//!
//! Serves the `web/` bundle (page, wasm-bindgen glue and the compiled
//! desktop) with correct MIME types and caching disabled, so a rebuilt
//! `.wasm` is picked up on reload.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request, StatusCode},
    response::Response,
    routing::get_service,
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_WEB_DIR: &str = "web";

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let web_dir = std::env::var("HACKOS_WEB_DIR").unwrap_or_else(|_| DEFAULT_WEB_DIR.to_string());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let serve_dir = ServeDir::new(&web_dir)
        .append_index_html_on_directories(true)
        .precompressed_gzip();

    let app = Router::new()
        .fallback_service(get_service(serve_dir).handle_error(|_| async {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(axum::middleware::from_fn(dev_headers)),
        );

    println!("╔═══════════════════════════════════════════════════╗");
    println!("║              HackOS Development Server            ║");
    println!("╠═══════════════════════════════════════════════════╣");
    println!("║  URL:  http://localhost:{:<26}║", port);
    println!("║  Root: {:<43}║", web_dir);
    println!("║  Press Ctrl+C to stop                             ║");
    println!("╚═══════════════════════════════════════════════════╝");
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

/// Fix MIME types and disable caching
async fn dev_headers(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    if let Some(mime) = content_type_for(&path) {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
    }

    response
}

/// MIME type for the bundle's file kinds; None leaves ServeDir's guess
fn content_type_for(path: &str) -> Option<&'static str> {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "js" | "mjs" => Some("application/javascript; charset=utf-8"),
        "wasm" => Some("application/wasm"),
        "css" => Some("text/css; charset=utf-8"),
        "html" => Some("text/html; charset=utf-8"),
        "json" => Some("application/json; charset=utf-8"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_mime_types() {
        assert_eq!(content_type_for("/pkg/hackos_desktop_bg.wasm"), Some("application/wasm"));
        assert_eq!(
            content_type_for("/pkg/hackos_desktop.js"),
            Some("application/javascript; charset=utf-8")
        );
        assert_eq!(content_type_for("/index.html"), Some("text/html; charset=utf-8"));
    }

    #[test]
    fn test_unknown_extension_left_alone() {
        assert_eq!(content_type_for("/favicon.ico"), None);
        assert_eq!(content_type_for("/"), None);
    }
}
