//! CORS for the guestbook frontend.
//!
//! The page that renders the guestbook is served from its own origin and talks
//! to `/users` with `fetch`, so the API has to answer preflights.
//! - Development: any origin.
//! - Production: only `CORS_ALLOWED_ORIGINS` (exact match); an empty list allows none.
//!
//! Credentials are never allowed, which keeps the wildcard origin legal.

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::{AppEnv, Config};

pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(guestbook_cors(config.app_env, &config.cors_allowed_origins))
}

fn guestbook_cors(app_env: AppEnv, allowlist: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(app_env, allowlist))
        // The surface is read, sign, delete.
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([HeaderName::from_static("x-request-id")])
        .max_age(Duration::from_secs(10 * 60))
}

fn allowed_origins(app_env: AppEnv, allowlist: &[String]) -> AllowOrigin {
    if !app_env.is_production() {
        return Any.into();
    }

    // Unparsable entries and a stray "*" are skipped; `AllowOrigin::list` rejects wildcards.
    let origins: Vec<HeaderValue> = allowlist
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .filter(|v| v.as_bytes() != b"*")
        .collect();

    AllowOrigin::list(origins)
}
