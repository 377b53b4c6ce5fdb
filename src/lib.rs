pub mod assets;
pub mod config;
pub mod menu;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod template;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub use config::Config;
pub use routes::AppState;

/// Router wrapped with the response layers used when serving.
pub fn app(config: Config) -> axum::Router {
    routes::router(AppState { config })
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify before compression
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
