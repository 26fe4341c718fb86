pub mod suggestions_handler;

use std::sync::Arc;

use axum::extract::Extension;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_log::LogTracer;

use citysuggest_core::gazetteer::Gazetteer;

/// Register a subscriber as global default to process span data.
/// It should only be called once!
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().expect("Failed to set logger");
    set_global_default(subscriber).expect("Failed to set subscriber");
}

pub fn init_logging(log_level: tracing::Level) {
    let subscriber = tracing_subscriber::fmt()
        .with_thread_names(true)
        .with_max_level(LevelFilter::from_level(log_level))
        .finish();
    init_subscriber(subscriber);
}

/// Assemble the service router around a shared gazetteer.
pub fn app(gazetteer: Arc<Gazetteer>) -> Router {
    Router::new()
        .route("/suggestions", get(suggestions_handler::suggestions_handler))
        .route(
            "/suggestions/schema",
            get(suggestions_handler::suggestions_schema_handler),
        )
        .layer(Extension(gazetteer))
        .layer(TraceLayer::new_for_http())
}
