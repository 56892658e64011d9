use axum::{
    extract::{FromRef, State},
    http::{HeaderValue, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config;
use crate::handlers;
use crate::middleware::auth::{jwt_auth_middleware, require_admin};
use crate::services::blob::BlobService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub blob: BlobService,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> PgPool {
        state.pool.clone()
    }
}

impl FromRef<AppState> for BlobService {
    fn from_ref(state: &AppState) -> BlobService {
        state.blob.clone()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(public_routes())
        .merge(protected_routes())
        .merge(admin_routes())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Token acquisition; no authentication required.
fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
}

/// Public content reads plus visitor analytics.
fn public_routes() -> Router<AppState> {
    use handlers::{analytics, fact, media, partner, source, streetcode, term, timeline, toponym};

    Router::new()
        // Streetcodes
        .route("/api/streetcodes", get(streetcode::get_all))
        .route("/api/streetcodes/short", get(streetcode::get_all_short))
        .route("/api/streetcodes/main-page", get(streetcode::get_main_page))
        .route("/api/streetcodes/catalog", get(streetcode::get_catalog))
        .route("/api/streetcodes/count", get(streetcode::get_count))
        .route(
            "/api/streetcodes/by-url/:url",
            get(streetcode::get_by_transliteration_url),
        )
        .route("/api/streetcodes/:id", get(streetcode::get_by_id))
        .route("/api/streetcodes/:id/short", get(streetcode::get_short_by_id))
        // Facts
        .route("/api/facts", get(fact::get_all))
        .route("/api/facts/:id", get(fact::get_by_id))
        .route(
            "/api/facts/by-streetcode/:streetcode_id",
            get(fact::get_by_streetcode),
        )
        // Media
        .route("/api/images/:id", get(media::image::get_by_id))
        .route(
            "/api/images/by-streetcode/:streetcode_id",
            get(media::image::get_by_streetcode),
        )
        .route("/api/audios/:id", get(media::audio::get_by_id))
        .route(
            "/api/audios/by-streetcode/:streetcode_id",
            get(media::audio::get_by_streetcode),
        )
        .route("/api/videos", get(media::video::get_all))
        .route("/api/videos/:id", get(media::video::get_by_id))
        .route(
            "/api/videos/by-streetcode/:streetcode_id",
            get(media::video::get_by_streetcode),
        )
        .route("/api/arts", get(media::art::get_all))
        .route("/api/arts/:id", get(media::art::get_by_id))
        .route(
            "/api/arts/by-streetcode/:streetcode_id",
            get(media::art::get_by_streetcode),
        )
        // Partners
        .route("/api/partners", get(partner::get_all))
        .route("/api/partners/:id", get(partner::get_by_id))
        .route(
            "/api/partners/by-streetcode/:streetcode_id",
            get(partner::get_by_streetcode),
        )
        // Sources
        .route("/api/sources/names", get(source::get_all_names))
        .route("/api/sources/categories", get(source::get_all_categories))
        .route(
            "/api/sources/categories/by-streetcode/:streetcode_id",
            get(source::get_categories_by_streetcode),
        )
        .route("/api/sources/categories/:id", get(source::get_category_by_id))
        .route("/api/sources/content", get(source::get_content))
        // Timeline
        .route("/api/timeline", get(timeline::get_all))
        .route("/api/timeline/:id", get(timeline::get_by_id))
        .route(
            "/api/timeline/by-streetcode/:streetcode_id",
            get(timeline::get_by_streetcode),
        )
        // Toponyms
        .route("/api/toponyms", get(toponym::get_all))
        .route("/api/toponyms/:id", get(toponym::get_by_id))
        .route(
            "/api/toponyms/by-streetcode/:streetcode_id",
            get(toponym::get_by_streetcode),
        )
        // Terms
        .route("/api/terms", get(term::get_all))
        .route("/api/terms/:id", get(term::get_by_id))
        .route(
            "/api/related-terms/by-term/:term_id",
            get(term::get_related_by_term),
        )
        // Visitor analytics: QR plaques are registered and counted publicly
        .route(
            "/api/statistic-records",
            get(analytics::get_all).post(analytics::create),
        )
        .route("/api/statistic-records/by-qr/:qr_id", get(analytics::get_by_qr))
        .route("/api/statistic-records/hit/:qr_id", put(analytics::hit))
}

/// Content mutations; any authenticated user.
fn protected_routes() -> Router<AppState> {
    use handlers::{analytics, fact, media, term, timeline, toponym};

    Router::new()
        // Facts
        .route("/api/facts", post(fact::create))
        .route("/api/facts/reorder", put(fact::reorder))
        .route("/api/facts/:id", put(fact::update).delete(fact::delete))
        // Media
        .route("/api/images", post(media::image::create))
        .route("/api/images/:id", delete(media::image::delete))
        .route("/api/audios", post(media::audio::create))
        .route("/api/audios/:id", delete(media::audio::delete))
        .route("/api/videos", post(media::video::create))
        .route(
            "/api/videos/:id",
            put(media::video::update).delete(media::video::delete),
        )
        .route("/api/arts", post(media::art::create))
        // Timeline
        .route("/api/timeline", post(timeline::create))
        .route(
            "/api/timeline/:id",
            put(timeline::update).delete(timeline::delete),
        )
        // Terms
        .route("/api/terms", post(term::create))
        // Toponym links
        .route(
            "/api/streetcode-toponyms",
            post(toponym::create_link).delete(toponym::delete_link),
        )
        // Analytics cleanup
        .route("/api/statistic-records/:id", delete(analytics::delete))
        .route_layer(middleware::from_fn(jwt_auth_middleware))
}

/// Admin-only mutations.
fn admin_routes() -> Router<AppState> {
    use handlers::{partner, source, streetcode, term};

    Router::new()
        // Streetcodes
        .route("/api/streetcodes", post(streetcode::create))
        .route(
            "/api/streetcodes/:id",
            put(streetcode::update).delete(streetcode::delete),
        )
        // Partners
        .route("/api/partners", post(partner::create))
        .route(
            "/api/partners/:id",
            put(partner::update).delete(partner::delete),
        )
        // Sources
        .route("/api/sources/categories", post(source::create_category))
        .route("/api/sources/content", put(source::update_content))
        .route("/api/sources/categories/:id", delete(source::delete_category))
        // Related terms
        .route("/api/related-terms", post(term::create_related))
        .route("/api/related-terms/:id", put(term::update_related))
        .route("/api/related-terms/by-word/:word", delete(term::delete_related))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn(jwt_auth_middleware))
}

fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = config::config()
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Streetcode API",
            "version": version,
            "description": "Content-management backend for the Streetcode storytelling platform",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/api/auth/register, /api/auth/login, /api/auth/refresh (public)",
                "streetcodes": "/api/streetcodes[...] (reads public, writes admin)",
                "facts": "/api/facts[...] (reads public, writes protected)",
                "media": "/api/images, /api/audios, /api/videos, /api/arts (reads public, writes protected)",
                "partners": "/api/partners (reads public, writes admin)",
                "sources": "/api/sources (reads public, writes admin)",
                "timeline": "/api/timeline (reads public, writes protected)",
                "toponyms": "/api/toponyms, /api/streetcode-toponyms (reads public, links protected)",
                "terms": "/api/terms, /api/related-terms (reads public, writes mixed)",
                "analytics": "/api/statistic-records (public registration and scan counting)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match crate::db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
