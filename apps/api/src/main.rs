//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors flow through
//! `identity::IdentityError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use identity::handlers::AppState;
use identity::store::AccountStore;
use identity::{
    IdentityConfig, MemoryAccountStore, PgAccountStore, identity_router,
    identity_router_with_proxy_auth,
};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,identity=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Arc::new(if cfg!(debug_assertions) {
        IdentityConfig::development()
    } else {
        IdentityConfig::default()
    });

    // Session cookies only mark authentication for a fronting proxy;
    // enable this when such a proxy asserts the account id header.
    let trust_proxy = env::var("TRUSTED_PROXY_AUTH").is_ok_and(|v| v == "1" || v == "true");

    // Store selection happens exactly once, here: a configured database
    // gives the durable store, otherwise the in-memory demo fallback.
    let routes = match env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await?;

            tracing::info!("Connected to database");

            sqlx::migrate!("../../database/migrations").run(&pool).await?;

            tracing::info!("Migrations completed");

            identity_routes(PgAccountStore::new(pool), config, trust_proxy)
        }
        Err(_) => {
            tracing::warn!(
                "DATABASE_URL is not set; running in demo mode with the in-memory store"
            );

            identity_routes(MemoryAccountStore::demo()?, config, trust_proxy)
        }
    };

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api", routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn identity_routes<S>(store: S, config: Arc<IdentityConfig>, trust_proxy: bool) -> Router
where
    S: AccountStore + Send + Sync + 'static,
{
    let state = AppState {
        store: Arc::new(store),
        config,
    };

    if trust_proxy {
        identity_router_with_proxy_auth(state)
    } else {
        identity_router(state)
    }
}
