use std::sync::Arc;
use std::time::Duration;

use axum::{
    Extension, Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tokio::{
    net::TcpListener,
    signal::{
        ctrl_c,
        unix::{SignalKind, signal},
    },
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use hallmart::accounts::handlers::{
    handle_create_user, handle_get_profile, handle_get_user, handle_update_profile,
};
use hallmart::accounts::session::{SharedSessions, TokenSessions};
use hallmart::accounts::types::UserDirectory;
use hallmart::catalog::handlers::{
    handle_create_demand, handle_create_product, handle_create_service, handle_delete_demand,
    handle_delete_product, handle_delete_service, handle_get_demand, handle_get_product,
    handle_get_service, handle_list_demands, handle_list_products, handle_list_services,
    handle_update_demand, handle_update_product, handle_update_service,
};
use hallmart::catalog::seed::seed_demo_listings;
use hallmart::catalog::store::{MemoryCatalog, SharedCatalog};
use hallmart::config::Config;
use hallmart::search::handlers::{
    handle_demand_search, handle_global_search, handle_product_search, handle_service_search,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Arc::new(Config::load());

    let catalog: SharedCatalog = Arc::new(MemoryCatalog::new());
    seed_demo_listings(catalog.as_ref())?;
    info!("Seeded demo listings");

    let users = Arc::new(UserDirectory::new());

    let token_sessions = TokenSessions::new();
    if let Some((token, email)) = &config.dev_session {
        info!("issuing dev session for {email}");
        token_sessions.issue(token, email, "Dev User");
    }
    let sessions: SharedSessions = Arc::new(token_sessions);

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any)
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route(
            "/products",
            get(handle_list_products).post(handle_create_product),
        )
        .route("/products/search", get(handle_product_search))
        .route(
            "/products/:id",
            get(handle_get_product)
                .put(handle_update_product)
                .delete(handle_delete_product),
        )
        .route(
            "/services",
            get(handle_list_services).post(handle_create_service),
        )
        .route("/services/search", get(handle_service_search))
        .route(
            "/services/:id",
            get(handle_get_service)
                .put(handle_update_service)
                .delete(handle_delete_service),
        )
        .route(
            "/demands",
            get(handle_list_demands).post(handle_create_demand),
        )
        .route("/demands/search", get(handle_demand_search))
        .route(
            "/demands/:id",
            get(handle_get_demand)
                .put(handle_update_demand)
                .delete(handle_delete_demand),
        )
        .route("/search", get(handle_global_search))
        .route("/user/create", post(handle_create_user))
        .route(
            "/user/profile",
            get(handle_get_profile).put(handle_update_profile),
        )
        .route("/users/:email", get(handle_get_user))
        .layer(cors)
        .layer(Extension(catalog))
        .layer(Extension(users))
        .layer(Extension(sessions))
        .layer(Extension(config.clone()));

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
