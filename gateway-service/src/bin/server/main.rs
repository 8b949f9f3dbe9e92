use std::sync::Arc;

use auth::Authenticator;
use gateway_service::config::Config;
use gateway_service::domain::account::service::AccountService;
use gateway_service::domain::product::service::ProductService;
use gateway_service::inbound::http::router::create_router;
use gateway_service::outbound::store::HttpProductStore;
use gateway_service::outbound::store::HttpUserStore;
use gateway_service::outbound::store::StoreClient;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gateway_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "gateway-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        store_url = %config.store.base_url,
        store_timeout_ms = config.store.timeout_ms,
        token_ttl_hours = config.jwt.expiration_hours,
        password_scheme = ?config.password.scheme,
        frontend = config.frontend.enabled,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::with_settings(
        config.jwt.secret.as_bytes(),
        config.password.hash_scheme(),
        chrono::Duration::hours(config.jwt.expiration_hours),
    )?);

    let store_client = StoreClient::new(&config.store)?;
    let user_store = Arc::new(HttpUserStore::new(store_client.clone()));
    let product_store = Arc::new(HttpProductStore::new(store_client));

    let account_service = Arc::new(
        AccountService::new(user_store, Arc::clone(&authenticator))
            .reject_duplicate_emails(config.accounts.reject_duplicate_emails),
    );
    let product_service = Arc::new(ProductService::new(product_store));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        account_service,
        product_service,
        authenticator,
        &config.frontend,
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
