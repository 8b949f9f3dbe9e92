use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::routing::MethodRouter;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_product::create_product;
use super::handlers::delete_product::delete_product;
use super::handlers::list_products::list_products;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::update_product::update_product;
use super::middleware::authenticate as auth_middleware;
use crate::config::FrontendConfig;
use crate::domain::account::service::AccountService;
use crate::domain::product::service::ProductService;
use crate::outbound::store::HttpProductStore;
use crate::outbound::store::HttpUserStore;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<HttpUserStore>>,
    pub product_service: Arc<ProductService<HttpProductStore>>,
    pub authenticator: Arc<Authenticator>,
}

/// Whether a route requires a valid session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

/// One entry of the route table.
pub struct RouteSpec {
    pub path: &'static str,
    pub access: Access,
    pub handler: MethodRouter<AppState>,
}

impl RouteSpec {
    fn public(path: &'static str, handler: MethodRouter<AppState>) -> Self {
        Self {
            path,
            access: Access::Public,
            handler,
        }
    }

    fn authenticated(path: &'static str, handler: MethodRouter<AppState>) -> Self {
        Self {
            path,
            access: Access::Authenticated,
            handler,
        }
    }
}

/// Every API route with its access level.
///
/// All methods of a path share one access level, so a path never appears in
/// both the public and the protected router.
pub fn routes() -> Vec<RouteSpec> {
    vec![
        RouteSpec::public("/register", post(register)),
        RouteSpec::public("/login", post(login)),
        RouteSpec::authenticated("/products", get(list_products).post(create_product)),
        RouteSpec::authenticated("/products/:id", put(update_product).delete(delete_product)),
    ]
}

pub fn create_router(
    account_service: Arc<AccountService<HttpUserStore>>,
    product_service: Arc<ProductService<HttpProductStore>>,
    authenticator: Arc<Authenticator>,
    frontend: &FrontendConfig,
) -> Router {
    let state = AppState {
        account_service,
        product_service,
        authenticator,
    };

    let frontend_service = frontend.enabled.then(|| {
        tracing::info!(dir = %frontend.dir.display(), "Serving bundled frontend");
        ServeDir::new(&frontend.dir).fallback(ServeFile::new(frontend.dir.join("index.html")))
    });

    let (public_routes, protected_routes) = routes().into_iter().fold(
        (Router::new(), Router::new()),
        |(public, protected), route| {
            // A method the API does not serve on this path falls through to
            // the frontend, outside the auth middleware.
            let handler = match &frontend_service {
                Some(service) => route.handler.fallback_service(service.clone()),
                None => route.handler,
            };
            match route.access {
                Access::Public => (public.route(route.path, handler), protected),
                Access::Authenticated => (public, protected.route(route.path, handler)),
            }
        },
    );

    let protected_routes = protected_routes.route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth_middleware,
    ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    let mut router = Router::new().merge(public_routes).merge(protected_routes);

    if let Some(service) = frontend_service {
        router = router.fallback_service(service);
    }

    router
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
