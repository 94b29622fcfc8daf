use crate::controller::{
    counter_controller, health_check_controller, page_controller, todo_controller,
};
use crate::middleware::{redirect_slashes::redirect_slashes, request_logger::log_request};
use crate::sse::handler::sse_handler;
use crate::{AppState, Demo};
use axum::{
    http::{HeaderValue, Method, StatusCode},
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use log::*;
use service::config::Config;
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn define_routes(app_state: AppState, demo: Demo) -> Router {
    let cors_layer = cors_layer(&app_state.config);

    let router = Router::new()
        .merge(page_routes(app_state.clone(), demo))
        .merge(counter_routes(app_state.clone()))
        .merge(event_routes(app_state.clone()))
        .merge(health_routes(app_state.clone()));

    let router = match demo {
        Demo::Full => router.merge(todo_routes(app_state)),
        Demo::Counter => router,
    };

    router
        .fallback(not_found)
        .layer(from_fn(redirect_slashes))
        .layer(cors_layer)
        .layer(from_fn(log_request))
}

fn page_routes(app_state: AppState, demo: Demo) -> Router {
    let index = match demo {
        Demo::Full => get(page_controller::index),
        Demo::Counter => get(page_controller::counter_index),
    };
    Router::new().route("/", index).with_state(app_state)
}

fn counter_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/counter", get(counter_controller::read))
        .route("/counter", post(counter_controller::increment))
        .with_state(app_state)
}

fn todo_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/todos", get(todo_controller::index))
        .route("/todos", post(todo_controller::create))
        // The static segment takes precedence over `:id`
        .route("/todos/count", get(todo_controller::count))
        .route(
            "/todos/:id",
            get(todo_controller::read).delete(todo_controller::delete),
        )
        .with_state(app_state)
}

fn event_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/events", get(sse_handler))
        .with_state(app_state)
}

fn health_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check_controller::health_check))
        .with_state(app_state)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "NOT FOUND")
}

fn cors_layer(config: &Config) -> CorsLayer {
    let allow_origin = if config.allows_any_origin() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(config.allowed_origins.iter().filter_map(|origin| {
            match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin {origin:?}");
                    None
                }
            }
        }))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}
