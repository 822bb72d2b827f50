use axum::{
    middleware,
    routing::{delete, get, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod health;
pub mod middleware_auth;
pub mod projects;
pub mod tasks;

pub use health::health;

use crate::state::AppState;

pub fn routes(state: AppState) -> Router {
    let projects_router = Router::new()
        .route(
            "/",
            get(projects::routes::list).post(projects::routes::create),
        )
        .route(
            "/{id}",
            put(projects::routes::update).delete(projects::routes::delete),
        )
        .route(
            "/{id}/tasks",
            get(tasks::routes::list).post(tasks::routes::create),
        );

    let tasks_router = Router::new()
        .route("/{id}/complete", put(tasks::routes::toggle_complete))
        .route("/{id}", delete(tasks::routes::delete));

    let protected = Router::new()
        .nest("/projects", projects_router)
        .nest("/tasks", tasks_router)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middleware_auth::require_auth,
        ));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(protected)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "Project service API"
}
