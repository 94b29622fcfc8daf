use crate::controller::HX_TRIGGER;
use crate::params::todo::CreateParams;
use crate::response::counter::CounterData;
use crate::response::todo::{render_item, render_list};
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Form;
use domain::todo as TodoApi;
use events::UPDATE_TODOS;
use log::*;

/// GET the todo list fragment.
pub async fn index(State(app_state): State<AppState>) -> Html<String> {
    Html(render_list(&TodoApi::find_all(app_state.store_ref())))
}

/// GET the todo count fragment.
pub async fn count(State(app_state): State<AppState>) -> Html<String> {
    let count = TodoApi::count(app_state.store_ref()) as u64;
    Html(CounterData::new("/todos/count", count, UPDATE_TODOS).render())
}

/// GET a single todo item fragment.
pub async fn read(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let todo = TodoApi::find_by_id(app_state.store_ref(), &id)?;
    Ok(Html(render_item(&todo)))
}

/// POST create a new todo.
pub async fn create(
    State(app_state): State<AppState>,
    Form(params): Form<CreateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new todo from: {params:?}");

    let todo = TodoApi::create(
        app_state.store_ref(),
        app_state.event_publisher.as_ref(),
        app_state.ids_ref(),
        &params.title,
        &params.description,
    )
    .await?;

    debug!("New todo: {todo:?}");

    Ok((StatusCode::OK, [(HX_TRIGGER, UPDATE_TODOS)]))
}

/// DELETE a todo by id. Unknown ids are not an error.
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    debug!("DELETE todo {id}");

    TodoApi::delete(
        app_state.store_ref(),
        app_state.event_publisher.as_ref(),
        &id,
    )
    .await?;

    Ok((StatusCode::OK, [(HX_TRIGGER, UPDATE_TODOS)]))
}
