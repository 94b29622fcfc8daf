use crate::response::counter::CounterData;
use crate::response::page::{render_counter_page, PageData};
use crate::AppState;
use axum::extract::State;
use axum::response::Html;
use domain::{counter as CounterApi, todo as TodoApi};
use events::{UPDATE_COUNTER, UPDATE_TODOS};
use log::*;

/// GET the full demo page.
pub async fn index(State(app_state): State<AppState>) -> Html<String> {
    debug!("GET index page");
    let store = app_state.store_ref();

    let page = PageData {
        counter: CounterData::new("/counter", CounterApi::read(store, None), UPDATE_COUNTER),
        double: CounterData::new(
            "/counter?m=2",
            CounterApi::read(store, Some(2)),
            UPDATE_COUNTER,
        ),
        todos_count: CounterData::new(
            "/todos/count",
            TodoApi::count(store) as u64,
            UPDATE_TODOS,
        ),
        todos: TodoApi::find_all(store),
    };

    Html(page.render())
}

/// GET the counter-only demo page.
pub async fn counter_index(State(app_state): State<AppState>) -> Html<String> {
    debug!("GET counter page");
    let store = app_state.store_ref();

    Html(render_counter_page(
        &CounterData::new("/counter", CounterApi::read(store, None), UPDATE_COUNTER),
        &CounterData::new(
            "/counter?m=2",
            CounterApi::read(store, Some(2)),
            UPDATE_COUNTER,
        ),
    ))
}
