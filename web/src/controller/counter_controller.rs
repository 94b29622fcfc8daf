use crate::controller::HX_TRIGGER;
use crate::params::counter::{IncrementParams, ReadParams};
use crate::response::counter::CounterData;
use crate::{AppState, Error};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Form;
use domain::counter as CounterApi;
use events::UPDATE_COUNTER;
use log::*;

/// GET the counter fragment, multiplied by `m` when given.
pub async fn read(
    State(app_state): State<AppState>,
    Query(params): Query<ReadParams>,
) -> Result<impl IntoResponse, Error> {
    let multiplier = params.multiplier()?;
    let endpoint = match multiplier {
        Some(m) => format!("/counter?m={m}"),
        None => "/counter".to_string(),
    };
    let value = CounterApi::read(app_state.store_ref(), multiplier);

    Ok(Html(
        CounterData::new(endpoint, value, UPDATE_COUNTER).render(),
    ))
}

/// POST add a positive amount to the counter.
pub async fn increment(
    State(app_state): State<AppState>,
    Form(params): Form<IncrementParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST increment counter by {:?}", params.value);

    let value = CounterApi::increment(
        app_state.store_ref(),
        app_state.event_publisher.as_ref(),
        &params.value,
    )
    .await?;

    debug!("Counter is now {value}");

    Ok((StatusCode::OK, [(HX_TRIGGER, UPDATE_COUNTER)]))
}
