use std::sync::Arc;

use axum::{Json, extract::State as AxumState, response::Html};
use serde::Serialize;

use crate::{backend, catalog::Envelope, error::AppError, state::State};

#[derive(Serialize)]
pub struct Welcome {
    message: &'static str,
}

pub async fn welcome_handler() -> Json<Welcome> {
    Json(Welcome {
        message: "Welcome to the plot device.",
    })
}

pub async fn rocks_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Result<Json<Envelope>, AppError> {
    Ok(Json(backend::shuffled(&state.catalog, "rocks")?))
}

pub async fn lake_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Result<Json<Envelope>, AppError> {
    Ok(Json(backend::shuffled(&state.catalog, "lake")?))
}

pub async fn app_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}
