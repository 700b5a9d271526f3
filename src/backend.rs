//! The backend layer: load a named collection, shuffle a copy, wrap it in
//! the envelope. The public data routes call [`shuffled`] directly; the
//! `/backend/{collection}` route exposes the same operation as the internal
//! HTTP surface.
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State as AxumState},
};

use crate::{
    catalog::{Catalog, Envelope},
    error::AppError,
    shuffle::shuffle,
    state::State,
};

/// Looks up `name` in the catalog and returns its items in a fresh random
/// order. The catalog's own order is never modified.
pub fn shuffled(catalog: &Catalog, name: &str) -> Result<Envelope, AppError> {
    let collection = catalog
        .get(name)
        .ok_or_else(|| AppError::UnknownCollection(name.to_string()))?;

    let mut items = collection.items.clone();
    shuffle(&mut items, &mut rand::rng());

    Ok(Envelope { items })
}

pub async fn collection_handler(
    AxumState(state): AxumState<Arc<State>>,
    Path(collection): Path<String>,
) -> Result<Json<Envelope>, AppError> {
    Ok(Json(shuffled(&state.catalog, &collection)?))
}
