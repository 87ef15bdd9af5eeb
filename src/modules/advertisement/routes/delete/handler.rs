use super::service::service;
use super::types::{request, response};
use crate::types::Context;
use axum::extract::{rejection::PathRejection, Path, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    id: Result<Path<i32>, PathRejection>,
) -> response::Response {
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!("Unroutable advertisement id: {}", rejection.body_text());
        response::Error::AdvertisementNotFound
    })?;

    service(ctx, request::Payload { id }).await
}
