use super::service::service;
use super::types::{request, response};
use crate::types::Context;
use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    Json, Path, State,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<request::Body>, JsonRejection>,
) -> response::Response {
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!("Unroutable advertisement id: {}", rejection.body_text());
        response::Error::AdvertisementNotFound
    })?;
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!("Rejected advertisement body: {}", rejection.body_text());
        response::Error::MalformedBody(rejection)
    })?;

    service(ctx, request::Payload { id, body }).await
}
