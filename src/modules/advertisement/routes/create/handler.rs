use super::service::service;
use super::types::{request, response};
use crate::types::Context;
use axum::extract::{rejection::JsonRejection, Json, State};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    body: Result<Json<request::Body>, JsonRejection>,
) -> response::Response {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!("Rejected advertisement body: {}", rejection.body_text());
        response::Error::MalformedBody(rejection)
    })?;

    service(ctx, request::Payload { body }).await
}
