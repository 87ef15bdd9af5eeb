use super::types::{request, response};
use crate::{modules::advertisement::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let payload = payload.body.into_payload().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateAdvertisement
    })?;

    let advertisement = repository::create(&mut *tx, payload)
        .await
        .map_err(|err| match err {
            repository::Error::DuplicateHeader => response::Error::HeaderAlreadyInUse,
            _ => response::Error::FailedToCreateAdvertisement,
        })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToCreateAdvertisement
    })?;

    tracing::info!("Created advertisement {}", advertisement.id);

    Ok(response::Success::AdvertisementCreated(advertisement))
}
