use super::types::{request, response};
use crate::{modules::advertisement::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let changes = payload.body.into_payload().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToUpdateAdvertisement
    })?;

    let advertisement = repository::get_by_id(&mut *tx, payload.id)
        .await
        .map_err(|err| match err {
            repository::Error::NotFound => response::Error::AdvertisementNotFound,
            _ => response::Error::FailedToFetchAdvertisement,
        })?;

    repository::update_by_id(&mut *tx, advertisement.id, changes)
        .await
        .map_err(|err| match err {
            repository::Error::DuplicateHeader => response::Error::HeaderAlreadyInUse,
            _ => response::Error::FailedToUpdateAdvertisement,
        })?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToUpdateAdvertisement
    })?;

    tracing::info!("Updated advertisement {}", advertisement.id);

    Ok(response::Success::AdvertisementUpdated)
}
