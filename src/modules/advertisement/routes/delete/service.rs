use super::types::{request, response};
use crate::{modules::advertisement::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToDeleteAdvertisement
    })?;

    let advertisement = repository::get_by_id(&mut *tx, payload.id)
        .await
        .map_err(|err| match err {
            repository::Error::NotFound => response::Error::AdvertisementNotFound,
            _ => response::Error::FailedToFetchAdvertisement,
        })?;

    repository::delete_by_id(&mut *tx, advertisement.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteAdvertisement)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToDeleteAdvertisement
    })?;

    tracing::info!("Deleted advertisement {}", advertisement.id);

    Ok(response::Success::AdvertisementDeleted)
}
