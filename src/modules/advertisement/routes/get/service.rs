use super::types::{request, response};
use crate::{modules::advertisement::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut conn = ctx.db_conn.pool.acquire().await.map_err(|err| {
        tracing::error!("Failed to acquire database connection: {}", err);
        response::Error::FailedToFetchAdvertisement
    })?;

    repository::get_by_id(&mut *conn, payload.id)
        .await
        .map_err(|err| match err {
            repository::Error::NotFound => response::Error::AdvertisementNotFound,
            _ => response::Error::FailedToFetchAdvertisement,
        })
        .map(response::Success::Advertisement)
}
