use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgExecutor};

#[derive(Serialize, Deserialize, FromRow, Clone, Debug)]
pub struct Advertisement {
    pub id: i32,
    pub header: String,
    pub description: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

pub struct CreateAdvertisementPayload {
    pub header: String,
    pub description: String,
    pub author: String,
}

pub struct UpdateAdvertisementPayload {
    pub header: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
    DuplicateHeader,
    UnexpectedError,
}

fn classify(err: &sqlx::Error) -> Error {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Error::DuplicateHeader,
        _ => Error::UnexpectedError,
    }
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateAdvertisementPayload,
) -> Result<Advertisement, Error> {
    sqlx::query_as::<_, Advertisement>(
        "
        INSERT INTO advertisement
        (header, description, author)
        VALUES ($1, $2, $3)
        RETURNING *
        ",
    )
    .bind(payload.header)
    .bind(payload.description)
    .bind(payload.author)
    .fetch_one(e)
    .await
    .map_err(|err| {
        let kind = classify(&err);
        match kind {
            Error::DuplicateHeader => {
                tracing::warn!("Refused to create an advertisement with a duplicate header")
            }
            _ => tracing::error!("Error occurred while trying to create an advertisement: {}", err),
        }
        kind
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
) -> Result<Option<Advertisement>, Error> {
    sqlx::query_as::<_, Advertisement>("SELECT * FROM advertisement WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching advertisement with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

/// Lookup shared by every route addressing a single advertisement; a missing
/// row is [`Error::NotFound`].
pub async fn get_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<Advertisement, Error> {
    find_by_id(e, id).await?.ok_or(Error::NotFound)
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: i32,
    payload: UpdateAdvertisementPayload,
) -> Result<(), Error> {
    sqlx::query(
        "
            UPDATE advertisement SET
                header = COALESCE($1, header),
                description = COALESCE($2, description),
                author = COALESCE($3, author)
            WHERE
                id = $4
        ",
    )
    .bind(payload.header)
    .bind(payload.description)
    .bind(payload.author)
    .bind(id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        let kind = classify(&err);
        match kind {
            Error::DuplicateHeader => {
                tracing::warn!("Refused to update advertisement {} to a duplicate header", id)
            }
            _ => tracing::error!(
                "Error occurred while trying to update advertisement by id {}: {}",
                id,
                err
            ),
        }
        kind
    })
}

pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: i32) -> Result<(), Error> {
    sqlx::query("DELETE FROM advertisement WHERE id = $1")
        .bind(id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete advertisement by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
