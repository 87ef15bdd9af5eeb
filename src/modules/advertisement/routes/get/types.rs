pub mod request {
    pub struct Payload {
        pub id: i32,
    }
}

pub mod response {
    use crate::{
        modules::advertisement::{repository::Advertisement, NOT_FOUND},
        utils::error::HttpError,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use chrono::SecondsFormat;
    use serde_json::json;

    pub enum Success {
        Advertisement(Advertisement),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Advertisement(advertisement) => (
                    StatusCode::OK,
                    Json(json!({
                        "header": advertisement.header,
                        "description": advertisement.description,
                        "author": advertisement.author,
                        "created_at": advertisement
                            .created_at
                            .to_rfc3339_opts(SecondsFormat::Micros, true),
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        AdvertisementNotFound,
        FailedToFetchAdvertisement,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let error = match self {
                Self::AdvertisementNotFound => HttpError::new(StatusCode::NOT_FOUND, NOT_FOUND),
                Self::FailedToFetchAdvertisement => HttpError::internal(),
            };

            error.into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
