pub mod request {
    pub struct Payload {
        pub id: i32,
    }
}

pub mod response {
    use crate::{modules::advertisement::NOT_FOUND, utils::error::HttpError};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        AdvertisementDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertisementDeleted => {
                    (StatusCode::OK, Json(json!({ "status": "OK" }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        AdvertisementNotFound,
        FailedToFetchAdvertisement,
        FailedToDeleteAdvertisement,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let error = match self {
                Self::AdvertisementNotFound => HttpError::new(StatusCode::NOT_FOUND, NOT_FOUND),
                Self::FailedToFetchAdvertisement | Self::FailedToDeleteAdvertisement => {
                    HttpError::internal()
                }
            };

            error.into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
