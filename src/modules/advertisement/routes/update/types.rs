pub mod request {
    use crate::{
        modules::advertisement::repository,
        utils::validation::{self, validate_string},
    };
    use serde::Deserialize;
    use serde_json::Value;
    use validator::{Validate, ValidationErrors};

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(custom(function = "validate_string"))]
        pub header: Option<Value>,
        #[validate(custom(function = "validate_string"))]
        pub description: Option<Value>,
        #[validate(custom(function = "validate_string"))]
        pub author: Option<Value>,
    }

    /// Keeps a field only when it carries a non-empty string, so `""` leaves
    /// the stored value untouched just like omitting the field.
    fn non_empty(value: Option<Value>) -> Option<String> {
        validation::into_string(value).filter(|value| !value.is_empty())
    }

    impl Body {
        pub fn into_payload(
            self,
        ) -> Result<repository::UpdateAdvertisementPayload, ValidationErrors> {
            self.validate()?;

            Ok(repository::UpdateAdvertisementPayload {
                header: non_empty(self.header),
                description: non_empty(self.description),
                author: non_empty(self.author),
            })
        }
    }

    pub struct Payload {
        pub id: i32,
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::advertisement::{DUPLICATE_HEADER, FIELDS, NOT_FOUND},
        utils::error::HttpError,
    };
    use axum::{
        extract::{rejection::JsonRejection, Json},
        http::StatusCode,
        response::IntoResponse,
    };
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        AdvertisementUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertisementUpdated => {
                    (StatusCode::OK, Json(json!({ "status": "OK" }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MalformedBody(JsonRejection),
        FailedToValidate(ValidationErrors),
        AdvertisementNotFound,
        HeaderAlreadyInUse,
        FailedToFetchAdvertisement,
        FailedToUpdateAdvertisement,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let error = match self {
                Self::MalformedBody(rejection) => {
                    HttpError::new(StatusCode::BAD_REQUEST, rejection.body_text())
                }
                Self::FailedToValidate(errors) => HttpError::validation(&errors, &FIELDS),
                Self::AdvertisementNotFound => HttpError::new(StatusCode::NOT_FOUND, NOT_FOUND),
                Self::HeaderAlreadyInUse => {
                    HttpError::new(StatusCode::BAD_REQUEST, DUPLICATE_HEADER)
                }
                Self::FailedToFetchAdvertisement | Self::FailedToUpdateAdvertisement => {
                    HttpError::internal()
                }
            };

            error.into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
