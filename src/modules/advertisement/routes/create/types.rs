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
        #[validate(
            required(code = "value_error.missing", message = "field required"),
            custom(function = "validate_string")
        )]
        pub header: Option<Value>,
        #[validate(
            required(code = "value_error.missing", message = "field required"),
            custom(function = "validate_string")
        )]
        pub description: Option<Value>,
        #[validate(
            required(code = "value_error.missing", message = "field required"),
            custom(function = "validate_string")
        )]
        pub author: Option<Value>,
    }

    impl Body {
        pub fn into_payload(
            self,
        ) -> Result<repository::CreateAdvertisementPayload, ValidationErrors> {
            self.validate()?;

            Ok(repository::CreateAdvertisementPayload {
                header: validation::into_string(self.header).unwrap_or_default(),
                description: validation::into_string(self.description).unwrap_or_default(),
                author: validation::into_string(self.author).unwrap_or_default(),
            })
        }
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::advertisement::{repository::Advertisement, DUPLICATE_HEADER, FIELDS},
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
        AdvertisementCreated(Advertisement),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertisementCreated(advertisement) => {
                    (StatusCode::OK, Json(json!({ "id": advertisement.id }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        MalformedBody(JsonRejection),
        FailedToValidate(ValidationErrors),
        HeaderAlreadyInUse,
        FailedToCreateAdvertisement,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            let error = match self {
                Self::MalformedBody(rejection) => {
                    HttpError::new(StatusCode::BAD_REQUEST, rejection.body_text())
                }
                Self::FailedToValidate(errors) => HttpError::validation(&errors, &FIELDS),
                Self::HeaderAlreadyInUse => {
                    HttpError::new(StatusCode::BAD_REQUEST, DUPLICATE_HEADER)
                }
                Self::FailedToCreateAdvertisement => HttpError::internal(),
            };

            error.into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
