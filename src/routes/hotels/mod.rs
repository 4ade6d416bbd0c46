mod delete;
mod get;
mod post;
mod update;

pub use delete::*;
pub use get::*;
pub use post::*;
pub use update::*;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::service::HotelServiceError;

use super::error::{ErrorBody, INTERNAL_ERROR_MESSAGE};

impl ResponseError for HotelServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            HotelServiceError::InvalidHotel(_) => StatusCode::BAD_REQUEST,
            HotelServiceError::PhoneNotUnique | HotelServiceError::IdMismatch => StatusCode::CONFLICT,
            HotelServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let body = match self {
            HotelServiceError::InvalidHotel(errors) => ErrorBody::new(self.to_string())
                .with_reasons(errors.reasons().clone()),
            HotelServiceError::PhoneNotUnique => ErrorBody::new(self.to_string())
                .with_reason("phone_number", "Phone number is already taken"),
            HotelServiceError::IdMismatch => ErrorBody::new(self.to_string())
                .with_reason("id", "Does not match the id in the path"),
            HotelServiceError::NotFound(_) => ErrorBody::new(self.to_string()),
            _ => {
                tracing::error!("{:?}", self);
                ErrorBody::new(INTERNAL_ERROR_MESSAGE)
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
