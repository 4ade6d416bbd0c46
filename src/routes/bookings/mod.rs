mod delete;
mod get;
mod post;
mod update;

pub use delete::*;
pub use get::*;
pub use post::*;
pub use update::*;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::service::BookingServiceError;

use super::error::{ErrorBody, INTERNAL_ERROR_MESSAGE};

impl ResponseError for BookingServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            BookingServiceError::CustomerNotExist
            | BookingServiceError::HotelNotExist
            | BookingServiceError::IdMismatch => StatusCode::CONFLICT,
            BookingServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let body = match self {
            BookingServiceError::CustomerNotExist => ErrorBody::new(self.to_string())
                .with_reason("customer_id", "No customer with this id"),
            BookingServiceError::HotelNotExist => ErrorBody::new(self.to_string())
                .with_reason("hotel_id", "No hotel with this id"),
            BookingServiceError::IdMismatch => ErrorBody::new(self.to_string())
                .with_reason("id", "Does not match the id in the path"),
            BookingServiceError::NotFound(_) => ErrorBody::new(self.to_string()),
            _ => {
                tracing::error!("{:?}", self);
                ErrorBody::new(INTERNAL_ERROR_MESSAGE)
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
