mod post;

pub use post::*;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::service::GuestBookingError;

use super::error::{ErrorBody, INTERNAL_ERROR_MESSAGE};

// Customer and booking failures keep the response they get from their own endpoints
impl ResponseError for GuestBookingError {
    fn status_code(&self) -> StatusCode {
        match self {
            GuestBookingError::Customer(e) => e.status_code(),
            GuestBookingError::Booking(e) => e.status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        match self {
            GuestBookingError::Customer(e) => e.error_response(),
            GuestBookingError::Booking(e) => e.error_response(),
            _ => {
                tracing::error!("{:?}", self);
                HttpResponse::InternalServerError().json(ErrorBody::new(INTERNAL_ERROR_MESSAGE))
            }
        }
    }
}
