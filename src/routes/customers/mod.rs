mod delete;
mod get;
mod post;
mod update;

pub use delete::*;
pub use get::*;
pub use post::*;
pub use update::*;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

use crate::service::CustomerServiceError;

use super::error::{ErrorBody, INTERNAL_ERROR_MESSAGE};

impl ResponseError for CustomerServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomerServiceError::InvalidCustomer(_) => StatusCode::BAD_REQUEST,
            CustomerServiceError::EmailNotUnique
            | CustomerServiceError::PhoneNotUnique
            | CustomerServiceError::IdMismatch => StatusCode::CONFLICT,
            CustomerServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            CustomerServiceError::PoolError(_)
            | CustomerServiceError::ThreadpoolError(_)
            | CustomerServiceError::QueryError(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let body = match self {
            CustomerServiceError::InvalidCustomer(errors) => ErrorBody::new(self.to_string())
                .with_reasons(errors.reasons().clone()),
            CustomerServiceError::EmailNotUnique => ErrorBody::new(self.to_string())
                .with_reason("email", "Email is already taken"),
            CustomerServiceError::PhoneNotUnique => ErrorBody::new(self.to_string())
                .with_reason("phone_number", "Phone number is already taken"),
            CustomerServiceError::IdMismatch => ErrorBody::new(self.to_string())
                .with_reason("id", "Does not match the id in the path"),
            CustomerServiceError::NotFound(_) => ErrorBody::new(self.to_string()),
            _ => {
                tracing::error!("{:?}", self);
                ErrorBody::new(INTERNAL_ERROR_MESSAGE)
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
