use actix_web::{web, HttpResponse};

use crate::{service::{booking as booking_service, BookingServiceError}, utils::DbPool};

#[tracing::instrument(
    "Deleting booking by id",
    skip(pool)
)]
pub async fn delete_booking(
    pool: web::Data<DbPool>,
    path: web::Path<i64>
) -> Result<HttpResponse, BookingServiceError> {
    booking_service::delete_booking(&pool, path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
