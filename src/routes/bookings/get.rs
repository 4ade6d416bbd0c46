use actix_web::{web, HttpResponse};

use crate::{service::{booking as booking_service, BookingServiceError}, utils::DbPool};

#[tracing::instrument(
    "Getting list of bookings",
    skip(pool)
)]
pub async fn get_bookings(
    pool: web::Data<DbPool>
) -> Result<HttpResponse, BookingServiceError> {
    let bookings = booking_service::list_bookings(&pool).await?;

    Ok(HttpResponse::Ok().json(bookings))
}

#[tracing::instrument(
    "Getting booking by id",
    skip(pool)
)]
pub async fn get_booking(
    pool: web::Data<DbPool>,
    path: web::Path<i64>
) -> Result<HttpResponse, BookingServiceError> {
    let booking = booking_service::find_booking(&pool, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(booking))
}

#[tracing::instrument(
    "Getting bookings of customer",
    skip(pool)
)]
pub async fn get_customer_bookings(
    pool: web::Data<DbPool>,
    path: web::Path<i64>
) -> Result<HttpResponse, BookingServiceError> {
    let bookings = booking_service::list_bookings_for_customer(&pool, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(bookings))
}
