use actix_web::{web, HttpResponse};

use crate::{domain::BookingPayload, service::{booking as booking_service, BookingServiceError}, utils::DbPool};

#[tracing::instrument(
    "Posting booking",
    skip(pool)
)]
pub async fn post_booking(
    pool: web::Data<DbPool>,
    json: web::Json<BookingPayload>
) -> Result<HttpResponse, BookingServiceError> {
    let booking = booking_service::create_booking(&pool, json.into_inner()).await?;

    Ok(HttpResponse::Created().json(booking))
}
