use actix_web::{web, HttpResponse};

use crate::{domain::BookingPayload, service::{booking as booking_service, BookingServiceError}, utils::DbPool};

#[tracing::instrument(
    "Updating booking",
    skip(pool)
)]
pub async fn put_booking(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    json: web::Json<BookingPayload>
) -> Result<HttpResponse, BookingServiceError> {
    let booking = booking_service::update_booking(&pool, path.into_inner(), json.into_inner()).await?;

    Ok(HttpResponse::Ok().json(booking))
}
