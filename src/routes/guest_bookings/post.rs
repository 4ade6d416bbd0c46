use actix_web::{web, HttpResponse};

use crate::{domain::GuestBookingPayload, service::{guest_booking, GuestBookingError}, utils::DbPool};

#[tracing::instrument(
    "Posting guest booking",
    skip(pool)
)]
pub async fn post_guest_booking(
    pool: web::Data<DbPool>,
    json: web::Json<GuestBookingPayload>
) -> Result<HttpResponse, GuestBookingError> {
    let booking = guest_booking::create_guest_booking(&pool, json.into_inner()).await?;

    Ok(HttpResponse::Created().json(booking))
}
