use actix_web::{web, HttpResponse};

use crate::{domain::HotelPayload, service::{hotel as hotel_service, HotelServiceError}, utils::DbPool};

#[tracing::instrument(
    "Posting hotel",
    skip(pool)
)]
pub async fn post_hotel(
    pool: web::Data<DbPool>,
    json: web::Json<HotelPayload>
) -> Result<HttpResponse, HotelServiceError> {
    let hotel = hotel_service::create_hotel(&pool, json.into_inner()).await?;

    Ok(HttpResponse::Created().json(hotel))
}
