use actix_web::{web, HttpResponse};

use crate::{domain::HotelPayload, service::{hotel as hotel_service, HotelServiceError}, utils::DbPool};

#[tracing::instrument(
    "Updating hotel",
    skip(pool)
)]
pub async fn put_hotel(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    json: web::Json<HotelPayload>
) -> Result<HttpResponse, HotelServiceError> {
    let hotel = hotel_service::update_hotel(&pool, path.into_inner(), json.into_inner()).await?;

    Ok(HttpResponse::Ok().json(hotel))
}
