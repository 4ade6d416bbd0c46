use actix_web::{web, HttpResponse};

use crate::{service::{hotel as hotel_service, HotelServiceError}, utils::DbPool};

#[tracing::instrument(
    "Deleting hotel by id",
    skip(pool)
)]
pub async fn delete_hotel(
    pool: web::Data<DbPool>,
    path: web::Path<i64>
) -> Result<HttpResponse, HotelServiceError> {
    hotel_service::delete_hotel(&pool, path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
