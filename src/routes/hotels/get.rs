use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{service::{hotel as hotel_service, HotelServiceError}, utils::DbPool};

#[derive(Deserialize, Debug)]
pub struct HotelQuery{
    pub name: Option<String>
}

#[tracing::instrument(
    "Getting list of hotels",
    skip(pool)
)]
pub async fn get_hotels(
    pool: web::Data<DbPool>,
    query: web::Query<HotelQuery>
) -> Result<HttpResponse, HotelServiceError> {
    let hotels = hotel_service::list_hotels(&pool, query.into_inner().name).await?;

    Ok(HttpResponse::Ok().json(hotels))
}

#[tracing::instrument(
    "Getting hotel by id",
    skip(pool)
)]
pub async fn get_hotel(
    pool: web::Data<DbPool>,
    path: web::Path<i64>
) -> Result<HttpResponse, HotelServiceError> {
    let hotel = hotel_service::find_hotel(&pool, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(hotel))
}

#[tracing::instrument(
    "Getting hotel by phone number",
    skip(pool)
)]
pub async fn get_hotel_by_phone(
    pool: web::Data<DbPool>,
    path: web::Path<String>
) -> Result<HttpResponse, HotelServiceError> {
    let hotel = hotel_service::find_hotel_by_phone(&pool, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(hotel))
}

// Several hotels may share a postal code, an unknown one is an empty list
#[tracing::instrument(
    "Getting hotels by postal code",
    skip(pool)
)]
pub async fn get_hotels_by_postal_code(
    pool: web::Data<DbPool>,
    path: web::Path<String>
) -> Result<HttpResponse, HotelServiceError> {
    let hotels = hotel_service::list_hotels_by_postal_code(&pool, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(hotels))
}

#[tracing::instrument(
    "Getting hotels by location",
    skip(pool)
)]
pub async fn get_hotels_by_location(
    pool: web::Data<DbPool>,
    path: web::Path<String>
) -> Result<HttpResponse, HotelServiceError> {
    let hotels = hotel_service::list_hotels_by_location(&pool, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(hotels))
}
