use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{service::{customer as customer_service, CustomerServiceError}, utils::DbPool};

#[derive(Deserialize, Debug)]
pub struct CustomerQuery{
    pub name: Option<String>
}

#[tracing::instrument(
    "Getting list of customers",
    skip(pool)
)]
pub async fn get_customers(
    pool: web::Data<DbPool>,
    query: web::Query<CustomerQuery>
) -> Result<HttpResponse, CustomerServiceError> {
    let customers = customer_service::list_customers(&pool, query.into_inner().name).await?;

    Ok(HttpResponse::Ok().json(customers))
}

#[tracing::instrument(
    "Getting customer by id",
    skip(pool)
)]
pub async fn get_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i64>
) -> Result<HttpResponse, CustomerServiceError> {
    let customer = customer_service::find_customer(&pool, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(customer))
}

#[tracing::instrument(
    "Getting customer by email",
    skip(pool)
)]
pub async fn get_customer_by_email(
    pool: web::Data<DbPool>,
    path: web::Path<String>
) -> Result<HttpResponse, CustomerServiceError> {
    let customer = customer_service::find_customer_by_email(&pool, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(customer))
}

#[tracing::instrument(
    "Getting customer by phone number",
    skip(pool)
)]
pub async fn get_customer_by_phone(
    pool: web::Data<DbPool>,
    path: web::Path<String>
) -> Result<HttpResponse, CustomerServiceError> {
    let customer = customer_service::find_customer_by_phone(&pool, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(customer))
}
