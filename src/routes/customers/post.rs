use actix_web::{web, HttpResponse};

use crate::{domain::CustomerPayload, service::{customer as customer_service, CustomerServiceError}, utils::DbPool};

#[tracing::instrument(
    "Posting customer",
    skip(pool)
)]
pub async fn post_customer(
    pool: web::Data<DbPool>,
    json: web::Json<CustomerPayload>
) -> Result<HttpResponse, CustomerServiceError> {
    let customer = customer_service::create_customer(&pool, json.into_inner()).await?;

    Ok(HttpResponse::Created().json(customer))
}
