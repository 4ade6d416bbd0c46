use actix_web::{web, HttpResponse};

use crate::{domain::CustomerPayload, service::{customer as customer_service, CustomerServiceError}, utils::DbPool};

#[tracing::instrument(
    "Updating customer",
    skip(pool)
)]
pub async fn put_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
    json: web::Json<CustomerPayload>
) -> Result<HttpResponse, CustomerServiceError> {
    let customer = customer_service::update_customer(&pool, path.into_inner(), json.into_inner()).await?;

    Ok(HttpResponse::Ok().json(customer))
}
