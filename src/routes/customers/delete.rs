use actix_web::{web, HttpResponse};

use crate::{service::{customer as customer_service, CustomerServiceError}, utils::DbPool};

#[tracing::instrument(
    "Deleting customer by id",
    skip(pool)
)]
pub async fn delete_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i64>
) -> Result<HttpResponse, CustomerServiceError> {
    customer_service::delete_customer(&pool, path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
