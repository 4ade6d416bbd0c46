use actix_web::HttpResponse;

#[tracing::instrument(
    "Checking service health"
)]
pub async fn health_check() -> HttpResponse{
    HttpResponse::Ok().finish()
}
