use std::{error::Error, net::TcpListener};

use actix_web::{dev::Server, web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use r2d2::Pool;
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::{DatabaseSettings, Settings},
    routes::{
        delete_booking, delete_customer, delete_hotel, get_booking, get_bookings,
        get_customer, get_customer_bookings, get_customer_by_email, get_customer_by_phone,
        get_customers, get_hotel, get_hotel_by_phone, get_hotels, get_hotels_by_location,
        get_hotels_by_postal_code, health_check, json_error_handler, post_booking,
        post_customer, post_guest_booking, post_hotel, put_booking, put_customer, put_hotel
    },
    utils::DbPool
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = get_connection_pool(&settings.database)?;
        run_migrations(&pool)?;

        let listener = TcpListener::bind((settings.application.host.as_str(), settings.application.port))?;
        // Port 0 is resolved by the OS
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}:{}", settings.application.host, port);

        Ok(Application{
            host: settings.application.host,
            port,
            server: run(listener, pool)?
        })
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error>{
        self.server.await
    }
}

pub fn get_connection_pool(settings: &DatabaseSettings) -> Result<DbPool, r2d2::Error>{
    let manager = ConnectionManager::<PgConnection>::new(settings.get_database_url());

    Pool::builder()
        .max_size(settings.max_connections)
        .build(manager)
}

pub fn run_migrations(pool: &DbPool) -> Result<(), anyhow::Error>{
    let mut conn = pool.get()?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e: Box<dyn Error + Send + Sync>| anyhow::anyhow!("Failed to run migrations: {}", e))?;

    Ok(())
}

pub fn run(listener: TcpListener, pool: DbPool) -> Result<Server, std::io::Error>{
    let pool = web::Data::new(pool);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(pool.clone())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/customers")
                    .route("", web::get().to(get_customers))
                    .route("", web::post().to(post_customer))
                    .route("/email/{email}", web::get().to(get_customer_by_email))
                    .route("/phone/{phone_number}", web::get().to(get_customer_by_phone))
                    .route("/{id}", web::get().to(get_customer))
                    .route("/{id}", web::put().to(put_customer))
                    .route("/{id}", web::delete().to(delete_customer))
            )
            .service(
                web::scope("/hotels")
                    .route("", web::get().to(get_hotels))
                    .route("", web::post().to(post_hotel))
                    .route("/phone/{phone_number}", web::get().to(get_hotel_by_phone))
                    .route("/postal-code/{postal_code}", web::get().to(get_hotels_by_postal_code))
                    .route("/location/{location}", web::get().to(get_hotels_by_location))
                    .route("/{id}", web::get().to(get_hotel))
                    .route("/{id}", web::put().to(put_hotel))
                    .route("/{id}", web::delete().to(delete_hotel))
            )
            .service(
                web::scope("/bookings")
                    .route("", web::get().to(get_bookings))
                    .route("", web::post().to(post_booking))
                    .route("/customer/{customer_id}", web::get().to(get_customer_bookings))
                    .route("/{id}", web::get().to(get_booking))
                    .route("/{id}", web::put().to(put_booking))
                    .route("/{id}", web::delete().to(delete_booking))
            )
            .route("/guest-bookings", web::post().to(post_guest_booking))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
