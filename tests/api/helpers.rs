use diesel::{Connection, PgConnection, RunQueryDsl};
use hotel_booking::{configuration::{DatabaseSettings, Settings}, startup::{get_connection_pool, Application}, telemetry::{get_subscriber, init_subscriber}, utils::DbPool};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use uuid::Uuid;

static LOGGER_INSTANCE: Lazy<()> = Lazy::new(|| {
    let log_level = "info".to_string();
    let name = "hotel-booking-test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name, log_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name, log_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp{
    pub host: String,
    pub port: u16,
    pub pool: DbPool,
    pub api_client: reqwest::Client
}

impl TestApp {
    // Each test gets its own database, migrations are run by the application
    fn create_db(settings: &DatabaseSettings) {
        let mut connection = PgConnection::establish(&settings.get_server_url())
                                .expect("Failed to connect to postgres server");

        let query = format!(r#"CREATE DATABASE "{}";"#, settings.name);
        diesel::sql_query(query)
            .execute(&mut connection)
            .expect("Failed to create test database");
    }

    pub fn get_app_url(&self) -> String{
        format!("http://{}:{}", self.host, self.port)
    }

    pub async fn spawn_app() -> TestApp{
        Lazy::force(&LOGGER_INSTANCE);

        let mut settings = Settings::get().expect("Failed to read configuration");
        settings.application.port = 0;
        settings.database.name = Uuid::new_v4().to_string();
        settings.database.max_connections = 4;

        TestApp::create_db(&settings.database);
        let pool = get_connection_pool(&settings.database)
                    .expect("Failed to build connection pool to test database");

        let application = Application::new(settings)
                            .await
                            .expect("Failed to build application");

        let host = application.host.clone();
        let port = application.port;
        tokio::task::spawn(application.run_until_stopped());

        TestApp{
            host,
            port,
            pool,
            api_client: reqwest::Client::new()
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client.get(format!("{}{}", self.get_app_url(), path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.api_client.post(format!("{}{}", self.get_app_url(), path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn put(&self, path: &str, body: &Value) -> reqwest::Response {
        self.api_client.put(format!("{}{}", self.get_app_url(), path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.api_client.delete(format!("{}{}", self.get_app_url(), path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    // Creates a customer and returns its id
    pub async fn create_customer(&self, body: &Value) -> i64 {
        let response = self.post("/customers", body).await;
        assert_eq!(response.status().as_u16(), 201);

        let created: Value = response.json().await.expect("Invalid customer json");
        created["id"].as_i64().expect("Customer without id")
    }

    pub async fn create_hotel(&self, body: &Value) -> i64 {
        let response = self.post("/hotels", body).await;
        assert_eq!(response.status().as_u16(), 201);

        let created: Value = response.json().await.expect("Invalid hotel json");
        created["id"].as_i64().expect("Hotel without id")
    }

    pub fn count_rows(&self, table: &str) -> i64 {
        #[derive(diesel::QueryableByName)]
        struct Count {
            #[diesel(sql_type = diesel::sql_types::BigInt)]
            count: i64
        }

        let mut conn = self.pool.get().expect("Failed to get connection to test database");
        diesel::sql_query(format!("SELECT COUNT(*) AS count FROM {}", table))
            .get_result::<Count>(&mut conn)
            .expect("Failed to count rows")
            .count
    }
}

pub fn customer_json() -> Value {
    json!({
        "name": "Jane",
        "email": "jane@example.com",
        "phone_number": "07123456789"
    })
}

pub fn other_customer_json() -> Value {
    json!({
        "name": "O'Brien",
        "email": "obrien@example.com",
        "phone_number": "07987654321"
    })
}

pub fn hotel_json() -> Value {
    json!({
        "name": "Grand Hotel",
        "location": "Newcastle",
        "phone_number": "01912345678",
        "postal_code": "NE17RU"
    })
}

pub fn other_hotel_json() -> Value {
    json!({
        "name": "Quayside Inn",
        "location": "Newcastle",
        "phone_number": "01918765432",
        "postal_code": "NE13RN"
    })
}

pub fn booking_json(customer_id: i64, hotel_id: i64) -> Value {
    json!({
        "customer_id": customer_id,
        "hotel_id": hotel_id,
        "check_in_date": "2024-11-01",
        "check_out_date": "2024-11-04"
    })
}
