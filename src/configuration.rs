use config::{Config, ConfigError, Environment, File};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings{
    pub application: ApplicationSettings,
    pub database: DatabaseSettings
}

#[derive(Deserialize, Debug)]
pub struct ApplicationSettings{
    pub host: String,
    pub port: u16
}

#[derive(Deserialize, Debug)]
pub struct DatabaseSettings{
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: SecretString,
    pub name: String,
    pub max_connections: u32
}

impl DatabaseSettings {
    // Url of the postgres server, used to create databases
    pub fn get_server_url(&self) -> String{
        format!(
            "postgres://{}:{}@{}:{}",
            self.username,
            self.password.expose_secret(),
            self.host,
            self.port
        )
    }

    pub fn get_database_url(&self) -> String{
        format!("{}/{}", self.get_server_url(), self.name)
    }
}

// Deployment environment selected through APP_ENVIRONMENT
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEnvironment{
    Local,
    Production
}

impl AppEnvironment {
    pub fn as_str(&self) -> &'static str{
        match self {
            AppEnvironment::Local => "local",
            AppEnvironment::Production => "production"
        }
    }
}

impl TryFrom<String> for AppEnvironment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment, use either `local` or `production`",
                other
            ))
        }
    }
}

impl Settings{
    pub fn get() -> Result<Self, ConfigError>{
        let environment: AppEnvironment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(ConfigError::Message)?;

        Config::builder()
            .add_source(File::with_name("configuration/base.yaml"))
            .add_source(
                File::with_name(&format!("configuration/{}.yaml", environment.as_str()))
                    .required(false)
            )
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
            )
            .build()?
            .try_deserialize::<Settings>()
    }
}
