pub mod configuration;
pub mod db_interaction;
pub mod domain;
pub mod models;
pub mod routes;
pub mod schema;
pub mod service;
pub mod startup;
pub mod telemetry;
pub mod utils;
