pub mod alert;
pub mod configuration;
pub mod domain;
pub mod escape;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod token;
