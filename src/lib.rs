#![doc = "The `taskpanel` library crate."]
#![doc = ""]
#![doc = "This crate contains the domain models, authentication mechanisms, routing"]
#![doc = "configuration, and error handling for the TaskPanel application: per-user"]
#![doc = "task lists behind a bearer-token guard, plus an admin surface for account"]
#![doc = "statistics and activation. It is used by the main binary (`main.rs`) to"]
#![doc = "construct and run the application."]

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
