//! NUAGE backend services: a static product catalog and an in-memory user
//! registry, each shipped as its own actix-web binary.

pub mod api;
pub mod config;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;
