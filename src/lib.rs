// Library for tests to access modules

pub mod aggregation;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod models;
pub mod parser;
pub mod routes;
pub mod startup;
pub mod version;
pub mod views;
