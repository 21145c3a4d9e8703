//! Report models shared across commands and services.

pub mod models;
