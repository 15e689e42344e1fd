//! HTTP API handlers for persons-api

pub mod health;
pub mod persons;
