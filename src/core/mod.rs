// src/core/mod.rs
//! Backend access shared by both screens

pub mod service_client;

pub use service_client::{JobBoardClient, JobsApi};
