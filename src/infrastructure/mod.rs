//! Infrastructure layer - Adapters for catalog files, generative backends and services

pub mod catalog;
pub mod llm;
pub mod logging;
pub mod services;
