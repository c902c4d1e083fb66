// Infrastructure layer - external adapters and process setup
pub mod config;
pub mod console;
pub mod engine_registry;
pub mod http_repository;
