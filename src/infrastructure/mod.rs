// Infrastructure layer - Configuration and the HTTP backend
pub mod config;
pub mod http_backend;
