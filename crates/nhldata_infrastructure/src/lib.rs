pub mod http_client;
pub mod services;
pub mod settings;
