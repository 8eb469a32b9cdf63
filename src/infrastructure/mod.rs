pub mod frankfurter;
pub mod http_client;
