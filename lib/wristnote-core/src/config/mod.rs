mod config;
mod config_serializer;

pub use config::Config;
pub use config_serializer::serialize_config;
