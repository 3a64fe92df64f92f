pub mod config_resolver;
pub mod env_merger;
pub mod key_extractor;
