pub mod config_document;
pub mod resolution;
pub mod resolve_options;
pub mod source;
