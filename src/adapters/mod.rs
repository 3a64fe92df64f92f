pub mod cipher;
pub mod env_stores;
pub mod fetch;
pub mod temp_files;
