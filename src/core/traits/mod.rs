pub mod cipher;
pub mod env_store;
pub mod fetcher;
