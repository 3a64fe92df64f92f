pub mod memory_env_store;
pub mod process_env_store;
