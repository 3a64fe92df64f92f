pub mod decrypt;
pub mod encrypt;
pub mod resolve;
pub mod resolve_helpers;
pub mod run;
