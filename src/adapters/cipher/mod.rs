pub mod aes_cbc_backend;
