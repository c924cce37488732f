//! AES-256-CBC payload encryption.
//!
//! This module is intentionally free of HTTP dependencies.
//!
//! # Ciphertext format
//!
//! ```text
//! base64-std( AES-256-CBC( key, iv = 0^16, plaintext || 0^pad ) )
//! ```
//!
//! where `pad = 16 - (len % 16)`, always in `1..=16`.

pub mod cipher;

pub use cipher::encrypt_payload;
