//! Common types, protocol definitions, and errors shared across the payload submitter crates.

pub mod error;
pub mod protocol;
pub mod wire;

pub use error::SubmitError;
