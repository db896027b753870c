//! Validation, status extraction and failure deduplication for homework API responses.

pub mod dedup;
pub mod status;
pub mod validator;
