use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
