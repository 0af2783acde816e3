use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("array is empty")]
    EmptyArrayError,
}

pub type Result<T> = std::result::Result<T, GuardError>;
