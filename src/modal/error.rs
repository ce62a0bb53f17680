use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
    #[error("Please enter a valid email.")]
    InvalidEmail { value: String },

    #[error("dialog element `#{0}` not found in document")]
    MissingElement(String),
}
