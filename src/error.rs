use thiserror::Error;

use crate::options::OptionField;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatCodeError {
    #[error(
        "{field} value '{value}' is not allowed. You can use only one of values: {}.",
        .allowed.join(", ")
    )]
    InvalidOption {
        field: OptionField,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type ChatCodeResult<T> = Result<T, ChatCodeError>;

impl ChatCodeError {
    pub fn invalid_option<S: Into<String>>(
        field: OptionField,
        value: S,
        allowed: Vec<String>,
    ) -> Self {
        ChatCodeError::InvalidOption {
            field,
            value: value.into(),
            allowed,
        }
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        ChatCodeError::Config(message.into())
    }
}
