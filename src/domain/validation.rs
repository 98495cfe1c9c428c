use std::fmt;

use crate::domain::value::MsgType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    ZeroTemplateId,
    InvalidMsgType {
        actual: i32,
    },
    UnsupportedMsgType {
        msg_type: MsgType,
    },
    TooManyPhoneNumbers {
        max: usize,
        actual: usize,
    },
    BlankPhoneNumber {
        index: usize,
    },
    InvalidPhoneNumber {
        input: String,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::ZeroTemplateId => f.write_str("templateId must not be zero"),
            Self::InvalidMsgType { actual } => {
                write!(f, "invalid msgType: {actual} (expected 0..=5)")
            }
            Self::UnsupportedMsgType { msg_type } => {
                write!(f, "msgType {msg_type:?} is not supported for this request")
            }
            Self::TooManyPhoneNumbers { max, actual } => {
                write!(f, "too many phone numbers: {actual} (max {max})")
            }
            Self::BlankPhoneNumber { index } => {
                write!(f, "phone number at position {index} is blank")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Empty { field: &'static str },
    MissingEnv { var: &'static str },
    InvalidBaseUrl { input: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} cannot be empty"),
            Self::MissingEnv { var } => write!(f, "environment variable {var} is not set"),
            Self::InvalidBaseUrl { input, reason } => {
                write!(f, "invalid base URL {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
