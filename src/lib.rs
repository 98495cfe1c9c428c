//! Typed Rust client for the SendCloud SMS HTTP API.
//!
//! The crate is split into a domain layer of validated types, a transport layer
//! for wire-format details (form encoding, request signing, JSON decoding), and
//! a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use sendcloud_sms::{Credentials, MsgType, PhoneList, SendCloudClient, SendTemplateSms, TemplateId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sendcloud_sms::SendCloudError> {
//!     let client = SendCloudClient::new(Credentials::new("sms_user", "sms_key")?);
//!     let phones = PhoneList::new("13800138000,13800138001")?;
//!     let request = SendTemplateSms::new(TemplateId::new(1)?, MsgType::Sms, phones);
//!     let result = client.send_template(request).await?;
//!     println!("{}: {}", result.status_code.as_i32(), result.message);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, SendCloudClient, SendCloudClientBuilder, SendCloudError};
pub use domain::{
    ConfigError, LabelId, MAX_PHONE_NUMBERS, MAX_SEND_REQUEST_ID_CHARS, MsgType, PhoneList,
    SendCodeSms, SendRequestId, SendResult, SendTemplateSms, SendVoiceSms, SmsKey, SmsUser,
    StatusCode, Tag, TemplateId, TemplateSmsArgs, TimestampMillis, ValidationError, Vars,
    VerificationCode, validate_phone_numbers,
};

const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<SendCloudClient>;
    let _ = assert_send_sync::<SendCloudError>;
};
