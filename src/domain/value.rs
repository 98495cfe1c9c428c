use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::validation::{ConfigError, ValidationError};

use phonenumber::country;

/// Maximum number of comma-separated entries accepted in a [`PhoneList`].
pub const MAX_PHONE_NUMBERS: usize = 2000;

/// Maximum length of a [`SendRequestId`], in characters.
pub const MAX_SEND_REQUEST_ID_CHARS: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SendCloud API user (`smsUser`).
///
/// Invariant: non-empty after trimming. The value is sent and signed as provided.
pub struct SmsUser(String);

impl SmsUser {
    /// Form field name used by SendCloud (`smsUser`).
    pub const FIELD: &'static str = "smsUser";

    /// Create a validated [`SmsUser`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the account id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq)]
/// SendCloud API key (`smsKey`), the shared signing secret.
///
/// Invariant: must not be empty. The key is never sent over the wire and is
/// redacted from `Debug` output.
pub struct SmsKey(String);

impl SmsKey {
    /// Name of the secret as SendCloud documents it (`smsKey`).
    pub const FIELD: &'static str = "smsKey";

    /// Create a validated [`SmsKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SmsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SmsKey(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Pre-approved SMS template id (`templateId`).
///
/// Invariant: non-zero.
pub struct TemplateId(u32);

impl TemplateId {
    /// Form field name used by SendCloud (`templateId`).
    pub const FIELD: &'static str = "templateId";

    /// Create a validated [`TemplateId`].
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::ZeroTemplateId);
        }
        Ok(Self(value))
    }

    /// Get the underlying id.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Label id (`labelId`) used for grouping sends in the SendCloud console.
pub struct LabelId(u32);

impl LabelId {
    /// Form field name used by SendCloud (`labelId`).
    pub const FIELD: &'static str = "labelId";

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Message type (`msgType`).
///
/// The wire value is the decimal discriminant.
pub enum MsgType {
    Sms = 0,
    Mms = 1,
    InternationalSms = 2,
    Voice = 3,
    QrCode = 4,
    Marketing = 5,
}

impl MsgType {
    /// Form field name used by SendCloud (`msgType`).
    pub const FIELD: &'static str = "msgType";

    /// All message types in wire order.
    pub const ALL: [MsgType; 6] = [
        Self::Sms,
        Self::Mms,
        Self::InternationalSms,
        Self::Voice,
        Self::QrCode,
        Self::Marketing,
    ];

    /// Integer code as sent to SendCloud.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for MsgType {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == value)
            .ok_or(ValidationError::InvalidMsgType { actual: value })
    }
}

/// Check a comma-separated phone list.
///
/// Splits on `,` and rejects the list if it has more than [`MAX_PHONE_NUMBERS`]
/// entries or if any entry is blank after trimming. The number format itself is
/// not checked. Returns the number of entries.
pub fn validate_phone_numbers(phone: &str) -> Result<usize, ValidationError> {
    let count = phone.split(',').count();
    if count > MAX_PHONE_NUMBERS {
        return Err(ValidationError::TooManyPhoneNumbers {
            max: MAX_PHONE_NUMBERS,
            actual: count,
        });
    }

    if let Some(index) = phone.split(',').position(|entry| entry.trim().is_empty()) {
        return Err(ValidationError::BlankPhoneNumber { index });
    }

    Ok(count)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Comma-separated recipient list (`phone`).
///
/// Invariant: non-empty, at most [`MAX_PHONE_NUMBERS`] entries, no blank entry.
/// The raw string is sent unmodified.
pub struct PhoneList {
    raw: String,
    len: usize,
}

impl PhoneList {
    /// Form field name used by SendCloud (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Create a validated phone list. Entries are not format-checked; use
    /// [`PhoneList::parse_strict`] for that.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let len = validate_phone_numbers(&raw)?;
        Ok(Self { raw, len })
    }

    /// Create a phone list and additionally require every entry to parse as a
    /// valid phone number.
    ///
    /// `default_region` is used for entries without an explicit country prefix.
    pub fn parse_strict(
        default_region: Option<country::Id>,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let list = Self::new(value)?;
        for entry in list.entries() {
            let parsed = phonenumber::parse(default_region, entry).map_err(|_| {
                ValidationError::InvalidPhoneNumber {
                    input: entry.to_owned(),
                }
            })?;
            if !phonenumber::is_valid(&parsed) {
                return Err(ValidationError::InvalidPhoneNumber {
                    input: entry.to_owned(),
                });
            }
        }
        Ok(list)
    }

    /// Build a list from individual numbers, joined with `,`.
    pub fn from_numbers<I, S>(numbers: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = numbers
            .into_iter()
            .map(|number| number.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(",");
        Self::new(joined)
    }

    /// Raw value as sent to SendCloud.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Number of entries in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A validated list always has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the trimmed entries.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.raw.split(',').map(str::trim)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Template variables (`vars`).
///
/// The payload is opaque to this crate. On the wire it is JSON-encoded once
/// more, i.e. sent as a quoted JSON string.
pub struct Vars(String);

impl Vars {
    /// Form field name used by SendCloud (`vars`).
    pub const FIELD: &'static str = "vars";

    /// Create a validated (non-empty) payload.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Serialize a JSON value (typically an object of template variables) as the payload.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ValidationError> {
        Self::new(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-supplied idempotency key (`sendRequestId`).
///
/// Invariant: non-empty and at most [`MAX_SEND_REQUEST_ID_CHARS`] characters.
pub struct SendRequestId(String);

impl SendRequestId {
    /// Form field name used by SendCloud (`sendRequestId`).
    pub const FIELD: &'static str = "sendRequestId";

    /// Create a validated [`SendRequestId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let chars = value.chars().count();
        if chars > MAX_SEND_REQUEST_ID_CHARS {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: MAX_SEND_REQUEST_ID_CHARS,
                actual: chars,
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Free-form tag (`tag`), JSON-encoded on the wire like [`Vars`].
pub struct Tag(String);

impl Tag {
    /// Form field name used by SendCloud (`tag`).
    pub const FIELD: &'static str = "tag";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Verification code (`code`) for code and voice sends.
///
/// Invariant: non-empty after trimming.
pub struct VerificationCode(String);

impl VerificationCode {
    /// Form field name used by SendCloud (`code`).
    pub const FIELD: &'static str = "code";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Request timestamp in milliseconds since the Unix epoch (`timestamp`).
pub struct TimestampMillis(u64);

impl TimestampMillis {
    /// Form field name used by SendCloud (`timestamp`).
    pub const FIELD: &'static str = "timestamp";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Current wall-clock time. A clock set before the epoch yields `0`.
    pub fn now() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or_default();
        Self(millis)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// SendCloud `statusCode`.
///
/// This value is preserved as-is; the crate does not interpret it.
pub struct StatusCode(i32);

impl StatusCode {
    /// Construct a status code from its integer representation.
    pub fn new(code: i32) -> Self {
        Self(code)
    }

    /// Get the integer code as provided by SendCloud.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}
