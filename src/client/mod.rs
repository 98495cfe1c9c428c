//! Client layer: orchestrates validation, signing and transport calls.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    ConfigError, SendCodeSms, SendResult, SendTemplateSms, SendVoiceSms, SmsKey, SmsUser,
    TemplateSmsArgs, TimestampMillis, ValidationError,
};
use crate::transport::SignedForm;

const DEFAULT_BASE_URL: &str = "https://api.sendcloud.net";
const SEND_TEMPLATE_PATH: &str = "/smsapi/send";
const SEND_CODE_PATH: &str = "/smsapi/sendCode";
const SEND_VOICE_PATH: &str = "/smsapi/sendVoice";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
        timeout: Option<Duration>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
        timeout: Option<Duration>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url).form(&params);
            if let Some(timeout) = timeout {
                request = request.timeout(timeout);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// SendCloud API credentials: the account id (`smsUser`) and the signing secret (`smsKey`).
pub struct Credentials {
    sms_user: SmsUser,
    sms_key: SmsKey,
}

impl Credentials {
    /// Environment variable read by [`Credentials::from_env`] for the account id.
    pub const USER_ENV: &'static str = "SENDCLOUD_SMS_USER";
    /// Environment variable read by [`Credentials::from_env`] for the secret.
    pub const KEY_ENV: &'static str = "SENDCLOUD_SMS_KEY";

    /// Create credentials; both parts must be non-empty.
    pub fn new(
        sms_user: impl Into<String>,
        sms_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            sms_user: SmsUser::new(sms_user)?,
            sms_key: SmsKey::new(sms_key)?,
        })
    }

    /// Read credentials from `SENDCLOUD_SMS_USER` and `SENDCLOUD_SMS_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let sms_user = std::env::var(Self::USER_ENV)
            .map_err(|_| ConfigError::MissingEnv { var: Self::USER_ENV })?;
        let sms_key = std::env::var(Self::KEY_ENV)
            .map_err(|_| ConfigError::MissingEnv { var: Self::KEY_ENV })?;
        Self::new(sms_user, sms_key)
    }

    pub fn sms_user(&self) -> &SmsUser {
        &self.sms_user
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sms_user.as_str().trim().is_empty() {
            return Err(ConfigError::Empty {
                field: SmsUser::FIELD,
            });
        }
        if self.sms_key.expose().is_empty() {
            return Err(ConfigError::Empty {
                field: SmsKey::FIELD,
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SendCloudClient`].
///
/// Config and validation errors are always reported before any network I/O.
pub enum SendCloudError {
    /// Missing or invalid client configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request was rejected locally.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body was not the expected JSON document.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),

    /// SendCloud answered with `result: false`. The decoded response is attached.
    #[error("SendCloud error {}: {}", .0.status_code.as_i32(), .0.message)]
    Service(Box<SendResult>),
}

impl SendCloudError {
    /// The decoded response for [`SendCloudError::Service`].
    pub fn result(&self) -> Option<&SendResult> {
        match self {
            Self::Service(result) => Some(result),
            _ => None,
        }
    }

    /// HTTP status code, when the server answered with a non-2xx status.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SendCloudClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct SendCloudClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SendCloudClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (scheme and host, optionally a path prefix).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to every request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SendCloudClient`].
    pub fn build(self) -> Result<SendCloudClient, SendCloudError> {
        let base_url = normalize_base_url(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SendCloudError::Transport(Box::new(err)))?;

        Ok(SendCloudClient {
            credentials: self.credentials,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn normalize_base_url(input: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        input: input.to_owned(),
        reason,
    };

    let parsed = url::Url::parse(input).map_err(|err| invalid(err.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_owned()));
    }

    Ok(input.trim_end_matches('/').to_owned())
}

#[derive(Clone)]
/// High-level SendCloud SMS client.
///
/// Every call validates, builds the form, signs it with the account secret and
/// POSTs it to `{base}/smsapi/...`. The base URL defaults to
/// `https://api.sendcloud.net` and is fixed at construction.
///
/// The client is cheap to clone and safe to share between tasks.
pub struct SendCloudClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl SendCloudClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`SendCloudClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SendCloudClientBuilder {
        SendCloudClientBuilder::new(credentials)
    }

    /// Base URL requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a template SMS (`smsapi/send`).
    ///
    /// Errors:
    /// - [`SendCloudError::Transport`] / [`SendCloudError::HttpStatus`] when the call fails,
    /// - [`SendCloudError::Decode`] for an unexpected body,
    /// - [`SendCloudError::Service`] when SendCloud returns `result: false`.
    pub async fn send_template(
        &self,
        request: SendTemplateSms,
    ) -> Result<SendResult, SendCloudError> {
        self.credentials.validate()?;
        let params = crate::transport::encode_send_template_form(
            self.credentials.sms_user(),
            &request,
            TimestampMillis::now(),
        );
        self.dispatch(SEND_TEMPLATE_PATH, params, request.timeout()).await
    }

    /// Validate raw template arguments and send them.
    ///
    /// Returns [`SendCloudError::Validation`] without touching the network when
    /// the arguments are malformed.
    pub async fn send_template_args(
        &self,
        args: TemplateSmsArgs,
    ) -> Result<SendResult, SendCloudError> {
        self.credentials.validate()?;
        let request = SendTemplateSms::try_from(args)?;
        self.send_template(request).await
    }

    /// Send a verification code by SMS or voice (`smsapi/sendCode`).
    pub async fn send_code(&self, request: SendCodeSms) -> Result<SendResult, SendCloudError> {
        self.credentials.validate()?;
        let params = crate::transport::encode_send_code_form(
            self.credentials.sms_user(),
            &request,
            TimestampMillis::now(),
        );
        self.dispatch(SEND_CODE_PATH, params, request.timeout()).await
    }

    /// Send a voice verification code (`smsapi/sendVoice`).
    pub async fn send_voice(&self, request: SendVoiceSms) -> Result<SendResult, SendCloudError> {
        self.credentials.validate()?;
        let params = crate::transport::encode_send_voice_form(
            self.credentials.sms_user(),
            &request,
            TimestampMillis::now(),
        );
        self.dispatch(SEND_VOICE_PATH, params, request.timeout()).await
    }

    async fn dispatch(
        &self,
        path: &'static str,
        params: Vec<(String, String)>,
        timeout: Option<Duration>,
    ) -> Result<SendResult, SendCloudError> {
        let signed = SignedForm::sign(params, &self.credentials.sms_key);
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, fields = ?signed.field_names(), "sending signed form");

        let response = self
            .http
            .post_form(&url, signed.into_form(), timeout)
            .await
            .map_err(SendCloudError::Transport)?;

        if !(200..=299).contains(&response.status) {
            warn!(%url, status = response.status, "unexpected HTTP status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(SendCloudError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = crate::transport::decode_send_result_json(&response.body)
            .map_err(SendCloudError::Decode)?;

        if !parsed.result {
            warn!(
                %url,
                status_code = parsed.status_code.as_i32(),
                message = %parsed.message,
                "SendCloud rejected request"
            );
            return Err(SendCloudError::Service(Box::new(parsed)));
        }

        Ok(parsed)
    }
}
