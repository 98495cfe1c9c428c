use std::io;
use std::time::Duration;

use sendcloud_sms::{Credentials, PhoneList, SendCloudClient, SendVoiceSms, VerificationCode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let phone = std::env::var("SENDCLOUD_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SENDCLOUD_PHONE environment variable is required",
        )
    })?;
    let code = std::env::var("SENDCLOUD_CODE").unwrap_or_else(|_| "2468".to_owned());

    let client = SendCloudClient::builder(Credentials::from_env()?)
        .timeout(Duration::from_secs(10))
        .build()?;
    let request = SendVoiceSms::new(PhoneList::new(phone)?, VerificationCode::new(code)?);

    let result = client.send_voice(request).await?;
    println!(
        "status_code: {}, message: {}",
        result.status_code.as_i32(),
        result.message
    );

    Ok(())
}
