use std::io;

use sendcloud_sms::{
    Credentials, MsgType, PhoneList, SendCloudClient, SendCloudError, SendTemplateSms, TemplateId,
    Vars,
};
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
    let template_id = std::env::var("SENDCLOUD_TEMPLATE_ID")
        .ok()
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(1);
    let vars = std::env::var("SENDCLOUD_VARS").ok();

    let client = SendCloudClient::new(Credentials::from_env()?);
    let mut request = SendTemplateSms::new(
        TemplateId::new(template_id)?,
        MsgType::Sms,
        PhoneList::new(phone)?,
    );
    if let Some(vars) = vars {
        request = request.with_vars(Vars::new(vars)?);
    }

    match client.send_template(request).await {
        Ok(result) => println!(
            "sent: status_code={}, message={}, info={}",
            result.status_code.as_i32(),
            result.message,
            result.info
        ),
        Err(SendCloudError::Service(result)) => println!(
            "rejected: status_code={}, message={}",
            result.status_code.as_i32(),
            result.message
        ),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
