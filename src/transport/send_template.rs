use crate::domain::{
    MsgType, PhoneList, SendRequestId, SendTemplateSms, SmsUser, Tag, TemplateId, TimestampMillis,
    Vars,
};

/// Build the unsigned `smsapi/send` form.
///
/// `vars` and `tag` are sent as JSON string literals, so their content arrives quoted.
pub fn encode_send_template_form(
    sms_user: &SmsUser,
    request: &SendTemplateSms,
    timestamp: TimestampMillis,
) -> Vec<(String, String)> {
    let mut params = vec![
        (SmsUser::FIELD.to_owned(), sms_user.as_str().to_owned()),
        (MsgType::FIELD.to_owned(), request.msg_type().code().to_string()),
        (PhoneList::FIELD.to_owned(), request.phones().as_str().to_owned()),
        (
            TemplateId::FIELD.to_owned(),
            request.template_id().value().to_string(),
        ),
        (TimestampMillis::FIELD.to_owned(), timestamp.value().to_string()),
    ];

    if let Some(vars) = request.vars() {
        params.push((Vars::FIELD.to_owned(), json_string(vars.as_str())));
    }
    if let Some(send_request_id) = request.send_request_id() {
        params.push((
            SendRequestId::FIELD.to_owned(),
            send_request_id.as_str().to_owned(),
        ));
    }
    if let Some(tag) = request.tag() {
        params.push((Tag::FIELD.to_owned(), json_string(tag.as_str())));
    }

    params
}

fn json_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
