use crate::domain::{
    LabelId, MsgType, PhoneList, SendCodeSms, SendVoiceSms, SmsUser, TimestampMillis,
    VerificationCode,
};

/// Build the unsigned `smsapi/sendCode` form.
pub fn encode_send_code_form(
    sms_user: &SmsUser,
    request: &SendCodeSms,
    timestamp: TimestampMillis,
) -> Vec<(String, String)> {
    let mut params = vec![
        (SmsUser::FIELD.to_owned(), sms_user.as_str().to_owned()),
        (MsgType::FIELD.to_owned(), request.msg_type().code().to_string()),
        (PhoneList::FIELD.to_owned(), request.phones().as_str().to_owned()),
        (
            VerificationCode::FIELD.to_owned(),
            request.code().as_str().to_owned(),
        ),
        (TimestampMillis::FIELD.to_owned(), timestamp.value().to_string()),
    ];
    push_label_id(&mut params, request.label_id());
    params
}

/// Build the unsigned `smsapi/sendVoice` form.
pub fn encode_send_voice_form(
    sms_user: &SmsUser,
    request: &SendVoiceSms,
    timestamp: TimestampMillis,
) -> Vec<(String, String)> {
    let mut params = vec![
        (SmsUser::FIELD.to_owned(), sms_user.as_str().to_owned()),
        (PhoneList::FIELD.to_owned(), request.phones().as_str().to_owned()),
        (
            VerificationCode::FIELD.to_owned(),
            request.code().as_str().to_owned(),
        ),
        (TimestampMillis::FIELD.to_owned(), timestamp.value().to_string()),
    ];
    push_label_id(&mut params, request.label_id());
    params
}

fn push_label_id(params: &mut Vec<(String, String)>, label_id: Option<LabelId>) {
    if let Some(label_id) = label_id {
        params.push((LabelId::FIELD.to_owned(), label_id.value().to_string()));
    }
}
