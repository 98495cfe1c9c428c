use std::time::Duration;

use crate::domain::validation::ValidationError;
use crate::domain::value::{
    LabelId, MsgType, PhoneList, SendRequestId, Tag, TemplateId, Vars, VerificationCode,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Template send (`smsapi/send`).
pub struct SendTemplateSms {
    template_id: TemplateId,
    msg_type: MsgType,
    phones: PhoneList,
    label_id: Option<LabelId>,
    vars: Option<Vars>,
    send_request_id: Option<SendRequestId>,
    tag: Option<Tag>,
    timeout: Option<Duration>,
}

impl SendTemplateSms {
    pub fn new(template_id: TemplateId, msg_type: MsgType, phones: PhoneList) -> Self {
        Self {
            template_id,
            msg_type,
            phones,
            label_id: None,
            vars: None,
            send_request_id: None,
            tag: None,
            timeout: None,
        }
    }

    pub fn with_label_id(mut self, label_id: LabelId) -> Self {
        self.label_id = Some(label_id);
        self
    }

    pub fn with_vars(mut self, vars: Vars) -> Self {
        self.vars = Some(vars);
        self
    }

    pub fn with_send_request_id(mut self, send_request_id: SendRequestId) -> Self {
        self.send_request_id = Some(send_request_id);
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Bound this request's total duration, overriding any client-wide timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn template_id(&self) -> TemplateId {
        self.template_id
    }

    pub fn msg_type(&self) -> MsgType {
        self.msg_type
    }

    pub fn phones(&self) -> &PhoneList {
        &self.phones
    }

    /// Carried for callers; not part of the `smsapi/send` form.
    pub fn label_id(&self) -> Option<LabelId> {
        self.label_id
    }

    pub fn vars(&self) -> Option<&Vars> {
        self.vars.as_ref()
    }

    pub fn send_request_id(&self) -> Option<&SendRequestId> {
        self.send_request_id.as_ref()
    }

    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Loosely typed template send arguments, mirroring the raw API fields.
///
/// Convert with [`SendTemplateSms::try_from`]; empty optional strings mean "absent".
pub struct TemplateSmsArgs {
    pub template_id: u32,
    pub label_id: u32,
    pub msg_type: i32,
    pub phone: String,
    pub vars: String,
    pub send_request_id: String,
    pub tag: String,
}

impl TryFrom<TemplateSmsArgs> for SendTemplateSms {
    type Error = ValidationError;

    fn try_from(args: TemplateSmsArgs) -> Result<Self, Self::Error> {
        let template_id = TemplateId::new(args.template_id)?;
        let msg_type = MsgType::try_from(args.msg_type)?;
        if args.phone.is_empty() {
            return Err(ValidationError::Empty {
                field: PhoneList::FIELD,
            });
        }
        let send_request_id = non_empty(args.send_request_id)
            .map(SendRequestId::new)
            .transpose()?;
        let phones = PhoneList::new(args.phone)?;

        Ok(Self {
            template_id,
            msg_type,
            phones,
            label_id: (args.label_id != 0).then(|| LabelId::new(args.label_id)),
            vars: non_empty(args.vars).map(Vars::new).transpose()?,
            send_request_id,
            tag: non_empty(args.tag).map(Tag::new).transpose()?,
            timeout: None,
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Verification code send (`smsapi/sendCode`).
///
/// Invariant: message type is [`MsgType::Sms`] or [`MsgType::Voice`].
pub struct SendCodeSms {
    msg_type: MsgType,
    phones: PhoneList,
    code: VerificationCode,
    label_id: Option<LabelId>,
    timeout: Option<Duration>,
}

impl SendCodeSms {
    pub fn new(
        msg_type: MsgType,
        phones: PhoneList,
        code: VerificationCode,
    ) -> Result<Self, ValidationError> {
        if !matches!(msg_type, MsgType::Sms | MsgType::Voice) {
            return Err(ValidationError::UnsupportedMsgType { msg_type });
        }
        Ok(Self {
            msg_type,
            phones,
            code,
            label_id: None,
            timeout: None,
        })
    }

    pub fn with_label_id(mut self, label_id: LabelId) -> Self {
        self.label_id = Some(label_id);
        self
    }

    /// Bound this request's total duration, overriding any client-wide timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn msg_type(&self) -> MsgType {
        self.msg_type
    }

    pub fn phones(&self) -> &PhoneList {
        &self.phones
    }

    pub fn code(&self) -> &VerificationCode {
        &self.code
    }

    pub fn label_id(&self) -> Option<LabelId> {
        self.label_id
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Voice verification code send (`smsapi/sendVoice`).
pub struct SendVoiceSms {
    phones: PhoneList,
    code: VerificationCode,
    label_id: Option<LabelId>,
    timeout: Option<Duration>,
}

impl SendVoiceSms {
    pub fn new(phones: PhoneList, code: VerificationCode) -> Self {
        Self {
            phones,
            code,
            label_id: None,
            timeout: None,
        }
    }

    pub fn with_label_id(mut self, label_id: LabelId) -> Self {
        self.label_id = Some(label_id);
        self
    }

    /// Bound this request's total duration, overriding any client-wide timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn phones(&self) -> &PhoneList {
        &self.phones
    }

    pub fn code(&self) -> &VerificationCode {
        &self.code
    }

    pub fn label_id(&self) -> Option<LabelId> {
        self.label_id
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
