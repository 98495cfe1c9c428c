//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{SendCodeSms, SendTemplateSms, SendVoiceSms, TemplateSmsArgs};
pub use response::SendResult;
pub use validation::{ConfigError, ValidationError};
pub use value::{
    LabelId, MAX_PHONE_NUMBERS, MAX_SEND_REQUEST_ID_CHARS, MsgType, PhoneList, SendRequestId,
    SmsKey, SmsUser, StatusCode, Tag, TemplateId, TimestampMillis, Vars, VerificationCode,
    validate_phone_numbers,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_list_of(count: usize) -> String {
        (0..count)
            .map(|idx| format!("138{:08}", idx))
            .collect::<Vec<_>>()
            .join(",")
    }

    #[test]
    fn credentials_reject_empty() {
        assert!(matches!(
            SmsUser::new(""),
            Err(ConfigError::Empty {
                field: SmsUser::FIELD
            })
        ));
        assert!(matches!(
            SmsKey::new(""),
            Err(ConfigError::Empty {
                field: SmsKey::FIELD
            })
        ));
        assert!(SmsUser::new("acct1").is_ok());
    }

    #[test]
    fn sms_key_debug_is_redacted() {
        let key = SmsKey::new("secret1").unwrap();
        assert_eq!(format!("{key:?}"), "SmsKey(***)");
        assert_eq!(key.expose(), "secret1");
    }

    #[test]
    fn validate_phone_numbers_rejects_empty_input() {
        assert_eq!(
            validate_phone_numbers(""),
            Err(ValidationError::BlankPhoneNumber { index: 0 })
        );
    }

    #[test]
    fn validate_phone_numbers_accepts_two_numbers() {
        assert_eq!(validate_phone_numbers("13800138000,13800138001"), Ok(2));
    }

    #[test]
    fn validate_phone_numbers_enforces_count_limit() {
        assert_eq!(
            validate_phone_numbers(&phone_list_of(MAX_PHONE_NUMBERS)),
            Ok(MAX_PHONE_NUMBERS)
        );
        assert_eq!(
            validate_phone_numbers(&phone_list_of(MAX_PHONE_NUMBERS + 1)),
            Err(ValidationError::TooManyPhoneNumbers {
                max: MAX_PHONE_NUMBERS,
                actual: MAX_PHONE_NUMBERS + 1,
            })
        );
    }

    #[test]
    fn validate_phone_numbers_rejects_blank_entry_after_trim() {
        assert_eq!(
            validate_phone_numbers("138000,  ,139000"),
            Err(ValidationError::BlankPhoneNumber { index: 1 })
        );
        assert_eq!(
            validate_phone_numbers("138000,139000,"),
            Err(ValidationError::BlankPhoneNumber { index: 2 })
        );
    }

    #[test]
    fn validate_phone_numbers_does_not_check_format() {
        assert_eq!(validate_phone_numbers("abc, 12 ,+x"), Ok(3));
    }

    #[test]
    fn phone_list_keeps_raw_value() {
        let list = PhoneList::new("13800138000, 13800138001").unwrap();
        assert_eq!(list.as_str(), "13800138000, 13800138001");
        assert_eq!(list.len(), 2);
        assert_eq!(
            list.entries().collect::<Vec<_>>(),
            vec!["13800138000", "13800138001"]
        );
    }

    #[test]
    fn phone_list_rejects_empty_string() {
        assert_eq!(
            PhoneList::new(""),
            Err(ValidationError::Empty {
                field: PhoneList::FIELD
            })
        );
    }

    #[test]
    fn phone_list_from_numbers_joins_with_commas() {
        let list = PhoneList::from_numbers(["13800138000", "13800138001"]).unwrap();
        assert_eq!(list.as_str(), "13800138000,13800138001");
    }

    #[test]
    fn strict_phone_list_rejects_malformed_numbers() {
        let err = PhoneList::parse_strict(None, "+8613800138000,not-a-number").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPhoneNumber { .. }));

        let list = PhoneList::parse_strict(None, "+8613800138000").unwrap();
        assert_eq!(list.as_str(), "+8613800138000");
    }

    #[test]
    fn template_id_rejects_zero() {
        assert_eq!(TemplateId::new(0), Err(ValidationError::ZeroTemplateId));
        assert_eq!(TemplateId::new(1).unwrap().value(), 1);
    }

    #[test]
    fn msg_type_accepts_only_known_codes() {
        for (code, kind) in (0_i32..).zip(MsgType::ALL) {
            assert_eq!(MsgType::try_from(code), Ok(kind));
            assert_eq!(kind.code(), code);
        }
        assert_eq!(
            MsgType::try_from(6_i32),
            Err(ValidationError::InvalidMsgType { actual: 6 })
        );
        assert!(MsgType::try_from(-1_i32).is_err());
    }

    #[test]
    fn send_request_id_length_limit_is_enforced() {
        assert!(SendRequestId::new("a".repeat(MAX_SEND_REQUEST_ID_CHARS)).is_ok());
        assert_eq!(
            SendRequestId::new("a".repeat(MAX_SEND_REQUEST_ID_CHARS + 1)),
            Err(ValidationError::TooLong {
                field: SendRequestId::FIELD,
                max: MAX_SEND_REQUEST_ID_CHARS,
                actual: MAX_SEND_REQUEST_ID_CHARS + 1,
            })
        );
    }

    #[test]
    fn send_request_id_counts_characters_not_bytes() {
        assert!(SendRequestId::new("é".repeat(MAX_SEND_REQUEST_ID_CHARS)).is_ok());
    }

    #[test]
    fn template_args_reject_zero_template_id_first() {
        let args = TemplateSmsArgs {
            template_id: 0,
            msg_type: 42,
            ..Default::default()
        };
        assert_eq!(
            SendTemplateSms::try_from(args),
            Err(ValidationError::ZeroTemplateId)
        );
    }

    #[test]
    fn template_args_reject_out_of_range_msg_type() {
        let args = TemplateSmsArgs {
            template_id: 1,
            msg_type: 6,
            phone: "13800138000".to_owned(),
            ..Default::default()
        };
        assert_eq!(
            SendTemplateSms::try_from(args),
            Err(ValidationError::InvalidMsgType { actual: 6 })
        );
    }

    #[test]
    fn template_args_reject_empty_phone() {
        let args = TemplateSmsArgs {
            template_id: 1,
            ..Default::default()
        };
        assert_eq!(
            SendTemplateSms::try_from(args),
            Err(ValidationError::Empty {
                field: PhoneList::FIELD
            })
        );
    }

    #[test]
    fn template_args_enforce_send_request_id_limit() {
        let make = |len: usize| TemplateSmsArgs {
            template_id: 1,
            phone: "13800138000".to_owned(),
            send_request_id: "k".repeat(len),
            ..Default::default()
        };
        assert!(SendTemplateSms::try_from(make(128)).is_ok());
        assert!(matches!(
            SendTemplateSms::try_from(make(129)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn template_args_treat_empty_optionals_as_absent() {
        let request = SendTemplateSms::try_from(TemplateSmsArgs {
            template_id: 7,
            label_id: 0,
            msg_type: 5,
            phone: "13800138000".to_owned(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(request.msg_type(), MsgType::Marketing);
        assert!(request.vars().is_none());
        assert!(request.send_request_id().is_none());
        assert!(request.tag().is_none());
        assert!(request.label_id().is_none());
    }

    #[test]
    fn code_sms_accepts_only_sms_or_voice() {
        let phones = PhoneList::new("13800138000").unwrap();
        let code = VerificationCode::new("123456").unwrap();
        assert!(SendCodeSms::new(MsgType::Sms, phones.clone(), code.clone()).is_ok());
        assert!(SendCodeSms::new(MsgType::Voice, phones.clone(), code.clone()).is_ok());
        assert_eq!(
            SendCodeSms::new(MsgType::Mms, phones, code),
            Err(ValidationError::UnsupportedMsgType {
                msg_type: MsgType::Mms
            })
        );
    }

    #[test]
    fn verification_code_rejects_blank() {
        assert!(VerificationCode::new("  ").is_err());
        assert_eq!(VerificationCode::new(" 1234 ").unwrap().as_str(), "1234");
    }

    #[test]
    fn vars_from_json_serializes_object() {
        let vars = Vars::from_json(&serde_json::json!({"code": "1234"})).unwrap();
        assert_eq!(vars.as_str(), r#"{"code":"1234"}"#);
    }
}
