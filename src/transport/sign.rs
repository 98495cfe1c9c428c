use sha2::{Digest, Sha256};

use crate::domain::SmsKey;

/// Form field carrying the computed signature.
pub const SIGNATURE_FIELD: &str = "signature";

/// Fields that never take part in the sign string.
const EXCLUDED_FIELDS: [&str; 2] = [SmsKey::FIELD, SIGNATURE_FIELD];

/// Form parameters together with their signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedForm {
    params: Vec<(String, String)>,
    signature: String,
}

impl SignedForm {
    /// Sign `params` with `secret`. Any pre-existing `signature` entry is replaced.
    pub fn sign(mut params: Vec<(String, String)>, secret: &SmsKey) -> Self {
        params.retain(|(key, _)| key != SIGNATURE_FIELD);
        let signature = signature(&params, secret);
        Self { params, signature }
    }

    /// Field names in submission order, without values.
    pub fn field_names(&self) -> Vec<&str> {
        self.params
            .iter()
            .map(|(key, _)| key.as_str())
            .chain(std::iter::once(SIGNATURE_FIELD))
            .collect()
    }

    /// The form body as submitted: all parameters followed by `signature`.
    pub fn into_form(self) -> Vec<(String, String)> {
        let mut params = self.params;
        params.push((SIGNATURE_FIELD.to_owned(), self.signature));
        params
    }
}

/// Sorted `key=value` pairs joined with `&`, excluding `smsKey` and `signature`.
///
/// Keys are sorted by byte order. When a key repeats, its first value wins.
pub fn canonical_param_string(params: &[(String, String)]) -> String {
    let mut pairs = params
        .iter()
        .filter(|(key, _)| !EXCLUDED_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect::<Vec<_>>();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    pairs.dedup_by(|later, earlier| later.0 == earlier.0);

    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// `secret&<canonical params>&secret`.
pub fn sign_string(params: &[(String, String)], secret: &SmsKey) -> String {
    let secret = secret.expose();
    format!("{secret}&{}&{secret}", canonical_param_string(params))
}

/// Lowercase hex SHA-256 of the sign string.
pub fn signature(params: &[(String, String)], secret: &SmsKey) -> String {
    let digest = Sha256::digest(sign_string(params, secret).as_bytes());
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    fn key(value: &str) -> SmsKey {
        SmsKey::new(value).unwrap()
    }

    #[test]
    fn canonical_string_sorts_keys_and_drops_excluded_fields() {
        let form = params(&[
            ("timestamp", "1700000000000"),
            ("smsKey", "leak"),
            ("phone", "13800138000"),
            ("signature", "stale"),
            ("msgType", "0"),
        ]);
        assert_eq!(
            canonical_param_string(&form),
            "msgType=0&phone=13800138000&timestamp=1700000000000"
        );
    }

    #[test]
    fn canonical_string_uses_byte_order() {
        let form = params(&[("b", "2"), ("B", "1"), ("a", "3")]);
        assert_eq!(canonical_param_string(&form), "B=1&a=3&b=2");
    }

    #[test]
    fn canonical_string_keeps_first_value_of_repeated_key() {
        let form = params(&[("a", "1"), ("a", "2")]);
        assert_eq!(canonical_param_string(&form), "a=1");
    }

    #[test]
    fn canonical_string_of_empty_params_is_empty() {
        assert_eq!(canonical_param_string(&[]), "");
    }

    #[test]
    fn sign_string_wraps_params_with_secret() {
        let form = params(&[("b", "2"), ("a", "1")]);
        assert_eq!(sign_string(&form, &key("K")), "K&a=1&b=2&K");
    }

    #[test]
    fn signature_matches_known_digest() {
        let form = params(&[
            ("smsUser", "acct1"),
            ("msgType", "0"),
            ("phone", "13800138000"),
            ("templateId", "1"),
            ("timestamp", "1700000000000"),
        ]);
        assert_eq!(
            signature(&form, &key("secret1")),
            "8f9a52efec4ebec4e31608363a15d02a01357ee3eb94d0f8547502046180069a"
        );
        assert_eq!(
            signature(&params(&[("a", "1"), ("b", "2")]), &key("K")),
            "7fc04f53bbb5342eb5c6b17e05b5d30c74da6846a7eb6321df2c227ed75dbc0d"
        );
    }

    #[test]
    fn signature_is_deterministic_and_keyed() {
        let form = params(&[("a", "1"), ("b", "2")]);
        let first = signature(&form, &key("K"));
        assert_eq!(first, signature(&form, &key("K")));
        assert_ne!(first, signature(&form, &key("K2")));
        assert_eq!(first.len(), 64);
        assert!(
            first
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn signature_changes_with_any_param_value() {
        let base = params(&[("a", "1"), ("b", "2")]);
        let changed = params(&[("a", "1"), ("b", "3")]);
        assert_ne!(signature(&base, &key("K")), signature(&changed, &key("K")));
    }

    #[test]
    fn signature_ignores_param_order_and_excluded_fields() {
        let ordered = params(&[("a", "1"), ("b", "2")]);
        let shuffled = params(&[("signature", "x"), ("b", "2"), ("smsKey", "y"), ("a", "1")]);
        assert_eq!(
            signature(&ordered, &key("K")),
            signature(&shuffled, &key("K"))
        );
    }

    #[test]
    fn signed_form_replaces_existing_signature() {
        let form = params(&[("a", "1"), ("signature", "stale")]);
        let signed = SignedForm::sign(form, &key("K"));
        assert_eq!(signed.field_names(), vec!["a", "signature"]);

        let body = signed.into_form();
        assert_eq!(
            body,
            vec![
                ("a".to_owned(), "1".to_owned()),
                (
                    "signature".to_owned(),
                    signature(&params(&[("a", "1")]), &key("K"))
                ),
            ]
        );
    }
}
