//! Transport layer: HTTP and wire-format details (signing, form encoding, JSON decoding).

mod send_code;
mod send_result;
mod send_template;
mod sign;

pub use send_code::{encode_send_code_form, encode_send_voice_form};
pub use send_result::decode_send_result_json;
pub use send_template::encode_send_template_form;
pub use sign::SignedForm;
#[cfg(test)]
pub use sign::signature;
