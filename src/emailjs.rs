//! Lead delivery through the EmailJS REST API.
//!
//! One best-effort POST per submission. There is no retry and no
//! queueing; on failure the visitor is pointed at the direct phone line.

use gloo_console::log;
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config;

/// Shown in the failure alert so a broken delivery never loses the lead.
pub const FALLBACK_PHONE: &str = "010-5630-8344";

/// Template text used when the optional message field is left blank.
const EMPTY_MESSAGE_PLACEHOLDER: &str = "상담 내용 없음";

/// One consultation request. Field names are the EmailJS template
/// parameter names, so the form values map onto the email verbatim.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct LeadSubmission {
    pub from_name: String,
    pub from_phone: String,
    pub region: String,
    pub message: String,
}

impl LeadSubmission {
    pub fn new(name: &str, phone: &str, region: &str, message: &str) -> Self {
        let message = if message.is_empty() {
            EMPTY_MESSAGE_PLACEHOLDER.to_string()
        } else {
            message.to_string()
        };
        Self {
            from_name: name.to_string(),
            from_phone: phone.to_string(),
            region: region.to_string(),
            message,
        }
    }
}

/// Request envelope for the EmailJS send endpoint.
pub fn send_payload(lead: &LeadSubmission) -> Value {
    json!({
        "service_id": config::emailjs_service_id(),
        "template_id": config::emailjs_template_id(),
        "user_id": config::emailjs_public_key(),
        "template_params": lead,
    })
}

pub async fn send_lead(lead: &LeadSubmission) -> Result<(), String> {
    let response = Request::post(config::emailjs_send_url())
        .json(&send_payload(lead))
        .map_err(|e| format!("failed to serialize lead: {e}"))?
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if response.ok() {
        log!("lead delivered");
        Ok(())
    } else {
        Err(format!("delivery failed with status {}", response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_map_verbatim() {
        let lead = LeadSubmission::new(
            "홍길동 대표",
            "010-0000-0000",
            "강원도",
            "100kW 현장 견적 문의드립니다.",
        );
        let payload = send_payload(&lead);
        let params = &payload["template_params"];
        assert_eq!(params["from_name"], "홍길동 대표");
        assert_eq!(params["from_phone"], "010-0000-0000");
        assert_eq!(params["region"], "강원도");
        assert_eq!(params["message"], "100kW 현장 견적 문의드립니다.");
    }

    #[test]
    fn blank_message_gets_the_placeholder() {
        let lead = LeadSubmission::new("홍길동", "010-0000-0000", "제주도", "");
        assert_eq!(lead.message, "상담 내용 없음");
    }

    #[test]
    fn nonblank_message_is_untouched() {
        let lead = LeadSubmission::new("홍길동", "010-0000-0000", "제주도", " ");
        assert_eq!(lead.message, " ");
    }

    #[test]
    fn envelope_carries_the_three_credentials() {
        let lead = LeadSubmission::new("홍길동", "010-0000-0000", "기타", "");
        let payload = send_payload(&lead);
        assert_eq!(payload["service_id"], config::emailjs_service_id());
        assert_eq!(payload["template_id"], config::emailjs_template_id());
        assert_eq!(payload["user_id"], config::emailjs_public_key());
        assert!(payload["template_params"].is_object());
    }
}
