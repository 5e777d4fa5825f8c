// EmailJS delivery credentials. Real values are injected at build time:
// EMAILJS_SERVICE_ID=... EMAILJS_TEMPLATE_ID=... EMAILJS_PUBLIC_KEY=... trunk build --release

pub fn emailjs_send_url() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}

pub fn emailjs_service_id() -> &'static str {
    option_env!("EMAILJS_SERVICE_ID").unwrap_or("service_efglobal")
}

pub fn emailjs_template_id() -> &'static str {
    option_env!("EMAILJS_TEMPLATE_ID").unwrap_or("template_lead")
}

pub fn emailjs_public_key() -> &'static str {
    option_env!("EMAILJS_PUBLIC_KEY").unwrap_or("qX1dZr0fM4kTtB3Jp")
}
