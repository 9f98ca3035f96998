//! Transactional email via the Resend REST API (no SDK dependency)
//!
//! Two templates exist, one per referral-commission trigger:
//! - `code_used` — an agent's referral code was redeemed by a school
//! - `first_order` — a referred school placed its first order

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Provider response for a sent email
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailResponse {
    pub id: String,
}

/// REST client for the transactional email provider
#[derive(Clone)]
pub struct EmailClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    from: String,
}

impl EmailClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.resend_base_url.clone(),
            api_key: config.resend_api_key.clone(),
            from: config.email_from.clone(),
        }
    }

    /// Notify an agent that their referral code was redeemed
    pub async fn send_code_used(
        &self,
        to: &str,
        agent_name: &str,
        school_name: &str,
        code: &str,
    ) -> Result<EmailResponse, BoxError> {
        let subject = format!("Kode referral {code} digunakan / Your referral code was used");
        let html = code_used_html(agent_name, school_name, code);
        self.send(to, &subject, &html).await
    }

    /// Notify an agent that a referred school placed its first order
    pub async fn send_first_order(
        &self,
        to: &str,
        agent_name: &str,
        school_name: &str,
        order_amount: i64,
        commission: Decimal,
    ) -> Result<EmailResponse, BoxError> {
        let subject = "Pesanan pertama sekolah referral Anda / First order from your referral"
            .to_string();
        let html = first_order_html(agent_name, school_name, order_amount, commission);
        self.send(to, &subject, &html).await
    }

    async fn send(&self, to: &str, subject: &str, html: &str) -> Result<EmailResponse, BoxError> {
        let resp = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "from": self.from,
                "to": [to],
                "subject": subject,
                "html": html,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(format!("email provider returned {status}: {body}").into());
        }

        let body: EmailResponse = resp.json().await?;
        tracing::info!(to = to, email_id = %body.id, "Email sent");
        Ok(body)
    }
}

// ── Templates ──

fn code_used_html(agent_name: &str, school_name: &str, code: &str) -> String {
    format!(
        "<div style=\"font-family: sans-serif; max-width: 560px;\">\
           <h2>Kode referral Anda digunakan</h2>\
           <p>Halo {agent_name},</p>\
           <p><strong>{school_name}</strong> baru saja mendaftar menggunakan kode \
              referral Anda <strong>{code}</strong>.</p>\
           <p>Komisi Anda akan dihitung saat sekolah tersebut melakukan \
              pemesanan pertama.</p>\
           <p>— Tim Seragam</p>\
         </div>"
    )
}

fn first_order_html(
    agent_name: &str,
    school_name: &str,
    order_amount: i64,
    commission: Decimal,
) -> String {
    format!(
        "<div style=\"font-family: sans-serif; max-width: 560px;\">\
           <h2>Pesanan pertama dari sekolah referral Anda</h2>\
           <p>Halo {agent_name},</p>\
           <p><strong>{school_name}</strong> telah melakukan pemesanan pertama \
              senilai <strong>Rp {order_amount}</strong>.</p>\
           <p>Komisi referral Anda: <strong>Rp {commission}</strong>.</p>\
           <p>— Tim Seragam</p>\
         </div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_used_template_substitution() {
        let html = code_used_html("Budi", "SDN 01 Menteng", "AGEN-BUDI");
        assert!(html.contains("Budi"));
        assert!(html.contains("SDN 01 Menteng"));
        assert!(html.contains("AGEN-BUDI"));
    }

    #[test]
    fn test_first_order_template_substitution() {
        let commission = Decimal::from(3000);
        let html = first_order_html("Budi", "SDN 01 Menteng", 100_000, commission);
        assert!(html.contains("Rp 100000"));
        assert!(html.contains("Rp 3000"));
    }
}
