//! Direct email delivery endpoint
//!
//! POST /functions/v1/send-agent-email — the synchronous delivery surface
//! used by trusted backend jobs. Unlike the notify-* triggers, a provider
//! failure here is the caller's problem and surfaces as a 500.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use shared::error::{AppError, ErrorCode};

use crate::api;
use crate::error::ServiceResult;
use crate::state::AppState;

/// Template selector plus its fields; an unknown `type` is a 400.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SendAgentEmailRequest {
    #[serde(rename_all = "camelCase")]
    CodeUsed {
        agent_email: String,
        agent_name: String,
        school_name: String,
        code: String,
    },
    #[serde(rename_all = "camelCase")]
    FirstOrder {
        agent_email: String,
        agent_name: String,
        school_name: String,
        /// Order total in minor currency units
        order_amount: i64,
        commission: Decimal,
    },
}

pub async fn send_agent_email(
    State(state): State<AppState>,
    body: Bytes,
) -> ServiceResult<Json<serde_json::Value>> {
    let req: SendAgentEmailRequest = api::parse_json(&body)?;

    let result = match &req {
        SendAgentEmailRequest::CodeUsed {
            agent_email,
            agent_name,
            school_name,
            code,
        } => {
            state
                .email
                .send_code_used(agent_email, agent_name, school_name, code)
                .await
        }
        SendAgentEmailRequest::FirstOrder {
            agent_email,
            agent_name,
            school_name,
            order_amount,
            commission,
        } => {
            state
                .email
                .send_first_order(agent_email, agent_name, school_name, *order_amount, *commission)
                .await
        }
    };

    let response = result.map_err(|e| {
        tracing::error!(error = %e, "Agent email delivery failed");
        AppError::with_message(ErrorCode::EmailSendFailed, format!("Email delivery failed: {e}"))
    })?;

    Ok(Json(json!({
        "success": true,
        "emailResponse": response,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_code_used_request() {
        let json = r#"{
            "type": "code_used",
            "agentEmail": "budi@agents.example",
            "agentName": "Budi",
            "schoolName": "SDN 01",
            "code": "AGEN-BUDI"
        }"#;
        let req: SendAgentEmailRequest = serde_json::from_str(json).unwrap();
        assert!(matches!(req, SendAgentEmailRequest::CodeUsed { .. }));
    }

    #[test]
    fn test_parses_first_order_request() {
        let json = r#"{
            "type": "first_order",
            "agentEmail": "budi@agents.example",
            "agentName": "Budi",
            "schoolName": "SDN 01",
            "orderAmount": 100000,
            "commission": 3000
        }"#;
        let req: SendAgentEmailRequest = serde_json::from_str(json).unwrap();
        match req {
            SendAgentEmailRequest::FirstOrder { order_amount, .. } => {
                assert_eq!(order_amount, 100_000);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_type() {
        let json = r#"{"type": "spam_everyone"}"#;
        assert!(serde_json::from_str::<SendAgentEmailRequest>(json).is_err());
    }
}
