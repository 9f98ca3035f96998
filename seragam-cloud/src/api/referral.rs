//! Referral notification triggers
//!
//! POST /functions/v1/notify-agent-code-used — a school redeemed a code
//! POST /functions/v1/notify-first-order     — a referred school ordered
//!
//! Both handlers resolve the referral chain synchronously and enqueue a
//! composed email for the background worker; delivery failures never fail
//! the triggering request.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use shared::error::{AppError, ErrorCode};

use crate::api;
use crate::db::{referrals, schools};
use crate::error::ServiceResult;
use crate::notify::{self, EmailJob};
use crate::state::AppState;

/// Platform commission rate applied to a referred school's first order
const COMMISSION_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2); // 0.02

/// First-order commission: `order_amount × 0.02 × credit_worth_factor`,
/// where the factor was frozen onto the code at redemption time.
pub fn commission(order_amount: i64, credit_worth_factor: Decimal) -> Decimal {
    Decimal::from(order_amount) * COMMISSION_RATE * credit_worth_factor
}

/// Whether `order_id` is the school's chronologically first order, given
/// the (at most two) earliest order ids.
fn is_first_order(earliest: &[String], order_id: &str) -> bool {
    earliest.first().map(String::as_str) == Some(order_id)
}

// ── POST /functions/v1/notify-agent-code-used ──

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NotifyCodeUsedRequest {
    pub code: String,
    pub school_name: String,
}

pub async fn notify_agent_code_used(
    State(state): State<AppState>,
    body: Bytes,
) -> ServiceResult<Json<serde_json::Value>> {
    let req: NotifyCodeUsedRequest = api::parse_json(&body)?;

    let code = referrals::find_code_by_code(&state.pool, &req.code)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ReferralCodeNotFound))?;

    let agent = referrals::find_agent_contact(&state.pool, &code.agent_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AgentNotFound))?;

    notify::enqueue_best_effort(
        &state.notifications,
        EmailJob::CodeUsed {
            to: agent.email,
            agent_name: agent.full_name,
            school_name: req.school_name,
            code: code.code,
        },
    );

    tracing::info!(code = %req.code, agent_id = %code.agent_id, "Code-used notification queued");

    Ok(Json(json!({
        "success": true,
        "message": "Notification queued",
    })))
}

// ── POST /functions/v1/notify-first-order ──

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NotifyFirstOrderRequest {
    pub school_id: String,
    pub order_id: String,
    /// Order total in minor currency units
    pub order_amount: i64,
}

pub async fn notify_first_order(
    State(state): State<AppState>,
    body: Bytes,
) -> ServiceResult<Json<serde_json::Value>> {
    let req: NotifyFirstOrderRequest = api::parse_json(&body)?;

    // Chronological check: only the school's first order pays commission
    let earliest = schools::earliest_order_ids(&state.pool, &req.school_id).await?;
    if !is_first_order(&earliest, &req.order_id) {
        tracing::info!(
            school_id = %req.school_id,
            order_id = %req.order_id,
            "Not the school's first order, skipping"
        );
        return Ok(Json(json!({
            "success": true,
            "message": "Not first order, skipped",
        })));
    }

    // Resolve referral attribution — a school without one is a benign no-op
    let Some(school) = schools::find_by_id(&state.pool, &req.school_id).await? else {
        return Ok(no_referral_response());
    };
    let Some(code_id) = school.referral_code_id else {
        return Ok(no_referral_response());
    };
    let Some(code) = referrals::find_code_by_id(&state.pool, &code_id).await? else {
        return Ok(no_referral_response());
    };
    let Some(agent) = referrals::find_agent_contact(&state.pool, &code.agent_id).await? else {
        return Ok(no_referral_response());
    };

    let commission_amount = commission(req.order_amount, code.credit_worth_factor);

    notify::enqueue_best_effort(
        &state.notifications,
        EmailJob::FirstOrder {
            to: agent.email,
            agent_name: agent.full_name,
            school_name: school.name,
            order_amount: req.order_amount,
            commission: commission_amount,
        },
    );

    tracing::info!(
        school_id = %req.school_id,
        order_id = %req.order_id,
        commission = %commission_amount,
        "First-order notification queued"
    );

    Ok(Json(json!({
        "success": true,
        "message": "Notification queued",
        "commission": commission_amount,
    })))
}

fn no_referral_response() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "message": "No referral found, skipped",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commission_rate_constant() {
        assert_eq!(COMMISSION_RATE, Decimal::new(2, 2));
    }

    #[test]
    fn test_commission_calculation() {
        // 100_000 × 0.02 × 1.5 = 3_000
        let factor = Decimal::new(15, 1); // 1.5
        assert_eq!(commission(100_000, factor), Decimal::from(3_000));
    }

    #[test]
    fn test_commission_with_unit_factor() {
        assert_eq!(commission(250_000, Decimal::ONE), Decimal::from(5_000));
    }

    #[test]
    fn test_commission_zero_amount() {
        assert_eq!(commission(0, Decimal::new(15, 1)), Decimal::ZERO);
    }

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_order_when_only_order() {
        assert!(is_first_order(&ids(&["order-1"]), "order-1"));
    }

    #[test]
    fn test_first_order_with_later_orders() {
        // The triggering order came first; a later one exists
        assert!(is_first_order(&ids(&["order-1", "order-2"]), "order-1"));
        // Some earlier order exists — the trigger is not first
        assert!(!is_first_order(&ids(&["order-0", "order-1"]), "order-1"));
    }

    #[test]
    fn test_first_order_with_no_orders() {
        assert!(!is_first_order(&ids(&[]), "order-1"));
    }
}
