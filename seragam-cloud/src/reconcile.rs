//! Order-item status reconciliation
//!
//! Runs after a COMPLETE print event that carries a student id and a
//! garment count. Both printed counters are recomputed as sums over the
//! immutable event log (never incremented in place), then the coarse
//! completion status is derived from printed vs. required totals.
//!
//! Reconciliation is a best-effort side effect of event ingestion: a
//! failure here is logged and must not fail the submitting device's
//! request.

use shared::session::ItemStatus;
use sqlx::PgPool;

use crate::db;

/// Recompute a student's printed counters and derived status from the
/// print event log.
pub async fn reconcile_student(pool: &PgPool, student_id: &str) -> Result<(), sqlx::Error> {
    let Some(student) = db::students::find_by_id(pool, student_id).await? else {
        tracing::warn!(student_id = student_id, "COMPLETE event for unknown student");
        return Ok(());
    };

    let (printed_dark, printed_light) = db::print_events::printed_totals(pool, student_id).await?;

    let required_dark = i64::from(student.dark_garments_count);
    let required_light = i64::from(student.light_garments_count);
    let status = ItemStatus::derive(
        printed_dark + printed_light,
        required_dark + required_light,
    );
    let dark_done = required_dark > 0 && printed_dark >= required_dark;
    let light_done = required_light > 0 && printed_light >= required_light;

    db::students::apply_reconciled_counts(
        pool,
        student_id,
        clamp_count(printed_dark),
        clamp_count(printed_light),
        dark_done,
        light_done,
        status,
    )
    .await?;

    tracing::debug!(
        student_id = student_id,
        printed_dark = printed_dark,
        printed_light = printed_light,
        status = %status,
        "Student reconciled"
    );
    Ok(())
}

/// Best-effort wrapper used by the ingestion path
pub async fn reconcile_best_effort(pool: &PgPool, student_id: &str) {
    if let Err(e) = reconcile_student(pool, student_id).await {
        tracing::error!(
            student_id = student_id,
            error = %e,
            "Failed to reconcile student after COMPLETE event"
        );
    }
}

/// Printed sums come back as i64; the counter columns are INTEGER
fn clamp_count(total: i64) -> i32 {
    total.clamp(0, i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_count() {
        assert_eq!(clamp_count(0), 0);
        assert_eq!(clamp_count(42), 42);
        assert_eq!(clamp_count(i64::from(i32::MAX) + 1), i32::MAX);
        assert_eq!(clamp_count(-5), 0);
    }

    #[test]
    fn test_derivation_matches_spec_examples() {
        // dark_count=10, light_count=0, printed_dark=10 ⇒ COMPLETED
        assert_eq!(ItemStatus::derive(10, 10), ItemStatus::Completed);
        // printed_dark=5 ⇒ IN_PROGRESS
        assert_eq!(ItemStatus::derive(5, 10), ItemStatus::InProgress);
    }
}
