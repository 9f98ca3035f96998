//! Background notification delivery
//!
//! Handlers resolve the referral chain synchronously (keeping 404
//! semantics exact) and enqueue a fully-composed job; this worker owns
//! the email client and delivers off the request path. Delivery failures
//! are logged here, never surfaced to the triggering request.

use rust_decimal::Decimal;
use tokio::sync::mpsc;

use crate::email::EmailClient;

/// A composed notification awaiting delivery
#[derive(Debug)]
pub enum EmailJob {
    CodeUsed {
        to: String,
        agent_name: String,
        school_name: String,
        code: String,
    },
    FirstOrder {
        to: String,
        agent_name: String,
        school_name: String,
        order_amount: i64,
        commission: Decimal,
    },
}

/// Handler-side handle to the delivery queue
pub type NotificationSender = mpsc::Sender<EmailJob>;

/// Spawn the delivery worker and return the queue handle.
///
/// The worker runs until every sender is dropped.
pub fn spawn_worker(email: EmailClient) -> NotificationSender {
    let (tx, mut rx) = mpsc::channel::<EmailJob>(256);

    tokio::spawn(async move {
        tracing::info!("Notification worker started");

        while let Some(job) = rx.recv().await {
            match deliver(&email, &job).await {
                Ok(()) => {}
                Err(e) => {
                    tracing::error!(error = %e, job = ?job, "Failed to deliver notification email");
                }
            }
        }

        tracing::info!("Notification channel closed, worker stopping");
    });

    tx
}

async fn deliver(
    email: &EmailClient,
    job: &EmailJob,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match job {
        EmailJob::CodeUsed {
            to,
            agent_name,
            school_name,
            code,
        } => {
            email.send_code_used(to, agent_name, school_name, code).await?;
        }
        EmailJob::FirstOrder {
            to,
            agent_name,
            school_name,
            order_amount,
            commission,
        } => {
            email
                .send_first_order(to, agent_name, school_name, *order_amount, *commission)
                .await?;
        }
    }
    Ok(())
}

/// Enqueue a job, logging (not failing) when the queue is unavailable.
///
/// Notification delivery is best-effort by contract: the triggering
/// request must succeed even if the worker is gone or the queue is full.
pub fn enqueue_best_effort(tx: &NotificationSender, job: EmailJob) {
    if let Err(e) = tx.try_send(job) {
        tracing::error!(error = %e, "Failed to enqueue notification");
    }
}
