//! Command implementations behind the CLI surface.

use std::io::{self, Read};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled};

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{QuotedeskError, Result};
use crate::router;
use crate::types::InboundEmail;

/// Open the dashboard TUI at the given path.
///
/// NOTE: This function creates its own tokio runtime because it's an entry
/// point for the TUI. This is intentional and safe since it's not called
/// from within another async context.
pub fn cmd_browse(config: Config, path: &str) -> Result<()> {
    use crate::tui::DashboardApp;
    use iocraft::prelude::*;

    let route = router::resolve(path)?;
    let client = ApiClient::from_config(&config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| QuotedeskError::Other(format!("Failed to create runtime: {}", e)))?;

    rt.block_on(async {
        element!(DashboardApp(
            client: Some(client),
            initial_route: Some(route),
        ))
        .fullscreen()
        .await
        .map_err(|e| QuotedeskError::Other(format!("TUI error: {}", e)))
    })
}

/// Feed a simulated inbound email through the backend's ingestion pipeline.
pub async fn cmd_dev_receive_email(
    config: &Config,
    from: &str,
    subject: Option<&str>,
    body: Option<&str>,
    reply_to: Option<i64>,
) -> Result<()> {
    ensure_dev_enabled(config)?;

    let body = match body {
        Some(text) => text.to_string(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    if body.trim().is_empty() {
        return Err(QuotedeskError::Other("email body is empty".to_string()));
    }

    let client = ApiClient::from_config(config)?;
    let payload = InboundEmail {
        from_email: from.to_string(),
        subject: subject.map(str::to_string),
        body,
        in_reply_to: reply_to,
    };

    let outcome = client.simulate_inbound_email(&payload).await?;

    let ticket_number = outcome.ticket_number.as_deref().unwrap_or("?");
    let status = outcome
        .status
        .map(|s| s.label())
        .unwrap_or_else(|| "?".to_string());
    match outcome.kind.as_deref() {
        Some("reply") => println!(
            "{} Updated {} from reply (status {})",
            "✓".green(),
            ticket_number.cyan(),
            status.yellow()
        ),
        _ => println!(
            "{} Created {} (status {})",
            "✓".green(),
            ticket_number.cyan(),
            status.yellow()
        ),
    }
    Ok(())
}

#[derive(Tabled)]
struct SentEmailRow {
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Sent")]
    sent: String,
}

/// Show the backend's development outbox as a table.
pub async fn cmd_dev_sent_emails(config: &Config, limit: u32) -> Result<()> {
    ensure_dev_enabled(config)?;

    let client = ApiClient::from_config(config)?;
    let page = client.list_sent_emails(limit).await?;

    if page.emails.is_empty() {
        println!("No sent emails");
        return Ok(());
    }

    let rows: Vec<SentEmailRow> = page
        .emails
        .iter()
        .map(|email| SentEmailRow {
            to: email.to_email.clone().unwrap_or_default(),
            from: email.from_email.clone().unwrap_or_default(),
            subject: email.subject.clone().unwrap_or_default(),
            sent: email.created_at.clone().unwrap_or_default(),
        })
        .collect();

    println!("{}", Table::new(rows));
    println!("{} email(s)", page.count);
    Ok(())
}

/// Clear the backend's development outbox.
pub async fn cmd_dev_clear_sent_emails(config: &Config) -> Result<()> {
    ensure_dev_enabled(config)?;

    let client = ApiClient::from_config(config)?;
    client.clear_sent_emails().await?;
    println!("{} Cleared sent emails", "✓".green());
    Ok(())
}

fn ensure_dev_enabled(config: &Config) -> Result<()> {
    if config.dev_endpoints {
        Ok(())
    } else {
        Err(QuotedeskError::Config(
            "dev endpoints are disabled; set dev_endpoints: true in quotedesk.yaml \
             or QUOTEDESK_DEV=1"
                .to_string(),
        ))
    }
}
