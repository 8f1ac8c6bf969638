//! HTTP client for the ticket backend's REST API.
//!
//! Thin wrapper over reqwest: every method performs exactly one round
//! trip and maps the response into domain types. Caching belongs to the
//! query layer, not here; there are no retries and no timeouts.

use reqwest::{Client, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{QuotedeskError, Result};
use crate::types::{
    InboundEmail, IngestOutcome, SendOutcome, SentEmailsPage, Ticket, TicketPatch, TicketStatus,
};

/// Async client for the quote-request backend.
///
/// Cheap to clone; the underlying reqwest client shares its connection
/// pool across clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client against the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| QuotedeskError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| QuotedeskError::Config(format!("invalid endpoint '{path}': {e}")))
    }

    /// GET `/tickets/`, optionally filtered by status. Omitting the filter
    /// returns all tickets in backend order.
    pub async fn list_tickets(&self, status: Option<&TicketStatus>) -> Result<Vec<Ticket>> {
        let mut url = self.endpoint("/tickets/")?;
        if let Some(status) = status {
            url.query_pairs_mut().append_pair("status", status.as_str());
        }

        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    /// GET `/tickets/{id}` including the nested email thread.
    pub async fn get_ticket(&self, id: i64) -> Result<Ticket> {
        let url = self.endpoint(&format!("/tickets/{id}"))?;
        let response = self.http.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(QuotedeskError::TicketNotFound(id));
        }
        decode(response).await
    }

    /// PATCH `/tickets/{id}`. Only the populated fields of the patch are
    /// sent; returns the updated representation.
    pub async fn update_ticket(&self, id: i64, patch: &TicketPatch) -> Result<Ticket> {
        let url = self.endpoint(&format!("/tickets/{id}"))?;
        let response = self.http.patch(url).json(patch).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(QuotedeskError::TicketNotFound(id));
        }
        decode(response).await
    }

    /// POST `/tickets/{id}/send-email`. The backend composes and sends the
    /// outbound email; subject and body travel as query parameters per its
    /// contract. Non-emptiness is the caller's responsibility.
    pub async fn send_followup(&self, id: i64, subject: &str, body: &str) -> Result<SendOutcome> {
        let mut url = self.endpoint(&format!("/tickets/{id}/send-email"))?;
        url.query_pairs_mut()
            .append_pair("subject", subject)
            .append_pair("body", body);

        let response = self.http.post(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(QuotedeskError::TicketNotFound(id));
        }
        decode(response).await
    }

    /// POST `/dev/receive-email` (development only): feeds a simulated
    /// inbound email through the backend's ingestion pipeline.
    pub async fn simulate_inbound_email(&self, payload: &InboundEmail) -> Result<IngestOutcome> {
        let url = self.endpoint("/dev/receive-email")?;
        let response = self.http.post(url).json(payload).send().await?;
        decode(response).await
    }

    /// GET `/dev/sent-emails` (development only).
    pub async fn list_sent_emails(&self, limit: u32) -> Result<SentEmailsPage> {
        let mut url = self.endpoint("/dev/sent-emails")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    /// DELETE `/dev/sent-emails` (development only): clears the outbox.
    pub async fn clear_sent_emails(&self) -> Result<()> {
        let url = self.endpoint("/dev/sent-emails")?;
        let response = self.http.delete(url).send().await?;
        check_status(&response)?;
        Ok(())
    }
}

fn check_status(response: &Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(QuotedeskError::Api {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string(),
        })
    }
}

/// Map a response into `T`, surfacing non-2xx statuses as `Api` errors and
/// undecodable bodies as `MalformedResponse`.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(QuotedeskError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| QuotedeskError::MalformedResponse(e.to_string()))
}
