//! Domain model for quote-request tickets as served by the backend API.
//!
//! These types are read-only projections of backend state: the client never
//! creates or mutates them locally, it only re-fetches. Field shapes mirror
//! the backend's JSON exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label shown wherever a ticket has no customer name.
pub const UNKNOWN_CUSTOMER: &str = "Unknown Customer";

/// Ticket lifecycle status, authoritative from the backend.
///
/// The backend contract defines three values. Anything else is preserved
/// verbatim in `Other` so an unrecognized status renders with neutral
/// styling and the raw string instead of failing the whole view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketStatus {
    #[default]
    New,
    WaitingOnCustomer,
    Ready,
    Other(String),
}

impl TicketStatus {
    /// The three statuses the dashboard knows how to style.
    pub const KNOWN: [TicketStatus; 3] = [
        TicketStatus::New,
        TicketStatus::WaitingOnCustomer,
        TicketStatus::Ready,
    ];

    /// Wire value, as sent in the `status` query parameter and JSON bodies.
    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::New => "NEW",
            TicketStatus::WaitingOnCustomer => "WAITING_ON_CUSTOMER",
            TicketStatus::Ready => "READY",
            TicketStatus::Other(s) => s,
        }
    }

    /// Human label for badges: the wire value with underscores replaced.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl From<String> for TicketStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "NEW" => TicketStatus::New,
            "WAITING_ON_CUSTOMER" => TicketStatus::WaitingOnCustomer,
            "READY" => TicketStatus::Ready,
            _ => TicketStatus::Other(s),
        }
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether an email was received from or sent to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
}

/// Structured fields the backend extracts from inbound email content.
///
/// Every field is independently optional; absent or blank fields render as
/// "Missing" in the detail grid. The backend also stores customer contact
/// fields here alongside the quote attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub laptop_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
}

impl ExtractedData {
    /// Display order and labels for the detail grid.
    pub const DISPLAY_FIELDS: [&'static str; 9] = [
        "Laptop Model",
        "RAM",
        "Storage",
        "Screen Size",
        "Warranty",
        "Quantity",
        "Delivery Location",
        "Delivery Timeline",
        "Budget",
    ];

    /// The grid values in [`Self::DISPLAY_FIELDS`] order. Blank strings are
    /// treated the same as absent.
    pub fn display_values(&self) -> [Option<&str>; 9] {
        [
            present(&self.laptop_model),
            present(&self.ram),
            present(&self.storage),
            present(&self.screen_size),
            present(&self.warranty),
            present(&self.quantity),
            present(&self.delivery_location),
            present(&self.delivery_timeline),
            present(&self.budget),
        ]
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// One email in a ticket's thread. Order is backend order; the client
/// never re-sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailMessage {
    #[serde(default)]
    pub id: Option<i64>,
    pub ticket_id: i64,
    pub direction: Direction,
    #[serde(default)]
    pub email_subject: Option<String>,
    pub email_body: String,
    #[serde(default)]
    pub email_message_id: Option<String>,
    #[serde(default)]
    pub in_reply_to: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// A quote-request ticket. `extracted_data` and `email_threads` may both
/// be absent on a freshly created ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub ticket_number: String,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub status: TicketStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub extracted_data: Option<ExtractedData>,
    #[serde(default)]
    pub email_threads: Option<Vec<EmailMessage>>,
}

impl Ticket {
    /// Customer name with the "Unknown Customer" fallback used by both views.
    pub fn display_name(&self) -> &str {
        self.customer_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_CUSTOMER)
    }

    /// Emails in backend order, empty when the thread is absent.
    pub fn thread(&self) -> &[EmailMessage] {
        self.email_threads.as_deref().unwrap_or(&[])
    }
}

/// Completeness banner shown on the detail screen.
///
/// The field list is derived solely from whether `laptop_model` is present,
/// not from a per-field check, even though the grid checks each field
/// independently.
// TODO: confirm with product whether the banner should check every field
// like the grid does; until then this keeps the backend dashboard's
// historical behavior.
pub fn fallback_missing_fields(extracted: Option<&ExtractedData>) -> Vec<&'static str> {
    let has_model = extracted
        .and_then(|data| present(&data.laptop_model))
        .is_some();
    if has_model {
        vec![]
    } else {
        vec!["customer_name", "laptop_model", "ram", "storage"]
    }
}

/// Partial ticket update for PATCH `/tickets/{id}`. Only populated fields
/// are serialized; the backend leaves the rest untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_data: Option<ExtractedData>,
}

impl TicketPatch {
    /// Patch that only moves the ticket to a new status.
    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Outcome envelope for POST `/tickets/{id}/send-email`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendOutcome {
    pub success: bool,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Payload for POST `/dev/receive-email` (development only).
#[derive(Debug, Clone, Serialize)]
pub struct InboundEmail {
    pub from_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub body: String,
    /// Ticket id when simulating a reply to an existing ticket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<i64>,
}

/// Outcome envelope for POST `/dev/receive-email`.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestOutcome {
    pub success: bool,
    /// "new_ticket" or "reply".
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub ticket_id: Option<i64>,
    #[serde(default)]
    pub ticket_number: Option<String>,
    #[serde(default)]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One row from the development outbox.
#[derive(Debug, Clone, Deserialize)]
pub struct SentEmail {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub to_email: Option<String>,
    #[serde(default)]
    pub from_email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Envelope for GET `/dev/sent-emails`.
#[derive(Debug, Clone, Deserialize)]
pub struct SentEmailsPage {
    pub success: bool,
    pub count: usize,
    pub emails: Vec<SentEmail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_roundtrip() {
        for status in TicketStatus::KNOWN {
            let wire = String::from(status.clone());
            assert_eq!(TicketStatus::from(wire), status);
        }
    }

    #[test]
    fn test_status_unknown_value_preserved() {
        let status = TicketStatus::from("ESCALATED".to_string());
        assert_eq!(status, TicketStatus::Other("ESCALATED".to_string()));
        assert_eq!(status.as_str(), "ESCALATED");
        assert_eq!(status.label(), "ESCALATED");
    }

    #[test]
    fn test_status_label_replaces_underscores() {
        assert_eq!(TicketStatus::WaitingOnCustomer.label(), "WAITING ON CUSTOMER");
        assert_eq!(TicketStatus::New.label(), "NEW");
    }

    #[test]
    fn test_display_name_fallback() {
        let mut ticket = sample_ticket();
        assert_eq!(ticket.display_name(), "Dana Smith");

        ticket.customer_name = None;
        assert_eq!(ticket.display_name(), UNKNOWN_CUSTOMER);

        ticket.customer_name = Some("   ".to_string());
        assert_eq!(ticket.display_name(), UNKNOWN_CUSTOMER);
    }

    #[test]
    fn test_display_values_blank_is_missing() {
        let data = ExtractedData {
            laptop_model: Some("ThinkPad X1".to_string()),
            ram: Some("".to_string()),
            quantity: Some("2".to_string()),
            ..Default::default()
        };
        let values = data.display_values();
        assert_eq!(values[0], Some("ThinkPad X1"));
        assert_eq!(values[1], None, "blank RAM counts as missing");
        assert_eq!(values[5], Some("2"));
        assert_eq!(values[8], None);
    }

    #[test]
    fn test_fallback_missing_fields_keys_off_laptop_model_only() {
        // Everything except laptop_model missing, yet the banner is empty.
        let only_model = ExtractedData {
            laptop_model: Some("ThinkPad X1".to_string()),
            ..Default::default()
        };
        assert!(fallback_missing_fields(Some(&only_model)).is_empty());

        // laptop_model absent produces the fixed list regardless of the rest.
        let everything_else = ExtractedData {
            ram: Some("32GB".to_string()),
            storage: Some("1TB".to_string()),
            ..Default::default()
        };
        assert_eq!(
            fallback_missing_fields(Some(&everything_else)),
            vec!["customer_name", "laptop_model", "ram", "storage"]
        );
        assert_eq!(
            fallback_missing_fields(None),
            vec!["customer_name", "laptop_model", "ram", "storage"]
        );
    }

    #[test]
    fn test_ticket_deserializes_backend_json() {
        let json = r#"{
            "id": 7,
            "ticket_number": "Q-1001",
            "customer_name": null,
            "customer_email": "dana@example.com",
            "status": "NEW",
            "created_at": "2025-06-01T09:30:00",
            "updated_at": "2025-06-02T10:00:00",
            "extracted_data": {"laptop_model": "ThinkPad X1", "quantity": "2"},
            "email_threads": [
                {
                    "id": 1,
                    "ticket_id": 7,
                    "direction": "inbound",
                    "email_subject": "Quote Request",
                    "email_body": "Hello,\n\nI need laptops.",
                    "timestamp": "2025-06-01T09:30:00"
                }
            ]
        }"#;

        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, 7);
        assert_eq!(ticket.status, TicketStatus::New);
        assert_eq!(ticket.display_name(), UNKNOWN_CUSTOMER);
        assert_eq!(ticket.thread().len(), 1);
        assert_eq!(ticket.thread()[0].direction, Direction::Inbound);
        assert_eq!(ticket.thread()[0].email_body, "Hello,\n\nI need laptops.");
    }

    #[test]
    fn test_fresh_ticket_may_omit_extracted_and_thread() {
        let json = r#"{"id": 1, "ticket_number": "Q-1", "status": "NEW"}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert!(ticket.extracted_data.is_none());
        assert!(ticket.thread().is_empty());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = TicketPatch::status(TicketStatus::Ready);
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"status": "READY"}));
    }

    fn sample_ticket() -> Ticket {
        Ticket {
            id: 7,
            ticket_number: "Q-1001".to_string(),
            customer_name: Some("Dana Smith".to_string()),
            customer_email: Some("dana@example.com".to_string()),
            status: TicketStatus::New,
            created_at: None,
            updated_at: None,
            extracted_data: None,
            email_threads: None,
        }
    }
}
