//! Tests for TUI helpers that don't need a terminal.

use crate::tui::list::{StatusFilter, extracted_hints};
use crate::tui::theme::theme;
use crate::types::{Direction, ExtractedData, Ticket, TicketStatus};

fn ticket_with_extracted(extracted: Option<ExtractedData>) -> Ticket {
    Ticket {
        id: 1,
        ticket_number: "Q-1001".to_string(),
        customer_name: Some("Dana Smith".to_string()),
        customer_email: Some("dana@example.com".to_string()),
        status: TicketStatus::New,
        created_at: Some("2025-06-01T09:30:00".to_string()),
        updated_at: None,
        extracted_data: extracted,
        email_threads: None,
    }
}

#[test]
fn test_card_hints_show_model_and_quantity() {
    let ticket = ticket_with_extracted(Some(ExtractedData {
        laptop_model: Some("ThinkPad X1".to_string()),
        quantity: Some("2".to_string()),
        ..Default::default()
    }));
    assert_eq!(extracted_hints(&ticket), vec!["📱 ThinkPad X1", "📦 Qty: 2"]);
}

#[test]
fn test_card_hints_omit_absent_and_blank_fields() {
    let ticket = ticket_with_extracted(Some(ExtractedData {
        laptop_model: Some("  ".to_string()),
        quantity: Some("5".to_string()),
        ..Default::default()
    }));
    assert_eq!(extracted_hints(&ticket), vec!["📦 Qty: 5"]);

    let bare = ticket_with_extracted(None);
    assert!(extracted_hints(&bare).is_empty());
}

#[test]
fn test_known_statuses_have_distinct_colors() {
    let theme = theme();
    let colors = [
        theme.status_color(&TicketStatus::New),
        theme.status_color(&TicketStatus::WaitingOnCustomer),
        theme.status_color(&TicketStatus::Ready),
    ];
    assert_ne!(colors[0], colors[1]);
    assert_ne!(colors[1], colors[2]);
    assert_ne!(colors[0], colors[2]);
}

#[test]
fn test_unknown_status_renders_neutral() {
    let theme = theme();
    let color = theme.status_color(&TicketStatus::Other("ESCALATED".to_string()));
    assert_eq!(color, theme.status_unknown);
    assert_ne!(color, theme.status_new);
    assert_ne!(color, theme.status_ready);
}

#[test]
fn test_direction_colors_differ() {
    let theme = theme();
    assert_ne!(
        theme.direction_color(Direction::Inbound),
        theme.direction_color(Direction::Outbound)
    );
}

#[test]
fn test_every_filter_round_trips_through_cycle() {
    let mut seen = vec![];
    let mut filter = StatusFilter::All;
    for _ in 0..StatusFilter::ALL.len() {
        seen.push(filter);
        filter = filter.next();
    }
    assert_eq!(filter, StatusFilter::All);
    assert_eq!(seen, StatusFilter::ALL.to_vec());
}
