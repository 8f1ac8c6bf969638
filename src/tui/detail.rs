//! Ticket detail screen: header, extracted-data grid, and email thread.

use iocraft::prelude::*;

use crate::query::QueryState;
use crate::tui::components::{StatusBadge, centered_message};
use crate::tui::format::absolute_date;
use crate::tui::theme::theme;
use crate::types::{Direction, EmailMessage, ExtractedData, Ticket, fallback_missing_fields};

/// Props for the DetailScreen component
#[derive(Default, Props)]
pub struct DetailScreenProps {
    /// Cache state for this ticket id; `None` means never fetched.
    pub state: Option<QueryState<Ticket>>,
    /// How many thread entries to skip from the top.
    pub scroll_offset: usize,
}

/// Full ticket view. Renders its own loading and error states so the list
/// screen's data is never shown here.
#[component]
pub fn DetailScreen(props: &DetailScreenProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let body: AnyElement<'static> = match &props.state {
        None | Some(QueryState::Loading) => {
            centered_message("Loading ticket…".to_string(), theme.text_dimmed)
        }
        Some(QueryState::Error(message)) if message.contains("not found") => {
            centered_message("Ticket not found".to_string(), theme.error)
        }
        Some(QueryState::Error(message)) => {
            centered_message(format!("Failed to load ticket: {}", message), theme.error)
        }
        Some(QueryState::Success { value, .. }) => {
            let ticket = value.clone();
            let scroll_offset = props.scroll_offset;
            element! {
                View(
                    width: 100pct,
                    flex_grow: 1.0,
                    flex_direction: FlexDirection::Column,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    TicketHeader(ticket: Some(ticket.clone()))
                    QuoteDetails(
                        extracted: ticket.extracted_data.clone(),
                    )
                    EmailThread(
                        emails: ticket.thread().to_vec(),
                        scroll_offset: scroll_offset,
                    )
                }
            }
            .into_any()
        }
    };

    element! {
        View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column) {
            #(Some(body))
        }
    }
}

#[derive(Default, Props)]
struct TicketHeaderProps {
    ticket: Option<Ticket>,
}

/// Bordered header: ticket number, status badge, customer identity, dates.
#[component]
fn TicketHeader(props: &TicketHeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(ticket) = props.ticket.clone() else {
        return element!(View).into_any();
    };

    let email = ticket.customer_email.clone().unwrap_or_default();
    let mut dates = Vec::new();
    if let Some(created) = ticket.created_at.as_deref() {
        dates.push(format!("Created {}", absolute_date(created)));
    }
    if let Some(updated) = ticket.updated_at.as_deref() {
        dates.push(format!("Updated {}", absolute_date(updated)));
    }
    let dates = dates.join("  ·  ");

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                Text(
                    content: ticket.ticket_number.clone(),
                    color: theme.id_color,
                    weight: Weight::Bold,
                )
                StatusBadge(status: Some(ticket.status.clone()))
            }
            Text(content: ticket.display_name().to_string(), color: theme.text)
            #(if email.is_empty() {
                None
            } else {
                Some(element! {
                    Text(content: email, color: theme.text_dimmed)
                })
            })
            #(if dates.is_empty() {
                None
            } else {
                Some(element! {
                    Text(content: dates, color: theme.text_dimmed)
                })
            })
        }
    }
    .into_any()
}

#[derive(Default, Props)]
struct QuoteDetailsProps {
    extracted: Option<ExtractedData>,
}

/// Labeled grid of extracted quote fields. Absent or blank fields show a
/// red "Missing" marker; when key fields are absent a banner lists what to
/// chase the customer for.
#[component]
fn QuoteDetails(props: &QuoteDetailsProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let missing = fallback_missing_fields(props.extracted.as_ref());
    let banner = if missing.is_empty() {
        None
    } else {
        Some(format!("Awaiting info: {}", missing.join(", ")))
    };

    let rows: Option<Vec<(String, Option<String>)>> = props.extracted.as_ref().map(|data| {
        ExtractedData::DISPLAY_FIELDS
            .iter()
            .zip(data.display_values())
            .map(|(label, value)| (label.to_string(), value.map(str::to_string)))
            .collect()
    });

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            Text(content: "Quote Details", color: theme.text, weight: Weight::Bold)
            #(banner.map(|text| {
                element! {
                    Text(content: text, color: theme.warning)
                }
            }))
            #(match rows {
                Some(rows) => element! {
                    View(flex_direction: FlexDirection::Column) {
                        #(rows.into_iter().map(|(label, value)| {
                            element! {
                                View(flex_direction: FlexDirection::Row) {
                                    View(width: 20) {
                                        Text(content: label, color: theme.text_dimmed)
                                    }
                                    #(match value {
                                        Some(value) => element! {
                                            Text(content: value, color: theme.text)
                                        }.into_any(),
                                        None => element! {
                                            Text(content: "Missing", color: theme.missing)
                                        }.into_any(),
                                    })
                                }
                            }
                        }))
                    }
                }.into_any(),
                None => element! {
                    Text(
                        content: "No extracted data available",
                        color: theme.text_dimmed,
                    )
                }.into_any(),
            })
        }
    }
}

#[derive(Default, Props)]
struct EmailThreadProps {
    emails: Vec<EmailMessage>,
    scroll_offset: usize,
}

/// Conversation history in backend order, one bordered entry per email,
/// color-coded by direction.
#[component]
fn EmailThread(props: &EmailThreadProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column) {
            Text(
                content: format!("Email Thread ({})", props.emails.len()),
                color: theme.text,
                weight: Weight::Bold,
            )
            #(if props.emails.is_empty() {
                Some(element! {
                    Text(content: "No emails in thread", color: theme.text_dimmed)
                }.into_any())
            } else {
                None
            })
            #(props.emails.iter().skip(props.scroll_offset).map(|email| {
                let accent = theme.direction_color(email.direction);
                let tag = match email.direction {
                    Direction::Inbound => "📥 INBOUND",
                    Direction::Outbound => "📤 OUTBOUND",
                };
                let timestamp = email
                    .timestamp
                    .as_deref()
                    .map(absolute_date)
                    .unwrap_or_default();
                let subject = email.email_subject.clone().filter(|s| !s.is_empty());
                let lines: Vec<String> =
                    email.email_body.lines().map(str::to_string).collect();
                element! {
                    View(
                        width: 100pct,
                        flex_direction: FlexDirection::Column,
                        border_style: BorderStyle::Round,
                        border_color: accent,
                        padding_left: 1,
                        padding_right: 1,
                    ) {
                        View(flex_direction: FlexDirection::Row, gap: 2) {
                            Text(content: tag, color: accent, weight: Weight::Bold)
                            Text(content: timestamp, color: theme.text_dimmed)
                        }
                        #(subject.map(|subject| {
                            element! {
                                Text(content: subject, color: theme.text, weight: Weight::Bold)
                            }
                        }))
                        #(lines.into_iter().map(|line| {
                            element! {
                                Text(content: line, color: theme.text)
                            }
                        }))
                    }
                }
            }))
        }
    }
}
