//! Ticket list screen: filter bar plus a scrollable column of ticket cards.

use iocraft::prelude::*;

use crate::query::QueryState;
use crate::tui::components::{StatusBadge, centered_message};
use crate::tui::format::relative_date;
use crate::tui::theme::theme;
use crate::types::{Ticket, TicketStatus};

/// The four filter positions on the list screen. `All` omits the status
/// query parameter entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    New,
    Waiting,
    Ready,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::New,
        StatusFilter::Waiting,
        StatusFilter::Ready,
    ];

    /// Cache key / query parameter for this filter.
    pub fn status(self) -> Option<TicketStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::New => Some(TicketStatus::New),
            StatusFilter::Waiting => Some(TicketStatus::WaitingOnCustomer),
            StatusFilter::Ready => Some(TicketStatus::Ready),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::New => "New",
            StatusFilter::Waiting => "Waiting",
            StatusFilter::Ready => "Ready",
        }
    }

    /// Next filter in display order, wrapping from Ready back to All.
    pub fn next(self) -> StatusFilter {
        match self {
            StatusFilter::All => StatusFilter::New,
            StatusFilter::New => StatusFilter::Waiting,
            StatusFilter::Waiting => StatusFilter::Ready,
            StatusFilter::Ready => StatusFilter::All,
        }
    }
}

/// Hint lines summarizing extracted data on a list card.
pub fn extracted_hints(ticket: &Ticket) -> Vec<String> {
    let mut hints = Vec::new();
    if let Some(data) = &ticket.extracted_data {
        if let Some(model) = data.laptop_model.as_deref().filter(|s| !s.trim().is_empty()) {
            hints.push(format!("📱 {}", model.trim()));
        }
        if let Some(quantity) = data.quantity.as_deref().filter(|s| !s.trim().is_empty()) {
            hints.push(format!("📦 Qty: {}", quantity.trim()));
        }
    }
    hints
}

fn created_label(ticket: &Ticket) -> Option<String> {
    ticket
        .created_at
        .as_deref()
        .map(|iso| format!("Created {}", relative_date(iso)))
}

/// Props for the FilterBar component
#[derive(Default, Props)]
pub struct FilterBarProps {
    pub filter: StatusFilter,
}

/// Row of the four status filters with the active one highlighted.
#[component]
pub fn FilterBar(props: &FilterBarProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let active = props.filter;

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            column_gap: 2,
        ) {
            #(StatusFilter::ALL.iter().enumerate().map(|(i, filter)| {
                let selected = *filter == active;
                element! {
                    Text(
                        content: format!("[{}] {}", i + 1, filter.label()),
                        color: if selected { theme.highlight } else { theme.text_dimmed },
                        weight: if selected { Weight::Bold } else { Weight::Normal },
                    )
                }
            }))
        }
    }
}

/// Props for the TicketCard component
#[derive(Default, Props)]
pub struct TicketCardProps {
    /// The ticket to display
    pub ticket: Option<Ticket>,
    /// Whether this card is selected
    pub is_selected: bool,
}

/// Bordered summary card for one ticket.
///
/// Layout:
/// ```text
/// +--------------------------+
/// | > Q-1001  NEW            |
/// | Dana Smith               |
/// | dana@example.com         |
/// | 📱 ThinkPad X1  📦 Qty: 2 |
/// | Created 3d ago           |
/// +--------------------------+
/// ```
#[component]
pub fn TicketCard(props: &TicketCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let ticket = props.ticket.clone().unwrap_or_default();

    let border_color = if props.is_selected {
        theme.border_focused
    } else {
        theme.border
    };
    let indicator = if props.is_selected { "> " } else { "  " };

    let email = ticket.customer_email.clone().unwrap_or_default();
    let hints = extracted_hints(&ticket);
    let created = created_label(&ticket);

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: border_color,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, gap: 2) {
                View(flex_direction: FlexDirection::Row) {
                    Text(content: indicator, color: theme.highlight, weight: Weight::Bold)
                    Text(
                        content: ticket.ticket_number.clone(),
                        color: theme.id_color,
                        weight: Weight::Bold,
                    )
                }
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
            #(if hints.is_empty() {
                None
            } else {
                Some(element! {
                    View(flex_direction: FlexDirection::Row, gap: 2) {
                        #(hints.iter().map(|hint| {
                            element! {
                                Text(content: hint.clone(), color: theme.text_dimmed)
                            }
                        }))
                    }
                })
            })
            #(created.map(|label| {
                element! {
                    Text(content: label, color: theme.text_dimmed)
                }
            }))
        }
    }
}

/// Props for the ListScreen component
#[derive(Default, Props)]
pub struct ListScreenProps {
    /// Cache state for the active filter; `None` means never fetched.
    pub state: Option<QueryState<Vec<Ticket>>>,
    pub filter: StatusFilter,
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// How many cards fit in the viewport.
    pub visible_cards: usize,
}

/// Dashboard list screen. Renders loading, error, and empty states for the
/// active filter, otherwise the card column windowed by `scroll_offset`.
#[component]
pub fn ListScreen(props: &ListScreenProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let body: AnyElement<'static> = match &props.state {
        None | Some(QueryState::Loading) => {
            centered_message("Loading tickets…".to_string(), theme.text_dimmed)
        }
        Some(QueryState::Error(message)) => {
            centered_message(format!("Failed to load tickets: {}", message), theme.error)
        }
        Some(QueryState::Success { value, .. }) if value.is_empty() => element! {
            View(
                width: 100pct,
                flex_grow: 1.0,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                gap: 1,
            ) {
                Text(content: "No tickets found", color: theme.text_dimmed)
                Text(
                    content: "Send a test email with `quotedesk dev receive-email` to create one",
                    color: theme.text_dimmed,
                )
            }
        }
        .into_any(),
        Some(QueryState::Success { value, .. }) => {
            let window = value
                .iter()
                .enumerate()
                .skip(props.scroll_offset)
                .take(props.visible_cards.max(1));
            element! {
                View(
                    width: 100pct,
                    flex_grow: 1.0,
                    flex_direction: FlexDirection::Column,
                    padding_left: 1,
                    padding_right: 1,
                ) {
                    #(window.map(|(i, ticket)| {
                        element! {
                            TicketCard(
                                ticket: Some(ticket.clone()),
                                is_selected: i == props.selected_index,
                            )
                        }
                    }))
                }
            }
            .into_any()
        }
    };

    element! {
        View(width: 100pct, flex_grow: 1.0, flex_direction: FlexDirection::Column) {
            FilterBar(filter: props.filter)
            #(Some(body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_cycle_wraps() {
        let mut filter = StatusFilter::All;
        for expected in [
            StatusFilter::New,
            StatusFilter::Waiting,
            StatusFilter::Ready,
            StatusFilter::All,
        ] {
            filter = filter.next();
            assert_eq!(filter, expected);
        }
    }

    #[test]
    fn test_filter_status_mapping() {
        assert_eq!(StatusFilter::All.status(), None);
        assert_eq!(StatusFilter::New.status(), Some(TicketStatus::New));
        assert_eq!(
            StatusFilter::Waiting.status(),
            Some(TicketStatus::WaitingOnCustomer)
        );
        assert_eq!(StatusFilter::Ready.status(), Some(TicketStatus::Ready));
    }
}
