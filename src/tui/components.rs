//! Shared components for the dashboard screens.

use iocraft::prelude::*;

use crate::tui::theme::theme;
use crate::types::TicketStatus;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "Enter", "1-4")
    pub key: String,
    /// Description of the action (e.g., "Quit", "Open")
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Shortcuts for the ticket list screen
pub fn list_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Navigate"),
        Shortcut::new("Enter", "Open"),
        Shortcut::new("1-4", "Filter"),
        Shortcut::new("f", "Cycle Filter"),
        Shortcut::new("r", "Refresh"),
        Shortcut::new("q", "Quit"),
    ]
}

/// Shortcuts for the ticket detail screen
pub fn detail_shortcuts() -> Vec<Shortcut> {
    vec![
        Shortcut::new("j/k", "Scroll"),
        Shortcut::new("Esc", "Back"),
        Shortcut::new("r", "Refresh"),
        Shortcut::new("q", "Quit"),
    ]
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    /// List of keyboard shortcuts to display
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                let key = shortcut.key.clone();
                let action = shortcut.action.clone();
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Props for the Header component
#[derive(Default, Props)]
pub struct HeaderProps {
    pub title: String,
    pub subtitle: String,
}

/// Title bar at the top of the screen
#[component]
pub fn Header(props: &HeaderProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            Text(
                content: props.title.clone(),
                color: theme.text,
                weight: Weight::Bold,
            )
            Text(
                content: props.subtitle.clone(),
                color: theme.text_dimmed,
            )
        }
    }
}

/// Props for the StatusBadge component
#[derive(Default, Props)]
pub struct StatusBadgeProps {
    pub status: Option<TicketStatus>,
}

/// Colored status label. Unrecognized statuses render their raw value in
/// the neutral color.
#[component]
pub fn StatusBadge(props: &StatusBadgeProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let status = props.status.clone().unwrap_or_default();

    element! {
        Text(
            content: status.label(),
            color: theme.status_color(&status),
            weight: Weight::Bold,
        )
    }
}

/// Full-screen centered message, used for loading and error states.
pub fn centered_message(content: String, color: Color) -> AnyElement<'static> {
    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
        ) {
            Text(content: content, color: color)
        }
    }
    .into_any()
}
