//! Theme system for TUI colors and styles
//!
//! Status colors mirror the badge palette of the original web dashboard:
//! blue for NEW, yellow for WAITING_ON_CUSTOMER, green for READY.

use iocraft::prelude::Color;

use crate::types::{Direction, TicketStatus};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_new: Color,
    pub status_waiting: Color,
    pub status_ready: Color,
    /// Unrecognized backend statuses render neutrally with the raw string.
    pub status_unknown: Color,

    // Email direction colors
    pub inbound: Color,
    pub outbound: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub id_color: Color,
    pub missing: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_new: Color::Blue,
            status_waiting: Color::Yellow,
            status_ready: Color::Green,
            status_unknown: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },

            inbound: Color::Blue,
            outbound: Color::Rgb {
                r: 160,
                g: 160,
                b: 160,
            },

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            id_color: Color::Cyan,
            missing: Color::Red,
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
        }
    }
}

impl Theme {
    /// Get the color for a ticket status badge
    pub fn status_color(&self, status: &TicketStatus) -> Color {
        match status {
            TicketStatus::New => self.status_new,
            TicketStatus::WaitingOnCustomer => self.status_waiting,
            TicketStatus::Ready => self.status_ready,
            TicketStatus::Other(_) => self.status_unknown,
        }
    }

    /// Get the accent color for an email direction
    pub fn direction_color(&self, direction: Direction) -> Color {
        match direction {
            Direction::Inbound => self.inbound,
            Direction::Outbound => self.outbound,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
