pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod query;
pub mod router;
pub mod tui;
pub mod types;

pub use api::ApiClient;
pub use config::Config;
pub use error::{QuotedeskError, Result};
pub use query::{QueryCache, QueryState};
pub use router::Route;
pub use types::{
    Direction, EmailMessage, ExtractedData, InboundEmail, SentEmail, Ticket, TicketPatch,
    TicketStatus,
};
