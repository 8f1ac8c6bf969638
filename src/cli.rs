use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quotedesk")]
#[command(about = "Terminal dashboard for customer quote-request tickets")]
#[command(version)]
pub struct Cli {
    /// Backend API base URL (overrides quotedesk.yaml and QUOTEDESK_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the dashboard TUI (default command)
    #[command(visible_alias = "b")]
    Browse {
        /// Dashboard path to open, e.g. "/" or "/tickets/42"
        #[arg(default_value = "/")]
        path: String,
    },

    /// Development helpers for exercising the backend's email pipeline
    #[command(subcommand)]
    Dev(DevCommands),
}

#[derive(Subcommand)]
pub enum DevCommands {
    /// Simulate an inbound customer email
    ReceiveEmail {
        /// Sender email address
        #[arg(long)]
        from: String,

        /// Email subject
        #[arg(long)]
        subject: Option<String>,

        /// Email body (reads from stdin if not provided)
        body: Option<String>,

        /// Ticket id when simulating a reply to an existing ticket
        #[arg(long)]
        reply_to: Option<i64>,
    },

    /// List emails the backend has "sent" in development mode
    SentEmails {
        /// Maximum number of emails to show
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },

    /// Clear the development outbox
    ClearSentEmails,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["quotedesk"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn test_browse_with_path_and_base_url() {
        let cli = Cli::try_parse_from([
            "quotedesk",
            "browse",
            "/tickets/42",
            "--base-url",
            "http://10.0.0.2:9000",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Browse { path }) => assert_eq!(path, "/tickets/42"),
            _ => panic!("expected browse command"),
        }
        assert_eq!(cli.base_url.as_deref(), Some("http://10.0.0.2:9000"));
    }

    #[test]
    fn test_dev_receive_email_args() {
        let cli = Cli::try_parse_from([
            "quotedesk",
            "dev",
            "receive-email",
            "--from",
            "dana@example.com",
            "--subject",
            "Quote Request",
            "Need 5 ThinkPads",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Dev(DevCommands::ReceiveEmail {
                from,
                subject,
                body,
                reply_to,
            })) => {
                assert_eq!(from, "dana@example.com");
                assert_eq!(subject.as_deref(), Some("Quote Request"));
                assert_eq!(body.as_deref(), Some("Need 5 ThinkPads"));
                assert!(reply_to.is_none());
            }
            _ => panic!("expected dev receive-email command"),
        }
    }
}
