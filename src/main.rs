use std::process::ExitCode;

use clap::Parser;

use quotedesk::cli::{Cli, Commands, DevCommands};
use quotedesk::commands::{
    cmd_browse, cmd_dev_clear_sent_emails, cmd_dev_receive_email, cmd_dev_sent_emails,
};
use quotedesk::config::Config;
use quotedesk::error::{QuotedeskError, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?.with_base_url(cli.base_url.as_deref());

    let command = cli.command.unwrap_or(Commands::Browse {
        path: "/".to_string(),
    });

    match command {
        Commands::Browse { path } => cmd_browse(config, &path),
        Commands::Dev(dev) => {
            let rt = tokio::runtime::Runtime::new()
                .map_err(|e| QuotedeskError::Other(format!("Failed to create runtime: {}", e)))?;
            rt.block_on(async {
                match dev {
                    DevCommands::ReceiveEmail {
                        from,
                        subject,
                        body,
                        reply_to,
                    } => {
                        cmd_dev_receive_email(
                            &config,
                            &from,
                            subject.as_deref(),
                            body.as_deref(),
                            reply_to,
                        )
                        .await
                    }
                    DevCommands::SentEmails { limit } => cmd_dev_sent_emails(&config, limit).await,
                    DevCommands::ClearSentEmails => cmd_dev_clear_sent_emails(&config).await,
                }
            })
        }
    }
}
