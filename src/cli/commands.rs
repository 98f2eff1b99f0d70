use super::console::{Console, TerminalPrompter};
use super::{shell, Cli, Commands};
use anyhow::{bail, Context, Result};
use resume_rag_client::config::Settings;
use resume_rag_client::core::{DeleteOutcome, ResumeSession, SubmitOutcome, UploadOutcome};
use resume_rag_client::views;
use resume_rag_client::ResumeApiClient;
use std::sync::Arc;
use tracing::info;

type Session = ResumeSession<ResumeApiClient, TerminalPrompter>;

fn print_list(session: &Session) {
    print!("{}", session.with_state(|s| views::render_list(s.is_loading(), &s.filtered())));
}

pub async fn run(cli: Cli, settings: Settings) -> Result<()> {
    let client = ResumeApiClient::from_settings(&settings.api)
        .context("Failed to create HTTP client")?;
    info!("Using backend at {}", client.base_url());

    let console = Arc::new(Console::new());
    let assume_yes = matches!(cli.command, Commands::Delete { yes: true, .. });
    let session = ResumeSession::new(client, TerminalPrompter::new(console.clone(), assume_yes));

    match cli.command {
        Commands::List { query } => {
            if !session.refresh().await {
                bail!("Could not fetch resumes from {}", settings.api.base_url);
            }
            if let Some(query) = query {
                session.set_query(query);
            }
            print_list(&session);
        }
        Commands::Upload { path } => {
            if !path.is_file() {
                bail!("{} is not a file", path.display());
            }
            session.select_file(path);
            if let UploadOutcome::Uploaded(response) = session.upload().await? {
                println!("{}", response.message.as_deref().unwrap_or("Upload complete"));
            }
            print_list(&session);
        }
        Commands::Delete { filename, .. } => match session.delete(&filename).await {
            DeleteOutcome::Cancelled => println!("Cancelled."),
            DeleteOutcome::Deleted => print_list(&session),
            DeleteOutcome::Rejected { status } => bail!("Backend answered {}", status),
            DeleteOutcome::Failed(reason) => bail!(reason),
        },
        Commands::View { filename } => {
            session.view(&filename).await?;
            if let Some(detail) = session.snapshot().detail {
                print!("{}", views::render_detail(&detail));
            }
        }
        Commands::Match { description, file } => {
            let text = match (description, file) {
                (Some(text), _) => text,
                (None, Some(path)) => tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                (None, None) => String::new(),
            };
            session.set_job_description(text);
            if session.match_job().await? == SubmitOutcome::Skipped {
                bail!("Job description is empty");
            }
            if let Some(result) = session.snapshot().match_result {
                print!("{}", views::render_match(&result));
            }
        }
        Commands::Shell => shell::run(&session, &console).await?,
        Commands::Config => {
            print!("{}", settings.to_toml().context("Failed to render configuration")?);
        }
    }

    Ok(())
}
