use super::console::Console;
use resume_rag_client::core::{DeleteOutcome, ResumeSession, SubmitOutcome, UploadOutcome};
use resume_rag_client::views;
use resume_rag_client::{Prompter, ResumeApi};
use std::path::PathBuf;

const HELP: &str = "\
Commands:
  list                 reload the resume list
  search [text]        filter the list by name (empty clears)
  select <path>        choose a file to upload
  upload               upload the selected file
  view <filename>      open a resume
  close-detail         close the open resume
  jd <text>            set the job description
  match                score resumes against the job description
  close-match          close the match results
  delete <filename>    delete a resume
  help                 show this help
  quit                 leave the shell";

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Search(String),
    Select(PathBuf),
    Upload,
    View(String),
    CloseDetail,
    JobDescription(String),
    Match,
    CloseMatch,
    Delete(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match (word, rest.is_empty()) {
            ("", _) => ShellCommand::Empty,
            ("list", _) => ShellCommand::List,
            ("search", _) => ShellCommand::Search(rest.to_string()),
            ("select", false) => ShellCommand::Select(PathBuf::from(rest)),
            ("upload", _) => ShellCommand::Upload,
            ("view", false) => ShellCommand::View(rest.to_string()),
            ("close-detail", _) => ShellCommand::CloseDetail,
            ("jd", _) => ShellCommand::JobDescription(rest.to_string()),
            ("match", _) => ShellCommand::Match,
            ("close-match", _) => ShellCommand::CloseMatch,
            ("delete", false) => ShellCommand::Delete(rest.to_string()),
            ("help", _) | ("?", _) => ShellCommand::Help,
            ("quit", _) | ("exit", _) => ShellCommand::Quit,
            _ => ShellCommand::Unknown(line.to_string()),
        }
    }
}

fn print_screen<A: ResumeApi, P: Prompter>(session: &ResumeSession<A, P>) {
    println!("{}", session.with_state(views::render));
}

/// Run an interactive session until `quit` or end of input
pub async fn run<A: ResumeApi, P: Prompter>(
    session: &ResumeSession<A, P>,
    console: &Console,
) -> anyhow::Result<()> {
    session.refresh().await;
    print_screen(session);

    while let Some(line) = console.read_line("resume-rag> ").await? {
        match ShellCommand::parse(&line) {
            ShellCommand::Empty => continue,
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ShellCommand::Unknown(input) => {
                println!("Unknown command: {} (try `help`)", input);
                continue;
            }
            ShellCommand::List => {
                session.refresh().await;
            }
            ShellCommand::Search(query) => session.set_query(query),
            ShellCommand::Select(path) => session.select_file(path),
            ShellCommand::Upload => match session.upload().await {
                Ok(UploadOutcome::NoFileSelected) => println!("Select a file first."),
                Ok(UploadOutcome::Uploaded(_)) => {}
                Err(e) => eprintln!("Upload failed: {}", e),
            },
            ShellCommand::View(filename) => {
                if let Err(e) = session.view(&filename).await {
                    eprintln!("Could not open {}: {}", filename, e);
                }
            }
            ShellCommand::CloseDetail => session.close_detail(),
            ShellCommand::JobDescription(text) => session.set_job_description(text),
            ShellCommand::Match => match session.match_job().await {
                Ok(SubmitOutcome::Skipped) => println!("Set a job description first (jd <text>)."),
                Ok(_) => {}
                Err(e) => eprintln!("Match failed: {}", e),
            },
            ShellCommand::CloseMatch => session.close_match(),
            ShellCommand::Delete(filename) => {
                if let DeleteOutcome::Cancelled = session.delete(&filename).await {
                    continue;
                }
            }
        }
        print_screen(session);
    }

    Ok(())
}
