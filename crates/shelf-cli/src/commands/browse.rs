//! Interactive page browser.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use shelf_core::BookId;
use shelf_sync::{DeleteOutcome, PageOutcome};

use crate::cli::ApiArgs;
use crate::output;

use super::Mutations;

#[derive(Args, Debug)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub api: ApiArgs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Next,
    Prev,
    Go(u32),
    Size(u32),
    Delete(String),
    Refresh,
    Help,
    Quit,
}

const HELP: &str = "n next | p previous | g N go to page | s N page size | d ID delete | r refresh | q quit";

/// Parse one input line. Blank lines yield `None`.
fn parse(line: &str) -> Result<Option<Action>, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(format!("Too many arguments for '{}'", command));
    }

    let number = |what: &str| -> Result<u32, String> {
        let raw = arg.ok_or_else(|| format!("'{}' needs a {}", command, what))?;
        raw.parse().map_err(|_| format!("Not a valid {}: {}", what, raw))
    };

    let action = match command {
        "n" | "next" => Action::Next,
        "p" | "prev" => Action::Prev,
        "g" | "go" => Action::Go(number("page number")?),
        "s" | "size" => Action::Size(number("page size")?),
        "d" | "delete" => Action::Delete(
            arg.ok_or_else(|| format!("'{}' needs a book id", command))?
                .to_string(),
        ),
        "r" | "refresh" => Action::Refresh,
        "h" | "help" | "?" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        other => return Err(format!("Unknown command '{}' (h for help)", other)),
    };

    if arg.is_some()
        && matches!(
            action,
            Action::Next | Action::Prev | Action::Refresh | Action::Help | Action::Quit
        )
    {
        return Err(format!("'{}' takes no arguments", command));
    }

    Ok(Some(action))
}

fn prompt() -> Result<()> {
    print!("{} ", ">".bold());
    std::io::stdout().flush().context("Failed to write prompt")
}

pub async fn run(args: BrowseArgs) -> Result<ExitCode> {
    let mutations = Mutations::new(super::connect(&args.api)?);
    let shelf = mutations.synchronizer();

    super::report(&shelf.refresh().await);
    println!("{}", HELP.dimmed());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt()?;
        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            println!();
            break;
        };

        let action = match parse(&line) {
            Ok(Some(action)) => action,
            Ok(None) => continue,
            Err(msg) => {
                output::error(&msg);
                continue;
            }
        };

        let outcome = match action {
            Action::Quit => break,
            Action::Help => {
                println!("{}", HELP.dimmed());
                continue;
            }
            Action::Next => shelf.next_page().await,
            Action::Prev => shelf.prev_page().await,
            Action::Go(n) => shelf.go_to_page(n).await,
            Action::Size(n) => shelf.change_page_size(n).await,
            Action::Refresh => shelf.refresh().await,
            Action::Delete(raw) => {
                let id = match BookId::new(raw) {
                    Ok(id) => id,
                    Err(e) => {
                        output::error(&e.to_string());
                        continue;
                    }
                };
                match mutations.submit_delete(&id).await {
                    DeleteOutcome::Deleted { resync } => resync,
                    DeleteOutcome::Failed(_) => continue,
                }
            }
        };

        if outcome == PageOutcome::Unchanged {
            println!("{}", "Already there, or no such page.".dimmed());
        } else {
            super::report(&outcome);
        }
    }

    Ok(ExitCode::SUCCESS)
}
