use std::collections::BTreeMap;
use std::io::{self, Write};

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::completion::OpenAiClient;
use crate::error::AppError;
use crate::notes::NoteStore;
use crate::prompts::Locale;
use crate::repl;
use crate::session::Session;
use crate::utils::{Timezone, format_date, parse_date};

/// Build the session for this run from merged CLI/config options
fn build_session(cli: &Cli) -> Result<Session, AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let locale = Locale::parse(cli.locale.as_deref())?;
    let notes = NoteStore::load(cli.notes_path())?;
    let client = OpenAiClient::new(
        cli.base_url(),
        cli.api_key.clone(),
        cli.request_timeout(),
    );

    debug!(
        model = cli.model(),
        base_url = cli.base_url(),
        notes = %notes.path().display(),
        ?locale,
        "session ready"
    );
    Ok(Session::new(
        Box::new(client),
        notes,
        cli.model(),
        locale,
        timezone,
    ))
}

fn handle_chat(session: &mut Session) -> Result<(), AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    repl::run(session, &mut input, &mut out)
}

fn handle_notes(session: &Session, json: bool) -> Result<(), AppError> {
    let notes = session.notes();
    let mut out = io::stdout().lock();

    if json {
        let map: BTreeMap<&str, &str> = notes.iter().collect();
        // A map of strings always encodes.
        let text = serde_json::to_string_pretty(&map).unwrap_or_else(|_| "{}".to_string());
        writeln!(out, "{text}")?;
        return Ok(());
    }

    if notes.is_empty() {
        writeln!(out, "{}", session.texts().no_notes)?;
        return Ok(());
    }
    for (key, description) in notes.iter() {
        writeln!(out, "{key}  {description}")?;
    }
    Ok(())
}

fn handle_save(
    session: &mut Session,
    date: Option<&str>,
    time: &str,
    description: &str,
) -> Result<(), AppError> {
    let date = match date {
        Some(raw) => format_date(parse_date(raw)?),
        None => session.tomorrow(),
    };
    let confirmation = session.save_note(&date, time.trim(), description)?;
    println!("{confirmation}");
    Ok(())
}

/// Dispatch the parsed command
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let mut session = build_session(cli)?;

    match &cli.command {
        None | Some(Commands::Chat) => handle_chat(&mut session),
        Some(Commands::Greet) => {
            println!("{}", session.greeting());
            Ok(())
        }
        Some(Commands::Farewell) => {
            println!("{}", session.closing_message());
            Ok(())
        }
        Some(Commands::Notes) => handle_notes(&session, cli.json),
        Some(Commands::Save {
            time,
            description,
            date,
        }) => handle_save(&mut session, date.as_deref(), time, description),
    }
}
