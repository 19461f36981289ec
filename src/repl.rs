//! Interactive console loop
//!
//! Generic over its reader and writer so the whole conversation flow can be
//! driven from tests with in-memory buffers.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::consts::QUIT_COMMAND;
use crate::error::AppError;
use crate::session::Session;

/// Read one line without its terminator; `None` at end of input.
/// Invalid UTF-8 is replaced rather than ending the session.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "\n{text}")?;
    out.flush()?;
    read_line(input)
}

fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(QUIT_COMMAND)
}

pub(crate) fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let texts = session.texts();
    writeln!(out, "\nAI: {}", session.greeting())?;

    loop {
        let Some(line) = prompt(input, out, texts.input_prompt)? else {
            // Closed stdin is treated like an interrupt.
            debug!("input closed");
            writeln!(out, "\n{}", texts.goodbye)?;
            return Ok(());
        };

        if is_quit(&line) {
            writeln!(out, "\nAI: {}", session.closing_message())?;
            record_tomorrow(session, input, out)?;
            writeln!(out, "{}", texts.goodbye)?;
            return Ok(());
        }

        let reply = session.respond(&line, None);
        debug!(turn = session.turns(), closing = reply.is_closing(), "reply ready");
        writeln!(out, "\nAI: {reply}")?;
    }
}

/// Ask for one task and time for tomorrow and store it. A blank task skips;
/// a blank time is stored as given.
fn record_tomorrow<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let texts = session.texts();
    let description = prompt(input, out, texts.note_prompt)?.unwrap_or_default();
    if description.trim().is_empty() {
        return Ok(());
    }

    let time = prompt(input, out, texts.time_prompt)?.unwrap_or_default();
    let time = time.trim();

    let date = session.tomorrow();
    let confirmation = session.save_note(&date, time, &description)?;
    writeln!(out, "{confirmation}")?;
    Ok(())
}
