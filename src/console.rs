//! Console chat — reads lines from stdin, prints the assistant's reply.
//!
//! Stands in for the chat window: it trims input, skips blank lines and
//! waits for each reply before reading the next line, so at most one
//! request is in flight. Runs until `/quit`, stdin EOF, or the `shutdown`
//! token is cancelled (Ctrl-C).
//!
//! Commands: `/online`, `/offline`, `/status`, `/quit`.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::engine::AssistantEngine;
use crate::error::AppError;
use crate::llm::TextGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input<'a> {
    Ask(&'a str),
    Online,
    Offline,
    Status,
    Quit,
    Unknown(&'a str),
}

/// `None` for blank lines.
fn parse(line: &str) -> Option<Input<'_>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let input = match line {
        "/online" => Input::Online,
        "/offline" => Input::Offline,
        "/status" => Input::Status,
        "/quit" | "/exit" => Input::Quit,
        cmd if cmd.starts_with('/') => Input::Unknown(cmd),
        text => Input::Ask(text),
    };
    Some(input)
}

/// Drive a conversation over `reader`/`out` until EOF, `/quit` or shutdown.
/// Returns the final connectivity flag.
pub async fn serve<G, R, W>(
    engine: &AssistantEngine<G>,
    name: &str,
    mut online: bool,
    reader: R,
    out: &mut W,
    shutdown: CancellationToken,
) -> Result<bool, AppError>
where
    G: TextGenerator,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    info!(online, "console started");
    writeln!(out, "─────────────────────────────────")?;
    writeln!(out, " {name}  (/quit or Ctrl-C to leave)")?;
    writeln!(out, "─────────────────────────────────")?;
    writeln!(out, "{}", engine.replies().greeting)?;

    let mut lines = reader.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let line = tokio::select! {
            biased;

            _ = shutdown.cancelled() => {
                writeln!(out)?;
                info!("console shutting down");
                break;
            }

            line = lines.next_line() => line,
        };

        let line = match line {
            Err(e) => {
                warn!("console read error: {e}");
                break;
            }
            Ok(None) => {
                info!("console input closed");
                break;
            }
            Ok(Some(line)) => line,
        };

        let Some(input) = parse(&line) else { continue };
        match input {
            Input::Ask(text) => {
                debug!(len = text.len(), online, "console question");
                let reply = engine.respond(text, online).await;
                writeln!(out, "{reply}")?;
            }
            Input::Online => {
                online = true;
                writeln!(out, "[online]")?;
            }
            Input::Offline => {
                online = false;
                writeln!(out, "[offline]")?;
            }
            Input::Status => {
                let mode = if online { "online" } else { "offline" };
                writeln!(out, "[{mode}] {} knowledge entries", engine.knowledge_len())?;
            }
            Input::Quit => break,
            Input::Unknown(cmd) => {
                writeln!(out, "unknown command {cmd} (try /online, /offline, /status, /quit)")?;
            }
        }
    }

    Ok(online)
}
