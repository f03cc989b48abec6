// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::answer::{AnswerGenerator, PromptLimits};
use crate::chat::{is_reset_command, ChatReply, ChatSession};
use crate::config::Settings;
use crate::dashboard::Dashboard;
use crate::llm::{ChatModel, GroqClient};
use crate::router::QueryRouter;
use crate::search::{DuckDuckGo, WebSearch};
use crate::store::TransactionSource;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const EXIT_COMMANDS: [&str; 2] = ["exit", "quit"];
const REFRESH_COMMAND: &str = "refresh";
const CLEARED_MESSAGE: &str = "Chat history has been cleared. Start fresh!";

pub fn router_from_settings(settings: &Settings) -> Result<QueryRouter<GroqClient, DuckDuckGo>> {
    let model = GroqClient::from_settings(settings)?;
    let limits = PromptLimits {
        max_history_turns: settings.max_history_turns,
        max_context_rows: settings.max_context_rows,
    };
    let generator = AnswerGenerator::new(model, settings.temperature, limits);
    let search = DuckDuckGo::new(&settings.search_url, settings.search_results)?;
    Ok(QueryRouter::new(generator, search))
}

pub fn ask<S, M, W>(
    dash: &mut Dashboard<S>,
    router: &QueryRouter<M, W>,
    sub: &clap::ArgMatches,
) -> Result<()>
where
    S: TransactionSource,
    M: ChatModel,
    W: WebSearch,
{
    let question = sub
        .get_many::<String>("question")
        .map(|parts| parts.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    // A one-shot question carries no history, so there is nothing to route.
    if is_reset_command(&question) {
        println!("{}", CLEARED_MESSAGE);
        return Ok(());
    }
    let collection = dash.transactions()?;
    let answer = router
        .route(&question, &collection, &[])
        .context("Failed to answer the question")?;
    println!("{}", answer.text());
    Ok(())
}

/// Line-oriented chat loop. Errors for one question are shown and the loop
/// carries on; the session history is left as it was.
///
/// Reset and `refresh` lines are handled before any fetch, so they work while
/// the sheet is unreachable.
pub fn run_repl<R, O, S, M, W>(
    input: R,
    out: &mut O,
    dash: &mut Dashboard<S>,
    router: &QueryRouter<M, W>,
) -> Result<ChatSession>
where
    R: BufRead,
    O: Write,
    S: TransactionSource,
    M: ChatModel,
    W: WebSearch,
{
    let mut session = ChatSession::new();
    writeln!(
        out,
        "Ask a question about your financial data. Type 'reset' to clear the history, 'refresh' to reload the sheet, 'exit' to leave."
    )?;
    for line in input.lines() {
        let line = line?;
        let command = line.trim().to_lowercase();
        if EXIT_COMMANDS.contains(&command.as_str()) {
            break;
        }
        if command == REFRESH_COMMAND {
            dash.refresh();
            writeln!(out, "Data will be reloaded on the next question.")?;
            out.flush()?;
            continue;
        }
        if is_reset_command(&command) {
            session.clear();
            writeln!(out, "{}", CLEARED_MESSAGE)?;
            out.flush()?;
            continue;
        }
        if command.is_empty() {
            continue;
        }
        let collection = match dash.transactions() {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "Error fetching data: {}", e)?;
                continue;
            }
        };
        match session.handle(&line, &collection, router) {
            Ok(ChatReply::Answered(answer)) => writeln!(out, "{}\n", answer.text())?,
            Ok(ChatReply::Cleared) => writeln!(out, "{}", CLEARED_MESSAGE)?,
            Ok(ChatReply::Ignored) => {}
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        out.flush()?;
    }
    Ok(session)
}

pub fn handle_chat<S: TransactionSource>(
    dash: &mut Dashboard<S>,
    settings: &Settings,
) -> Result<()> {
    let router = router_from_settings(settings)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_repl(stdin.lock(), &mut stdout, dash, &router)?;
    Ok(())
}
