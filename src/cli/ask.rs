// src/cli/ask.rs
// Terminal front-ends for the chat assistant

use anyhow::Result;
use folio::assistant::{ChatSession, respond};
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

pub fn run_ask(query: &[String]) -> Result<()> {
    println!("{}", respond(&query.join(" ")));
    Ok(())
}

/// Read lines from stdin until EOF, answering each after `delay`.
pub async fn run_chat(delay: Duration) -> Result<()> {
    let mut session = ChatSession::new();
    if let Some(greeting) = session.messages().first() {
        println!("assistant> {}", greeting.text);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        if let Some(reply) = answer(&mut session, &line, delay).await {
            println!("assistant> {}", reply);
        }
    }

    Ok(())
}

/// Submit one line and deliver its reply once `delay` has passed.
/// Blank lines get no reply.
async fn answer(session: &mut ChatSession, line: &str, delay: Duration) -> Option<&'static str> {
    let pending = session.submit(line)?;
    tracing::debug!(kind = ?pending.kind, "Reply pending");
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let text = pending.text;
    session.deliver(pending);
    Some(text)
}
