//! `geolab chat` command
//!
//! Interactive tutoring session about one knowledge point. The conversation
//! history is sent with every question.
//!
//! # Usage
//! ```bash
//! geolab chat atmospheric-circulation
//! ```
//!
//! Ctrl-C while an answer is pending abandons that question; `/quit`, an
//! interrupted prompt, or end of input ends the session.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Input;
use tracing::debug;

use super::utils::{knowledge_context, load_catalog, open_credential_store, print_not_found, resolve_credential, tutor_client};
use crate::config::Config;
use crate::tutor::{AnswerSource, ChatSession};

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Knowledge point id
    pub id: String,

    /// API key (overrides the stored one)
    #[arg(long)]
    pub api_key: Option<String>,
}

pub async fn run(args: ChatArgs, config: &Config) -> Result<()> {
    let catalog = load_catalog()?;
    let Some(point) = catalog.knowledge_point(&args.id) else {
        print_not_found(&args.id);
        return Ok(());
    };

    let credential = resolve_credential(args.api_key, open_credential_store().as_ref());
    let client = tutor_client(config)?;
    let mut session = ChatSession::new(&point.id, knowledge_context(&catalog, &point.id));

    println!("{} {}", "AI 地理辅导".bold(), format!("· {}", point.title).cyan());
    println!("{}", "Type /quit to leave.".dimmed());
    println!();

    while let Some(line) = read_question().await? {
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        if matches!(question, "/quit" | "/exit") {
            break;
        }

        let turn = session.submit(question);
        let request = session.request(&turn, credential.clone());

        tokio::select! {
            reply = client.ask(&request) => {
                match reply.source {
                    AnswerSource::MissingCredential => println!("{}", reply.answer.yellow()),
                    AnswerSource::Fallback => {
                        println!("{}", reply.answer);
                        println!("{}", "(offline answer)".dimmed());
                    }
                    AnswerSource::Provider => println!("{}", reply.answer),
                }
                session.resolve(turn.id, reply.answer)?;
            }
            _ = tokio::signal::ctrl_c() => {
                session.abandon(turn.id);
                println!("{}", "(cancelled)".dimmed());
            }
        }
        println!();
    }

    debug!(turns = session.len(), "chat session ended");
    Ok(())
}

/// Next line from the user; `None` ends the session
async fn read_question() -> Result<Option<String>> {
    let result = tokio::task::spawn_blocking(|| {
        Input::<String>::new()
            .with_prompt("你")
            .allow_empty(true)
            .interact_text()
    })
    .await?;

    match result {
        Ok(line) => Ok(Some(line)),
        Err(e) => {
            debug!(error = %e, "prompt closed");
            Ok(None)
        }
    }
}
