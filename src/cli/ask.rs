//! `geolab ask` command
//!
//! One tutoring turn, no history.
//!
//! # Usage
//! ```bash
//! geolab ask earth-rotation "自转速度是多少？"
//! geolab ask ocean-currents "为什么有寒流？" --api-key sk-...
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::utils::{knowledge_context, load_catalog, open_credential_store, resolve_credential, tutor_client};
use crate::config::Config;
use crate::tutor::{AnswerSource, TutorRequest};

#[derive(Args, Debug)]
pub struct AskArgs {
    /// Knowledge point id
    pub id: String,

    /// The question
    pub question: String,

    /// API key (overrides the stored one)
    #[arg(long)]
    pub api_key: Option<String>,
}

pub async fn run(args: AskArgs, config: &Config) -> Result<()> {
    let catalog = load_catalog()?;
    let context = knowledge_context(&catalog, &args.id);
    let credential = resolve_credential(args.api_key, open_credential_store().as_ref());
    let client = tutor_client(config)?;

    let request = TutorRequest::new(&args.id, &args.question, context).with_credential(credential);
    let reply = client.ask(&request).await;

    match reply.source {
        AnswerSource::MissingCredential => println!("{}", reply.answer.yellow()),
        AnswerSource::Fallback => {
            println!("{}", reply.answer);
            println!("{}", "(offline answer)".dimmed());
        }
        AnswerSource::Provider => println!("{}", reply.answer),
    }

    Ok(())
}
