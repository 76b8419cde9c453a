//! Job Jar CLI - Simulate voice turns from a terminal
//!
//! Fabricates the platform's request envelope for each subcommand, posts
//! it to a running backend, and prints the spoken reply.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;
use serde_json::json;

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8726";

#[derive(Parser)]
#[command(name = "jobjar")]
#[command(about = "Job Jar skill backend CLI", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend webhook URL
    #[arg(long, env = "JOBJAR_URL", default_value = DEFAULT_BACKEND_URL)]
    url: String,

    /// User id to send events as
    #[arg(long, env = "JOBJAR_USER", default_value = "cli-user")]
    user: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the skill (spoken: "open Job Jar")
    Launch,

    /// Add a job
    Add {
        /// Job name; omit to exercise the elicit prompt
        name: Option<String>,

        /// Send the slot unconfirmed (the backend will ask to confirm)
        #[arg(long)]
        unconfirmed: bool,

        /// Send the slot denied (the backend will ask for the name again)
        #[arg(long)]
        deny: bool,
    },

    /// List all saved jobs
    List,

    /// Grab a random job (and consume it)
    Grab,

    /// Delete a job by name
    Delete {
        /// Job name; omit to exercise the elicit prompt
        name: Option<String>,

        #[arg(long)]
        unconfirmed: bool,

        #[arg(long)]
        deny: bool,
    },

    /// Ask the skill for help
    Help,

    /// Cancel the session
    Cancel,

    /// Stop the session
    Stop,
}

#[derive(Deserialize)]
struct ResponseEnvelope {
    response: ResponseBody,
}

#[derive(Deserialize)]
struct ResponseBody {
    #[serde(rename = "outputSpeech")]
    output_speech: Option<OutputSpeech>,
    #[serde(rename = "shouldEndSession", default)]
    should_end_session: bool,
    #[serde(default)]
    directives: Vec<Directive>,
}

#[derive(Deserialize)]
struct OutputSpeech {
    ssml: Option<String>,
}

#[derive(Deserialize)]
struct Directive {
    #[serde(rename = "type")]
    directive_type: String,
}

fn slot_json(name: &Option<String>, unconfirmed: bool, deny: bool) -> serde_json::Value {
    match name {
        None => json!({ "name": "JobName", "confirmationStatus": "NONE" }),
        Some(value) => {
            let status = if deny {
                "DENIED"
            } else if unconfirmed {
                "NONE"
            } else {
                // Default to confirmed so a plain `jobjar add Dishes`
                // completes in one turn.
                "CONFIRMED"
            };
            json!({ "name": "JobName", "value": value, "confirmationStatus": status })
        }
    }
}

fn intent_envelope(user: &str, intent: &str, slots: serde_json::Value) -> serde_json::Value {
    json!({
        "version": "1.0",
        "session": { "user": { "userId": user } },
        "request": {
            "type": "IntentRequest",
            "intent": { "name": intent, "slots": slots }
        }
    })
}

fn build_envelope(cli: &Cli) -> serde_json::Value {
    match &cli.command {
        Commands::Launch => json!({
            "version": "1.0",
            "session": { "user": { "userId": cli.user } },
            "request": { "type": "LaunchRequest" }
        }),
        Commands::Add {
            name,
            unconfirmed,
            deny,
        } => intent_envelope(
            &cli.user,
            "AddJobIntent",
            json!({ "JobName": slot_json(name, *unconfirmed, *deny) }),
        ),
        Commands::List => intent_envelope(&cli.user, "GetAllJobsIntent", json!({})),
        Commands::Grab => intent_envelope(&cli.user, "GetJobIntent", json!({})),
        Commands::Delete {
            name,
            unconfirmed,
            deny,
        } => intent_envelope(
            &cli.user,
            "DeleteJobIntent",
            json!({ "JobName": slot_json(name, *unconfirmed, *deny) }),
        ),
        Commands::Help => intent_envelope(&cli.user, "AMAZON.HelpIntent", json!({})),
        Commands::Cancel => intent_envelope(&cli.user, "AMAZON.CancelIntent", json!({})),
        Commands::Stop => intent_envelope(&cli.user, "AMAZON.StopIntent", json!({})),
    }
}

/// Drop SSML tags and collapse whitespace for terminal display.
fn strip_ssml(ssml: &str) -> String {
    let mut text = String::with_capacity(ssml.len());
    let mut in_tag = false;
    for ch in ssml.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn print_response(body: &ResponseBody) {
    match body
        .output_speech
        .as_ref()
        .and_then(|s| s.ssml.as_deref())
    {
        Some(ssml) => println!("{}", strip_ssml(ssml).green()),
        None => println!("{}", "(no speech)".dimmed()),
    }

    for directive in &body.directives {
        println!("{}", format!("[{}]", directive.directive_type).dimmed());
    }

    if !body.should_end_session {
        println!("{}", "(session open)".dimmed());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let envelope = build_envelope(&cli);

    let client = reqwest::Client::new();
    let response = client
        .post(&cli.url)
        .json(&envelope)
        .send()
        .await
        .with_context(|| format!("Failed to reach backend at {}", cli.url))?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        bail!("Backend returned {}: {}", status, message);
    }

    let body: ResponseEnvelope = response
        .json()
        .await
        .context("Invalid response envelope")?;

    print_response(&body.response);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ssml_removes_break_tags() {
        let ssml = r#"<speak>Welcome to Job Jar<break strength="medium" /> What would you like to do?</speak>"#;
        assert_eq!(
            strip_ssml(ssml),
            "Welcome to Job Jar What would you like to do?"
        );
    }

    #[test]
    fn slot_defaults_to_confirmed_when_name_given() {
        let slot = slot_json(&Some("Dishes".to_string()), false, false);
        assert_eq!(slot["confirmationStatus"], "CONFIRMED");
        assert_eq!(slot["value"], "Dishes");
    }

    #[test]
    fn slot_omits_value_when_name_missing() {
        let slot = slot_json(&None, false, false);
        assert!(slot.get("value").is_none());
    }
}
