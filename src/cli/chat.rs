use std::io::Write;
use std::time::Duration;

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use rebuttal::{DebateSession, Role, SubmitOutcome, Turn};

/// One line of chat input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Blank,
    Exit,
    History,
    Clear,
    ToggleConcise,
    Help,
    Message(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    match trimmed {
        "" => Input::Blank,
        "/exit" | "/quit" => Input::Exit,
        "/history" => Input::History,
        "/clear" => Input::Clear,
        "/concise" => Input::ToggleConcise,
        "/help" => Input::Help,
        _ => Input::Message(trimmed),
    }
}

const HELP: &str = "\
Commands:
  /history   show the conversation so far
  /clear     start over
  /concise   toggle concise mode (at most 3 sentences)
  /help      show this help
  /exit      quit";

pub async fn run_chat(mut session: DebateSession) -> Result<()> {
    if let Some(greeting) = session.transcript().turns().first() {
        print_turn(greeting);
    }
    println!("Type /help for commands.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            Input::Blank => continue,
            Input::Exit => break,
            Input::Help => println!("{HELP}\n"),
            Input::History => {
                for turn in session.transcript().turns() {
                    print_turn(turn);
                }
            }
            Input::Clear => {
                session.reset();
                println!("Conversation cleared.\n");
            }
            Input::ToggleConcise => {
                let concise = !session.config().is_concise();
                let config = session.config().clone().with_concise(concise);
                session.set_config(config);
                println!("Concise mode {}.\n", if concise { "on" } else { "off" });
            }
            Input::Message(text) => {
                let outcome = submit_with_spinner(&mut session, text).await?;
                print_turn(&outcome.reply);
            }
        }
    }

    debug!("Chat ended after {} turns", session.transcript().len());
    Ok(())
}

pub async fn run_ask(mut session: DebateSession, message: &str) -> Result<()> {
    let outcome = submit_with_spinner(&mut session, message).await?;

    match outcome.result {
        Ok(_) => {
            println!("{}", outcome.reply.content());
            Ok(())
        }
        Err(e) => bail!("{} ({})", e.message(), e.kind()),
    }
}

async fn submit_with_spinner(session: &mut DebateSession, text: &str) -> Result<SubmitOutcome> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Sending...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = session.submit(text).await;
    spinner.finish_and_clear();

    Ok(outcome?)
}

fn print_turn(turn: &Turn) {
    let speaker = match turn.role() {
        Role::User => "You",
        Role::Assistant => "Debater",
        Role::System => "System",
    };
    println!("{speaker}: {}\n", turn.content());
}
