// src/main.rs
//
// RagaPro command-line shell.
//
// Every subcommand goes through the application commands and prints the
// returned DTO as JSON. Errors print the serialized ErrorResponse.

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use ragapro::application::commands::*;
use ragapro::application::dto::{BrowseRequestDto, SearchRequestDto};
use ragapro::application::state::AppState;
use ragapro::config::{AppConfig, ConfigOverrides};
use ragapro::domain::{FeedbackForm, LoginCredentials, SignupForm};
use ragapro::logging;

/// Command-line arguments for ragapro
#[derive(Parser, Debug)]
#[command(name = "ragapro")]
#[command(about = "Look up Carnatic and Hindustani ragas on a RagaPro server")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a raga name against the selected traditions
    Search {
        query: String,

        /// Search only the Hindustani catalog
        #[arg(long, conflicts_with = "carnatic")]
        hindustani: bool,

        /// Search only the Carnatic catalog
        #[arg(long)]
        carnatic: bool,
    },

    /// Page through the alphabetical Carnatic index
    Browse {
        #[arg(long)]
        letter: Option<char>,

        #[arg(long)]
        text: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show the Carnatic card for one indexed name
    Show { name: String },

    /// List archived sessions
    Archive {
        /// all, pdf, audio, video or other
        #[arg(long, default_value = "all")]
        category: String,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Ask RagaBot a question
    Ask { message: Vec<String> },

    /// Create an account
    Signup {
        #[arg(long)]
        login_name: String,

        #[arg(long)]
        email: String,

        #[arg(long, env = "RAGAPRO_PASSWORD")]
        password: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,
    },

    /// Log in, then submit feedback
    Feedback(FeedbackArgs),
}

#[derive(Args, Debug)]
struct FeedbackArgs {
    #[arg(long, env = "RAGAPRO_USERNAME")]
    username: String,

    #[arg(long, env = "RAGAPRO_PASSWORD")]
    password: String,

    #[arg(long)]
    email: String,

    #[arg(long, default_value = "")]
    first_name: String,

    #[arg(long, default_value = "")]
    last_name: String,

    #[arg(long, default_value = "")]
    phone_number: String,

    feedback: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.overrides).context("Failed to load configuration")?;
    logging::init_from_config(&config).context("Failed to initialize logging")?;

    let state = AppState::from_config(&config).context("Failed to initialize application")?;

    run(cli.command, &state).await
}

async fn run(command: Command, state: &AppState) -> Result<()> {
    match command {
        Command::Search {
            query,
            hindustani,
            carnatic,
        } => {
            let request = SearchRequestDto {
                query,
                hindustani: hindustani || !carnatic,
                carnatic: carnatic || !hindustani,
            };

            tokio::select! {
                result = search_raga(request, state) => match result {
                    Some(result) => print_json(&result),
                    None => Ok(()),
                },
                _ = tokio::signal::ctrl_c() => {
                    cancel_search(state);
                    log::info!("event=search_interrupted module=cli");
                    Ok(())
                }
            }
        }

        Command::Browse { letter, text, page } => {
            print_json(&browse_carnatic(BrowseRequestDto { letter, text, page }, state))
        }

        Command::Show { name } => {
            let card = show_carnatic_raga(name, state)
                .await
                .map_err(anyhow::Error::msg)?;
            print_json(&card)
        }

        Command::Archive { category, page } => {
            print_json(&list_archive(category, page, state).await.map_err(anyhow::Error::msg)?)
        }

        Command::Ask { message } => {
            let reply = ask_ragabot(message.join(" "), state)
                .await
                .map_err(anyhow::Error::msg)?;
            print_json(&reply)
        }

        Command::Signup {
            login_name,
            email,
            password,
            first_name,
            last_name,
        } => {
            let form = SignupForm {
                login_name,
                email,
                password,
                first_name,
                last_name,
            };
            print_json(&signup(form, state).await.map_err(anyhow::Error::msg)?)
        }

        Command::Feedback(args) => {
            let credentials = LoginCredentials {
                username: args.username,
                password: args.password,
            };
            login(credentials, state)
                .await
                .map_err(|error| anyhow!(error).context("Login failed"))?;

            let form = FeedbackForm {
                email: args.email,
                first_name: args.first_name,
                last_name: args.last_name,
                phone_number: args.phone_number,
                feedback: args.feedback,
            };
            let result = submit_feedback(form, state).await;
            logout(state);

            print_json(&result.map_err(anyhow::Error::msg)?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
