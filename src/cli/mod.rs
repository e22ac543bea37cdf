use clap::Subcommand;

mod chat;

pub use chat::{run_ask, run_chat};

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive debate in the terminal
    Chat,

    /// Send a single message and print the rebuttal
    Ask {
        /// The claim to rebut
        message: String,
    },
}
