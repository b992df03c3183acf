use clap::{Parser, Subcommand};
use storymaker_domain::CharacterType;

/// Talk to a Storymaker backend, live or simulated.
///
/// Set `STORYMAKER_API_MOCK=true` to use the in-memory backend.
#[derive(Debug, Parser)]
#[command(name = "storymaker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the backend is up
    Health,

    /// List books
    Books,

    /// Show one book
    Book { id: String },

    /// List characters
    Characters,

    /// Show one character
    Character { id: String },

    /// Create a character
    CreateCharacter {
        #[arg(short, long)]
        name: String,

        /// adult, child or toy
        #[arg(short = 't', long = "type", default_value = "toy")]
        kind: CharacterType,

        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Create a book by walking through the book wizard
    CreateBook {
        #[arg(short, long)]
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Main character id
        #[arg(short, long)]
        main: String,

        /// Side character id (repeatable)
        #[arg(short, long = "side")]
        side: Vec<String>,
    },

    /// Log in with the development account
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: Option<String>,
    },

    /// Show the profile behind a session token
    Me {
        #[arg(short, long)]
        token: String,
    },
}
