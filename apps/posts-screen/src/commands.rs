//! Screen commands - one line of input per user action.

use clap::{Parser, Subcommand};

use posts_core::domain::PostId;

#[derive(Debug, Parser)]
#[command(name = "posts", no_binary_name = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Set the user id filter (empty for all posts) and refetch
    Filter {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Refetch with the current filter
    Refresh,
    /// Set the form title
    Title {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Set the form body
    Body {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Create a post, or update the one being edited
    Submit,
    /// Select a post for editing
    Edit { id: PostId },
    /// Drop the edit selection and clear the form
    CancelEdit,
    /// Select a post for a title update
    Patch { id: PostId },
    /// Set the new title for the selected post
    NewTitle {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Send the title update
    SubmitTitle,
    /// Drop the title update selection
    CancelPatch,
    /// Delete a post
    Delete { id: PostId },
    /// Draw the screen again
    Show,
    /// Leave
    #[command(alias = "exit")]
    Quit,
}

/// Parse one input line. Blank lines parse to `None`.
///
/// Free text is rejoined with single spaces.
pub fn parse(line: &str) -> Result<Option<Command>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    CommandLine::try_parse_from(words).map(|cli| Some(cli.command))
}

/// Join free-text words back into one string.
pub fn joined(words: &[String]) -> String {
    words.join(" ")
}
