use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DraftCommands, EditArgs, ListArgs, RecipeArgs, ThemeArg};

/// Command-line recipe builder
///
/// Builds recipes through a three step form (details, ingredients,
/// instructions). Work in progress can be saved as a draft and picked up
/// again by a later invocation. While a draft is open, creating another
/// recipe from the listing is disabled.
#[derive(Parser)]
#[command(version, about, name = "rb")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/recipe-builder/recipes.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Color theme for rich output
    #[arg(long, global = true, value_enum)]
    pub theme: Option<ThemeArg>,

    /// Simulated network latency in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub latency: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the recipe builder
#[derive(Subcommand)]
pub enum Commands {
    /// List recipes, optionally filtered
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show the session status and whether a draft is saved
    Status,
    /// Inspect or discard the saved draft
    Draft {
        #[command(subcommand)]
        command: DraftCommands,
    },
    /// Fill in a new recipe
    #[command(alias = "new")]
    Create(RecipeArgs),
    /// Edit an existing recipe
    Edit(EditArgs),
}
