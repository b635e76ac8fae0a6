use crate::config::DEFAULT_TARGET_VERSION;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cmver",
    about = "CMake Version Sync - enforces a minimum cmake_minimum_required version across vendored build files",
    version
)]
pub struct Cli {
    /// Path to the repository root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Minimum CMake version to enforce
    #[arg(short, long, default_value = DEFAULT_TARGET_VERSION, value_name = "VERSION")]
    pub target: String,

    /// Target file to process instead of the built-in list, relative
    /// to the root (repeatable)
    #[arg(long = "file", value_name = "PATH")]
    pub files: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite directives below the target version (the default)
    Sync,

    /// Report which files would change without writing anything
    Check,

    /// List the directives found in each target file
    List,
}
