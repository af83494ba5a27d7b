use crate::lang::Lang;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
pub struct Args {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// print a snippet to stdout
    Show {
        /// language of the snippet to print
        lang: Lang,

        /// print the payload only, without the header
        #[clap(long)]
        raw: bool,
    },

    /// list the available snippets
    List {
        /// emit the listing as json
        #[clap(long)]
        json: bool,
    },

    /// write a snippet to a file, verbatim
    Export {
        /// language of the snippet to write
        lang: Lang,

        /// destination path, supports `~` expansion -
        /// if not provided, a temp file is used
        #[clap(long)]
        out: Option<String>,
    },
}
