use std::{borrow::Cow, io::Write};

use clap::{Parser, Subcommand};

pub mod commands;

/// Primitive operation micro benchmarks
#[derive(Parser, Debug)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    Run(commands::run::RunArgs),
    List(commands::list::ListArgs),
}

impl Cli {
    /// The selected command. No subcommand means a run with the default profile.
    pub fn selected_command(&self) -> Cow<'_, Commands> {
        match &self.command {
            Some(cmd) => Cow::Borrowed(cmd),
            None => Cow::Owned(Commands::Run(commands::run::RunArgs::default())),
        }
    }

    /// Execute the selected command, writing its output to `out`.
    pub fn run(&self, out: &mut impl Write) -> anyhow::Result<()> {
        match self.selected_command().as_ref() {
            Commands::Run(cmd) => cmd.run(out).map(|_| ()),
            Commands::List(cmd) => cmd.run(out),
        }
    }
}
