pub mod commands;

use clap::ValueEnum;

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum CliOutput {
    Table,
    Json,
}
