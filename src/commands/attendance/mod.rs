mod brute;
pub mod logs;
pub mod status;
mod submit;
pub mod types;
pub mod utils;
pub mod view;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::routes::Route;
use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Status(status::Options),
    #[clap(alias = "code")]
    Submit(submit::Options),
    #[clap(alias = "bruteforce")]
    Brute(brute::Options),
    #[clap(alias = "history")]
    Logs(logs::Options),
    #[clap(alias = "show")]
    View(view::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Submit and review attendance")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

impl Options {
    pub fn route(&self) -> Route {
        match &self.commands {
            Commands::Logs(_) => Route::AttendanceLogs,
            Commands::View(options) => Route::AttendanceDetail(options.course.clone()),
            Commands::Status(_) | Commands::Submit(_) | Commands::Brute(_) => Route::Attendance,
        }
    }
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::Status(_) => status::handle(state).await,
        Commands::Submit(options) => submit::handle(&options, state).await,
        Commands::Brute(options) => brute::handle(&options, state).await,
        Commands::Logs(options) => logs::handle(&options, state).await,
        Commands::View(options) => view::handle(&options, state).await,
    }
}
