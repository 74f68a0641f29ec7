pub mod dashboard;
pub mod keys;
pub mod lecture;
pub mod runners;
pub mod types;
pub mod users;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::routes::Route;
use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Dashboard(dashboard::Options),
    #[clap(alias = "prokeys")]
    Keys(keys::Options),
    Users(users::Options),
    #[clap(alias = "runner")]
    Runners(runners::Options),
    Lecture(lecture::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Admin tools")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

impl Options {
    pub fn route(&self) -> Route {
        match &self.commands {
            Commands::Dashboard(_) => Route::AdminDashboard,
            Commands::Keys(_) => Route::AdminProKeys,
            Commands::Users(_) => Route::AdminUsers,
            Commands::Runners(_) => Route::AdminUserRunners,
            Commands::Lecture(options) => Route::AdminLecture(options.lecture_id.clone()),
        }
    }
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::Dashboard(_) => dashboard::render(),
        Commands::Keys(options) => keys::handle(options, state).await,
        Commands::Users(options) => users::handle(options, state).await,
        Commands::Runners(options) => runners::handle(options, state).await,
        Commands::Lecture(options) => lecture::handle(&options, state).await,
    }
}
