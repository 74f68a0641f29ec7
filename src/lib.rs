pub mod commands;
pub mod config;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;
pub mod utils;

use clap::Parser;
use commands::Commands;

#[derive(Debug, Parser)]
#[clap(
    name = "plato",
    about = "📚 Manage your SuperPlato attendance from the command line",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        long = "api-url",
        help = "Base URL of the SuperPlato API",
        long_help = "Base URL of the SuperPlato API, defaults to $PLATO_API_URL or the public API",
        global = true
    )]
    pub api_url: Option<String>,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,
}
