pub mod account;
pub mod admin;
pub mod attendance;
pub mod auth;
pub mod auto;
pub mod completions;
pub mod home;
pub mod lectures;
pub mod onboarding;
pub mod open;
pub mod pages;
pub mod pro;
pub mod review;
pub mod views;
pub mod whoami;

use anyhow::Result;
use clap::Subcommand;

use crate::routes::{self, Decision, Route};
use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Auth(auth::Options),
    #[clap(alias = "info")]
    Whoami(whoami::Options),
    Home(home::Options),
    Onboarding(onboarding::Options),
    #[clap(alias = "lecture")]
    Lectures(lectures::Options),
    #[clap(alias = "attend")]
    Attendance(attendance::Options),
    Auto(auto::Options),
    Account(account::Options),
    Pro(pro::Options),
    Review(review::Options),
    Admin(admin::Options),
    #[clap(about = "Show the terms of service")]
    Terms(pages::Options),
    #[clap(about = "Show the privacy policy")]
    Privacy(pages::Options),
    #[clap(name = "bug-report", about = "Report a bug")]
    BugReport(pages::Options),
    Open(open::Options),
    Completions(completions::Options),
}

impl Commands {
    /// The view this command belongs to, `None` for commands outside the route table.
    pub fn route(&self) -> Option<Route> {
        let route = match self {
            Self::Auth(_) | Self::Completions(_) | Self::Open(_) => return None,
            Self::Whoami(_) | Self::Home(_) => Route::Home,
            Self::Onboarding(_) => Route::Onboarding,
            Self::Lectures(_) => Route::ManageLectures,
            Self::Attendance(options) => options.route(),
            Self::Auto(_) => Route::BruteAttendOptions,
            Self::Account(_) => Route::AccountEdit,
            Self::Pro(options) => options.route(),
            Self::Review(_) => Route::AssignmentReview,
            Self::Admin(options) => options.route(),
            Self::Terms(_) => Route::Terms,
            Self::Privacy(_) => Route::Privacy,
            Self::BugReport(_) => Route::BugReport,
        };

        Some(route)
    }
}

pub async fn handle_command(command: Commands, mut state: State) -> Result<()> {
    match command {
        Commands::Auth(options) => auth::handle(options, &state).await,

        Commands::Completions(options) => {
            completions::handle(&options);

            Ok(())
        }

        command => {
            // session is resolved before anything is printed
            state.bootstrap().await;

            let path = match (&command, command.route()) {
                (Commands::Open(options), _) => options.path.clone(),
                (_, Some(route)) => route.path(),
                (_, None) => unreachable!("every gated command has a route"),
            };

            match routes::decide(&path, &state.session) {
                Decision::Render(route) => match command {
                    Commands::Open(_) => views::render(&route, &state).await,
                    command => run(command, &state).await,
                },

                Decision::Redirect(target) => {
                    log::warn!("`{path}` is not available right now, showing `{target}` instead");

                    views::render(&target, &state).await
                }

                Decision::Blank => {
                    log::debug!("Nothing to render for `{path}`");

                    Ok(())
                }

                Decision::NotFound => {
                    views::not_found(&path);

                    Ok(())
                }
            }
        }
    }
}

async fn run(command: Commands, state: &State) -> Result<()> {
    match command {
        Commands::Whoami(options) => whoami::handle(&options, state).await,
        Commands::Home(options) => home::handle(&options, state).await,
        Commands::Onboarding(options) => onboarding::handle(options, state).await,
        Commands::Lectures(options) => lectures::handle(options, state).await,
        Commands::Attendance(options) => attendance::handle(options, state).await,
        Commands::Auto(options) => auto::handle(options, state).await,
        Commands::Account(options) => account::handle(options, state).await,
        Commands::Pro(options) => pro::handle(options, state).await,
        Commands::Review(options) => review::handle(options, state).await,
        Commands::Admin(options) => admin::handle(options, state).await,
        Commands::Terms(_) => views::render(&Route::Terms, state).await,
        Commands::Privacy(_) => views::render(&Route::Privacy, state).await,
        Commands::BugReport(_) => views::render(&Route::BugReport, state).await,

        Commands::Auth(_) | Commands::Completions(_) | Commands::Open(_) => {
            unreachable!("handled before the route gate")
        }
    }
}
