use anyhow::Result;
use clap::Parser;
use console::style;

use crate::config::EXEC_NAME;

#[derive(Debug, Parser)]
#[clap(about = "What SuperPlato Pro adds")]
pub struct Options {}

pub fn render() -> Result<()> {
    println!("{}", style("SuperPlato Pro").bold());
    println!();
    println!("  * Automatic attendance for the lectures you pick");
    println!("  * One shot attendance that tries every code for you");
    println!("  * Assignment review with GPT, files included");
    println!("  * Attendance analysis on every course page");
    println!();
    log::info!("Got a ProKey? Activate it with `{EXEC_NAME} pro verify <key>`");

    Ok(())
}
