use anyhow::Result;
use clap::Parser;
use console::style;

use crate::config::EXEC_NAME;

#[derive(Debug, Parser)]
#[clap(about = "Overview of the admin tools")]
pub struct Options {}

pub fn render() -> Result<()> {
    println!("{}", style("Admin").bold());
    println!();
    println!("  /admin/prokeys       `{EXEC_NAME} admin keys ls`      ProKeys");
    println!("  /admin/users         `{EXEC_NAME} admin users ls`     Users and their roles");
    println!("  /admin/user-runners  `{EXEC_NAME} admin runners status`  Auto attendance runner");
    println!("  /admin/lecture       `{EXEC_NAME} admin lecture <id>`  Lecture details");

    Ok(())
}
