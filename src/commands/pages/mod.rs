use anyhow::Result;
use clap::Parser;
use console::style;

use crate::config::{BUG_REPORT_EMAIL, EXEC_NAME, VERSION};
use crate::utils::urlify;

#[derive(Debug, Parser)]
#[group(skip)]
pub struct Options {}

pub fn terms() -> Result<()> {
    println!("{}", style("Terms of Service").bold());
    println!();
    println!("1. SuperPlato is an unofficial helper for the PLATO learning system.");
    println!("   It is not affiliated with the university.");
    println!("2. You are responsible for every attendance submitted with your account.");
    println!("   Submitting attendance for a lecture you did not attend may violate");
    println!("   university rules.");
    println!("3. Pro features are provided as is and may be changed or withdrawn.");
    println!("4. Accounts that abuse the service may be suspended without notice.");

    Ok(())
}

pub fn privacy() -> Result<()> {
    println!("{}", style("Privacy Policy").bold());
    println!();
    println!("We store your name, your student ID and your PLATO password so the");
    println!("server can sign in to PLATO on your behalf to sync lectures and submit");
    println!("attendance. The password is encrypted at rest and never shown again.");
    println!();
    println!("Attendance logs are kept until you delete your account.");
    println!("Run `{EXEC_NAME} account delete` to remove all of your data.");

    Ok(())
}

pub fn bug_report() -> Result<()> {
    let mailto = format!(
        "mailto:{BUG_REPORT_EMAIL}?subject=Bug%20report%20({EXEC_NAME}%20{VERSION})"
    );

    log::info!("Found a bug? Tell us at {}", urlify(BUG_REPORT_EMAIL));
    log::info!("Include the output of the failing command run with `--verbose`");

    if webbrowser::open(&mailto).is_err() {
        log::debug!("Could not open a mail client");
    }

    Ok(())
}

pub fn forbidden() -> Result<()> {
    log::warn!("You do not have access to this page");

    Ok(())
}
