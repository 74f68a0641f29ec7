use anyhow::{ensure, Result};
use clap::Parser;

use crate::commands::admin::utils::generate_pro_keys;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Generate new ProKeys")]
pub struct Options {
    #[clap(
        short = 'c',
        long = "count",
        help = "How many keys to generate",
        default_value = "10"
    )]
    pub count: u32,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    ensure!(options.count > 0, "Generate at least one key");

    let keys = generate_pro_keys(&state.http, options.count).await?;

    log::info!("Generated {} ProKey(s)", keys.len());

    // one per line so the output can be piped
    for key in keys {
        println!("{key}");
    }

    Ok(())
}
