use anyhow::Result;
use clap::Parser;
use serde_json::Value;

use crate::commands::admin::types::ProKey;
use crate::commands::admin::utils::{get_pro_keys, yes_no};
use crate::state::State;
use crate::utils::{format_kst, table};

#[derive(Debug, Parser, Default)]
#[clap(about = "List ProKeys")]
pub struct Options {
    #[clap(short = 'u', long = "unused", help = "Only list keys nobody redeemed yet")]
    pub unused: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let mut keys = get_pro_keys(&state.http).await?;

    if options.unused {
        keys.retain(|key| !key.is_used.unwrap_or_default());
    }

    if keys.is_empty() {
        log::info!("No ProKeys found");

        return Ok(());
    }

    println!("{}", format_keys(&keys)?.join("\n"));

    Ok(())
}

fn format_keys(keys: &[ProKey]) -> Result<Vec<String>> {
    let rows = keys.iter().map(|key| {
        let used_by = match &key.used_by {
            Some(Value::Null) | None => "-".to_string(),
            Some(Value::String(user)) => user.clone(),
            Some(user) => user.to_string(),
        };

        format!(
            "{}\t{}\t{used_by}\t{}",
            key.key,
            yes_no(key.is_used),
            key.used_at.as_deref().map_or_else(|| "-".to_string(), format_kst)
        )
    });

    table(Some("KEY\tUSED\tUSER\tUSED AT (KST)"), rows)
}
