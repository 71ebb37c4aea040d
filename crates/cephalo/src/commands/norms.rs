use anyhow::Result;

use crate::cli::NormsArgs;
use crate::config::CephaloConfig;

pub(crate) fn handle(args: NormsArgs) -> Result<()> {
    let table = CephaloConfig::load(args.config.as_deref())?.norm_table()?;
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}
