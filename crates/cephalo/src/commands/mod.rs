pub(crate) mod analyze;
pub(crate) mod calibrate;
pub(crate) mod norms;

use anyhow::Result;

use crate::cli::{Cli, Commands};

pub(crate) fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze(args) => analyze::handle(args),
        Commands::Calibrate(args) => calibrate::handle(args),
        Commands::Norms(args) => norms::handle(args),
    }
}
