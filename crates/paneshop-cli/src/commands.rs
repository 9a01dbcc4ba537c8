use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;
use paneshop_core::resolve_workspace_path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;

    if let Err(e) = logging::init(&data_dir, cli.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let ctx = ExecutionContext::new(data_dir, cli.orientation.map(Into::into), cli.format);

    let command = cli.command.unwrap_or(Commands::Browse {
        resume: false,
        no_save: false,
    });

    match command {
        Commands::Browse { resume, no_save } => handlers::browse::handle(&ctx, resume, no_save),
        Commands::Catalog => handlers::catalog::handle(&ctx),
        Commands::Show { id } => handlers::show::handle(&ctx, id),
        Commands::Layout {
            width,
            height,
            selected,
        } => handlers::layout::handle(&ctx, width, height, selected),
    }
}
