use crate::types::{LogLevel, OrientationArg, OutputFormat};
use clap::{Parser, Subcommand};
use paneshop_types::ProductId;

#[derive(Parser)]
#[command(name = "paneshop")]
#[command(about = "Browse the shop catalog in a list/detail terminal layout", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: $PANESHOP_PATH or XDG data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Force the layout orientation instead of following the terminal size"
    )]
    pub orientation: Option<OrientationArg>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive browser (default)
    Browse {
        #[arg(long, help = "Restore the product selected when the browser last exited")]
        resume: bool,

        #[arg(long, help = "Do not write the selection on exit")]
        no_save: bool,
    },

    /// Print the catalog
    Catalog,

    /// Print the details of one product
    Show {
        /// Product id as listed by `catalog`
        id: ProductId,
    },

    /// Report which layout a terminal of the given size gets
    Layout {
        #[arg(long, help = "Columns (default: current terminal)")]
        width: Option<u16>,

        #[arg(long, help = "Rows (default: current terminal)")]
        height: Option<u16>,

        #[arg(long, help = "Pretend this product is selected")]
        selected: Option<ProductId>,
    },
}
