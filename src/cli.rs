// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "classroom-viewer")]
#[command(about = "Interactive 3D classroom scene", long_about = None)]
pub struct Cli {
    /// Disable the stats overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Layout file (JSON); flags below override its values
    #[arg(long = "layout")]
    pub layout: Option<PathBuf>,

    /// Number of desk rows
    #[arg(long = "rows")]
    pub rows: Option<usize>,

    /// Number of desks per row
    #[arg(long = "cols")]
    pub cols: Option<usize>,

    /// Initial window width in logical pixels
    #[arg(long = "width", default_value = "1280")]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long = "height", default_value = "720")]
    pub height: u32,
}
