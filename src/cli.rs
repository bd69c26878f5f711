// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "cube-scene")]
#[command(about = "Spinning cube scene", long_about = None)]
pub struct Cli {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Simulate N fixed-step frames without a window, print the final
    /// state and exit
    #[arg(long)]
    pub frames: Option<u64>,
}
