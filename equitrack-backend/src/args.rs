use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Port for the HTTP API
    #[arg(long, default_value_t = 3001)]
    pub port: u16,
}
