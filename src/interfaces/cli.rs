use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "shakespeare")]
#[command(about = "Translate plain English into Shakespearean English.")]
#[command(version)]
pub struct Cli {
    /// FunTranslations API key (overrides the config file)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Translation endpoint URL (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Text to translate; read from stdin when omitted
    #[arg(num_args = 0..)]
    pub text: Vec<String>,
}
