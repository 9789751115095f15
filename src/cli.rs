use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the results workbook (overrides config)
    #[arg(long)]
    pub workbook: Option<String>,

    /// Path to config TOML
    #[arg(long, default_value = "gaitscope.toml")]
    pub config: String,
}
