use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// YAML file with the page configuration.
    #[arg(long, short = 'y', default_value = "../resources/config.yaml")]
    pub yaml: String,

    /// Input PDF file (overrides `file` from the configuration).
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Output PDF file (overrides `output` from the configuration).
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// Markdown file to prepend as a cover (overrides `appendFirstPage`).
    #[arg(long, short = 'm')]
    pub markdown: Option<String>,
}
