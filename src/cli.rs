use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(
    author,
    version,
    about = "Concurrent subdomain discovery, validation and risk-scoring pipeline",
    long_about = None,
    after_help = "EXAMPLES:
  Basic scan:
    subrecon -d example.com

  Recursive scan with a custom wordlist:
    subrecon -d example.com -w wordlist.txt --recursive

  Attempt a zone transfer and export CSV:
    subrecon -d example.com --axfr -f csv -o results.csv"
)]
pub struct Cli {
    /// Target apex domain (e.g., example.com)
    #[arg(short = 'd', long)]
    pub domain: String,

    /// Worker-pool concurrency (1..20)
    #[arg(short = 'c', long, value_parser = clap::value_parser!(u16).range(1..=20))]
    pub concurrency: Option<u16>,

    /// Conservative curated wordlist instead of the deep list
    #[arg(long)]
    pub safe: bool,

    /// Path to a custom newline-delimited wordlist
    #[arg(short = 'w', long)]
    pub wordlist: Option<String>,

    /// Suppress informational logging
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Output file path
    #[arg(short = 'o', long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Recursively enumerate subdomains of discovered high-value hosts
    #[arg(long)]
    pub recursive: bool,

    /// Attempt a DNS zone transfer (AXFR) against the apex's nameservers
    #[arg(long)]
    pub axfr: bool,

    /// Reserved for a future port-sweep pass; accepted but not yet implemented
    #[arg(long)]
    pub ports: bool,

    /// Run a vulnerability scan (nuclei) against every live finding
    #[arg(long)]
    pub nuclei: bool,

    /// Enable detailed debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
    Txt,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
