use clap::{Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a parsed query descriptor against the data directory
    Query {
        #[arg(long, help = "Query descriptor JSON file, or '-' for stdin")]
        query: String,

        #[arg(
            long,
            help = "How RIGHT joins pair rows: 'first-match' (default) or 'all-matches'"
        )]
        right_join: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        #[arg(
            long,
            help = "If specified, writes the result to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print every row of a table as loaded
    Table {
        #[arg(long, help = "Table name, without the storage suffix")]
        name: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[arg(
            long,
            help = "If specified, writes the result to this file instead of stdout"
        )]
        output: Option<String>,
    },
}
