use clap::{Parser as ClapParser, Subcommand};
use lorekey::cli::{self, CliError, EvalOptions, EvalOutput, QueryOptions};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "lorekey")]
#[command(about = "lorekey - resolve queries, variables and predicates in JSON game configuration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a query against a JSON document
    Query {
        /// The query, as JSON
        query: String,

        /// JSON document (reads from stdin if neither this nor --file is given)
        #[arg(short, long, conflicts_with = "file")]
        input: Option<String>,

        /// Read the JSON document from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Evaluate a value or condition against game state
    Eval {
        /// The value or predicate, as JSON
        expr: String,

        /// Game state JSON file
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Print truthiness instead of the value
        #[arg(short = 'b', long = "bool")]
        as_bool: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'lorekey docs' to list categories)
        category: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LOREKEY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            query,
            input,
            file,
            pretty,
        } => run_query(query, input, file, pretty),
        Commands::Eval {
            expr,
            state,
            as_bool,
        } => run_eval(expr, state, as_bool),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_query(
    query: String,
    input: Option<String>,
    file: Option<PathBuf>,
    pretty: bool,
) -> Result<(), CliError> {
    let input = match (input, file) {
        (Some(s), _) => Some(s),
        (None, Some(path)) => Some(fs::read_to_string(path)?),
        (None, None) if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        (None, None) => None,
    };

    let output = cli::execute_query(&QueryOptions { query, input })?;
    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);
    Ok(())
}

fn run_eval(expr: String, state: Option<PathBuf>, as_bool: bool) -> Result<(), CliError> {
    let state = state.map(fs::read_to_string).transpose()?;

    match cli::execute_eval(&EvalOptions {
        expr,
        state,
        as_bool,
    })? {
        EvalOutput::Bool(b) => println!("{}", b),
        EvalOutput::Value(v) => println!("{}", serde_json::to_string(&v)?),
    }
    Ok(())
}
