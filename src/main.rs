//! trace2music - CLI Entry Point
//!
//! Commands:
//! - `trace2music convert <trace>` - Convert a CPU trace to musical data
//! - `trace2music synth <text>` - Write a synthetic trace built from text
//! - `trace2music summary <document>` - Summarise saved musical data

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "trace2music")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "Turns captured CPU instruction traces into musical data")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a trace document into a musical document
    Convert {
        /// Path to the trace JSON file
        input: String,
        /// Output musical data file
        #[arg(short, long, default_value = "musical_data.json")]
        output: String,
        /// Number of notes to list in the summary
        #[arg(short, long, default_value = "10")]
        notes: usize,
        /// Skip the summary
        #[arg(short, long)]
        quiet: bool,
    },
    /// Write a synthetic trace derived from a piece of text
    Synth {
        /// Text whose characters become trace steps
        text: String,
        /// Output trace file
        #[arg(short, long, default_value = "cpu_trace.json")]
        output: String,
    },
    /// Print the summary of a saved musical document
    Summary {
        /// Path to the musical data file
        document: String,
        /// Number of notes to list
        #[arg(short, long, default_value = "10")]
        notes: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Convert { input, output, notes, quiet }) => {
            convert_file(&input, &output, notes, quiet);
        }
        Some(Commands::Synth { text, output }) => {
            synthesize_trace(&text, &output);
        }
        Some(Commands::Summary { document, notes }) => {
            summarize_file(&document, notes);
        }
        None => {
            println!("trace2music v0.1.0");
            println!("CPU instruction traces to musical data");
            println!();
            println!("Use --help for available commands");
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn convert_file(input: &str, output: &str, notes: usize, quiet: bool) {
    use tracemusic::convert::convert_source;
    use tracemusic::trace::FileTraceSource;
    use tracemusic::{save_document, summarize};

    println!("🎼 Converting: {} → {}", input, output);

    let conversion = match convert_source(&FileTraceSource::new(input)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ Failed to load trace: {}", e);
            std::process::exit(1);
        }
    };

    let doc = &conversion.document;
    println!("✓ Converted {} instructions", doc.metadata.total_instructions);
    if !conversion.warnings.is_empty() {
        println!(
            "⚠️  {} steps had partial data; defaults were used",
            conversion.degraded_steps()
        );
    }

    if let Err(e) = save_document(output, doc) {
        eprintln!("❌ Failed to save musical data: {}", e);
        std::process::exit(1);
    }
    println!("✓ Saved to {}", output);

    if !quiet {
        println!();
        print!("{}", summarize(doc, notes));
    }
}

fn synthesize_trace(text: &str, output: &str) {
    use tracemusic::trace::{save_trace, SyntheticTraceSource};

    println!("🧪 Synthesizing trace from {:?}", text);

    let trace = SyntheticTraceSource::new(text).generate();
    if trace.is_empty() {
        eprintln!("❌ No characters to trace");
        std::process::exit(1);
    }

    if let Err(e) = save_trace(output, &trace) {
        eprintln!("❌ Failed to save trace: {}", e);
        std::process::exit(1);
    }

    println!("✓ Wrote {} steps to {}", trace.len(), output);
}

fn summarize_file(path: &str, notes: usize) {
    use tracemusic::{load_document, summarize};

    let doc = match load_document(path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("❌ Failed to load musical data: {}", e);
            std::process::exit(1);
        }
    };

    print!("{}", summarize(&doc, notes));
}
