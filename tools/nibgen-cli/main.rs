use clap::{ArgAction, Parser, ValueEnum};
use nibgen::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// C# partial classes
    Csharp,
    /// The declaration model as JSON
    Json,
}

/// Generates code-behind partial classes from an interface document
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the document in nibgen's JSON interchange format
    document_path: String,

    /// Write the output here instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Namespace to wrap the generated classes in (C# output only)
    #[arg(short, long)]
    namespace: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Csharp)]
    format: OutputFormat,

    /// JSON file with generator options
    #[arg(short, long)]
    config: Option<String>,

    /// Do not attach action stub listings as class comments
    #[arg(long)]
    no_stub_notes: bool,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let total_start = Instant::now();

    // --- 1. Options ---
    let options = match &cli.config {
        Some(path) => GeneratorOptions::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load options: {}", e))),
        None => GeneratorOptions::default(),
    };

    // --- 2. Loading ---
    let load_start = Instant::now();
    let json = fs::read_to_string(&cli.document_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read document '{}': {}",
            &cli.document_path, e
        ))
    });
    let document = document_from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load document: {}", e)));
    let load_duration = load_start.elapsed();

    // --- 3. Generation ---
    let generate_start = Instant::now();
    let mut builder = Generator::builder().with_options(options);
    if cli.no_stub_notes {
        builder = builder.without_stub_notes();
    }
    let generator = builder.build();
    let declarations = generator
        .generate(&document)
        .unwrap_or_else(|e| exit_with_error(&format!("Generation failed: {}", e)));
    let generate_duration = generate_start.elapsed();

    // --- 4. Output ---
    let rendered = match cli.format {
        OutputFormat::Csharp => CSharpEmitter::default()
            .emit_compile_unit(&declarations, cli.namespace.as_deref())
            .unwrap_or_else(|e| exit_with_error(&format!("Emitting C# failed: {}", e))),
        OutputFormat::Json => serde_json::to_string_pretty(&declarations)
            .unwrap_or_else(|e| exit_with_error(&format!("Serializing JSON failed: {}", e))),
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write output '{}': {}", path, e))
            });
            eprintln!(
                "Generated {} partial classes into '{}'",
                declarations.len(),
                path
            );
        }
        None => println!("{}", rendered),
    }

    tracing::info!(
        classes = declarations.len(),
        nodes = document.nodes().len(),
        load = ?load_duration,
        generate = ?generate_duration,
        total = ?total_start.elapsed(),
        "Done"
    );
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nibgen={0},nibgen_cli={0}", default_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
