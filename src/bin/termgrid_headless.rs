//! termgrid headless runner
//!
//! Feeds captured process output from stdin or a file through the parser in
//! fixed-size chunks, the way a process runner would, and prints the
//! resulting grid as text, a JSON snapshot, or the raw action stream.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use termgrid::{AnsiParser, GridConfig, TerminalState};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_CHUNK_SIZE: usize = 4096;

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    // Parse command line arguments
    let mut width: Option<usize> = None;
    let mut tab_width: Option<usize> = None;
    let mut chunk_size = DEFAULT_CHUNK_SIZE;
    let mut config_file: Option<PathBuf> = None;
    let mut input_file: Option<String> = None;
    let mut output_format = OutputFormat::Text;
    let mut show_help = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-w" | "--width" => {
                i += 1;
                if i < args.len() {
                    width = args[i].parse().ok();
                }
            },
            "--tab-width" => {
                i += 1;
                if i < args.len() {
                    tab_width = args[i].parse().ok();
                }
            },
            "-s" | "--chunk-size" => {
                i += 1;
                if i < args.len() {
                    chunk_size = args[i].parse().unwrap_or(DEFAULT_CHUNK_SIZE).max(1);
                }
            },
            "--config" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(PathBuf::from(&args[i]));
                }
            },
            "-f" | "--file" => {
                i += 1;
                if i < args.len() {
                    input_file = Some(args[i].clone());
                }
            },
            "-j" | "--json" => {
                output_format = OutputFormat::Json;
            },
            "-t" | "--text" => {
                output_format = OutputFormat::Text;
            },
            "-a" | "--actions" => {
                output_format = OutputFormat::Actions;
            },
            "-h" | "--help" => {
                show_help = true;
            },
            _ => {
                // Treat as input file if no flag
                if input_file.is_none() && !args[i].starts_with('-') {
                    input_file = Some(args[i].clone());
                }
            },
        }
        i += 1;
    }

    if show_help {
        print_help();
        return ExitCode::SUCCESS;
    }

    // Resolve configuration: explicit file, then default location, then flags
    let mut config = match &config_file {
        Some(path) => match GridConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            },
        },
        None => GridConfig::load_or_default(),
    };
    if let Some(width) = width {
        config.width = width;
    }
    if let Some(tab_width) = tab_width {
        config.tab_width = tab_width;
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    // Read input
    let input_data = match &input_file {
        Some(path) => match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path, e);
                return ExitCode::FAILURE;
            },
        },
        None => {
            // Read from stdin
            let mut data = Vec::new();
            if let Err(e) = io::stdin().read_to_end(&mut data) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            data
        },
    };

    tracing::debug!(bytes = input_data.len(), chunk_size, "processing input");

    let mut parser = AnsiParser::new();

    if let OutputFormat::Actions = output_format {
        let text = String::from_utf8_lossy(&input_data);
        for action in parser.actions(&text) {
            match serde_json::to_string(&action) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error serializing action: {}", e);
                    return ExitCode::FAILURE;
                },
            }
        }
        return ExitCode::SUCCESS;
    }

    // Process input chunk by chunk
    let mut state = TerminalState::from_config(&config);
    for chunk in input_data.chunks(chunk_size) {
        parser.parse_bytes(chunk, &mut state);
    }

    // Output result
    match output_format {
        OutputFormat::Json => match state.snapshot().to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing snapshot: {}", e);
                return ExitCode::FAILURE;
            },
        },
        _ => {
            let cursor = state.cursor();
            println!("Terminal State ({} columns, {} lines):", state.width(), state.line_count());
            println!("Cursor: ({}, {})", cursor.row, cursor.col);
            println!("---");
            println!("{}", state.to_text());
            println!("---");
        },
    }

    ExitCode::SUCCESS
}

#[derive(Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
    Actions,
}

fn print_help() {
    println!("termgrid headless runner");
    println!();
    println!("Usage: termgrid-headless [OPTIONS] [INPUT_FILE]");
    println!();
    println!("Options:");
    println!("  -w, --width <N>       Set grid width (default: 80)");
    println!("      --tab-width <N>   Set tab stop distance (default: 8)");
    println!("  -s, --chunk-size <N>  Feed input in chunks of N bytes (default: 4096)");
    println!("      --config <PATH>   Load grid config from a JSON file");
    println!("  -f, --file <PATH>     Read input from file");
    println!("  -j, --json            Output snapshot as JSON");
    println!("  -t, --text            Output grid as text (default)");
    println!("  -a, --actions         Output parsed actions, one JSON object per line");
    println!("  -h, --help            Show this help message");
    println!();
    println!("If no input file is specified, reads from stdin.");
    println!();
    println!("Examples:");
    println!("  ./gradlew build 2>&1 | termgrid-headless");
    println!("  termgrid-headless -w 120 -s 1 build.log");
    println!("  termgrid-headless --json < build.log > snapshot.json");
}
