//! Sprig CLI

use sprigc::commands::{eval_source, lex_file, parse_run_options, run_files};

fn main() {
    sprigc::init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let code = match args[1].as_str() {
        "run" => match parse_run_options(&args[2..]) {
            Ok(options) => run_files(&options),
            Err(message) => {
                eprintln!("error: {message}");
                eprintln!("Usage: sprig run <file>... [--parallel] [--timeout=<ms>]");
                1
            }
        },
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: sprig eval \"<source>\"");
                std::process::exit(1);
            }
            eval_source(&args[2])
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: sprig lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-v" => {
            println!("Sprig {}", env!("CARGO_PKG_VERSION"));
            0
        }
        command => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            1
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    println!("Sprig scripting language");
    println!();
    println!("Usage: sprig <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>...        Run one or more programs, each with its own binder");
    println!("  eval \"<source>\"      Run a program given on the command line");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --parallel           Run the programs concurrently");
    println!("  --timeout=<ms>       Give up waiting after <ms> milliseconds");
}
