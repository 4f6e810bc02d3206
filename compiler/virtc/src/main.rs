//! Virt CLI

use virtc::commands::{eval_inline, lex_file, parse_file, run_file, RunOptions};

fn main() {
    virtc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" | "eval" => {
            let (flags, positional): (Vec<&String>, Vec<&String>) =
                args[2..].iter().partition(|arg| arg.starts_with("--"));
            let flags: Vec<String> = flags.into_iter().cloned().collect();
            let Some(target) = positional.first() else {
                if command == "run" {
                    eprintln!("Usage: virt run <file> [--max-call-depth=N]");
                } else {
                    eprintln!("Usage: virt eval <source> [--max-call-depth=N]");
                }
                std::process::exit(1);
            };
            let options = match RunOptions::parse(&flags) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };

            if command == "run" {
                run_file(target, &options);
            } else {
                eval_inline(target, &options);
            }
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: virt parse <file>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: virt lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Virt {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Virt scripting language");
    println!();
    println!("Usage: virt <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>           Evaluate a file and print its result");
    println!("  eval <source>        Evaluate source given on the command line");
    println!("  parse <file>         Parse and list top-level statements");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --max-call-depth=N   Nested call limit (default: 512)");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing, e.g. RUST_LOG=virt_eval=debug");
    println!();
    println!("Examples:");
    println!("  virt run main.virt");
    println!("  virt eval \"let x = 2; x * 21\"");
    println!("  RUST_LOG=virt_eval=trace virt run main.virt");
}
