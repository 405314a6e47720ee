//! stepexpr: Tokenize expressions from the command line.
//!
//! Usage:
//!   stepexpr [--json] <EXPRESSION>...
//!
//! Prints one line per token, or a JSON array per expression with --json.

use std::io::IsTerminal;
use std::process;

use clap::Parser;
use stepexpr_scanner::tokenize;

#[derive(Parser, Debug)]
#[command(name = "stepexpr", about = "Tokenizer for the expression pattern language")]
struct Cli {
    /// Expressions to tokenize.
    #[arg(value_name = "EXPRESSION", required = true)]
    expressions: Vec<String>,

    /// Emit tokens as JSON.
    #[arg(long)]
    json: bool,

    /// Enable colored error output.
    #[arg(long, default_value_t = true)]
    pretty: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const GRAY: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

fn main() {
    let cli = Cli::parse();
    let use_color = cli.pretty && std::io::stderr().is_terminal();

    let mut failed = false;
    for expression in &cli.expressions {
        match tokenize(expression) {
            Ok(tokens) => {
                if cli.json {
                    match serde_json::to_string_pretty(&tokens) {
                        Ok(json) => println!("{}", json),
                        Err(e) => {
                            print_error(&format!("Failed to serialize tokens: {}", e), use_color);
                            failed = true;
                        }
                    }
                } else {
                    if use_color {
                        println!("{}{}{}", GRAY, expression, RESET);
                    } else {
                        println!("{}", expression);
                    }
                    for token in &tokens {
                        println!(
                            "  {:<15} {:>3}..{:<3} {:?}",
                            token.token_type, token.start, token.end, token.text
                        );
                    }
                }
            }
            Err(error) => {
                print_error(&error.to_string(), use_color);
                failed = true;
            }
        }
    }

    if failed {
        process::exit(2);
    }
}

fn print_error(message: &str, use_color: bool) {
    if use_color {
        eprintln!("{}{}{}", RED, message, RESET);
    } else {
        eprintln!("{}", message);
    }
}
