//! Javali lexer CLI

use clap::{Parser, Subcommand};
use javali_error::{Diagnostic, DiagnosticRenderer, SourceFile};
use javali_lexer::{normalize_source, tokenize};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "javali")]
#[command(version = "0.1.0")]
#[command(about = "Javali language tokenizer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shows file tokens (debug)
    Lex {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Hide whitespace and comment tokens
        #[arg(long)]
        no_trivia: bool,
    },

    /// Checks for lexical errors without printing tokens
    Check {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Shows the source after Unicode-escape normalization (debug)
    Normalize {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lex { input, no_trivia } => {
            let source = read_source(&input);
            let file = SourceFile::new(input.display().to_string(), &source);

            match tokenize(&source) {
                Ok(tokens) => {
                    let mut total = 0;
                    for token in tokens.iter() {
                        if no_trivia && token.kind.is_trivia() {
                            continue;
                        }
                        let kind_str = format!("{:?}", token.kind);
                        println!(
                            "  {:4}:{:<3}  {:<28}  {}",
                            token.reference.line,
                            token.reference.sequence,
                            kind_str.chars().take(28).collect::<String>(),
                            token
                        );
                        total += 1;
                    }
                    println!("\nTotal: {} tokens", total);
                }
                Err(error) => {
                    report(&file, &error);
                    std::process::exit(1);
                }
            }
        }

        Commands::Check { input } => {
            println!("Checking: {}\n", input.display());

            let source = read_source(&input);
            let file = SourceFile::new(input.display().to_string(), &source);

            match tokenize(&source) {
                Ok(tokens) => {
                    println!("  [ok] Lexer: {} tokens", tokens.len());
                    println!("\nNo errors found!");
                }
                Err(error) => {
                    report(&file, &error);
                    std::process::exit(1);
                }
            }
        }

        Commands::Normalize { input } => {
            let source = read_source(&input);
            let file = SourceFile::new(input.display().to_string(), &source);

            match normalize_source(&source) {
                Ok(normalized) => print!("{}", normalized),
                Err(error) => {
                    report(&file, &error);
                    std::process::exit(1);
                }
            }
        }
    }
}

/// Reads the input file or exits with a message
fn read_source(input: &PathBuf) -> String {
    match fs::read_to_string(input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }
    }
}

/// Renders one lexer error against its source file
fn report(file: &SourceFile, error: &javali_error::LexError) {
    let renderer = DiagnosticRenderer::new(file);
    eprintln!("{}", renderer.render(&Diagnostic::from_lex_error(error)));
}
