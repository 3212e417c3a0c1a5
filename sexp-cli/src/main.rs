//! Command-line interface for sexp
//! This binary is used to inspect Lisp-family source files: dump the token
//! stream, or classify a cursor offset into its structural contexts.
//!
//! Usage:
//!   sexp `<path>` --tokens [--format `<format>`]     - Dump the token stream
//!   sexp `<path>` --offset `<N>` [--format `<format>`] - Classify a byte offset

use std::io::Read;

use clap::{Arg, ArgAction, Command};
use sexp_analysis::context::determine_contexts;
use sexp_parser::sexp::document::Document;

fn main() {
    let matches = Command::new("sexp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting Lisp-family source and cursor contexts")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the source file, or - for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Dump the token stream")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .short('o')
                .value_parser(clap::value_parser!(usize))
                .help("Byte offset to classify into cursor contexts"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: token-json for --tokens, contexts for --offset)")
                .default_value("auto"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").expect("path is required");
    let format = matches.get_one::<String>("format").expect("format has a default");

    let source = read_source(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    });
    let doc = Document::new(source);

    if matches.get_flag("tokens") {
        handle_tokens_command(&doc, format);
    } else if let Some(offset) = matches.get_one::<usize>("offset") {
        handle_classify_command(&doc, *offset, format);
    } else {
        eprintln!("Nothing to do: pass --tokens or --offset <N>");
        std::process::exit(1);
    }
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Handle the --tokens command
fn handle_tokens_command(doc: &Document, format: &str) {
    match format {
        "auto" | "token-json" => {
            let json = serde_json::to_string_pretty(doc.tokens()).unwrap_or_else(|e| {
                eprintln!("Error formatting tokens: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        "token-simple" => {
            for (token, span) in doc.tokens() {
                println!(
                    "{}..{} {:?} {:?}",
                    span.start,
                    span.end,
                    token.kind(),
                    doc.get_text(span.start, span.end)
                );
            }
        }
        fmt => {
            eprintln!("Format '{}' not supported for token output", fmt);
            eprintln!("Available formats for tokens: token-json, token-simple");
            std::process::exit(1);
        }
    }
}

/// Handle the --offset command
fn handle_classify_command(doc: &Document, offset: usize, format: &str) {
    let contexts = determine_contexts(doc, offset);
    match format {
        "auto" | "contexts" => {
            for context in &contexts {
                println!("{}", context);
            }
        }
        "contexts-json" => {
            let json = serde_json::to_string_pretty(&contexts).unwrap_or_else(|e| {
                eprintln!("Error formatting contexts: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        fmt => {
            eprintln!("Format '{}' not supported for context output", fmt);
            eprintln!("Available formats for contexts: contexts, contexts-json");
            std::process::exit(1);
        }
    }
}
