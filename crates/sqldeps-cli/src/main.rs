//! sqldeps CLI - object-name extraction for SQL batches

mod args;
mod config;
mod output;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use sqldeps_core::{CaseFoldingStream, Extractor, PlSqlDialect};

use crate::args::{Args, Command, OutputFormat};
use crate::config::Config;
use crate::output::OutputFormatter;

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing; -v raises the default level
    let default_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    match run(args) {
        Ok(has_errors) => {
            if has_errors {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args) -> Result<bool> {
    let quiet = args.quiet;

    match args.command {
        Command::Extract {
            files,
            config: config_path,
            format,
        } => {
            // Load configuration
            let config = if let Some(path) = config_path {
                Config::from_file(&path)?
            } else {
                Config::find_and_load()?.unwrap_or_default()
            };

            // Merge CLI args with config (CLI takes precedence)
            let config = config.merge_with_args(&files, &format);

            // Expand glob patterns
            let mut sql_files: Vec<PathBuf> = Vec::new();
            for pattern in &config.files {
                if pattern.contains('*') {
                    for path in glob::glob(pattern).into_diagnostic()?.flatten() {
                        sql_files.push(path);
                    }
                } else {
                    sql_files.push(PathBuf::from(pattern));
                }
            }

            if sql_files.is_empty() {
                miette::bail!(
                    "No SQL files specified. Use positional arguments or configure in sqldeps.toml"
                );
            }

            // Determine output format
            let output_format = match config.format.as_deref() {
                Some("json") => OutputFormat::Json,
                _ => OutputFormat::Human,
            };

            // Extract from each file; a batch that fails to parse is
            // reported and counted, the remaining files still run
            let extractor = Extractor::new();
            let mut failed = 0usize;
            for sql_file in &sql_files {
                let content = fs::read_to_string(sql_file).into_diagnostic()?;
                match extractor.extract(&content) {
                    Ok(names) => {
                        let formatter =
                            OutputFormatter::new(output_format, sql_file.display().to_string());
                        formatter.print_names(&names);
                    }
                    Err(e) => {
                        failed += 1;
                        eprintln!("{}: {}", sql_file.display(), e);
                    }
                }
            }

            // Print summary
            if !quiet {
                if failed > 0 {
                    eprintln!();
                    eprintln!("Failed to parse {} of {} file(s)", failed, sql_files.len());
                } else {
                    eprintln!("Scanned {} file(s)", sql_files.len());
                }
            }

            Ok(failed > 0)
        }

        Command::Parse { file } => {
            // Parse and display AST (for debugging); the folded view is
            // parsed so the dump matches what extraction sees
            let content = fs::read_to_string(&file).into_diagnostic()?;

            use sqlparser::parser::Parser;

            let mut stream = CaseFoldingStream::new(&content);
            let folded = stream.folded_text();
            match Parser::parse_sql(&PlSqlDialect, &folded) {
                Ok(statements) => {
                    for (i, stmt) in statements.iter().enumerate() {
                        println!("Statement {}:", i + 1);
                        println!("{:#?}", stmt);
                        println!();
                    }
                }
                Err(e) => {
                    eprintln!("Parse error: {}", e);
                    return Ok(true);
                }
            }

            Ok(false)
        }
    }
}
