//! # chatsift CLI
//!
//! Command-line interface for the chatsift library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatsift::archive::load_transcript;
use chatsift::cli::{Args, OutputFormat};
use chatsift::config::ParserConfig;
use chatsift::directory::primary_participant;
use chatsift::output::{to_text, write_json};
use chatsift::parsing::parse_transcript;
use chatsift::summary::summarize;
use chatsift::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = <Args as ClapParser>::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    println!("💬 chatsift v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if let Some(ref output) = args.output {
        println!("💾 Output:  {}", output);
    }
    println!("📄 Format:  {}", args.format);
    println!();

    // Step 1: Load (reads .txt directly, extracts from .zip)
    let load_start = Instant::now();
    let loaded = load_transcript(Path::new(&args.input))?;
    println!(
        "📖 Loaded \"{}\" ({} bytes, {:.2}s)",
        loaded.label,
        loaded.text.len(),
        load_start.elapsed().as_secs_f64()
    );

    // Step 2: Parse
    let config = ParserConfig::new().with_filter_notices(!args.keep_notices);
    let parse_start = Instant::now();
    let outcome = parse_transcript(&loaded.text, &config);
    println!(
        "   Found {} messages ({:.2}s)",
        outcome.messages.len(),
        parse_start.elapsed().as_secs_f64()
    );

    // Step 3: Write output in selected format
    let rendered = match args.format {
        OutputFormat::Json => None, // written below, straight to file or stdout
        OutputFormat::Text => Some(to_text(&outcome.messages)),
    };

    match args.output {
        Some(ref path) => {
            match rendered {
                Some(text) => std::fs::write(path, text)?,
                None => write_json(&outcome.messages, path.as_ref())?,
            }
            println!("✅ Written to {}", path);
        }
        None => {
            println!();
            match rendered {
                Some(text) => print!("{}", text),
                None => println!("{}", chatsift::output::to_json(&outcome.messages)?),
            }
        }
    }

    // Step 4: Summary
    if args.summary {
        let summary = summarize(&outcome.messages);
        println!();
        println!("📊 Summary:");
        println!("   Messages:  {}", summary.total_messages);
        println!(
            "   Senders:   {} ({})",
            summary.unique_senders,
            outcome.senders.join(", ")
        );
        if let Some(primary) = primary_participant(&outcome.senders) {
            println!("   Primary:   {}", primary);
        }
        println!("   Media:     {}", summary.media_messages);
        if let (Some(first), Some(last)) = (summary.first_timestamp, summary.last_timestamp) {
            println!("   Range:     {} → {}", first, last);
        }
        println!();
        println!(
            "   Lines: {} processed, {} matched, {} notices suppressed, {} dropped",
            outcome.stats.lines_processed,
            outcome.stats.lines_matched,
            outcome.stats.notices_filtered,
            outcome.stats.timestamp_failures + outcome.stats.orphan_lines
        );
    }

    Ok(())
}
