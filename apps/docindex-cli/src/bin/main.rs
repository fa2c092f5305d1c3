use std::env;
use std::path::PathBuf;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use docindex_core::config::{expand_path, Config};
use docindex_core::{Category, EntrySource, Error, IndexEntry};
use docindex_table::{discover_index_files, DocTable, LoadOptions, PayloadFormat};

const USAGE: &str = "Usage: docindex [--index <path>] <list|find|category|search|pages|scan|export> [args...]";

struct Args {
    index: Option<PathBuf>,
    cmd: String,
    rest: Vec<String>,
}

fn parse_args() -> Args {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let mut index = None;
    if args.first().map(String::as_str) == Some("--index") {
        if args.len() < 2 { eprintln!("{}", USAGE); std::process::exit(1); }
        args.remove(0);
        index = Some(expand_path(args.remove(0)));
    }
    if args.is_empty() { eprintln!("{}", USAGE); std::process::exit(1); }
    let cmd = args.remove(0);
    Args { index, cmd, rest: args }
}

fn print_entry(e: &IndexEntry) {
    println!("{:<9} {:<40} {}", e.category, e.location, e.title);
}

fn required<'a>(rest: &'a [String], what: &str) -> &'a str {
    rest.first().map(String::as_str).unwrap_or_else(|| {
        eprintln!("Missing argument: {}\n{}", what, USAGE);
        std::process::exit(1)
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.settings()?;
    let options = LoadOptions::from(&settings);
    let args = parse_args();

    if args.cmd == "scan" {
        let root = PathBuf::from(required(&args.rest, "<dir>"));
        let files = discover_index_files(&root);
        if files.is_empty() { println!("No search index files found under {}.", root.display()); }
        for path in files {
            match DocTable::load_file(&path, &options) {
                Ok(table) => println!("{:>5} entries  {}", table.len(), path.display()),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable index"),
            }
        }
        return Ok(());
    }

    let index_path = match args.index { Some(p) => p, None => config.index_path()? };
    let table = DocTable::load_file(&index_path, &options)?;

    match args.cmd.as_str() {
        "list" => table.iter().for_each(print_entry),
        "find" => {
            let location = required(&args.rest, "<location>");
            match table.find_by_location(location) {
                Ok(e) => {
                    print_entry(e);
                    println!("page: {}", e.page);
                    if !e.text.is_empty() { println!("\n{}", e.text); }
                }
                Err(Error::NotFound(loc)) => { eprintln!("No entry at location '{}'", loc); std::process::exit(1); }
                Err(e) => return Err(e.into()),
            }
        }
        "category" => {
            let category: Category = required(&args.rest, "<page|section|function|type>").parse()?;
            table.filter_by_category(category).into_iter().for_each(print_entry);
        }
        "search" => {
            let query = required(&args.rest, "<substring>");
            let hits = table.text_search(query);
            let limit = settings.search.default_limit;
            if hits.len() > limit {
                println!("Found {} results for: \"{}\" (showing {})", hits.len(), query, limit);
            } else {
                println!("Found {} results for: \"{}\"", hits.len(), query);
            }
            hits.into_iter().take(limit).for_each(print_entry);
        }
        "pages" => {
            for page in table.pages() { println!("{:>5}  {}", table.entries_for_page(page).len(), page); }
        }
        "export" => {
            let out = expand_path(required(&args.rest, "<out>"));
            table.save(&out, PayloadFormat::from_path(&out))?;
            println!("Wrote {} entries to {}", table.len(), out.display());
        }
        _ => { eprintln!("Unknown command: {}\n{}", args.cmd, USAGE); std::process::exit(1); }
    }
    Ok(())
}
