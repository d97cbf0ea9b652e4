use std::borrow::Cow;

use clap::{Parser, Subcommand};

use book_catalog_core::book::{BookMetadata, BookRef};
use book_catalog_core::catalog::Catalog;
use book_catalog_core::config::{config_path, load_config, AppConfig};
use book_catalog_core::language::Language;

#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(about = "Browse the per-language book metadata catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Catalog JSON file overriding the built-in table
    #[arg(long, global = true)]
    catalog: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported languages
    Languages,

    /// List books for a language, optionally filtered to specific refs
    List {
        /// Language code (en, es, fr, de); falls back to config default
        #[arg(short, long)]
        language: Option<String>,

        /// Book refs: a number is a position, anything else an id
        refs: Vec<String>,
    },

    /// Show one book by position or id
    Show {
        /// Language code (en, es, fr, de); falls back to config default
        #[arg(short, long)]
        language: Option<String>,

        /// Book ref: a number is a position, anything else an id
        #[arg(required = true)]
        r#ref: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Initialize default config file
    Init,
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Key (dot-separated path)
        key: String,
        /// Value
        value: String,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = load_config();
    let json = cli.json || cfg.output.json;

    let result = match &cli.command {
        Commands::Languages => run_languages(json),
        Commands::List { language, refs } => {
            run_list(&cli, &cfg, language.as_deref(), refs, json)
        }
        Commands::Show { language, r#ref } => {
            run_show(&cli, &cfg, language.as_deref(), r#ref, json)
        }
        Commands::Config { action } => run_config(action, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type CliError = Box<dyn std::error::Error + Send + Sync>;

/// Pick the catalog: `--catalog` beats `catalog.path` from config beats the
/// built-in table. An unreadable override file is an error, not a silent
/// fallback.
fn open_catalog(cli: &Cli, cfg: &AppConfig) -> Result<Cow<'static, Catalog>, CliError> {
    let path = cli.catalog.as_deref().or(cfg.catalog.path.as_deref());
    match path {
        Some(p) => Ok(Cow::Owned(Catalog::from_json_file(p)?)),
        None => Ok(Cow::Borrowed(Catalog::builtin())),
    }
}

fn resolve_language(arg: Option<&str>, cfg: &AppConfig) -> Result<Language, CliError> {
    let code = arg
        .or(cfg.catalog.default_language.as_deref())
        .ok_or("No language given (pass --language or set catalog.default_language)")?;
    Ok(code.parse::<Language>()?)
}

fn run_languages(json: bool) -> Result<(), CliError> {
    if json {
        let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        println!("{}", serde_json::to_string_pretty(&codes)?);
    } else {
        for lang in Language::ALL {
            println!("{}  {}", lang.code(), lang.name());
        }
    }
    Ok(())
}

fn run_list(
    cli: &Cli,
    cfg: &AppConfig,
    language: Option<&str>,
    refs: &[String],
    json: bool,
) -> Result<(), CliError> {
    let catalog = open_catalog(cli, cfg)?;
    let language = resolve_language(language, cfg)?;

    let refs: Option<Vec<BookRef>> = if refs.is_empty() {
        None
    } else {
        Some(refs.iter().map(|s| BookRef::parse(s)).collect())
    };
    let books = catalog.get_all_books(language, refs.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
    } else {
        for (i, book) in books.iter().enumerate() {
            println!("{:3}  {:24}  {}", i, book.id, book.title);
        }
    }
    Ok(())
}

fn run_show(
    cli: &Cli,
    cfg: &AppConfig,
    language: Option<&str>,
    r#ref: &str,
    json: bool,
) -> Result<(), CliError> {
    let catalog = open_catalog(cli, cfg)?;
    let language = resolve_language(language, cfg)?;

    let book = catalog
        .get_book(language, BookRef::parse(r#ref))
        .ok_or_else(|| format!("No book '{}' in language '{}'", r#ref, language))?;

    if json {
        println!("{}", serde_json::to_string_pretty(book)?);
    } else {
        print_book(book);
    }
    Ok(())
}

fn print_book(book: &BookMetadata) {
    println!("Id: {}", book.id);
    println!("Title: {}", book.title);
    if !book.authors.is_empty() {
        println!("Authors: {}", book.authors.join(", "));
    }
    if let Some(year) = book.year {
        println!("Year: {}", year);
    }
    if let Some(desc) = &book.description {
        println!("Description: {}", desc);
    }
}

fn run_config(action: &ConfigAction, json: bool) -> Result<(), CliError> {
    match action {
        ConfigAction::Init => {
            let path = config_path().ok_or("Could not determine config directory")?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let default_cfg = AppConfig::default();
            let toml = toml::to_string_pretty(&default_cfg)?;
            std::fs::write(&path, toml)?;
            println!("Wrote default config to {}", path.display());
        }
        ConfigAction::Show => {
            let cfg = load_config();
            if json {
                println!("{}", serde_json::to_string_pretty(&cfg)?);
            } else {
                println!("{}", toml::to_string_pretty(&cfg)?);
            }
        }
        ConfigAction::Set { key, value } => {
            let path = config_path().ok_or("Could not determine config directory")?;
            let mut cfg: AppConfig = if path.exists() {
                let s = std::fs::read_to_string(&path)?;
                toml::from_str(&s).unwrap_or_else(|_| AppConfig::default())
            } else {
                AppConfig::default()
            };

            set_config_key(&mut cfg, key, value)?;

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let toml = toml::to_string_pretty(&cfg)?;
            std::fs::write(&path, toml)?;
            if !json {
                println!("Updated {}", key);
            }
        }
    }
    Ok(())
}

fn set_config_key(cfg: &mut AppConfig, key: &str, value: &str) -> Result<(), CliError> {
    let parts: Vec<&str> = key.splitn(2, '.').collect();
    match parts.as_slice() {
        ["catalog", sub] => match *sub {
            "path" => cfg.catalog.path = Some(value.to_string()),
            "default_language" => {
                value.parse::<Language>()?;
                cfg.catalog.default_language = Some(value.to_string());
            }
            _ => return Err(format!("Unknown key: {}", key).into()),
        },
        ["output", sub] => match *sub {
            "json" => {
                cfg.output.json = value
                    .parse()
                    .map_err(|_| format!("Not a boolean: {}", value))?;
            }
            _ => return Err(format!("Unknown key: {}", key).into()),
        },
        _ => return Err(format!("Unknown key: {}", key).into()),
    }
    Ok(())
}
