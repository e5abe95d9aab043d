use std::fmt;
use std::io;

use flags_core::FlagUrlResolver;
use flags_core::model::{ContinentFilter, Difficulty};
use services::AppServices;
use tracing::info;

mod logging;
mod terminal;

use terminal::{Terminal, parse_difficulty, write_progress, write_study};

const DEFAULT_DB_URL: &str = "sqlite://flags.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDifficulty { raw: String },
    InvalidContinent { raw: String },
    InvalidDbUrl { raw: String },
    ResetNotConfirmed,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDifficulty { raw } => write!(f, "invalid --difficulty value: {raw}"),
            ArgsError::InvalidContinent { raw } => write!(f, "invalid --continent value: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::ResetNotConfirmed => write!(f, "reset erases all progress; pass --yes"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app quiz     [--db <sqlite_url>] [--difficulty <key>] [--continent <name>]");
    eprintln!("  app progress [--db <sqlite_url>]");
    eprintln!("  app reset    [--db <sqlite_url>] --yes");
    eprintln!("  app study    [--continent <name>] [--query <text>]");
    eprintln!();
    eprintln!("  any command accepts --verbose");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  --difficulty easy");
    eprintln!("  --continent All");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  FLAGS_DB_URL, FLAGS_DIFFICULTY, FLAGS_CONTINENT, FLAGS_FLAG_BASE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quiz,
    Progress,
    Reset,
    Study,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "quiz" => Some(Self::Quiz),
            "progress" => Some(Self::Progress),
            "reset" => Some(Self::Reset),
            "study" => Some(Self::Study),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    db_url: String,
    difficulty: Difficulty,
    continent: ContinentFilter,
    query: String,
    flag_base: Option<String>,
    verbose: bool,
    confirmed: bool,
}

impl Args {
    /// Start from environment defaults; unusable values fall back silently.
    fn from_env() -> Self {
        let db_url = std::env::var("FLAGS_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| normalize_sqlite_url(DEFAULT_DB_URL.into()), normalize_sqlite_url);
        let difficulty = std::env::var("FLAGS_DIFFICULTY")
            .ok()
            .and_then(|value| parse_difficulty(&value))
            .unwrap_or_default();
        let continent = std::env::var("FLAGS_CONTINENT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        let flag_base = std::env::var("FLAGS_FLAG_BASE")
            .ok()
            .filter(|value| !value.trim().is_empty());
        Self {
            db_url,
            difficulty,
            continent,
            query: String::new(),
            flag_base,
            verbose: false,
            confirmed: false,
        }
    }

    fn parse(
        mut self,
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match (cmd, arg.as_str()) {
                (_, "--db") => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    self.db_url = normalize_sqlite_url(value);
                }
                (_, "--verbose" | "-v") => self.verbose = true,
                (Command::Quiz, "--difficulty") => {
                    let value = require_value(args, "--difficulty")?;
                    self.difficulty = parse_difficulty(&value)
                        .ok_or(ArgsError::InvalidDifficulty { raw: value })?;
                }
                (Command::Quiz | Command::Study, "--continent") => {
                    let value = require_value(args, "--continent")?;
                    self.continent = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidContinent { raw: value.clone() })?;
                }
                (Command::Study, "--query") => self.query = require_value(args, "--query")?,
                (Command::Reset, "--yes" | "-y") => self.confirmed = true,
                (_, "--help" | "-h") => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if cmd == Command::Reset && !self.confirmed {
            return Err(ArgsError::ResetNotConfirmed);
        }
        Ok(self)
    }

    fn flag_urls(&self) -> FlagUrlResolver {
        self.flag_base
            .as_deref()
            .map_or_else(FlagUrlResolver::default, FlagUrlResolver::new)
    }
}

/// Turn a bare path or `sqlite:` path into an absolute `sqlite://` URL that
/// creates the file on first use.
fn normalize_sqlite_url(raw: String) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.contains("mode=memory") {
        return trimmed.to_string();
    }
    if trimmed.starts_with("sqlite://") {
        return with_create_mode(trimmed.to_string());
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = std::path::Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    with_create_mode(format!("sqlite://{}", absolute.display()))
}

fn with_create_mode(url: String) -> String {
    if url.contains("mode=") {
        url
    } else if url.contains('?') {
        format!("{url}&mode=rwc")
    } else {
        format!("{url}?mode=rwc")
    }
}

fn prepare_sqlite_dir(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = db_url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    if let Some(parent) = std::path::Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);

    let cmd = match argv.next() {
        None => Command::Quiz,
        Some(first) if first == "--help" || first == "-h" => {
            print_usage();
            return Ok(());
        }
        Some(first) => Command::from_arg(&first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            io::Error::new(io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    let parsed = Args::from_env().parse(cmd, &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    logging::init(parsed.verbose);

    match cmd {
        Command::Quiz => {
            let services = open_services(&parsed).await?;
            let quiz = services.quiz_loop();
            let mut session = quiz
                .start_session(parsed.difficulty, parsed.continent)
                .await;
            let stdin = io::stdin();
            let stdout = io::stdout();
            println!("Type :help for commands, :quit to stop.");
            Terminal::new(&quiz, services.flag_urls(), stdin.lock(), stdout.lock())
                .run(&mut session)
                .await?;
        }
        Command::Progress => {
            let snapshot = open_services(&parsed).await?.quiz_loop().progress_snapshot().await;
            write_progress(&mut io::stdout().lock(), &snapshot)?;
        }
        Command::Reset => {
            open_services(&parsed)
                .await?
                .quiz_loop()
                .reset_stored_progress()
                .await;
            println!("All progress and best streaks cleared.");
        }
        Command::Study => {
            // Study reads only the built-in dataset; no database is opened.
            let services = AppServices::in_memory().with_flag_urls(parsed.flag_urls());
            write_study(
                &mut io::stdout().lock(),
                &services.dataset(),
                services.flag_urls(),
                parsed.continent,
                &parsed.query,
            )?;
        }
    }
    Ok(())
}

/// Open + migrate SQLite here so services stay storage-agnostic.
async fn open_services(parsed: &Args) -> Result<AppServices, Box<dyn std::error::Error>> {
    prepare_sqlite_dir(&parsed.db_url)?;
    let services = AppServices::new_sqlite(&parsed.db_url)
        .await?
        .with_flag_urls(parsed.flag_urls());
    info!(db = %parsed.db_url, "storage ready");
    Ok(services)
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flags_core::model::Continent;

    fn defaults() -> Args {
        Args {
            db_url: DEFAULT_DB_URL.into(),
            difficulty: Difficulty::Easy,
            continent: ContinentFilter::All,
            query: String::new(),
            flag_base: None,
            verbose: false,
            confirmed: false,
        }
    }

    fn parse(cmd: Command, args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(ToString::to_string);
        defaults().parse(cmd, &mut iter)
    }

    #[test]
    fn quiz_flags_override_defaults() {
        let args = parse(
            Command::Quiz,
            &["--difficulty", "#beast", "--continent", "south america", "-v"],
        )
        .unwrap();
        assert_eq!(args.difficulty, Difficulty::Beast);
        assert_eq!(args.continent, ContinentFilter::Only(Continent::SouthAmerica));
        assert!(args.verbose);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            parse(Command::Quiz, &["--difficulty", "nightmare"]),
            Err(ArgsError::InvalidDifficulty { .. })
        ));
        assert!(matches!(
            parse(Command::Quiz, &["--continent", "Atlantis"]),
            Err(ArgsError::InvalidContinent { .. })
        ));
        assert!(matches!(
            parse(Command::Quiz, &["--db"]),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            parse(Command::Progress, &["--difficulty", "hard"]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn study_takes_continent_and_query() {
        let args = parse(Command::Study, &["--continent", "Europe", "--query", "land"]).unwrap();
        assert_eq!(args.continent, ContinentFilter::Only(Continent::Europe));
        assert_eq!(args.query, "land");
        assert!(matches!(
            parse(Command::Study, &["--difficulty", "hard"]),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(matches!(
            parse(Command::Quiz, &["--query", "land"]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn flag_base_overrides_default_resolver() {
        let code = flags_core::model::CountryCode::new("fr").unwrap();
        assert_eq!(
            defaults().flag_urls().flag_url(&code, None).unwrap().as_str(),
            "https://flagcdn.com/w320/fr.png"
        );

        let custom = Args {
            flag_base: Some("https://cdn.example.net/flags".into()),
            ..defaults()
        };
        assert_eq!(
            custom.flag_urls().flag_url(&code, None).unwrap().as_str(),
            "https://cdn.example.net/flags/w320/fr.png"
        );
    }

    #[test]
    fn reset_requires_confirmation() {
        assert!(matches!(
            parse(Command::Reset, &[]),
            Err(ArgsError::ResetNotConfirmed)
        ));
        assert!(parse(Command::Reset, &["--yes"]).unwrap().confirmed);
    }

    #[test]
    fn sqlite_urls_are_normalized() {
        assert_eq!(
            normalize_sqlite_url("/tmp/flags.db".into()),
            "sqlite:///tmp/flags.db?mode=rwc"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:/tmp/flags.db".into()),
            "sqlite:///tmp/flags.db?mode=rwc"
        );
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/flags.db?cache=shared".into()),
            "sqlite:///tmp/flags.db?cache=shared&mode=rwc"
        );
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");

        let relative = normalize_sqlite_url("flags.sqlite3".into());
        assert!(relative.starts_with("sqlite:///"));
        assert!(relative.ends_with("/flags.sqlite3?mode=rwc"));
    }
}
