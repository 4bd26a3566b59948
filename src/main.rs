use clap::Parser;
use moodlog::application::{
    ConfigService, InitService, MoodSession, Notice, NoticeLevel, SystemClock,
};
use moodlog::cli::output::format_date;
use moodlog::cli::{format_entry_page, format_notice, format_stats, format_today, Cli, Commands};
use moodlog::domain::{MoodLevel, Window};
use moodlog::error::MoodError;
use moodlog::infrastructure::{FileSystemRepository, JsonFileStore, TextChart, TrackerRepository};
use moodlog::logging;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() {
    if let Err(e) = logging::init_logging(&logging::log_spec()) {
        eprintln!("Warning: {:#}", e);
    }

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_session() -> Result<MoodSession<JsonFileStore, SystemClock>, MoodError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    Ok(MoodSession::with_config(
        repo.entry_store(),
        SystemClock,
        &config,
    ))
}

fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.level {
            NoticeLevel::Error => eprintln!("{}", format_notice(notice)),
            _ => println!("{}", format_notice(notice)),
        }
    }
}

fn confirm_clear() -> bool {
    print!("Are you sure you want to clear all mood data? This action cannot be undone. [y/N] ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn run(cli: Cli) -> Result<(), MoodError> {
    match cli.command {
        Some(Commands::Init { path, page_size }) => {
            InitService::execute(&path, page_size)?;
            println!("Initialized moodlog tracker at {}", path.display());
            Ok(())
        }
        Some(Commands::Log {
            mood,
            activities,
            note,
        }) => {
            let level: MoodLevel = mood.parse()?;
            let mut session = open_session()?;

            session.select_mood(level);
            for tag in &activities {
                session.toggle_activity(tag);
            }
            if let Some(note) = note {
                session.set_note(&note);
            }

            let refresh = session.save()?;
            print_notices(&refresh.notices);
            print!("{}", format_today(refresh.dashboard.today_entry.as_ref()));
            Ok(())
        }
        Some(Commands::Skip) => {
            let mut session = open_session()?;
            match session.skip() {
                Ok(refresh) => {
                    print_notices(&refresh.notices);
                    Ok(())
                }
                Err(e) if e.is_informational() => {
                    print_notices(&session.take_notices());
                    println!("{}", e);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        Some(Commands::Today) => {
            let mut session = open_session()?;
            let refresh = session.refresh();
            print_notices(&refresh.notices);
            println!("{}", format_date(refresh.dashboard.today));
            print!("{}", format_today(refresh.dashboard.today_entry.as_ref()));
            Ok(())
        }
        Some(Commands::Stats) => {
            let mut session = open_session()?;
            let refresh = session.refresh();
            print_notices(&refresh.notices);
            print!("{}", format_stats(&refresh.dashboard, &TextChart::default()));
            Ok(())
        }
        Some(Commands::List { window, page }) => {
            if page == 0 {
                return Err(MoodError::Config(
                    "Page numbers start at 1".to_string(),
                ));
            }

            let mut session = open_session()?;
            if let Some(window) = window {
                session.set_window(window.parse::<Window>()?);
            }
            let page = session.page(page - 1);
            print_notices(&session.take_notices());
            print!("{}", format_entry_page(&page));
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let mut session = open_session()?;
            let export = session.export_snapshot()?;
            print_notices(&session.take_notices());

            let dir = match output {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            if !dir.exists() {
                fs::create_dir_all(&dir)?;
            }
            let path: PathBuf = dir.join(&export.filename);
            fs::write(&path, export.contents)?;

            println!("Data exported to {}", path.display());
            Ok(())
        }
        Some(Commands::Clear { yes }) => {
            let mut session = open_session()?;
            match session.clear_all(|| yes || confirm_clear()) {
                Some(refresh) => {
                    if !yes {
                        println!();
                    }
                    print_notices(&refresh.notices);
                }
                None => println!("\nCancelled"),
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("page_size = {}", config.page_size);
                println!("default_window = {}", config.default_window);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodlog config [--list | <key> [<value>]]");
                println!("Valid keys: page_size, default_window, created");
                Ok(())
            }
        }
        None => {
            println!("moodlog - Terminal mood journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
