use chrono::{Datelike, Local, NaiveDate, Utc};
use clap::Parser;
use daystory::application::write_entry::{StyleAction, WriteEntryService};
use daystory::application::{browse, init, ConfigService};
use daystory::cli::{self, Cli, Commands};
use daystory::domain::date_ref::parse_year_month;
use daystory::domain::{DateRef, EntryDraft, FontSize, Selection};
use daystory::error::DaystoryError;
use daystory::infrastructure::FileSystemStore;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("DAYSTORY_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn resolve_date(input: &str) -> Result<NaiveDate, DaystoryError> {
    Ok(DateRef::parse(input)?.resolve(today()))
}

fn run(cli: Cli) -> Result<(), DaystoryError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemStore::discover()?);

            if list {
                let config = service.list()?;
                println!("font_size = {}", config.font_size);
                println!("highlight_color = {}", config.highlight_color);
                println!("ads_removed = {}", config.ads_removed);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: daystory config [--list | <key> [<value>]]");
                println!("Valid keys: font_size, highlight_color, ads_removed, created");
            }
            Ok(())
        }
        Commands::Write {
            text,
            date,
            tags,
            images,
            font_size,
        } => {
            let store = FileSystemStore::discover()?;
            let config = store.load_config()?;
            let date = resolve_date(&date)?;
            let font_size = match font_size {
                Some(size) => size.parse::<FontSize>()?,
                None => config.font_size,
            };

            let draft = EntryDraft::new(text)
                .with_tags(tags.iter().map(String::as_str))
                .with_images(images)
                .with_font_size(font_size);
            if draft.tags.len() < tags.len() {
                eprintln!("Note: kept tags {:?} (max 3, duplicates dropped)", draft.tags.as_slice());
            }

            let mut service = WriteEntryService::new(store);
            let id = service.write(date, Utc::now().timestamp_millis(), draft)?;
            println!("Saved entry {} for {}", id, date.format("%Y-%m-%d"));
            Ok(())
        }
        Commands::Edit { id, text } => {
            let mut service = WriteEntryService::new(FileSystemStore::discover()?);
            service.edit_text(&id, &text)?;
            println!("Updated entry {}", id);
            Ok(())
        }
        Commands::Highlight {
            id,
            start,
            end,
            color,
        } => {
            let store = FileSystemStore::discover()?;
            let color = match color {
                Some(color) => color.trim().to_lowercase(),
                None => store.load_config()?.highlight_color,
            };
            apply_style(store, &id, Selection::new(start, end), StyleAction::Highlight { color })
        }
        Commands::Unhighlight { id, start, end } => apply_style(
            FileSystemStore::discover()?,
            &id,
            Selection::new(start, end),
            StyleAction::ClearHighlight,
        ),
        Commands::Strike { id, start, end } => apply_style(
            FileSystemStore::discover()?,
            &id,
            Selection::new(start, end),
            StyleAction::ToggleStrikethrough,
        ),
        Commands::Show { date } => {
            let store = FileSystemStore::discover()?;
            let summary = browse::day_summary(&store, resolve_date(&date)?)?;
            println!("{}", cli::format_day(&summary).trim_end());
            Ok(())
        }
        Commands::Recent => {
            let store = FileSystemStore::discover()?;
            let days = browse::recent_days(&store, today())?;
            print!("{}", cli::format_recent(&days));
            Ok(())
        }
        Commands::Month { month, selected } => {
            let store = FileSystemStore::discover()?;
            let (year, month) = match month {
                Some(m) => parse_year_month(&m)?,
                None => (today().year(), today().month()),
            };
            let selected = selected.as_deref().map(resolve_date).transpose()?;
            let view = browse::month_view(&store, year, month, selected, today())?;
            print!("{}", cli::format_month(&view));
            Ok(())
        }
        Commands::Week { date } => {
            let week = browse::week_view(resolve_date(&date)?, today());
            print!("{}", cli::format_week(&week));
            Ok(())
        }
        Commands::OnThisDay { date } => {
            let store = FileSystemStore::discover()?;
            let sections = browse::on_this_day(&store, resolve_date(&date)?)?;
            println!("{}", cli::format_collection(&sections).trim_end());
            Ok(())
        }
        Commands::Wipe { yes } => {
            if !yes {
                println!("This deletes every entry. Re-run with --yes to confirm.");
                return Ok(());
            }
            let mut service = WriteEntryService::new(FileSystemStore::discover()?);
            service.wipe()?;
            println!("All entries deleted");
            Ok(())
        }
    }
}

fn apply_style(
    store: FileSystemStore,
    id: &str,
    selection: Selection,
    action: StyleAction,
) -> Result<(), DaystoryError> {
    let mut service = WriteEntryService::new(store);
    if service.style(id, selection, &action)? {
        println!("Updated entry {}", id);
    } else {
        println!("Nothing to do: selection is empty or past the end of the text");
    }
    Ok(())
}
