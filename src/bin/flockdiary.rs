//! flockdiary CLI
//!
//! Command-line front end for the diary.

use std::path::PathBuf;
use std::process;

use chrono::{Datelike, Utc, Weekday};
use clap::{Parser, Subcommand};
use flockdiary::manager::UNKNOWN_GROUP_NAME;
use flockdiary::query::{CalendarMonth, DiaryZone, MonthCursor};
use flockdiary::{
    Bird, BirdGroup, Config, DiaryEntry, DiaryError, DiaryManager, EntryFilter, Mood, Result,
    Species, SyncStrategy, TimeWindow,
};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// flockdiary
#[derive(Parser, Debug)]
#[command(name = "flockdiary")]
#[command(about = "Journal for pigeon and chicken keepers")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, env = "FLOCKDIARY_DATA_DIR", default_value = "./flockdiary_data")]
    data_dir: PathBuf,

    /// Which diary to open (pigeon or chicken)
    #[arg(short, long, default_value = "pigeon")]
    species: Species,

    /// Reject entries for groups that don't exist
    #[arg(long)]
    strict: bool,

    /// Time zone for calendar days ("local" or an IANA name like Europe/Berlin)
    #[arg(long, env = "FLOCKDIARY_TIME_ZONE", default_value = "local")]
    time_zone: DiaryZone,

    /// First day of the week (sun, mon, ...)
    #[arg(long, default_value = "sun")]
    week_start: Weekday,

    /// Skip fsync on writes
    #[arg(long)]
    no_sync: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage bird groups
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// Manage birds inside a group
    Bird {
        #[command(subcommand)]
        action: BirdAction,
    },

    /// Manage diary entries
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Show diary-wide and per-group statistics
    Stats,

    /// Show the activity calendar for a month
    Calendar {
        /// Month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<MonthCursor>,
    },

    /// List suggested colors and breeds
    Palette,
}

#[derive(Subcommand, Debug)]
enum GroupAction {
    /// Create a group
    Add {
        /// Group name
        name: String,

        /// Initial birds (repeatable)
        #[arg(short, long = "bird")]
        birds: Vec<String>,
    },

    /// List groups
    List,

    /// Show a group's birds and recent entries
    Show {
        /// Group id or unique id prefix
        group: String,
    },

    /// Rename a group
    Rename {
        /// Group id or unique id prefix
        group: String,

        /// New name
        name: String,
    },

    /// Delete a group and all of its entries
    Delete {
        /// Group id or unique id prefix
        group: String,
    },
}

#[derive(Subcommand, Debug)]
enum BirdAction {
    /// Add a bird to a group
    Add {
        /// Group id or unique id prefix
        group: String,

        /// Bird name
        name: String,

        /// Color (defaults per species)
        #[arg(short, long)]
        color: Option<String>,

        /// Breed (defaults to Unknown)
        #[arg(short, long)]
        breed: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum EntryAction {
    /// Record an entry for today
    Add {
        /// Group id or unique id prefix
        group: String,

        /// very-happy, happy, neutral, sad, very-sad
        #[arg(short, long, default_value = "neutral")]
        mood: Mood,

        /// Chicks or eggs counted
        #[arg(short, long, default_value = "0")]
        offspring: u32,

        /// Free-text notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id or unique id prefix
        entry: String,
    },

    /// List entries, most recent first
    List {
        /// all, today, this-week, this-month
        #[arg(short, long, default_value = "all")]
        filter: TimeWindow,

        /// Restrict to one group
        #[arg(short, long)]
        group: Option<String>,
    },
}

fn main() {
    // Logs go to stderr so they never mix with command output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,flockdiary=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("flockdiary v{}", flockdiary::VERSION);

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .species(args.species)
        .strict_group_refs(args.strict)
        .time_zone(args.time_zone)
        .week_start(args.week_start)
        .sync_strategy(if args.no_sync {
            SyncStrategy::OsBuffered
        } else {
            SyncStrategy::EveryWrite
        })
        .build();

    let mut manager = match DiaryManager::open(config) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Failed to open diary: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&mut manager, args.command) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}

fn run(manager: &mut DiaryManager, command: Commands) -> Result<()> {
    match command {
        Commands::Group { action } => run_group(manager, action),
        Commands::Bird { action } => run_bird(manager, action),
        Commands::Entry { action } => run_entry(manager, action),
        Commands::Stats => {
            print_stats(manager);
            Ok(())
        }
        Commands::Calendar { month } => {
            let cursor = month.unwrap_or_else(|| MonthCursor::containing(manager.rules().day_of(Utc::now())));
            print_calendar(&manager.calendar_month(cursor));
            Ok(())
        }
        Commands::Palette => {
            let species = manager.species();
            println!("Colors: {}", species.colors().join(", "));
            println!("Breeds: {}", species.breeds().join(", "));
            Ok(())
        }
    }
}

fn run_group(manager: &mut DiaryManager, action: GroupAction) -> Result<()> {
    let species = manager.species();

    match action {
        GroupAction::Add { name, birds } => {
            let name = require_name(&name, "group")?;
            let birds = birds
                .iter()
                .map(|bird| require_name(bird, "bird").map(|n| Bird::new(n, species)))
                .collect::<Result<Vec<_>>>()?;

            let group = BirdGroup::with_birds(name, birds);
            let id = group.id;
            manager.add_group(group)?;
            println!("{}", id);
        }
        GroupAction::List => {
            if manager.groups().is_empty() {
                println!("No {} groups yet", species.noun());
            }
            for group in manager.groups() {
                println!(
                    "{}  {}  ({}, created {})",
                    short_id(group.id),
                    group.name,
                    species.count_label(group.bird_count()),
                    manager.rules().day_of(group.date_created).format("%d %B %Y")
                );
            }
        }
        GroupAction::Show { group } => {
            let group_id = resolve_group(manager, &group)?;
            print_group(manager, group_id);
        }
        GroupAction::Rename { group, name } => {
            let group_id = resolve_group(manager, &group)?;
            let name = require_name(&name, "group")?;

            if let Some(existing) = manager.group(group_id) {
                let mut renamed = existing.clone();
                renamed.name = name.to_string();
                manager.update_group(renamed)?;
            }
        }
        GroupAction::Delete { group } => {
            let group_id = resolve_group(manager, &group)?;
            manager.delete_group(group_id)?;
        }
    }

    Ok(())
}

fn run_bird(manager: &mut DiaryManager, action: BirdAction) -> Result<()> {
    match action {
        BirdAction::Add {
            group,
            name,
            color,
            breed,
        } => {
            let group_id = resolve_group(manager, &group)?;
            let name = require_name(&name, "bird")?;

            let mut bird = Bird::new(name, manager.species());
            if let Some(color) = color {
                bird = bird.with_color(color);
            }
            if let Some(breed) = breed {
                bird = bird.with_breed(breed);
            }

            let id = bird.id;
            manager.add_bird_to_group(bird, group_id)?;
            println!("{}", id);
        }
    }

    Ok(())
}

fn run_entry(manager: &mut DiaryManager, action: EntryAction) -> Result<()> {
    match action {
        EntryAction::Add {
            group,
            mood,
            offspring,
            notes,
        } => {
            let group_id = resolve_group(manager, &group)?;
            let entry = DiaryEntry::new(group_id, mood, offspring, notes);
            let id = entry.id;
            manager.add_diary_entry(entry)?;
            println!("{}", id);
        }
        EntryAction::Delete { entry } => {
            let entry_id = resolve_id(manager.entries().iter().map(|e| e.id), &entry, "entry")?;
            manager.delete_diary_entry(entry_id)?;
        }
        EntryAction::List { filter, group } => {
            let mut query = EntryFilter::new(filter);
            if let Some(group) = group {
                query = query.in_group(resolve_group(manager, &group)?);
            }

            let entries = manager.filter_entries(&query, Utc::now());
            if entries.is_empty() {
                println!("{}", filter.empty_message());
            }
            for entry in entries {
                print_entry(manager, entry);
            }
        }
    }

    Ok(())
}

// =============================================================================
// Rendering
// =============================================================================

fn print_group(manager: &DiaryManager, group_id: Uuid) {
    let species = manager.species();
    let Some(group) = manager.group(group_id) else {
        println!("{}", UNKNOWN_GROUP_NAME);
        return;
    };

    println!("{}  ({})", group.name, group.id);
    println!(
        "Created {}",
        manager.rules().day_of(group.date_created).format("%d %B %Y")
    );
    println!();
    println!("{}:", capitalize(&species.count_label(group.bird_count())));
    for bird in &group.birds {
        println!("  {}  {} / {}", bird.name, bird.color, bird.breed);
    }

    println!();
    println!("Recent entries:");
    let entries = manager.entries_for_group(group_id);
    if entries.is_empty() {
        println!("  {}", TimeWindow::All.empty_message());
    }
    for entry in entries.into_iter().take(5) {
        print_entry(manager, entry);
    }
}

fn print_entry(manager: &DiaryManager, entry: &DiaryEntry) {
    let species = manager.species();
    println!(
        "{}  {}  {:<24} {:<10} {}{}",
        short_id(entry.id),
        manager.rules().day_of(entry.date).format("%d %B %Y"),
        manager.group_name_or_placeholder(entry.group_id),
        entry.mood.label(),
        species.offspring_label(entry.offspring_count as u64),
        if entry.notes.is_empty() {
            String::new()
        } else {
            format!("  {}", entry.notes)
        }
    );
}

fn print_stats(manager: &DiaryManager) {
    let species = manager.species();
    let summary = manager.summary();

    if summary.entry_count == 0 {
        println!("No statistics yet! Add some diary entries first.");
        return;
    }

    println!(
        "Total {}s:   {}",
        species.offspring_noun(),
        summary.total_offspring
    );
    println!("Average mood:  {}", summary.average_mood);
    println!("Total entries: {}", summary.entry_count);
    println!("Groups:        {}", summary.group_count);
    println!();

    for stats in manager.all_group_stats() {
        println!(
            "{:<24} {:<12} {:<10} {:<12} {}",
            stats.name,
            species.count_label(stats.bird_count),
            format!("{} entries", stats.entry_count),
            species.offspring_label(stats.total_offspring),
            stats.average_mood
        );
    }
}

fn print_calendar(month: &CalendarMonth) {
    println!("{}", month.cursor);
    println!("{}", month.weekday_headers().join("  "));

    for week in month.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|day| match (day.in_month, day.has_entry) {
                (false, _) => "   ".to_string(),
                (true, true) => format!("{:>2}*", day.date.day()),
                (true, false) => format!("{:>2} ", day.date.day()),
            })
            .collect();
        println!("{}", row.join(" "));
    }

    println!();
    println!("* = entry recorded, {} active day(s)", month.active_day_count());
}

// =============================================================================
// Helpers
// =============================================================================

fn require_name<'a>(name: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DiaryError::InvalidInput(format!("{} name cannot be empty", what)));
    }
    Ok(trimmed)
}

fn resolve_group(manager: &DiaryManager, needle: &str) -> Result<Uuid> {
    resolve_id(manager.groups().iter().map(|g| g.id), needle, "group")
}

/// Accept a full UUID or an unambiguous prefix of one
fn resolve_id(ids: impl Iterator<Item = Uuid>, needle: &str, what: &str) -> Result<Uuid> {
    if let Ok(id) = needle.parse::<Uuid>() {
        return Ok(id);
    }

    let needle = needle.trim().to_ascii_lowercase();
    let matches: Vec<Uuid> = ids
        .filter(|id| id.to_string().starts_with(&needle))
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(DiaryError::InvalidInput(format!("no {} matches '{}'", what, needle))),
        _ => Err(DiaryError::InvalidInput(format!(
            "'{}' matches {} {}s, use more characters",
            needle,
            matches.len(),
            what
        ))),
    }
}

fn short_id(id: Uuid) -> String {
    id.to_string()[..8].to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
