use super::load_events;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::event::EventRecord;
use crate::source::open_source;
use crate::ui::messages::{header, info};
use crate::utils::colors::grey;
use crate::utils::date;
use crate::utils::formatting::{italic, truncate, wrap_description};
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        today,
        upcoming,
        past,
        details,
    } = &cli.command
    {
        let today = date::resolve_today(today.as_deref())?;

        let mut source = open_source(cfg, cli.events.as_deref())?;
        let ingested = load_events(source.as_mut())?;

        if ingested.events.is_empty() {
            info("No events found. Be the first to create one!");
            return Ok(());
        }

        let view = Core::build_list_view(&ingested.events, today);

        // Neither flag → both sections.
        let show_upcoming = *upcoming || !*past;
        let show_past = *past || !*upcoming;

        if show_upcoming {
            header(format!("Upcoming events ({})", view.upcoming.len()));
            print_events(&view.upcoming, *details);
        }
        if show_past {
            header(format!("Past events ({})", view.past.len()));
            print_events(&view.past, *details);
        }
    }

    Ok(())
}

fn print_events(events: &[&EventRecord], details: bool) {
    if events.is_empty() {
        println!("{}\n", grey("(none)"));
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("DATE", 12),
        Column::new("NAME", 20),
        Column::new("HOST", 16),
        Column::new("LOCATION", 20),
    ]);

    for ev in events {
        let location = if ev.has_coordinates() {
            truncate(&ev.location_label, 40)
        } else {
            format!("{} (no map)", truncate(&ev.location_label, 36))
        };
        table.add_row(vec![
            ev.id.to_string(),
            date::pretty(ev.date),
            truncate(&ev.name, 40),
            truncate(&ev.host, 30),
            location,
        ]);
    }
    table.fit();
    print!("{}", table.render());

    if details {
        println!();
        for ev in events {
            println!("#{} {}", ev.id, italic(&ev.name));
            println!("{}", wrap_description(&ev.description, 76, "    "));
        }
    }
    println!();
}
