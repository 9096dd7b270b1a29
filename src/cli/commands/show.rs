use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventRecord;
use crate::source::open_source;
use crate::utils::colors::grey;
use crate::utils::date;
use crate::utils::formatting::{bold, wrap_description};

/// Print the detail block of a single event.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = &cli.command {
        let mut source = open_source(cfg, cli.events.as_deref())?;
        let raw = source.fetch_one(*id)?.ok_or(AppError::EventNotFound(*id))?;
        let ev = EventRecord::try_from(raw)?;

        print_event(&ev);
    }

    Ok(())
}

fn print_event(ev: &EventRecord) {
    let position = match ev.coordinates {
        Some(c) => format!(" ({})", c),
        None => format!(" {}", grey("(no map position)")),
    };

    println!("{}", bold(&ev.name));
    println!("Hosted by {}", ev.host);
    println!();
    println!("📅 Date     : {}", date::long(ev.date));
    println!("📍 Location : {}{}", ev.location_label, position);
    println!();
    println!("{}", bold("About this event"));
    println!("{}", wrap_description(&ev.description, 76, "  "));
}
