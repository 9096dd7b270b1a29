use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::geocode::{LocationResolver, NominatimResolver};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search { query, limit } = cmd {
        let resolver = NominatimResolver::from_config(cfg)?;
        let candidates = resolver.resolve(query, limit.unwrap_or(cfg.resolver_limit))?;

        let mut table = Table::new(vec![
            Column::new("#", 2),
            Column::new("LATITUDE", 10),
            Column::new("LONGITUDE", 11),
            Column::new("PLACE", 20),
        ]);
        for (i, c) in candidates.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                format!("{:.5}", c.coordinate.latitude()),
                format!("{:.5}", c.coordinate.longitude()),
                c.label.clone(),
            ]);
        }
        table.fit();
        print!("{}", table.render());
    }

    Ok(())
}
