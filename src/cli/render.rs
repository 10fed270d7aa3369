use tabled::{
    Table,
    settings::{Alignment, Style, Width},
};

use crate::{info, types::Entities};

const MAX_TABLE_WIDTH: usize = 180;

/// Renders a result set as a table, `None` when there is nothing to show.
pub fn render(entities: &Entities) -> Option<String> {
    if entities.is_empty() {
        return None;
    }

    let mut table = match entities {
        Entities::Tracks(tracks) => Table::new(tracks),
        Entities::Artists(artists) => Table::new(artists),
        Entities::Albums(albums) => Table::new(albums),
    };
    table
        .with(Style::modern())
        .with(Alignment::center())
        .with(Width::wrap(MAX_TABLE_WIDTH));
    Some(table.to_string())
}

pub fn print_entities(entities: &Entities) {
    match render(entities) {
        Some(table) => println!("{}", table),
        None => info!("Nothing to display."),
    }
}
