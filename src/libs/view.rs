use super::week::FormattedWeek;
use crate::libs::messages::Message;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the week table: one row per day and a closing total row.
    pub fn week_table(week: &FormattedWeek) -> Table {
        let mut table = Table::new();

        table.add_row(row!["DAY", "IN", "OUT", "WORKED"]);
        for day in &week.days {
            table.add_row(row![day.day, or_dash(&day.in_time), or_dash(&day.out_time), day.duration]);
        }
        table.add_row(row!["", "", "TOTAL", week.total]);

        table
    }

    pub fn week(week: &FormattedWeek) {
        println!("\n{}", Message::WeekHeader);
        Self::week_table(week).printstd();
    }
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}
