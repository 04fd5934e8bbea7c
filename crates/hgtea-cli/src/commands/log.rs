//! Log command for printing sessions in time order.

use std::io::Write;

use anyhow::Result;
use hgtea_core::parse::{format_date, format_steep_time, format_time};
use hgtea_core::{Entry, Filter};
use hgtea_db::TeaDb;

/// One-line summary of a session.
///
/// Example: `1/02/2009 0800  #1 Assam Breakfast  rating 3  steep 4m 20s`
pub fn format_entry_line(db: &TeaDb, entry: &Entry) -> String {
    let tea_name = db
        .tea(entry.tea)
        .map_or("(unknown tea)", |tea| tea.name.as_str());

    let mut line = format!(
        "{} {}  #{} {}  rating {}  steep {}",
        format_date(&entry.date_time),
        format_time(&entry.date_time),
        entry.tea,
        tea_name,
        entry.rating,
        format_steep_time(&entry.steep_time),
    );
    if !entry.fixins.is_empty() {
        line.push_str("  with ");
        line.push_str(&entry.fixins.join(", "));
    }
    line
}

pub fn run<W: Write>(writer: &mut W, db: &TeaDb, filter: &Filter) -> Result<()> {
    let entries = db.log(Some(filter))?;

    if entries.is_empty() {
        writeln!(writer, "No sessions logged.")?;
        return Ok(());
    }

    for entry in entries {
        writeln!(writer, "{}", format_entry_line(db, entry))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{DateTime, Utc};
    use hgtea_core::Tea;
    use insta::assert_snapshot;

    fn make_entry(tea: i64, date: &str, time: &str, steep: &str) -> Entry {
        let mut entry = Entry::new(tea, DateTime::<Utc>::UNIX_EPOCH);
        entry.parse_date_time(date, time).unwrap();
        entry.parse_steep_time(steep).unwrap();
        entry.rating = 3;
        entry
    }

    fn make_db() -> TeaDb {
        let mut assam = Tea::new(1, "Assam Breakfast");
        assam.kind = "Black".to_string();
        assam.storage.stocked = true;
        let mut sencha = Tea::new(2, "Sencha");
        sencha.kind = "Green".to_string();

        let mut milky = make_entry(1, "1/03/2009", "0715", "4m 20s");
        milky.fixins = vec!["Milk".to_string(), "Sugar".to_string()];

        TeaDb::builder()
            .tea(assam)
            .tea(sencha)
            .entry(milky)
            .entry(make_entry(2, "1/02/2009", "1830", "1m 30s"))
            .entry(make_entry(9, "12/31/2008", "2359", "3m"))
            .build()
            .unwrap()
    }

    fn render(db: &TeaDb, filter: &Filter) -> String {
        let mut output = Vec::new();
        run(&mut output, db, filter).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn log_prints_oldest_first() {
        let output = render(&make_db(), &Filter::new());
        assert_snapshot!(output, @r"
        12/31/2008 2359  #9 (unknown tea)  rating 3  steep 3m
        1/02/2009 1830  #2 Sencha  rating 3  steep 1m 30s
        1/03/2009 0715  #1 Assam Breakfast  rating 3  steep 4m 20s  with Milk, Sugar
        ");
    }

    #[test]
    fn log_filter_drops_other_teas() {
        let mut filter = Filter::new();
        filter.with_type("green");
        let output = render(&make_db(), &filter);
        assert_eq!(output, "1/02/2009 1830  #2 Sencha  rating 3  steep 1m 30s\n");
    }

    #[test]
    fn log_reports_empty_result() {
        let db = TeaDb::builder().build().unwrap();
        assert_eq!(render(&db, &Filter::new()), "No sessions logged.\n");
    }
}
