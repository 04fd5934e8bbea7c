//! Teas command for listing the catalog.

use std::io::Write;

use anyhow::Result;
use hgtea_core::{Filter, Tea};
use hgtea_db::TeaDb;

/// One-line summary of a tea, e.g. `1: Assam Breakfast (Black) [stocked]`.
pub fn format_tea_line(tea: &Tea) -> String {
    let mut line = format!("{}: {}", tea.id, tea.name);
    if !tea.kind.is_empty() {
        line.push_str(&format!(" ({})", tea.kind));
    }
    if tea.storage.stocked {
        line.push_str(" [stocked]");
    }
    if tea.is_sample() {
        line.push_str(" [sample]");
    }
    line
}

pub fn run<W: Write>(writer: &mut W, db: &TeaDb, filter: &Filter) -> Result<()> {
    let mut teas: Vec<Tea> = db.teas(filter)?.into_values().collect();
    teas.sort_by_key(|tea| tea.id);

    if teas.is_empty() {
        writeln!(writer, "No matching teas.")?;
        return Ok(());
    }

    for tea in &teas {
        writeln!(writer, "{}", format_tea_line(tea))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn make_db() -> TeaDb {
        let mut assam = Tea::new(1, "Assam Breakfast");
        assam.kind = "Black".to_string();
        assam.storage.stocked = true;

        let mut sencha = Tea::new(2, "Sencha");
        sencha.kind = "Green".to_string();
        sencha.size = "25g sample".to_string();

        let mut jasmine = Tea::new(3, "Jasmine Pearls");
        jasmine.kind = "green".to_string();
        jasmine.storage.stocked = true;

        TeaDb::builder()
            .tea(jasmine)
            .tea(assam)
            .tea(sencha)
            .build()
            .unwrap()
    }

    fn render(db: &TeaDb, filter: &Filter) -> String {
        let mut output = Vec::new();
        run(&mut output, db, filter).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn teas_lists_all_sorted_by_id() {
        let output = render(&make_db(), &Filter::new());
        assert_snapshot!(output, @r"
        1: Assam Breakfast (Black) [stocked]
        2: Sencha (Green) [sample]
        3: Jasmine Pearls (green) [stocked]
        ");
    }

    #[test]
    fn teas_applies_filter() {
        let mut filter = Filter::new();
        filter.stocked_only().with_type("GREEN");
        let output = render(&make_db(), &filter);
        assert_eq!(output, "3: Jasmine Pearls (green) [stocked]\n");
    }

    #[test]
    fn teas_reports_empty_result() {
        let mut filter = Filter::new();
        filter.with_type("white");
        let output = render(&make_db(), &filter);
        assert_eq!(output, "No matching teas.\n");
    }
}
