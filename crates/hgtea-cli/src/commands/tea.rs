//! Tea command for showing a single catalog record.

use std::io::Write;

use anyhow::Result;
use hgtea_core::Tea;
use hgtea_db::TeaDb;

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn write_ratings<W: Write>(writer: &mut W, tea: &Tea) -> Result<()> {
    match (tea.average(), tea.median(), tea.mode()) {
        (Some(average), Some(median), Some(mode)) => writeln!(
            writer,
            "Rating: average {average:.2}, median {median:.1}, mode {mode}"
        )?,
        _ => writeln!(writer, "Rating: no sessions")?,
    }
    Ok(())
}

pub fn run<W: Write>(writer: &mut W, db: &TeaDb, id: i64) -> Result<()> {
    let tea = db.tea(id)?;

    writeln!(writer, "#{} {}", tea.id, tea.name)?;
    writeln!(writer, "Type: {}", tea.kind)?;
    writeln!(writer, "Picked: {} ({})", tea.picked.year, tea.picked.flush)?;
    writeln!(
        writer,
        "Origin: {}, {}",
        tea.origin.region, tea.origin.country
    )?;
    writeln!(
        writer,
        "Stocked: {}, aging: {}",
        yes_no(tea.storage.stocked),
        yes_no(tea.storage.aging)
    )?;
    writeln!(
        writer,
        "Purchased: {} on {} for {:.2}",
        tea.purchased.location, tea.purchased.date, tea.purchased.price
    )?;
    writeln!(writer, "Size: {}", tea.size)?;
    writeln!(writer, "Leaf grade: {}", tea.leaf_grade)?;
    writeln!(writer, "Sessions: {}", tea.entries().len())?;
    write_ratings(writer, tea)?;

    Ok(())
}
