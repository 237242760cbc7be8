use anyhow::{Context, Result};

#[cfg(feature = "colorized_output")]
use console::style;

use xrdview::dataset::PersistedRecord;
use xrdview::reconcile::Reconciler;
use xrdview::remote::RecordStore;

/// Print every remote record
pub fn run<S: RecordStore>(reconciler: &Reconciler<S>) -> Result<()> {
    let records = reconciler
        .fetch_all()
        .context("Failed to list records")?;

    if records.is_empty() {
        println!("No records");
        return Ok(());
    }

    let header = format!(
        "{:>6}  {:<40} {:<16} {:>7}  {}",
        "ID", "Name", "Elements", "Points", "Updated"
    );

    #[cfg(feature = "colorized_output")]
    println!("{}", style(header).bold());

    #[cfg(not(feature = "colorized_output"))]
    println!("{}", header);

    for record in &records {
        println!("{}", format_row(record));
    }

    Ok(())
}

fn format_row(record: &PersistedRecord) -> String {
    let id = format!("{:>6}", record.id().get());

    #[cfg(feature = "colorized_output")]
    let id = style(id).cyan().to_string();

    format!(
        "{}  {:<40} {:<16} {:>7}  {}",
        id,
        record.display_name(),
        record.metadata().element_list(),
        record.series().len(),
        record.updated_at().format("%Y-%m-%d %H:%M:%S")
    )
}
