// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::path::Path;

use relief_ledger::snapshot::{decode_ledger, read_header};

pub fn run(snapshot_path: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(snapshot_path)?;
    let header = read_header(&bytes)?;
    let ledger = decode_ledger(&bytes)?;

    println!("\nRelief Ledger Snapshot");
    println!("----------------------");
    println!(
        "Format:  {} v{} ({} body bytes)",
        std::str::from_utf8(&header.magic).unwrap_or("BAD"),
        header.version,
        header.body_len
    );
    println!("Owner:   {}", ledger.owner());
    println!("Paused:  {}", ledger.is_paused());
    println!(
        "Records: {} stored, counter at {}",
        ledger.records().len(),
        ledger.total_records()
    );
    println!("Events:  {}\n", ledger.journal().committed_height());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Volunteer", "Event", "Task", "Hours", "Period", "Status", "Metadata"]);

    for record in ledger.records().iter() {
        let metadata = record
            .metadata
            .as_deref()
            .map(|m| String::from_utf8_lossy(m).into_owned())
            .unwrap_or_default();
        table.add_row(vec![
            record.id.to_string(),
            record.volunteer.to_string(),
            record.event_id.to_string(),
            record.task_id.to_string(),
            record.hours.to_string(),
            format!("[{}, {})", record.start_time, record.end_time),
            record.status.to_string(),
            metadata,
        ]);
    }

    println!("{table}");

    let events = ledger.journal().committed();
    if !events.is_empty() {
        let mut timeline = Table::new();
        timeline
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["#", "Event"]);
        for (i, event) in events.iter().enumerate() {
            timeline.add_row(vec![i.to_string(), event.event_type().to_string()]);
        }
        println!("\nJournal");
        println!("{timeline}");
    }
    Ok(())
}
