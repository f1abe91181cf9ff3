use crate::output::{print_json, print_table, Align};
use crate::settings::Settings;
use anyhow::Context;
use boost_core::StateStore;
use chrono::{DateTime, Utc};

/// Print the persisted state without modifying it.
pub fn run(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let store = StateStore::new(&settings.state_file);
    let doc = store
        .load()
        .with_context(|| format!("failed to load {}", store.path().display()))?;

    if json {
        return print_json(&doc);
    }

    let now = Utc::now().timestamp() as f64;

    println!("State file: {}", store.path().display());
    println!(
        "Cursor: {}",
        doc.last_event_id
            .as_ref()
            .map(|c| c.as_str())
            .unwrap_or("none")
    );

    println!("\nRate limits ({}):", doc.last_action_per_actor.len());
    if !doc.last_action_per_actor.is_empty() {
        let rows: Vec<Vec<String>> = doc
            .last_action_per_actor
            .iter()
            .map(|(actor, ts)| vec![actor.clone(), format_ts(*ts), format_age(now - ts)])
            .collect();
        print_table(
            &[
                ("ACCOUNT", Align::Left),
                ("LAST BOOST (UTC)", Align::Left),
                ("AGE", Align::Right),
            ],
            &rows,
        );
    }

    println!("\nBoosted statuses ({}):", doc.acted_item_ids.len());
    if !doc.acted_item_ids.is_empty() {
        let rows: Vec<Vec<String>> = doc
            .acted_item_ids
            .iter()
            .map(|(item, ts)| vec![item.clone(), format_ts(*ts), format_age(now - ts)])
            .collect();
        print_table(
            &[
                ("STATUS", Align::Left),
                ("BOOSTED AT (UTC)", Align::Left),
                ("AGE", Align::Right),
            ],
            &rows,
        );
    }

    Ok(())
}

fn format_ts(ts: f64) -> String {
    DateTime::<Utc>::from_timestamp(ts as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| format!("{ts}"))
}

fn format_age(secs: f64) -> String {
    let secs = secs.max(0.0) as u64;
    match secs {
        s if s < 60 => format!("{s}s"),
        s if s < 3600 => format!("{}m", s / 60),
        s => format!("{}h{:02}m", s / 3600, (s % 3600) / 60),
    }
}
