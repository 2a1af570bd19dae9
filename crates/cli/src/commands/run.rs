// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::path::Path;
use std::sync::Arc;

use relief_ledger::verify::to_hex;
use relief_node::collaborators::{ReviewSink, TaskBoard};
use relief_node::config::NodeConfig;
use relief_node::script::{Script, ScriptRunner, StepOutcome};
use relief_node::service::LedgerService;
use relief_node::telemetry::render_metrics;

/// Replays `script_path` and prints one row per step. With `show_metrics`
/// the Prometheus exposition follows the table.
pub async fn run(
    script_path: &Path,
    mut cfg: NodeConfig,
    snapshot_out: Option<&Path>,
    show_metrics: bool,
) -> anyhow::Result<()> {
    execute(script_path, &mut cfg, snapshot_out).await?;
    if show_metrics {
        println!("\n{}", render_metrics());
    }
    Ok(())
}

/// Same as `run`, returning the per-step outcomes. A script `owner` overrides
/// `cfg.owner`. The snapshot goes to `snapshot_out`, or to
/// `cfg.snapshot_path` when no output is given.
pub async fn execute(
    script_path: &Path,
    cfg: &mut NodeConfig,
    snapshot_out: Option<&Path>,
) -> anyhow::Result<Vec<StepOutcome>> {
    let script = Script::load(script_path)?;
    if let Some(owner) = &script.owner {
        cfg.owner = owner.clone();
    }

    let service = LedgerService::from_config(cfg)?;
    let runner = ScriptRunner::new(
        service,
        Arc::new(TaskBoard::new()),
        Arc::new(ReviewSink::new(cfg.sink.clone())),
    );
    let outcomes = runner.run(&script).await;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Step", "Op", "Outcome"]);
    for o in &outcomes {
        table.add_row(vec![o.step.to_string(), o.op.to_string(), o.outcome.label()]);
    }
    println!("{table}");

    let service = runner.service();
    let refused = outcomes.iter().filter(|o| o.outcome.is_refused()).count();
    println!(
        "\n{} steps, {} refused. Records: {}, paused: {}",
        outcomes.len(),
        refused,
        service.total_records().await,
        service.is_paused().await
    );
    println!("State hash: {}", to_hex(&service.state_hash().await));

    let out = snapshot_out.or(cfg.snapshot_path.as_deref());
    if let Some(path) = out {
        let written = service.save_snapshot(path).await?;
        println!("Snapshot written to {} ({} bytes)", path.display(), written);
    }

    Ok(outcomes)
}
