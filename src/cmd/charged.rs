use clap::Args;
use movegrid::classify;
use movegrid::config::GroupingConfig;
use movegrid::error::MgResult;
use movegrid::gamemaster::Snapshot;
use movegrid::reports;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ChargedArgs {
    #[command(flatten)]
    pub config: GroupingConfig,

    /// Write the HTML table here instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Also print a console summary of the grouped buckets.
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

pub fn run(args: ChargedArgs, snapshot: &Snapshot) -> MgResult<()> {
    let records = snapshot.gm.combat_moves();
    let teachable = snapshot.gm.teachable_moves();
    info!(
        records = records.len(),
        teachable = teachable.len(),
        "classifying charged moves"
    );

    let mut tree = classify::group_charged(&records, &teachable, &args.config);
    tree.sort_leaves();
    info!(
        rows = tree.groups.len(),
        moves = tree.record_count(),
        "charged tree built"
    );

    if args.summary {
        reports::tables::charged_summary(&tree);
    }

    let caption = super::season_caption(&snapshot.gm);
    let updated = super::updated_stamp(snapshot.fetched_ms);
    match &args.out {
        Some(path) => {
            let mut file = File::create(path)?;
            reports::html::write_charged(
                &mut file,
                &tree,
                &args.config,
                caption.as_deref(),
                updated.as_deref(),
            )?;
            info!(path = %path.display(), "wrote charged table");
        }
        None => {
            let stdout = io::stdout();
            reports::html::write_charged(
                &mut stdout.lock(),
                &tree,
                &args.config,
                caption.as_deref(),
                updated.as_deref(),
            )?;
        }
    }
    Ok(())
}
