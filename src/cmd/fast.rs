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
pub struct FastArgs {
    #[command(flatten)]
    pub config: GroupingConfig,

    /// Write the HTML table here instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Also print a console summary of the grouped buckets.
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}

pub fn run(args: FastArgs, snapshot: &Snapshot) -> MgResult<()> {
    let records = snapshot.gm.combat_moves();
    let teachable = snapshot.gm.teachable_moves();
    info!(
        records = records.len(),
        teachable = teachable.len(),
        "classifying fast moves"
    );

    let mut tree = classify::group_fast(&records, &teachable);
    tree.sort_leaves();
    info!(
        rows = tree.groups.len(),
        moves = tree.record_count(),
        "fast tree built"
    );

    if args.summary {
        reports::tables::fast_summary(&tree);
    }

    let caption = super::season_caption(&snapshot.gm);
    let updated = super::updated_stamp(snapshot.fetched_ms);
    match &args.out {
        Some(path) => {
            let mut file = File::create(path)?;
            reports::html::write_fast(
                &mut file,
                &tree,
                &args.config,
                caption.as_deref(),
                updated.as_deref(),
            )?;
            info!(path = %path.display(), "wrote fast table");
        }
        None => {
            let stdout = io::stdout();
            reports::html::write_fast(
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
