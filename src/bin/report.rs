//! Render the most frequent actors in a film locations CSV as an SVG bar
//! chart.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};

use svot::{actor_counts, rows_to_records, Node, Svot, Table};

#[derive(Debug, Parser)]
#[command(
    name = "report",
    version,
    about = "Render the most frequent actors in a film locations CSV as an SVG bar chart"
)]
struct Args {
    /// Input CSV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,
    /// Output SVG file
    #[arg(short, long, default_value = "actors.svg")]
    output: PathBuf,
}

const CHART_WIDTH: i64 = 800;
const CHART_HEIGHT: i64 = 170;
const BAR_WIDTH: i64 = 100;
const BAR_STEP: i64 = 110;
const BAR_LEFT: i64 = 10;
const BAR_BOTTOM: i64 = 140;
const BAR_MAX_HEIGHT: i64 = 120;
const LABEL_Y: i64 = 160;
const LABEL_FONT_SIZE: i64 = 14;
const BAR_FILLS: [&str; 3] = ["steelblue", "seagreen", "indianred"];
const TOP_ACTORS: usize = 3;

fn main() {
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        error!("{:#}", err);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let table = read_table(&args.input)?;
    info!("read {} rows from {}", table.rows.len(), args.input.display());

    let records = rows_to_records(&table);
    let mut pairs: Vec<(String, u32)> = actor_counts(&records).into_iter().collect();
    // count descending, name ascending on ties, so output is deterministic
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs.truncate(TOP_ACTORS);
    debug!("top actors: {:?}", pairs);

    let (svot, root) = render_chart(&pairs)?;
    svot.write(root, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    info!("wrote {}", args.output.display());
    Ok(())
}

fn read_table(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("malformed csv in {}", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Table::from_rows(rows))
}

/// One bar and label per actor, each pair offset a fixed step to the
/// right of the previous, scaled against the highest count.
fn render_chart(pairs: &[(String, u32)]) -> Result<(Svot, Node)> {
    let mut svot = Svot::new();
    let root = svot.new_root();
    svot.add_attributes(root, [("width", CHART_WIDTH), ("height", CHART_HEIGHT)]);

    let max = pairs
        .iter()
        .map(|(_, count)| i64::from(*count))
        .max()
        .unwrap_or(1);
    for (i, (actor, count)) in pairs.iter().enumerate() {
        let x = BAR_LEFT + BAR_STEP * i as i64;
        let height = i64::from(*count) * BAR_MAX_HEIGHT / max;
        let rect = svot.new_rect(
            x,
            BAR_BOTTOM - height,
            BAR_WIDTH,
            height,
            BAR_FILLS[i % BAR_FILLS.len()],
        );
        svot.append(root, rect)?;
        let label = format!("{} ({})", actor, count);
        let text = svot.new_text_element(x, LABEL_Y, LABEL_FONT_SIZE, "black", &label);
        svot.append(root, text)?;
    }
    Ok((svot, root))
}
