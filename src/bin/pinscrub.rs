use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pinscrub", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scroll script through a controller and dump each update as JSON.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input replay JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pretty-print each update instead of one object per line.
    #[arg(long)]
    pretty: bool,
}

/// One scripted event. `intersecting` wins over `section_top` when both are
/// present; `section_top` is reduced to the intersection signal via the
/// replay's viewport trigger.
#[derive(Debug, serde::Deserialize)]
struct ReplayStep {
    offset: f64,
    #[serde(default)]
    section_top: Option<f64>,
    #[serde(default)]
    intersecting: Option<bool>,
}

#[derive(Debug, serde::Deserialize)]
struct ReplayDoc {
    controller: pinscrub::ControllerConfig,
    #[serde(default)]
    trigger: pinscrub::ViewportTrigger,
    viewport_height: f64,
    script: Vec<ReplayStep>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
    }
}

fn read_replay_json(path: &Path) -> anyhow::Result<ReplayDoc> {
    let f = File::open(path).with_context(|| format!("open replay '{}'", path.display()))?;
    let r = BufReader::new(f);
    let doc: ReplayDoc = serde_json::from_reader(r).with_context(|| "parse replay JSON")?;
    Ok(doc)
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let doc = read_replay_json(&args.in_path)?;
    doc.trigger.validate()?;
    if !doc.viewport_height.is_finite() || doc.viewport_height <= 0.0 {
        anyhow::bail!("viewport_height must be > 0");
    }

    let mut controller = pinscrub::PinController::new(
        doc.controller,
        Box::new(pinscrub::NoopPlayer),
        Box::new(pinscrub::RecordingSink::default()),
    )?;

    let mut updates = 0usize;
    for step in &doc.script {
        let intersecting = step.intersecting.or_else(|| {
            step.section_top
                .map(|top| doc.trigger.is_intersecting(top, doc.viewport_height))
        });
        let sample = pinscrub::ScrollSample {
            offset: step.offset,
            intersecting,
        };
        let Some(update) = controller.update(sample) else {
            break;
        };

        let line = if args.pretty {
            serde_json::to_string_pretty(&update)?
        } else {
            serde_json::to_string(&update)?
        };
        println!("{line}");
        updates += 1;
    }

    controller.teardown();
    eprintln!("replayed {updates} events");
    Ok(())
}
