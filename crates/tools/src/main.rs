use anyhow::{Context, Result, anyhow};
use clap::Parser;
use floor13::{ContentPack, InputJournal, ReplayResult, replay::replay_to_end};
use std::fs;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: String,

    /// Print the narration produced by each input
    #[arg(short, long)]
    transcript: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal))?;
    let journal: InputJournal = serde_json::from_str(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;

    let result: ReplayResult = replay_to_end(ContentPack::default(), &journal)
        .map_err(|e| anyhow!("Replay failed during execution: {e}"))?;

    if args.transcript {
        for line in &result.transcript {
            println!("{line}");
        }
    }

    println!("Replay complete.");
    println!("Seed: {}", journal.seed);
    println!("Inputs: {}/{}", result.inputs_consumed, journal.inputs.len());
    println!("Outcome: {:?}", result.final_outcome);
    println!("Snapshot Hash: 0x{:016x}", result.final_snapshot_hash);

    Ok(())
}
