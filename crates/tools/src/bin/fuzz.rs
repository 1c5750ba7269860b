use std::collections::BTreeMap;

use anyhow::{Result, bail};
use clap::Parser;
use floor13::{ContentPack, Game, Item, MemoryStore, Prompt, SeededDice};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First seed; sessions use consecutive seeds from here
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short = 'n', long, default_value_t = 100)]
    sessions: u64,
    /// Input cap per session
    #[arg(short = 'k', long, default_value_t = 1000)]
    steps: u32,
}

fn choose(rng: &mut ChaCha8Rng, options: &[String]) -> String {
    let p = rng.next_u64() as usize % options.len();
    options[p].clone()
}

/// Plays one random session and returns how it ended.
fn fuzz_session(seed: u64, steps: u32) -> Result<String> {
    let content = ContentPack::default();
    let battery_max = content.rules.battery_max;
    let mut game = Game::start(content, Box::new(MemoryStore::new()), Box::new(SeededDice::new(seed)));
    let mut rng = ChaCha8Rng::seed_from_u64(seed.rotate_left(32));

    for step in 0..steps {
        let prompt = game.prompt();
        if let Prompt::Finished(end) = prompt {
            if game.submit("map").is_ok() {
                bail!("seed {seed}: finished session accepted input");
            }
            return Ok(format!("{end:?}"));
        }

        let mut options = prompt.accepted_inputs();
        // Leave quitting to the step cap.
        options.retain(|input| input != "quit");
        let input = choose(&mut rng, &options);
        game.submit(&input)?;

        let player = game.player();
        if !(0..=battery_max).contains(&player.flashlight_battery) {
            bail!("seed {seed} step {step}: battery {}", player.flashlight_battery);
        }
        if player.flashlight_on && player.flashlight_battery == 0 {
            bail!("seed {seed} step {step}: light on with an empty battery");
        }
        if player.health > player.max_health {
            bail!("seed {seed} step {step}: health {} over max", player.health);
        }
        if let Some(weapon) = player.weapon
            && !player.has(Item::Weapon(weapon))
        {
            bail!("seed {seed} step {step}: {weapon} equipped but not carried");
        }
    }
    Ok("Unfinished".to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!(
        "Fuzzing {} sessions from seed {} for max {} inputs each...",
        args.sessions, args.seed, args.steps
    );
    let mut endings: BTreeMap<String, u64> = BTreeMap::new();
    for seed in args.seed..args.seed.saturating_add(args.sessions) {
        let ending = fuzz_session(seed, args.steps)?;
        *endings.entry(ending).or_default() += 1;
    }

    println!("Fuzzing completed without invariant violations.");
    for (ending, count) in &endings {
        println!("  {ending}: {count}");
    }
    Ok(())
}
