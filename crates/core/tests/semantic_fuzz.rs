use floor13::content::ContentPack;
use floor13::{Game, GameError, Item, MemoryStore, Player, Prompt, SeededDice};
use proptest::{
    arbitrary::any,
    test_runner::{Config as ProptestConfig, TestCaseError, TestRunner},
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

const MAX_INPUTS: usize = 400;
const NOISE: [&str; 4] = ["", "xyzzy", "99", "move Penthouse"];

fn choose(rng: &mut ChaCha8Rng, options: &[String]) -> String {
    let index = rng.next_u64() as usize % options.len();
    options[index].clone()
}

fn check_invariants(before: &Player, after: &Player, content: &ContentPack) -> Result<(), String> {
    if !(0..=100).contains(&after.flashlight_battery) {
        return Err(format!("battery out of range: {}", after.flashlight_battery));
    }
    if after.flashlight_on && after.flashlight_battery == 0 {
        return Err("flashlight on with an empty battery".to_string());
    }
    if !(0..=after.max_health).contains(&after.health) {
        return Err(format!("health out of range: {}", after.health));
    }
    if let Some(weapon) = after.weapon
        && !after.has(Item::Weapon(weapon))
    {
        return Err(format!("{weapon} equipped but not carried"));
    }
    if before.map_unlocked && !after.map_unlocked {
        return Err("map lost its repair".to_string());
    }
    if !before.visited_rooms.is_subset(&after.visited_rooms) {
        return Err("visited rooms shrank".to_string());
    }
    if before.location != after.location
        && !content.room(before.location).exits.contains(&after.location)
    {
        return Err(format!("jumped from {} to {}", before.location, after.location));
    }
    Ok(())
}

fn run_fuzz_session(dice_seed: u64, input_seed: u64) -> Result<(), String> {
    let mut game = Game::start(
        ContentPack::default(),
        Box::new(MemoryStore::new()),
        Box::new(SeededDice::new(dice_seed)),
    );
    let mut rng = ChaCha8Rng::seed_from_u64(input_seed);

    for _ in 0..MAX_INPUTS {
        let prompt = game.prompt();
        if let Prompt::Finished(end) = prompt {
            return match game.submit("map") {
                Err(GameError::SessionOver(reported)) if reported == end => Ok(()),
                other => Err(format!("finished session accepted input: {other:?}")),
            };
        }

        let mut options = prompt.accepted_inputs();
        // Keep quitting rare so sessions get somewhere.
        options.retain(|input| input != "quit");
        options.extend(NOISE.iter().map(|input| input.to_string()));
        let input = choose(&mut rng, &options);

        let before = game.player().clone();
        let reply = game
            .submit(&input)
            .map_err(|err| format!("open session rejected {input:?}: {err}"))?;
        check_invariants(&before, game.player(), game.content())
            .map_err(|err| format!("after {input:?}: {err}"))?;
        if reply.prompt != game.prompt() {
            return Err("reply prompt disagrees with the engine".to_string());
        }
    }
    Ok(())
}

#[test]
fn semantic_fuzz_invariants_hold() {
    let mut runner = TestRunner::new(ProptestConfig { cases: 64, ..ProptestConfig::default() });
    let result = runner.run(&(any::<u64>(), any::<u64>()), |(dice_seed, input_seed)| {
        run_fuzz_session(dice_seed, input_seed).map_err(TestCaseError::fail)
    });
    if let Err(failure) = result {
        panic!("{failure}");
    }
}
