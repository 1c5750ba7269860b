use std::io::Cursor;

use floor13::{ContentPack, Game, InputJournal, MemoryStore, ScriptedDice, SessionEnd};
use floor13_app::app_loop::{INTERRUPTED, INTRO, SessionExit, run_session};

fn start(store: &MemoryStore) -> Game {
    Game::start(ContentPack::default(), Box::new(store.clone()), Box::new(ScriptedDice::new()))
}

fn drive(game: &mut Game, script: &str) -> (SessionExit, String, InputJournal) {
    let mut journal = InputJournal::new(7);
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    let exit = run_session(game, &mut journal, &mut input, &mut output).expect("session");
    (exit, String::from_utf8(output).expect("utf8"), journal)
}

#[test]
fn quitting_from_the_terminal_keeps_the_save() {
    let store = MemoryStore::new();
    let mut game = start(&store);
    let (exit, output, journal) = drive(&mut game, "\nmove\nLeft Hall\nquit\ny\n");

    assert_eq!(exit, SessionExit::Ended(SessionEnd::Quit));
    assert!(output.starts_with(INTRO));
    assert!(output.contains("(Press Enter to continue...)"));
    assert!(output.contains("Location: Lobby | HP: 100/120"));
    assert!(output.contains("Actions: [move] [inventory] [flashlight] [map] [use batteries] [quit]"));
    assert!(output.contains("Where to? "));
    assert!(output.contains("You move into Left Hall"));
    assert!(output.contains("Quit? [y/N]"));

    let inputs: Vec<&str> = journal.inputs.iter().map(|record| record.input.as_str()).collect();
    assert_eq!(inputs, ["move", "Left Hall", "quit", "y"]);
    assert!(store.contents().is_some_and(|json| json.contains("Left Hall")));
}

#[test]
fn closed_input_interrupts_and_resumes_later() {
    let store = MemoryStore::new();
    let mut game = start(&store);
    let (exit, output, _) = drive(&mut game, "\nmove Left Hall\n");
    assert_eq!(exit, SessionExit::Interrupted);
    assert!(output.trim_end().ends_with(INTERRUPTED.trim()));

    let mut game = start(&store);
    assert!(game.is_restored());
    let (exit, output, journal) = drive(&mut game, "");
    assert_eq!(exit, SessionExit::Interrupted);
    assert!(output.starts_with("Resuming at Left Hall"));
    assert!(journal.inputs.is_empty());
}

#[test]
fn the_press_enter_line_is_not_journaled() {
    let store = MemoryStore::new();
    let mut game = start(&store);
    let (_, _, journal) = drive(&mut game, "anything\nmap\n");
    assert_eq!(journal.inputs.len(), 1);
    assert_eq!(journal.inputs[0].input, "map");
    assert_eq!(journal.seed, 7);
}
