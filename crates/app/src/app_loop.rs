//! Line-oriented terminal session around a [`Game`].

use std::io::{self, BufRead, Write};

use floor13::{ACTIONS_LINE, Game, GameError, InputJournal, Prompt, SessionEnd};
use log::{debug, info};

pub const INTRO: &str = "You awaken in darkness. A brass plate reads 'FLOOR 13'. You must escape.";
pub const PRESS_ENTER: &str = "\n(Press Enter to continue...)";
pub const INTERRUPTED: &str = "\nExiting game (auto-saved).";

/// How a terminal session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    Ended(SessionEnd),
    /// Input closed before the game finished. Progress stays in the save file.
    Interrupted,
}

/// Drives `game` from `input` until it finishes or input runs out.
///
/// Every line handed to the game is appended to `journal`. The opening
/// "press Enter" pause is not a game input and is not journaled.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut Game,
    journal: &mut InputJournal,
    input: &mut R,
    output: &mut W,
) -> io::Result<SessionExit> {
    if game.is_restored() {
        writeln!(output, "Resuming at {}", game.player().location)?;
    } else {
        writeln!(output, "{INTRO}")?;
    }
    writeln!(output, "{PRESS_ENTER}")?;
    output.flush()?;
    if read_line(input)?.is_none() {
        writeln!(output, "{INTERRUPTED}")?;
        return Ok(SessionExit::Interrupted);
    }

    loop {
        let prompt = game.prompt();
        if let Prompt::Finished(end) = prompt {
            info!("session finished: {end:?}");
            return Ok(SessionExit::Ended(end));
        }
        if prompt == Prompt::Command {
            writeln!(output, "\n{}", game.status())?;
            writeln!(output, "{ACTIONS_LINE}")?;
        }
        write!(output, "{}", prompt.text())?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            writeln!(output, "{INTERRUPTED}")?;
            info!("input closed after {} accepted inputs", game.inputs_accepted());
            return Ok(SessionExit::Interrupted);
        };
        journal.append(&line);
        match game.submit(&line) {
            Ok(reply) => {
                for text in &reply.lines {
                    writeln!(output, "{text}")?;
                }
            }
            Err(GameError::SessionOver(end)) => {
                debug!("input after the session ended was ignored");
                return Ok(SessionExit::Ended(end));
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_strips_line_endings_only() {
        let mut input = Cursor::new("  move \r\nmap\n");
        assert_eq!(read_line(&mut input).expect("read"), Some("  move ".to_string()));
        assert_eq!(read_line(&mut input).expect("read"), Some("map".to_string()));
        assert_eq!(read_line(&mut input).expect("read"), None);
    }
}
