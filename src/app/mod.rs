use std::error::Error;
use std::io;
use std::panic;
use std::thread;
use std::time::Duration;

use log::{info, LevelFilter};

use crate::input::{CrosstermInput, InputSource};
use crate::ui::{restore_terminal, DisplaySink, FrameText, TerminalDisplay};
use crate::{Game, Intent, Status, TICK};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub status: Status,
    pub score: u64,
}

/// Logs go to stderr, filtered to warnings so they don't tear the frame.
pub fn setup_logger() -> Result<(), Box<dyn Error>> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(LevelFilter::Warn)
        .chain(io::stderr())
        .apply()?;
    Ok(())
}

pub fn run() -> Result<Summary, Box<dyn Error>> {
    install_panic_hook();
    let mut display = TerminalDisplay::new()?;
    let mut input = CrosstermInput;
    let mut game = Game::new();
    info!("session started");

    let status = run_loop(&mut game, &mut display, &mut input, TICK)?;
    drop(display);

    info!("session ended ({:?}) with score {}", status, game.score);
    Ok(Summary {
        status,
        score: game.score,
    })
}

/// Render, wait a tick, take the last key, advance the game. Repeats until
/// the game quits or ends.
pub fn run_loop<D, I>(
    game: &mut Game,
    display: &mut D,
    input: &mut I,
    tick: Duration,
) -> Result<Status, Box<dyn Error>>
where
    D: DisplaySink,
    I: InputSource,
{
    loop {
        display.present(&FrameText::compose(game))?;

        thread::sleep(tick);

        let intent = input.drain_last()?.and_then(Intent::from_byte);
        let status = game.step(intent);
        if status != Status::Running {
            return Ok(status);
        }
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}
