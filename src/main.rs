use std::error::Error;

use blockfall::app;
use blockfall::Status;

fn main() -> Result<(), Box<dyn Error>> {
    app::setup_logger()?;
    let summary = app::run()?;
    let ending = match summary.status {
        Status::GameOver => "game over",
        _ => "quit",
    };
    println!("Score: {} ({})", summary.score, ending);
    Ok(())
}
