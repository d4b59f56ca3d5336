mod action;
mod actor;
mod cast;
mod collisions;
mod config;
mod game;
mod logger;
mod score;
mod snake;
mod term;

use std::path::Path;

use game::{DuelGame, Flow};

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() -> anyhow::Result<()> {
    let config_path = config::config_path();
    let config = config::load_config(&config_path).map_err(anyhow::Error::msg)?;
    if !config_path.exists() {
        // Leave an editable copy of the defaults behind; not being able to is fine.
        let _ = config::save_config(&config_path, &config);
    }

    if let Some(log_file) = &config.log_file {
        logger::init_logger(Path::new(log_file)).map_err(anyhow::Error::msg)?;
    }

    let mut game = DuelGame::new(config)?;
    game.initialize()?;

    // The terminal has to be restored whatever happens in the game loop
    let result = run(&mut game);
    game.shutdown()?;
    result
}

fn run(game: &mut DuelGame) -> anyhow::Result<()> {
    if game.show_intro()? == Flow::Quit {
        return Ok(());
    }

    let mut cast = game.new_cast();
    while game.play(&mut cast)? == Flow::PlayAgain {}

    Ok(())
}
