//! CLI round simulator example.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use lardrs::Game;

fn main() {
    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });

    let mut game = Game::new(seed);

    match game.play_round() {
        Ok(result) => println!("{result}"),
        Err(err) => eprintln!("Round aborted: {err}"),
    }
}
