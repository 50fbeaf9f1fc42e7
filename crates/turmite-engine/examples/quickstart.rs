//! Turmite quickstart: run the reference simulation and print it.
//!
//! Demonstrates:
//!   1. Building a `SimConfig` and `LockstepSim`
//!   2. Frame-driven stepping with the default stride
//!   3. Reading per-step metrics
//!   4. Teleporting the bot and pausing
//!   5. Projecting the grid to text (one glyph per cell)
//!
//! Run with:
//!   cargo run --example quickstart

use turmite_core::Color;
use turmite_engine::{LockstepSim, SimConfig};
use turmite_grid::Grid;

const FRAMES: usize = 9_000;

fn glyph(color: Color) -> char {
    match color {
        Color::Blue => 'b',
        Color::Yellow => 'y',
        Color::Red => 'r',
        Color::Black => ' ',
    }
}

fn print_grid(grid: &Grid, bot: (u32, u32)) {
    for y in 0..grid.height() {
        let line: String = grid
            .row(y as i64)
            .iter()
            .enumerate()
            .map(|(x, &c)| if (x as u32, y) == bot { '@' } else { glyph(c) })
            .collect();
        println!("|{line}|");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = LockstepSim::new(SimConfig::default())?;

    let mut dashes = 0u64;
    let mut moves = 0u64;
    for _ in 0..FRAMES {
        if let Some(result) = sim.advance_frame() {
            moves += u64::from(result.metrics.moves);
            if result.metrics.dashed {
                dashes += 1;
            }
        }
    }
    println!(
        "after {} frames: {} steps, {} moves, {} dashes",
        sim.frame(),
        sim.tick(),
        moves,
        dashes
    );

    let bot = sim.bot().position();
    print_grid(sim.grid(), (bot.x, bot.y));

    // Click-equivalent: drop the bot in the top-left corner and carry on.
    sim.teleport(0, 0);
    for _ in 0..300 {
        sim.advance_frame();
    }

    // Key-press equivalent: pausing freezes the world.
    sim.toggle_pause();
    let before = sim.fingerprint();
    for _ in 0..300 {
        sim.advance_frame();
    }
    assert_eq!(before, sim.fingerprint());

    for color in Color::ALL {
        println!("{color:>6}: {}", sim.grid().count(color));
    }
    Ok(())
}
