use std::env;
use std::error::Error;
use std::process;

use unobot::card::{MAX_PLAYERS, MIN_PLAYERS};
use unobot::{
    Bot, Game, create_bot_from_spec, describe_action, label_for_spec, render_state, winner_points,
};

const DEFAULT_SEED: u64 = 0xD15C_A4D5_EED0_F00D;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let mut visualize = false;
    let mut seed = DEFAULT_SEED;
    let mut max_turns: Option<usize> = None;
    let mut bot_specs: Vec<String> = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--visualize" => visualize = true,
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--seed requires a value".to_string())?;
                seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed value: {value}"))?;
            }
            "--max-turns" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--max-turns requires a value".to_string())?;
                max_turns = Some(
                    value
                        .parse::<usize>()
                        .map_err(|_| format!("invalid max-turns value: {value}"))?,
                );
            }
            "--help" => {
                print_usage();
                return Ok(());
            }
            other => bot_specs.push(other.to_string()),
        }
    }

    if bot_specs.is_empty() {
        bot_specs = vec![String::from("human"), String::from("strategic")];
    }
    if bot_specs.len() < MIN_PLAYERS || bot_specs.len() > MAX_PLAYERS {
        return Err(format!(
            "expected between {MIN_PLAYERS} and {MAX_PLAYERS} players, received {}",
            bot_specs.len()
        )
        .into());
    }

    // Seats follow the engine's role layout: humans first, then the other
    // computer players, strategic last. The sort is stable, so the order
    // within each group is kept.
    let mut ordered = bot_specs.clone();
    ordered.sort_by_key(|spec| seat_group(spec));

    let num_players = ordered.len();
    let ai_players = ordered
        .iter()
        .filter(|spec| seat_group(spec.as_str()) != 0)
        .count();
    let strategic_players = ordered
        .iter()
        .filter(|spec| seat_group(spec.as_str()) == 2)
        .count();

    let mut game = Game::builder(num_players, ai_players, strategic_players)?
        .with_seed(seed)
        .build()?;

    let mut bots: Vec<Box<dyn Bot>> = Vec::with_capacity(num_players);
    for (index, spec) in ordered.iter().enumerate() {
        let bot = create_bot_from_spec(spec, index, seed)?;
        bots.push(bot);
        println!("Seat {index}: {}", label_for_spec(spec));
    }

    println!("\nStarting game with {num_players} players.\n");
    let mut turns = 0usize;
    loop {
        if game.is_finished() {
            break;
        }
        if let Some(limit) = max_turns {
            if turns >= limit {
                println!("Max turn limit {limit} reached. Stopping simulation.");
                break;
            }
        }
        let current = game.current_player();
        let seat = game.current_seat();
        let state = game.state_view(current)?;
        let legal_actions = game.legal_actions(current)?;
        if visualize {
            println!("{}", render_state(&state));
        }
        let Some(action) = bots[seat].select_action(&state, &legal_actions) else {
            break;
        };
        if visualize {
            println!("Player {current} -> {}\n", describe_action(&state, &action));
        }
        game.apply_action(current, action)?;
        turns += 1;
    }

    if let Some(winner) = game.winner() {
        println!(
            "Game finished. Winner: Player {winner} with {} point(s).",
            winner_points(&game, winner)
        );
    } else {
        println!("Simulation stopped before completion.");
    }

    Ok(())
}

fn seat_group(spec: &str) -> u8 {
    let label = label_for_spec(spec);
    if label.starts_with("human") {
        0
    } else if label.starts_with("strategic") {
        2
    } else {
        1
    }
}

fn print_usage() {
    println!("Usage: simulate [OPTIONS] [BOT ...]");
    println!("  --visualize           Show the table and chosen actions each turn");
    println!("  --seed <u64>          Seed for shuffling (default: {DEFAULT_SEED:#x})");
    println!("  --max-turns <usize>   Stop after the specified number of turns");
    println!("  --help                Show this help message");
    println!("Bot entries (2-9 total):");
    println!("  human[:name]          Interactive human-controlled player");
    println!("  random[:seed]         Random bot with optional per-bot seed");
    println!("  baseline              First-legal-card bot");
    println!("  strategic             Penalty-chain and color-majority bot");
    println!("If no bots are provided, defaults to one human and one strategic bot.");
}
