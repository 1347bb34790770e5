// ═══════════════════════════════════════════════════════════════════════
// Runner — CLI entry point and the interactive text game loop
// ═══════════════════════════════════════════════════════════════════════

mod command;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cluedo_engine::layout::{room_name, weapon_name, CHARACTERS, WEAPONS};
use cluedo_engine::visibility::player_view;
use cluedo_engine::{Game, GameConfig, PlayerId, TurnPhase};
use command::{parse_command, parse_suggestion, Command};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "cluedo", about = "Cluedo - find who committed the murder, with which weapon, and where")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game at this terminal
    Play {
        #[arg(short, long, default_value_t = 3)]
        players: u8,
        /// Fix every random draw (solution, weapons, cards, dice)
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Print every room with its connections
    Layout,
}

const HELP: &str = "\
RULES:
  - Every time you enter a main room you MUST make a suggestion.
  - A suggestion moves the named character and weapon into your room.
  - Suggestions cannot be made in hallways.
  - Secret passages (Study <-> Kitchen, Conservatory <-> Lounge) cost no moves.

COMMANDS:
  roll                     Roll the die to start your turn
  move <room>              Move to a connected room (uses 1 move)
  suggest <char> <weapon>  Make a suggestion in your current room
  status                   Show your current status
  map                      Show the mansion map
  view                     Show everything you know, as JSON
  help                     Show these instructions
  end                      End your turn
  quit                     Leave the game

EXAMPLES:
  move \"Dining Room\"
  suggest \"Miss Scarlett\" Revolver";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play { players, seed } => cmd_play(players, seed),
        Commands::Layout => {
            cmd_layout();
            Ok(())
        }
    }
}

fn cmd_play(player_count: u8, seed: Option<u64>) -> anyhow::Result<()> {
    let mut config = GameConfig::new(player_count);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut game = Game::new(config).context("could not set up the game")?;

    println!("=== Cluedo ===\n");
    println!("{}\n", HELP);
    println!("This game has {} players.", player_count);
    println!("\nStarting positions:");
    for line in game.starting_positions() {
        println!("  {}", line);
    }
    println!("\nWeapon locations:");
    for (weapon, room) in game.mansion().weapon_locations() {
        if let Some(room) = room {
            println!("  {}: {}", weapon_name(weapon), room_name(room));
        }
    }
    println!("\nREMEMBER: When you enter a room, you MUST make a suggestion!");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let player = game.current_player_id();

        if game.phase() == TurnPhase::MustSuggest {
            if !prompt_suggestion(&mut game, player, &mut input)? {
                break;
            }
            continue;
        }

        let prompt = format!("\n{} [{}, {} moves]> ",
            game.current_player().name, game.phase(), game.remaining_moves());
        let Some(line) = read_line(&mut input, &prompt)? else { break };

        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(msg) => {
                if !msg.is_empty() {
                    println!("{}", msg);
                }
                continue;
            }
        };

        match command {
            Command::Roll => match game.start_turn() {
                Ok(roll) => println!("You rolled a {}! You have {} moves.", roll, game.remaining_moves()),
                Err(e) => println!("{}", e),
            },
            Command::Move(target) => match game.move_player(player, &target) {
                Ok(outcome) => println!("\n{}", outcome),
                Err(e) => println!("{}", e),
            },
            Command::Suggest { character, weapon } => {
                match game.make_suggestion(player, &character, &weapon) {
                    Ok(outcome) => println!("\n{}", outcome),
                    Err(e) => println!("{}", e),
                }
            }
            Command::Status => {
                println!("{}", game.display_game_state());
                println!("{}", game.display_player_status(player));
            }
            Command::Map => println!("\n{}", game.mansion().simple_map(game.current_player().position)),
            Command::View => {
                if let Some(view) = player_view(&game, player) {
                    println!("{}", view.to_json_pretty().context("could not render player view")?);
                }
            }
            Command::Help => println!("{}", HELP),
            Command::EndTurn => {
                let left = game.remaining_moves();
                match game.end_turn() {
                    Ok(next) => {
                        if left > 0 {
                            println!("You ended your turn with {} moves remaining.", left);
                        } else {
                            println!("You ended your turn.");
                        }
                        if let Some(p) = game.player(next) {
                            println!("\nTurn passed to {}", p.name);
                        }
                        println!("{}", game.display_game_state());
                    }
                    Err(e) => println!("{}", e),
                }
            }
            Command::Quit => {
                let answer = read_line(&mut input, "Are you sure you want to quit? (y/n): ")?;
                if answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")) {
                    break;
                }
            }
        }
    }

    println!("\nThanks for playing Cluedo!");
    Ok(())
}

/// Keep asking until a suggestion succeeds. Returns false on quit or end of input.
fn prompt_suggestion(game: &mut Game, player: PlayerId, input: &mut impl BufRead) -> anyhow::Result<bool> {
    println!("\nYOU ENTERED A ROOM! You must make a suggestion.");
    println!("Available characters: {}", CHARACTERS.iter().map(|c| c.name).collect::<Vec<_>>().join(", "));
    println!("Available weapons: {}", WEAPONS.iter().map(|w| w.name).collect::<Vec<_>>().join(", "));

    loop {
        let Some(line) = read_line(&mut *input, "\nMake your suggestion (format: 'Character Weapon'): ")? else {
            return Ok(false);
        };
        if line.trim().eq_ignore_ascii_case("quit") {
            return Ok(false);
        }
        if line.trim().is_empty() {
            println!("You must make a suggestion to continue.");
            continue;
        }
        let (character, weapon) = match parse_suggestion(&line) {
            Ok(parts) => parts,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };
        match game.make_suggestion(player, &character, &weapon) {
            Ok(outcome) => {
                println!("\n{}", outcome);
                return Ok(true);
            }
            Err(e) => println!("\n{}\nPlease try again.", e),
        }
    }
}

fn read_line(input: &mut impl BufRead, prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush().context("could not write to stdout")?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("could not read from stdin")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn cmd_layout() {
    let layout = cluedo_engine::layout::Layout::build();
    println!("{:<32} {:<10} Connections", "Room", "Type");
    println!("{}", "-".repeat(100));
    for room in layout.rooms() {
        let mut links: Vec<&str> = room.adjacent.iter().map(|&r| room_name(r)).collect();
        if let Some(passage) = room.secret_passage {
            links.push(room_name(passage));
        }
        let kind = if room.is_main() { "main" } else { "hallway" };
        println!("{:<32} {:<10} {}", room.name, kind, links.join(", "));
    }
    println!("\nSecret passages are listed last for the rooms that have one.");
}
