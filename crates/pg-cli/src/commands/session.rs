use std::io::{self, BufRead, Write};

use colored::Colorize;
use pg_core::Character;
use pg_generator::{GenerateOptions, GenerationMode};

use super::Context;
use crate::render;
use crate::roster::{ROSTER_CAPACITY, Roster};

const HELP: &str = "\
  party, p              generate a party
  individual, i, npc    generate one NPC
  player, pc [human]    generate one player character
  list, l               show the roster
  clear, c              clear the roster
  help, h               show this help
  quit, q               leave the session";

pub fn run(ctx: &mut Context) -> Result<(), String> {
    let mut roster = Roster::default();

    println!("  {} plebgen session", "Starting".bold());
    println!("  The last {ROSTER_CAPACITY} characters stay on the roster.");
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim().to_lowercase();
        let mut words = input.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        let arg = words.next();

        let mode = match command {
            "party" | "p" => Some(GenerationMode::Party),
            "individual" | "i" | "npc" => Some(GenerationMode::Individual),
            "player" | "pc" => Some(GenerationMode::Player),
            "list" | "l" => {
                print_roster(&roster);
                None
            }
            "clear" | "c" => {
                roster.clear();
                println!("  Roster cleared.\n");
                None
            }
            "help" | "h" | "?" => {
                println!("{HELP}\n");
                None
            }
            "quit" | "q" | "exit" => break,
            other => {
                println!("{}\n", format!("unknown command: {other} (try 'help')").yellow());
                None
            }
        };

        if let Some(mode) = mode {
            let options = GenerateOptions::default().with_force_human(arg == Some("human"));
            let batch = ctx.generator.generate(mode, &options, &mut ctx.rng);
            show_batch(&batch);
            let evicted = roster.add(batch);
            if evicted > 0 {
                tracing::debug!("roster evicted {} characters", evicted);
            }
        }
    }

    Ok(())
}

fn show_batch(batch: &[Character]) {
    if let Some(draw) = batch.iter().find_map(|c| c.party_draw.as_ref()) {
        println!("{}\n", render::party_banner(draw));
    }
    for c in batch {
        println!("{}", render::character(c));
    }
}

fn print_roster(roster: &Roster) {
    if roster.is_empty() {
        println!("  Roster is empty.\n");
        return;
    }
    for (i, entry) in roster.entries().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            entry.character.summary(),
            entry.generated_at.format("%H:%M:%S").to_string().dimmed()
        );
    }
    println!("  {} of {ROSTER_CAPACITY}\n", roster.len());
}
