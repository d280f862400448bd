//! Console blackjack with dealer commentary.

use std::io::{self, Write};
use std::time::Duration;

use clap::Parser;
use commjack::{
    Action, Canned, Card, Commentary, Commentator, CommentaryError, Decider, Event, Game,
    GameOptions, Hand, Party, Silent, Suit, Table, Threshold,
};

#[derive(Parser)]
#[command(name = "cli_blackjack", about = "Blackjack against a chatty dealer")]
struct Cli {
    /// Seed for the first round's shuffle; later rounds add the round number
    #[arg(long)]
    seed: Option<u64>,

    /// Play without dealer commentary
    #[arg(long)]
    no_commentary: bool,

    /// Pause between dealer draws, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pause_ms: u64,

    /// Let the computer play, standing at this score
    #[arg(long)]
    auto: Option<u8>,
}

/// Reads decisions from standard input, re-prompting on unknown input.
struct Console;

impl Decider for Console {
    fn decide(&mut self, player: &Hand, up_card: Card) -> Option<Action> {
        loop {
            let line = prompt_line(&format!(
                "You: {} ({}) vs {}. Hit [h] or stand [s]? ",
                format_hand(player),
                player.score(),
                format_card(&up_card)
            ))?;

            match line.parse() {
                Ok(action) => return Some(action),
                Err(err) => println!("{err}"),
            }
        }
    }
}

/// Either a human at the keyboard or the automatic player.
enum Seat {
    Console(Console),
    Auto(Threshold),
}

impl Decider for Seat {
    fn decide(&mut self, player: &Hand, up_card: Card) -> Option<Action> {
        match self {
            Self::Console(console) => console.decide(player, up_card),
            Self::Auto(auto) => {
                let action = auto.decide(player, up_card);
                if let Some(action) = action {
                    println!("Auto player chooses {action:?}.");
                }
                action
            }
        }
    }
}

/// The offline dealer voice, or nothing at all.
enum Voice {
    Canned(Canned),
    Silent(Silent),
}

impl Commentator for Voice {
    fn comment(&mut self, prompt: &str) -> Result<String, CommentaryError> {
        match self {
            Self::Canned(canned) => canned.comment(prompt),
            Self::Silent(silent) => silent.comment(prompt),
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    println!("###############################");
    println!("#  Blackjack with the dealer  #");
    println!("###############################");

    let voice = if cli.no_commentary {
        Voice::Silent(Silent)
    } else {
        Voice::Canned(Canned)
    };
    let mut commentary = Commentary::new(voice, cli.no_commentary);
    if !cli.no_commentary {
        if commentary.probe() {
            println!("The dealer is ready to chat.");
        } else {
            println!("The dealer is not talking today. Playing without commentary.");
        }
    }

    let seat = cli
        .auto
        .map_or(Seat::Console(Console), |stand_at| Seat::Auto(Threshold::new(stand_at)));
    let mut table = Table::new(seat, commentary);
    let options = GameOptions::default().with_dealer_pause(Duration::from_millis(cli.pause_ms));

    for round in 0u64.. {
        let mut game = cli.seed.map_or_else(
            || Game::from_entropy(options.clone()),
            |seed| Game::new(options.clone(), seed.wrapping_add(round)),
        );

        println!("\n--- New round ---");
        if let Err(err) = table.play_round_with(&mut game, print_event) {
            log::error!("round abandoned: {err}");
            println!("Round abandoned: {err}");
        }

        match prompt_line("\nPlay again? (yes/no): ").as_deref() {
            Some("y" | "yes") => {}
            _ => break,
        }
    }

    println!("Thanks for playing!");
}

fn print_event(game: &Game, event: &Event<'_>) {
    match event {
        Event::Dealt => print_table(game, true),
        Event::Comment(line) => println!("Dealer: {line}"),
        Event::PlayerHit(card) => {
            println!("You draw {}.", format_card(card));
            print_table(game, true);
        }
        Event::PlayerStood => {
            println!("You stand. Dealer's turn.");
            print_table(game, false);
        }
        Event::DealerHit(card) => println!("Dealer draws {}.", format_card(card)),
        Event::DealerBust(card) => println!("Dealer draws {} and busts!", format_card(card)),
        Event::DealerStood(score) => println!("Dealer stands on {score}."),
        Event::Finished(result) => {
            print_table(game, false);
            let message = match result.outcome.winner() {
                Some(Party::Player) => "You win!",
                Some(Party::Dealer) => "Dealer wins.",
                None => "Push.",
            };
            println!("{message} ({})", result.outcome);
        }
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn print_table(game: &Game, hide_hole: bool) {
    println!("--------------------");
    println!("Dealer: {}", game.dealer_hand().view(hide_hole));
    println!("You:    {}", game.player_hand().view(false));
    println!("--------------------");
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
