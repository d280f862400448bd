//! Round orchestration and commentary tests.

use core::time::Duration;

use commjack::{
    Action, Canned, Card, Commentary, CommentaryError, Commentator, DealError, Deck, EmptyDeck,
    Event, Game, GameOptions, Outcome, Prompt, Rank, RoundError, Scripted, Silent, Suit, Table,
    Threshold,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn game_from_draws(draws: &[Card]) -> Game {
    let options = GameOptions::default().with_dealer_pause(Duration::ZERO);
    Game::with_deck(options, Deck::from(draws.to_vec()))
}

/// Records every prompt and answers with a fixed line.
#[derive(Default)]
struct Recorder {
    prompts: Vec<String>,
}

impl Commentator for Recorder {
    fn comment(&mut self, prompt: &str) -> Result<String, CommentaryError> {
        self.prompts.push(prompt.to_string());
        Ok(format!("  \"line {}\"\n", self.prompts.len()))
    }
}

#[test]
fn double_blackjack_skips_player_turn() {
    let mut game = game_from_draws(&[
        card(Suit::Spades, Rank::Ace),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Hearts, Rank::King),
        card(Suit::Diamonds, Rank::Queen),
    ]);
    let mut table = Table::new(Scripted::default(), Commentary::new(Recorder::default(), false));

    let report = table.play_round(&mut game).unwrap();

    assert_eq!(report.result.outcome, Outcome::PushBlackjack);
    let prompts = &table.commentary_mut().commentator_mut().prompts;
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("Result: push-blackjack."));
    assert_eq!(report.commentary, vec!["line 1".to_string()]);
}

#[test]
fn scripted_round_hits_then_stands() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Five),   // player
        card(Suit::Clubs, Rank::Ten),     // dealer up
        card(Suit::Spades, Rank::Six),    // player
        card(Suit::Diamonds, Rank::Nine), // dealer hole
        card(Suit::Hearts, Rank::Nine),   // player hit
    ]);
    let scripted = Scripted::new([Action::Hit, Action::Stand]);
    let mut table = Table::new(scripted, Commentary::new(Recorder::default(), false));

    let mut events = Vec::new();
    let report = table
        .play_round_with(&mut game, |_, event| {
            if !matches!(event, Event::Comment(_)) {
                events.push(format!("{event:?}"));
            }
        })
        .unwrap();

    assert_eq!(report.result.outcome, Outcome::PlayerWin);
    assert_eq!(report.result.player_score, 20);
    assert_eq!(report.result.dealer_score, 19);
    assert_eq!(table.decider_mut().remaining(), 0);
    assert_eq!(
        events,
        vec![
            "Dealt".to_string(),
            format!("{:?}", Event::PlayerHit(card(Suit::Hearts, Rank::Nine))),
            "PlayerStood".to_string(),
            "DealerStood(19)".to_string(),
            format!("{:?}", Event::Finished(report.result)),
        ]
    );

    let prompts = &table.commentary_mut().commentator_mut().prompts;
    assert_eq!(prompts.len(), 3);
    assert!(prompts[0].contains("♥5 ♠6 (total: 11)"));
    assert!(prompts[0].contains("My visible card is ♣10"));
    assert!(prompts[2].starts_with("Result: player-win."));
    assert_eq!(report.commentary.len(), 3);
}

#[test]
fn dealer_hits_sixteen_and_busts() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Hearts, Rank::Eight),
    ]);
    let mut table = Table::new(Threshold::default(), Commentary::new(Canned, false));

    let report = table.play_round(&mut game).unwrap();

    assert_eq!(report.result.outcome, Outcome::DealerBust);
    assert_eq!(report.result.dealer_score, 24);
    assert_eq!(
        report.commentary.last().map(String::as_str),
        Some("I pushed my luck and it pushed back. Enjoy the win!")
    );
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = game_from_draws(&[
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Hearts, Rank::Six),
        card(Suit::Hearts, Rank::Five),
    ]);
    let mut table = Table::new(
        Scripted::new([Action::Hit]),
        Commentary::new(Silent, true),
    );

    let report = table.play_round(&mut game).unwrap();

    assert_eq!(report.result.outcome, Outcome::PlayerBust);
    assert_eq!(game.dealer_hand().len(), 2);
    assert!(report.commentary.is_empty());
}

#[test]
fn commentary_failure_does_not_stop_the_round() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::King),
        card(Suit::Spades, Rank::Queen),
        card(Suit::Diamonds, Rank::Jack),
    ]);
    let mut table = Table::new(
        Scripted::new([Action::Stand]),
        Commentary::new(Silent, false),
    );

    let report = table.play_round(&mut game).unwrap();

    assert_eq!(report.result.outcome, Outcome::Push);
    assert!(report.commentary.is_empty());
}

#[test]
fn missing_decision_abandons_round() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::King),
        card(Suit::Spades, Rank::Two),
        card(Suit::Diamonds, Rank::Jack),
    ]);
    let mut table = Table::new(Scripted::default(), Commentary::new(Silent, true));

    assert_eq!(
        table.play_round(&mut game).unwrap_err(),
        RoundError::NoDecision
    );
    assert_eq!(game.outcome(), None);
}

#[test]
fn empty_deck_abandons_round() {
    let mut game = game_from_draws(&[card(Suit::Hearts, Rank::Ten)]);
    let mut table = Table::new(Threshold::default(), Commentary::new(Silent, true));

    assert_eq!(
        table.play_round(&mut game).unwrap_err(),
        RoundError::Deal(DealError::EmptyDeck(EmptyDeck))
    );
}

#[test]
fn disabled_commentary_never_calls_commentator() {
    let mut calls = 0;
    let mut commentary = Commentary::new(
        |_: &str| -> Result<String, CommentaryError> {
            calls += 1;
            Ok("hello".to_string())
        },
        true,
    );

    assert_eq!(commentary.say(&Prompt::Probe), None);
    assert!(!commentary.probe());
    drop(commentary);
    assert_eq!(calls, 0);
}

#[test]
fn failed_probe_disables_commentary() {
    let mut silent = Commentary::new(Silent, false);
    assert!(!silent.probe());
    assert!(silent.is_disabled());

    let mut canned = Commentary::new(Canned, false);
    assert!(canned.probe());
    assert!(!canned.is_disabled());
}

#[test]
fn result_prompts_carry_tag_and_scores() {
    let mut player = commjack::Hand::new();
    player.add_card(card(Suit::Clubs, Rank::Ten));
    player.add_card(card(Suit::Diamonds, Rank::Nine));
    let mut dealer = commjack::Hand::new();
    dealer.add_card(card(Suit::Spades, Rank::Ten));
    dealer.add_card(card(Suit::Hearts, Rank::Eight));

    for outcome in Outcome::ALL {
        let prompt = Prompt::Result {
            outcome,
            player: &player,
            dealer: &dealer,
        }
        .to_string();

        assert!(prompt.starts_with(&format!("Result: {}.", outcome.tag())));
        assert_eq!(Outcome::from_tag(outcome.tag()), Some(outcome));
        assert!(Canned.comment(&prompt).is_ok());
    }

    let win = Prompt::Result {
        outcome: Outcome::PlayerWin,
        player: &player,
        dealer: &dealer,
    }
    .to_string();
    assert!(win.contains("(19)"));
    assert!(win.contains("(18)"));
}
