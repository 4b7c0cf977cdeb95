//! Game integration tests.

#![allow(clippy::float_cmp)]

use narabe::{
    Card, CardId, DECK_SIZE, DeckError, Game, GameMode, GameOptions, GameState, HAND_SIZE,
    PlayOutcome, Suit,
};

const fn card(id: CardId, suit: Suit, rank: u8) -> Card {
    Card::new(id, suit, rank)
}

/// Builds a full 52-card deck in draw order: `prefix` first, then every
/// remaining (suit, rank) pair in canonical suit-major order. Ids follow
/// draw position, starting at 1.
fn stacked_deck(prefix: &[(Suit, u8)]) -> Vec<Card> {
    let mut pairs: Vec<(Suit, u8)> = prefix.to_vec();
    for suit in Suit::ALL {
        for rank in 1..=13 {
            if !pairs.contains(&(suit, rank)) {
                pairs.push((suit, rank));
            }
        }
    }
    assert_eq!(pairs.len(), DECK_SIZE);
    pairs
        .iter()
        .enumerate()
        .map(|(index, &(suit, rank))| card(index as u8 + 1, suit, rank))
        .collect()
}

/// A deck where every card connects with its predecessor: ranks ascend in
/// groups of four, suit order alternating so rank boundaries share a suit.
fn connected_deck() -> Vec<Card> {
    let mut pairs = Vec::with_capacity(DECK_SIZE);
    for rank in 1..=13 {
        let mut suits = Suit::ALL;
        if rank % 2 == 0 {
            suits.reverse();
        }
        for suit in suits {
            pairs.push((suit, rank));
        }
    }
    pairs
        .iter()
        .enumerate()
        .map(|(index, &(suit, rank))| card(index as u8 + 1, suit, rank))
        .collect()
}

#[test]
fn card_matching_rule() {
    let anchor = card(1, Suit::Spades, 7);
    assert!(card(2, Suit::Spades, 12).matches(anchor));
    assert!(card(3, Suit::Hearts, 7).matches(anchor));
    assert!(!card(4, Suit::Hearts, 8).matches(anchor));
}

#[test]
fn new_game_deals_five_and_covers_all_pairs() {
    for seed in [0, 1, 42, u64::MAX] {
        let game = Game::new(GameOptions::default(), seed);
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.played_count(), 0);

        let mut all = game.hand_cards();
        assert_eq!(all.len(), HAND_SIZE);
        all.extend(game.deck.lock().iter().copied());
        assert_eq!(all.len(), DECK_SIZE);

        let mut ids: Vec<CardId> = all.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        let expected: Vec<CardId> = (1..=DECK_SIZE as CardId).collect();
        assert_eq!(ids, expected);

        let mut pairs: Vec<(Suit, u8)> = all.iter().map(|c| (c.suit, c.rank)).collect();
        pairs.sort_by_key(|&(suit, rank)| (suit as u8, rank));
        pairs.dedup();
        assert_eq!(pairs.len(), DECK_SIZE);
    }
}

#[test]
fn seeded_games_are_reproducible() {
    let a = Game::new(GameOptions::default(), 7);
    let b = Game::new(GameOptions::default(), 7);
    assert_eq!(a.hand_cards(), b.hand_cards());
    assert_eq!(*a.deck.lock(), *b.deck.lock());
}

#[test]
fn whole_hand_playable_before_first_play() {
    let game = Game::new(GameOptions::default(), 3);
    let hand_ids: Vec<CardId> = game.hand_cards().iter().map(|c| c.id).collect();
    assert_eq!(game.playable_ids(), hand_ids);
}

#[test]
fn successful_play_draws_into_vacated_slot() {
    // Canonical order: hand is A♠ 2♠ 3♠ 4♠ 5♠, deck front is 6♠.
    let game =
        Game::with_stacked_deck(GameOptions::default(), 0, stacked_deck(&[])).expect("valid deck");

    let before = game.hand_cards();
    let outcome = game.play_card(before[0].id);
    let PlayOutcome::Played { drawn: Some(drawn) } = outcome else {
        panic!("play should succeed and draw: {outcome:?}");
    };

    assert_eq!(drawn, card(6, Suit::Spades, 6));
    assert_eq!(game.played_count(), 1);
    assert_eq!(game.pile_top(), Some(before[0]));

    let after = game.hand_cards();
    assert_eq!(after.len(), HAND_SIZE);
    assert_eq!(after[0], drawn);
    assert_eq!(&after[1..], &before[1..]);

    // Every remaining card shares the spade suit with the pile top.
    let after_ids: Vec<CardId> = after.iter().map(|c| c.id).collect();
    assert_eq!(game.playable_ids(), after_ids);
}

#[test]
fn rejected_plays_change_nothing() {
    // Hand: A♠ 2♠ 3♠ 4♠ 9♥; deck front 6♠.
    let deck = stacked_deck(&[
        (Suit::Spades, 1),
        (Suit::Spades, 2),
        (Suit::Spades, 3),
        (Suit::Spades, 4),
        (Suit::Hearts, 9),
        (Suit::Spades, 6),
    ]);
    let game = Game::with_stacked_deck(GameOptions::default(), 0, deck).expect("valid deck");

    assert!(game.play_card(1).is_played()); // A♠

    let before = game.snapshot();
    // 9♥ shares neither suit nor rank with A♠.
    assert_eq!(game.play_card(5), PlayOutcome::Ignored);
    // The played card is no longer in the hand.
    assert_eq!(game.play_card(1), PlayOutcome::Ignored);
    // Unknown id.
    assert_eq!(game.play_card(200), PlayOutcome::Ignored);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn win_by_playing_out_a_connected_deck() {
    let game = Game::with_stacked_deck(GameOptions::default(), 0, connected_deck())
        .expect("valid deck");

    for expected in 1..=DECK_SIZE as CardId {
        let snapshot = game.snapshot();
        assert_eq!(snapshot.state, GameState::Playing);
        assert_eq!(
            snapshot.hand.len() + snapshot.cards_remaining + snapshot.played.len(),
            DECK_SIZE
        );

        // Ids follow draw order, so the lowest playable id is always the
        // successor of the last played card.
        let &next = snapshot.playable.iter().min().expect("hand is playable");
        assert_eq!(next, expected);

        let outcome = game.play_card(next);
        match outcome {
            PlayOutcome::Played { drawn: Some(_) } => assert_eq!(game.hand_cards().len(), HAND_SIZE),
            // Deck exhausted: the hand shrinks with each further play.
            PlayOutcome::Played { drawn: None } => assert_eq!(game.cards_remaining(), 0),
            PlayOutcome::Ignored => panic!("card {next} should be playable"),
        }
    }

    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.played_count(), DECK_SIZE as u8);
    assert!(game.hand_cards().is_empty());
    assert_eq!(game.cards_remaining(), 0);

    // Terminal state is sticky.
    assert_eq!(game.play_card(1), PlayOutcome::Ignored);
}

#[test]
fn loss_when_hand_disconnects() {
    // Hand: A♠ 5♥ 9♣ K♦ 2♠; replacements 7♦ then 8♥ connect with nothing.
    let deck = stacked_deck(&[
        (Suit::Spades, 1),
        (Suit::Hearts, 5),
        (Suit::Clubs, 9),
        (Suit::Diamonds, 13),
        (Suit::Spades, 2),
        (Suit::Diamonds, 7),
        (Suit::Hearts, 8),
    ]);
    let game = Game::with_stacked_deck(GameOptions::default(), 0, deck).expect("valid deck");

    assert!(game.play_card(1).is_played()); // A♠
    // Only 2♠ still connects with A♠.
    assert_eq!(game.playable_ids(), vec![5]);
    assert!(game.play_card(5).is_played()); // 2♠

    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(game.played_count(), 2);
    assert!(game.playable_ids().is_empty());
    assert!(!game.hand_cards().is_empty());

    // No further mutation until an explicit reset.
    let before = game.snapshot();
    assert_eq!(game.play_card(2), PlayOutcome::Ignored);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn reset_rebuilds_from_scratch() {
    let game = Game::new(GameOptions::default(), 11);
    let first = game.playable_ids()[0];
    assert!(game.play_card(first).is_played());

    game.reset();
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.played_count(), 0);
    assert!(game.played_cards().is_empty());
    assert_eq!(game.hand_cards().len(), HAND_SIZE);
    assert_eq!(game.cards_remaining(), DECK_SIZE - HAND_SIZE);
}

#[test]
fn mode_toggle_resets_the_game() {
    let game = Game::new(GameOptions::default(), 13);
    let first = game.playable_ids()[0];
    assert!(game.play_card(first).is_played());

    game.set_mode(GameMode::Easy);
    assert_eq!(game.options().mode, GameMode::Easy);
    assert_eq!(game.played_count(), 0);
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.hand_cards().len(), HAND_SIZE);
}

#[test]
fn assisted_draw_keeps_hand_connected_preferring_suit() {
    // Hand: A♠ 5♥ 9♣ K♦ 7♥ — nothing besides A♠ connects with A♠, so easy
    // mode assists the replacement. With suit bias 1.0 the same-suit group
    // always wins; the first spade whose rank is still held is 5♠.
    let deck = stacked_deck(&[
        (Suit::Spades, 1),
        (Suit::Hearts, 5),
        (Suit::Clubs, 9),
        (Suit::Diamonds, 13),
        (Suit::Hearts, 7),
    ]);
    let options = GameOptions::default()
        .with_mode(GameMode::Easy)
        .with_suit_bias(1.0);
    let game = Game::with_stacked_deck(options, 0, deck).expect("valid deck");

    let deck_before = game.deck.lock().clone();
    let outcome = game.play_card(1);
    let PlayOutcome::Played { drawn: Some(drawn) } = outcome else {
        panic!("play should succeed and draw: {outcome:?}");
    };

    assert_eq!((drawn.suit, drawn.rank), (Suit::Spades, 5));
    assert_eq!(game.hand_cards()[0], drawn);

    // The selection came from the deck and was removed exactly once.
    assert!(deck_before.contains(&drawn));
    let deck_after = game.deck.lock().clone();
    assert_eq!(deck_after.len(), deck_before.len() - 1);
    assert!(!deck_after.contains(&drawn));
}

#[test]
fn assisted_draw_prefers_rank_group_when_bias_is_zero() {
    let deck = stacked_deck(&[
        (Suit::Spades, 1),
        (Suit::Hearts, 5),
        (Suit::Clubs, 9),
        (Suit::Diamonds, 13),
        (Suit::Hearts, 7),
    ]);
    let options = GameOptions::default()
        .with_mode(GameMode::Easy)
        .with_suit_bias(0.0);
    let game = Game::with_stacked_deck(options, 0, deck).expect("valid deck");

    let outcome = game.play_card(1);
    let PlayOutcome::Played { drawn: Some(drawn) } = outcome else {
        panic!("play should succeed and draw: {outcome:?}");
    };

    // Same-rank group in deck order starts with A♥; no held card has rank 1,
    // so the group's first card wins.
    assert_eq!((drawn.suit, drawn.rank), (Suit::Hearts, 1));
}

#[test]
fn assist_skipped_while_hand_stays_connected() {
    // 2♠ still connects with A♠, so even in easy mode the replacement is the
    // plain front-of-deck draw (9♥, which itself connects with nothing).
    let deck = stacked_deck(&[
        (Suit::Spades, 1),
        (Suit::Spades, 2),
        (Suit::Clubs, 3),
        (Suit::Diamonds, 5),
        (Suit::Hearts, 8),
        (Suit::Hearts, 9),
    ]);
    let options = GameOptions::default().with_mode(GameMode::Easy);
    let game = Game::with_stacked_deck(options, 0, deck).expect("valid deck");

    let outcome = game.play_card(1);
    let PlayOutcome::Played { drawn: Some(drawn) } = outcome else {
        panic!("play should succeed and draw: {outcome:?}");
    };

    assert_eq!((drawn.suit, drawn.rank), (Suit::Hearts, 9));
}

#[test]
fn conservation_holds_across_whole_games() {
    for seed in 0..10 {
        for mode in [GameMode::Normal, GameMode::Easy] {
            let game = Game::new(GameOptions::default().with_mode(mode), seed);

            loop {
                let snapshot = game.snapshot();
                assert_eq!(
                    snapshot.hand.len() + snapshot.cards_remaining + snapshot.played.len(),
                    DECK_SIZE
                );
                assert_eq!(usize::from(snapshot.played_count), snapshot.played.len());

                match snapshot.state {
                    GameState::Playing => {
                        let &id = snapshot.playable.first().expect("playing implies playable");
                        assert!(game.play_card(id).is_played());
                    }
                    GameState::Won => {
                        assert_eq!(snapshot.played_count, DECK_SIZE as u8);
                        assert!(snapshot.hand.is_empty());
                        break;
                    }
                    GameState::Lost => {
                        assert!(snapshot.playable.is_empty());
                        assert!(!snapshot.hand.is_empty());
                        break;
                    }
                }
            }
        }
    }
}

#[test]
fn stacked_deck_validation() {
    let mut short = stacked_deck(&[]);
    short.pop();
    assert_eq!(
        Game::with_stacked_deck(GameOptions::default(), 0, short).unwrap_err(),
        DeckError::WrongSize(51)
    );

    let mut duplicate_id = stacked_deck(&[]);
    duplicate_id[1].id = duplicate_id[0].id;
    assert_eq!(
        Game::with_stacked_deck(GameOptions::default(), 0, duplicate_id).unwrap_err(),
        DeckError::DuplicateId(1)
    );

    let mut duplicate_pair = stacked_deck(&[]);
    duplicate_pair[0].suit = duplicate_pair[1].suit;
    duplicate_pair[0].rank = duplicate_pair[1].rank;
    assert_eq!(
        Game::with_stacked_deck(GameOptions::default(), 0, duplicate_pair).unwrap_err(),
        DeckError::IncompleteCover
    );
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_mode(GameMode::Easy)
        .with_suit_bias(0.8);

    assert_eq!(options.mode, GameMode::Easy);
    assert_eq!(options.suit_bias, 0.8);

    let defaults = GameOptions::default();
    assert_eq!(defaults.mode, GameMode::Normal);
    assert_eq!(defaults.suit_bias, 0.6);
}
