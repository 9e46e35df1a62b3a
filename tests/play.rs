//! Deck, hand and play-legality tests.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use unors::{
    Card, CardKind, Colour, DECK_SIZE, Deck, DeckOptions, DrawError, Hand, TopCard, is_playable,
    standard_cards,
};

fn normal(colour: Colour, number: u8) -> Card {
    Card::normal(colour, number).unwrap()
}

/// Builds a hand that holds `cards` in the given order.
fn hand_of(cards: &[Card]) -> Hand {
    let mut draws = cards.to_vec();
    draws.reverse();
    let mut deck = Deck::from_cards(draws);
    let mut hand = Hand::new();
    while !deck.is_empty() {
        hand.pick_up(&mut deck).unwrap();
    }
    hand
}

fn count_kind(cards: &[Card], kind: CardKind) -> usize {
    cards.iter().filter(|card| card.kind() == kind).count()
}

#[test]
fn standard_composition_counts() {
    let cards = standard_cards();
    assert_eq!(cards.len(), DECK_SIZE);
    assert_eq!(count_kind(&cards, CardKind::Normal), 76);
    assert_eq!(count_kind(&cards, CardKind::Skip), 8);
    assert_eq!(count_kind(&cards, CardKind::DrawTwo), 8);
    assert_eq!(count_kind(&cards, CardKind::Reverse), 8);
    assert_eq!(count_kind(&cards, CardKind::Wild), 4);
    assert_eq!(count_kind(&cards, CardKind::WildDrawFour), 4);

    let deck = Deck::from_cards(cards);
    let tally = deck.tally();
    for colour in Colour::ALL {
        assert_eq!(tally[&normal(colour, 0)], 1);
        for number in 1..=9 {
            assert_eq!(tally[&normal(colour, number)], 2);
        }
        assert_eq!(tally[&Card::Skip(colour)], 2);
        assert_eq!(tally[&Card::DrawTwo(colour)], 2);
        assert_eq!(tally[&Card::Reverse(colour)], 2);
    }
    assert_eq!(tally[&Card::Wild], 4);
    assert_eq!(tally[&Card::WildDrawFour], 4);
}

#[test]
fn shuffled_deck_is_a_permutation_of_the_composition() {
    let unshuffled = Deck::from_cards(standard_cards());
    let deck = Deck::from_seed(1);
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.tally(), unshuffled.tally());
}

#[test]
fn seeds_control_the_order() {
    assert_eq!(Deck::from_seed(99), Deck::from_seed(99));

    let orders: Vec<Deck> = (0..4).map(Deck::from_seed).collect();
    assert!(orders.windows(2).any(|pair| pair[0] != pair[1]));
    assert!(orders.iter().any(|deck| deck.cards() != standard_cards()));
}

#[test]
fn options_build_multiple_sets() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let options = DeckOptions::default().with_decks(2);
    let deck = Deck::with_options(&options, &mut rng);
    assert_eq!(deck.len(), options.total_cards());
    assert_eq!(deck.len(), 2 * DECK_SIZE);
    assert_eq!(deck.tally()[&Card::Wild], 8);

    let empty = Deck::with_options(&DeckOptions::default().with_decks(0), &mut rng);
    assert!(empty.is_empty());
}

#[test]
fn drawing_every_card_then_one_more_fails() {
    let mut deck = Deck::from_seed(3);
    for remaining in (0..DECK_SIZE).rev() {
        deck.draw().unwrap();
        assert_eq!(deck.len(), remaining);
    }
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DrawError::EmptyDeck));
    assert_eq!(DrawError::EmptyDeck.to_string(), "no cards left in the deck");
}

#[test]
fn draw_takes_from_the_end() {
    let mut deck = Deck::from_cards(vec![Card::Wild, Card::Skip(Colour::Red)]);
    assert_eq!(deck.draw(), Ok(Card::Skip(Colour::Red)));
    assert_eq!(deck.draw(), Ok(Card::Wild));
}

#[test]
fn pick_up_moves_one_card() {
    let mut deck = Deck::from_seed(11);
    let next = *deck.cards().last().unwrap();
    let mut hand = Hand::new();

    hand.pick_up(&mut deck).unwrap();
    assert_eq!(hand.len(), 1);
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert_eq!(hand.get(0), Some(&next));

    hand.pick_up(&mut deck).unwrap();
    assert_eq!(hand.len(), 2);
    assert_eq!(deck.len(), DECK_SIZE - 2);
}

#[test]
fn pick_up_from_empty_deck_propagates() {
    let mut deck = Deck::from_cards(Vec::new());
    let mut hand = hand_of(&[Card::Wild]);
    assert_eq!(hand.pick_up(&mut deck), Err(DrawError::EmptyDeck));
    assert_eq!(hand.cards(), [Card::Wild]);
}

#[test]
fn colour_or_number_matches_a_normal_card() {
    let hand = hand_of(&[
        normal(Colour::Red, 7),
        normal(Colour::Blue, 5),
        Card::Skip(Colour::Green),
        Card::Wild,
    ]);
    let top = normal(Colour::Red, 5);

    let playable: Vec<Card> = hand.can_play_on(top).copied().collect();
    assert_eq!(
        playable,
        [normal(Colour::Red, 7), normal(Colour::Blue, 5), Card::Wild]
    );
}

#[test]
fn only_kind_matches_an_action_card() {
    let hand = hand_of(&[
        normal(Colour::Yellow, 3),
        Card::Skip(Colour::Yellow),
        Card::Skip(Colour::Blue),
        Card::DrawTwo(Colour::Yellow),
    ]);

    let playable: Vec<Card> = hand.can_play_on(Card::Skip(Colour::Yellow)).copied().collect();
    assert_eq!(playable, [Card::Skip(Colour::Yellow), Card::Skip(Colour::Blue)]);

    let on_reverse: Vec<Card> = hand.can_play_on(Card::Reverse(Colour::Yellow)).copied().collect();
    assert!(on_reverse.is_empty());
}

#[test]
fn normal_card_cannot_follow_same_colour_skip() {
    let top = TopCard::new(Card::DrawTwo(Colour::Green));
    assert!(!is_playable(&normal(Colour::Green, 2), &top));
    assert!(is_playable(&Card::DrawTwo(Colour::Red), &top));
    assert!(is_playable(&Card::WildDrawFour, &top));
}

#[test]
fn declared_colour_applies_to_wild_top_card() {
    let hand = hand_of(&[
        normal(Colour::Blue, 1),
        normal(Colour::Red, 1),
        Card::Reverse(Colour::Blue),
        Card::WildDrawFour,
    ]);
    let top = TopCard::new(Card::Wild).declare(Colour::Blue);
    assert_eq!(top.colour(), Some(Colour::Blue));

    let playable: Vec<Card> = hand.can_play_on(top).copied().collect();
    assert_eq!(
        playable,
        [normal(Colour::Blue, 1), Card::Reverse(Colour::Blue), Card::WildDrawFour]
    );

    let undeclared = TopCard::new(Card::WildDrawFour);
    assert_eq!(hand.can_play_on(undeclared).count(), hand.len());
}

#[test]
fn declared_colour_is_ignored_on_coloured_cards() {
    let top = TopCard::new(normal(Colour::Red, 4)).declare(Colour::Blue);
    assert_eq!(top.colour(), Some(Colour::Red));
    assert!(!is_playable(&normal(Colour::Blue, 8), &top));
}

#[test]
fn nothing_playable_is_an_empty_sequence() {
    let hand = hand_of(&[normal(Colour::Green, 1), Card::Skip(Colour::Green)]);
    assert_eq!(hand.can_play_on(normal(Colour::Red, 9)).next(), None);
    assert_eq!(Hand::new().can_play_on(Card::Wild).count(), 0);
}

fn any_card() -> impl Strategy<Value = Card> {
    let colour = prop_oneof![
        Just(Colour::Red),
        Just(Colour::Green),
        Just(Colour::Yellow),
        Just(Colour::Blue),
    ];
    prop_oneof![
        (colour.clone(), 0u8..=9).prop_map(|(c, n)| normal(c, n)),
        colour.clone().prop_map(Card::Skip),
        colour.clone().prop_map(Card::DrawTwo),
        colour.prop_map(Card::Reverse),
        Just(Card::Wild),
        Just(Card::WildDrawFour),
    ]
}

proptest! {
    #[test]
    fn wild_cards_are_always_playable(top in any_card()) {
        prop_assert!(is_playable(&Card::Wild, &TopCard::new(top)));
        prop_assert!(is_playable(&Card::WildDrawFour, &TopCard::new(top)));
    }

    #[test]
    fn every_card_plays_on_itself(card in any_card()) {
        prop_assert!(is_playable(&card, &TopCard::new(card)));
    }

    #[test]
    fn legality_is_ordered_and_repeatable(
        cards in proptest::collection::vec(any_card(), 0..20),
        top in any_card(),
    ) {
        let hand = hand_of(&cards);
        let first: Vec<Card> = hand.can_play_on(top).copied().collect();
        let second: Vec<Card> = hand.can_play_on(top).copied().collect();
        prop_assert_eq!(&first, &second);

        let expected: Vec<Card> = cards
            .iter()
            .copied()
            .filter(|card| is_playable(card, &TopCard::new(top)))
            .collect();
        prop_assert_eq!(first, expected);
    }

    #[test]
    fn shuffle_keeps_the_multiset(seed in any::<u64>()) {
        let deck = Deck::from_seed(seed);
        prop_assert_eq!(deck.tally(), Deck::from_cards(standard_cards()).tally());
    }
}
