//! Deck integration tests.

use std::collections::HashSet;

use deckrs::{
    Card, CardStyle, DECK_SIZE, DealError, Deck, DeckError, Hand, HandsDisplay, PrintOptions,
    Rank, Suit, merge_sort_by, sort_order, sorts_before,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn descending_order() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds] {
        for rank in Rank::ALL.into_iter().rev() {
            cards.push(card(suit, rank));
        }
    }
    cards
}

fn shuffled(seed: i64) -> Deck {
    let mut deck = Deck::new();
    deck.shuffle(seed);
    deck
}

fn assert_full_deck(cards: &[Card]) {
    assert_eq!(cards.len(), DECK_SIZE);
    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(unique.contains(&card(suit, rank)), "missing {rank:?} of {suit:?}");
        }
    }
}

#[test]
fn new_deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), 52);
    assert!(!deck.is_empty());
    assert_full_deck(deck.cards());
}

#[test]
fn new_deck_is_in_construction_order() {
    let deck = Deck::new();
    let cards = deck.cards();

    assert_eq!(cards[0], card(Suit::Hearts, Rank::Ace));
    assert_eq!(cards[12], card(Suit::Hearts, Rank::King));
    assert_eq!(cards[13], card(Suit::Diamonds, Rank::Ace));
    assert_eq!(cards[51], card(Suit::Spades, Rank::King));
    assert_eq!(deck, Deck::default());
    assert!(!deck.is_sorted());
}

#[test]
fn rows_split_deck_by_thirteen() {
    let deck = Deck::new();
    let rows: Vec<&[Card]> = deck.rows().collect();

    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| row.len() == 13));
    assert!(rows[1].iter().all(|c| c.suit == Suit::Diamonds));
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    for seed in [0, 1, 42, -1, i64::MIN, i64::MAX] {
        assert_eq!(shuffled(seed), shuffled(seed), "seed {seed}");
    }
}

fn codes(deck: &Deck) -> Vec<String> {
    deck.iter().map(ToString::to_string).collect()
}

#[test]
fn shuffle_seed_42_order_is_pinned() {
    let expected = "QH 10C 8H JS 2S 10D 5D 7C KC 2D 6C 7H 4D 6D 9H 5S 8C 3S 7S JH 2C KD 8D 10S \
                    4C QS AS AC 8S 9C 10H 4H KS JD 2H 5H KH 9D AD AH 9S 6H JC 7D QD QC 5C 3H \
                    3C 3D 4S 6S";
    let expected: Vec<&str> = expected.split_whitespace().collect();

    assert_eq!(codes(&shuffled(42)), expected);
}

#[test]
fn shuffle_negative_seed_order_is_pinned() {
    let expected = "3H QH 4C AH 5C 8S 4S 9D 8D 2C JH 9C 10H AS KS AC 9H 10D 2D 3C 5S 4D 7D 5H \
                    2S JC QD 6H JS 8H 6C KC 7S 7H KD QC 6D 3D 3S 8C 6S 4H KH AD 10C 7C JD 5D \
                    9S QS 10S 2H";
    let expected: Vec<&str> = expected.split_whitespace().collect();

    assert_eq!(codes(&shuffled(-7)), expected);
}

#[test]
fn different_seeds_give_different_orders() {
    let seeds = [1, 2, 3, 42, 1337];
    let orders: Vec<Deck> = seeds.iter().map(|&seed| shuffled(seed)).collect();

    for (i, a) in orders.iter().enumerate() {
        for b in &orders[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(orders.iter().all(|deck| *deck != Deck::new()));
}

#[test]
fn shuffle_is_a_permutation() {
    for seed in [7, 42, -99] {
        let deck = shuffled(seed);
        assert_full_deck(deck.cards());
    }
}

#[test]
fn repeated_shuffles_keep_every_card() {
    let mut deck = Deck::new();
    for seed in 0..20 {
        deck.shuffle(seed);
    }
    assert_full_deck(deck.cards());
}

#[test]
fn deal_is_idempotent_and_read_only() {
    let deck = shuffled(42);
    let before = deck.clone();

    let first = deck.deal(2, 5).unwrap();
    let second = deck.deal(2, 5).unwrap();

    assert_eq!(first, second);
    assert_eq!(deck, before);
    assert_eq!(deck.len(), DECK_SIZE);
}

#[test]
fn deal_takes_contiguous_runs_in_order() {
    let deck = shuffled(5);
    let hands = deck.deal(3, 4).unwrap();

    assert_eq!(hands.len(), 3);
    for (set, hand) in hands.iter().enumerate() {
        assert_eq!(hand.cards(), &deck.cards()[set * 4..set * 4 + 4]);
    }
}

#[test]
fn deal_whole_deck() {
    let deck = Deck::new();

    let hands = deck.deal(4, 13).unwrap();
    let dealt: Vec<Card> = hands.iter().flat_map(Hand::iter).copied().collect();
    assert_eq!(dealt, deck.cards());

    assert_eq!(deck.deal(52, 1).unwrap().len(), 52);
}

#[test]
fn deal_empty_requests() {
    let deck = Deck::new();

    assert!(deck.deal(0, 5).unwrap().is_empty());

    let hands = deck.deal(3, 0).unwrap();
    assert_eq!(hands.len(), 3);
    assert!(hands.iter().all(Hand::is_empty));
}

#[test]
fn deal_caps_the_number_of_empty_hands() {
    let deck = Deck::new();

    assert_eq!(deck.deal(52, 0).unwrap().len(), 52);
    assert_eq!(
        deck.deal(53, 0).unwrap_err(),
        DealError::TooManyHands { sets: 53, max: 52 }
    );
    assert_eq!(
        deck.deal(usize::MAX, 0).unwrap_err(),
        DealError::TooManyHands {
            sets: usize::MAX,
            max: 52
        }
    );
    assert_eq!(
        deck.deal(53, 0).unwrap_err().to_string(),
        "too many hands: requested 53, at most 52"
    );
}

#[test]
fn deal_errors() {
    let deck = Deck::new();

    assert_eq!(
        deck.deal(5, 11).unwrap_err(),
        DealError::InsufficientCards {
            requested: 55,
            available: 52
        }
    );
    assert_eq!(
        deck.deal(53, 1).unwrap_err(),
        DealError::InsufficientCards {
            requested: 53,
            available: 52
        }
    );
    assert_eq!(
        deck.deal(usize::MAX, 2).unwrap_err(),
        DealError::InsufficientCards {
            requested: usize::MAX,
            available: 52
        }
    );
    assert_eq!(
        deck.deal(5, 11).unwrap_err().to_string(),
        "insufficient cards: requested 55, available 52"
    );
}

#[test]
fn sort_orders_every_adjacent_pair() {
    let mut deck = shuffled(11);
    deck.sort();

    for pair in deck.cards().windows(2) {
        assert!(sorts_before(&pair[0], &pair[1]), "{} !< {}", pair[0], pair[1]);
    }
    assert!(deck.is_sorted());
}

#[test]
fn sort_groups_suits_and_ranks() {
    let mut deck = shuffled(3);
    deck.sort();

    let rows: Vec<&[Card]> = deck.rows().collect();
    let suits = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];
    for (row, suit) in rows.iter().zip(suits) {
        assert!(row.iter().all(|c| c.suit == suit));
        assert_eq!(row[0].rank, Rank::King);
        assert_eq!(row[1].rank, Rank::Queen);
        assert_eq!(row[2].rank, Rank::Jack);
        assert_eq!(row[3].rank, Rank::Ten);
        assert_eq!(row[11].rank, Rank::Two);
        assert_eq!(row[12].rank, Rank::Ace);
    }
}

#[test]
fn sort_is_idempotent() {
    let mut deck = shuffled(8);
    deck.sort();
    let once = deck.clone();
    deck.sort();
    assert_eq!(deck, once);
}

#[test]
fn shuffle_then_sort_gives_canonical_order() {
    let expected = descending_order();

    let mut deck = shuffled(42);
    deck.sort();
    assert_eq!(deck.cards(), expected.as_slice());

    for seed in [-5, 0, 9_000] {
        let mut deck = shuffled(seed);
        deck.sort();
        assert_eq!(deck.cards(), expected.as_slice(), "seed {seed}");
    }

    let mut fresh = Deck::new();
    fresh.sort();
    assert_eq!(fresh.cards(), expected.as_slice());
}

#[test]
fn merge_sort_matches_slice_sort() {
    for seed in [1, 2, 3] {
        let deck = shuffled(seed);

        let mut merged = deck.cards().to_vec();
        merge_sort_by(&mut merged, sorts_before);

        let mut std_sorted = deck.cards().to_vec();
        std_sorted.sort_by(sort_order);

        assert_eq!(merged, std_sorted);
    }
}

#[test]
fn merge_sort_is_stable() {
    let mut items = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd'), (1, 'e'), (3, 'f')];
    merge_sort_by(&mut items, |a, b| a.0 < b.0);

    assert_eq!(
        items,
        [(1, 'b'), (1, 'e'), (2, 'd'), (3, 'a'), (3, 'c'), (3, 'f')]
    );

    let mut empty: [u8; 0] = [];
    merge_sort_by(&mut empty, |a, b| a < b);
    let mut single = [9];
    merge_sort_by(&mut single, |a, b| a < b);
    assert_eq!(single, [9]);
}

#[test]
fn from_cards_accepts_any_full_order() {
    let cards = descending_order();
    let deck = Deck::from_cards(cards.clone()).unwrap();
    assert_eq!(deck.cards(), cards.as_slice());
    assert!(deck.is_sorted());

    let restored = Deck::from_cards(shuffled(4).cards().to_vec()).unwrap();
    assert_eq!(restored, shuffled(4));
}

#[test]
fn from_cards_errors() {
    let mut cards = Deck::new().cards().to_vec();
    cards.pop();
    assert_eq!(
        Deck::from_cards(cards.clone()).unwrap_err(),
        DeckError::WrongCardCount {
            expected: 52,
            found: 51
        }
    );

    cards.push(cards[0]);
    assert_eq!(
        Deck::from_cards(cards).unwrap_err(),
        DeckError::DuplicateCard(card(Suit::Hearts, Rank::Ace))
    );

    assert_eq!(
        Deck::from_cards(Vec::new()).unwrap_err().to_string(),
        "expected 52 cards, found 0"
    );
}

#[test]
fn deck_display_rows() {
    let deck = Deck::new();
    let text = deck.display(PrintOptions::default()).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "AH 2H 3H 4H 5H 6H 7H 8H 9H 10H JH QH KH");
    assert_eq!(lines[3], "AS 2S 3S 4S 5S 6S 7S 8S 9S 10S JS QS KS");
}

#[test]
fn deck_display_options() {
    let deck = Deck::new();
    let options = PrintOptions::default()
        .with_row_len(2)
        .with_style(CardStyle::Name)
        .with_separator(", ");
    let text = deck.display(options).to_string();

    assert_eq!(text.lines().count(), 26);
    assert_eq!(text.lines().next(), Some("Ace of Hearts, Two of Hearts"));

    let single = deck.display(PrintOptions::default().with_row_len(0)).to_string();
    assert_eq!(single.lines().count(), 52);
}

#[test]
fn hands_display_separates_sets() {
    let mut deck = Deck::new();
    deck.sort();
    let hands = deck.deal(2, 2).unwrap();

    let text = HandsDisplay::new(&hands, PrintOptions::default()).to_string();
    assert_eq!(text, "KS QS\n\nJS 10S\n");
    assert_eq!(hands[0].to_string(), "KS QS");

    assert_eq!(
        HandsDisplay::new(&[], PrintOptions::default()).to_string(),
        ""
    );
}
