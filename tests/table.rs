//! Table integration tests.

use cardpile::{
    Card, DealError, Deck, DrawError, PlayError, SetupError, SortOrder, Suit, Table, TableOptions,
};
use rstest::rstest;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn table(decks: u32, players: usize, jokers: bool) -> Table {
    let options = TableOptions::default()
        .with_decks(decks)
        .with_players(players)
        .with_jokers(jokers);
    Table::new(options, 42).unwrap()
}

fn assert_conserved(table: &Table) {
    let in_hands: usize = table.hands().iter().map(Deck::len).sum();
    assert_eq!(
        table.cards_remaining() + in_hands + table.discard().len(),
        table.total_cards()
    );
}

fn sorted(cards: impl IntoIterator<Item = Card>) -> Deck {
    let mut deck: Deck = cards.into_iter().collect();
    deck.sort(SortOrder::RankAscending);
    deck
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default()
        .with_decks(3)
        .with_players(5)
        .with_jokers(true)
        .with_shuffle_repeats(10)
        .with_hand_order(SortOrder::SuitDescending);

    assert_eq!(options.decks, 3);
    assert_eq!(options.players, 5);
    assert!(options.jokers);
    assert_eq!(options.shuffle_repeats, 10);
    assert_eq!(options.hand_order, SortOrder::SuitDescending);
    assert_eq!(options.total_cards(), 3 * 54);

    let defaults = TableOptions::default();
    assert_eq!(defaults.decks, 1);
    assert_eq!(defaults.players, 2);
    assert!(!defaults.jokers);
    assert_eq!(defaults.shuffle_repeats, 1000);
    assert_eq!(defaults.hand_order, SortOrder::RankDescending);
}

#[rstest]
#[case(1, 1, false, 52)]
#[case(1, 4, true, 54)]
#[case(2, 3, false, 104)]
#[case(3, 2, true, 162)]
fn construction_sizes(
    #[case] decks: u32,
    #[case] players: usize,
    #[case] jokers: bool,
    #[case] expected: usize,
) {
    let table = table(decks, players, jokers);

    assert_eq!(table.cards_remaining(), expected);
    assert_eq!(table.total_cards(), expected);
    assert_eq!(table.player_count(), players);
    assert!(table.hands().iter().all(Deck::is_empty));
    assert!(table.discard().is_empty());
    let jokers_in_pile = table.pile().iter().filter(|c| c.is_joker()).count();
    assert_eq!(jokers_in_pile, if jokers { 2 * decks as usize } else { 0 });
}

#[test]
fn zero_players_is_rejected() {
    let options = TableOptions::default().with_players(0);
    assert_eq!(Table::new(options, 1).unwrap_err(), SetupError::NoPlayers);
}

#[test]
fn pile_is_unshuffled_until_shuffle() {
    let mut table = table(1, 2, false);
    assert_eq!(table.pile(), &Deck::standard(false));

    table.shuffle();
    assert_ne!(table.pile(), &Deck::standard(false));
    assert_eq!(
        sorted(table.pile().iter().copied()),
        sorted(Deck::standard(false).iter().copied())
    );
    assert_conserved(&table);
}

#[test]
fn same_seed_shuffles_alike() {
    let mut a = table(2, 2, true);
    let mut b = table(2, 2, true);
    a.shuffle();
    b.shuffle();
    assert_eq!(a.pile(), b.pile());

    let options = TableOptions::default().with_decks(2).with_jokers(true);
    let mut reseeded = table(2, 2, true);
    reseeded.reseed(9);
    reseeded.shuffle();
    let mut fresh = Table::new(options, 9).unwrap();
    fresh.shuffle();
    assert_eq!(reseeded.pile(), fresh.pile());
    assert_ne!(reseeded.pile(), a.pile());
}

#[test]
fn shuffle_with_zero_repeats_is_noop() {
    let mut table = table(1, 2, false);
    table.shuffle_with(0);
    assert_eq!(table.pile(), &Deck::standard(false));
}

#[test]
fn deal_round_robin_from_pile_end() {
    let mut table = table(1, 4, false);

    assert_eq!(table.deal(13).unwrap(), 52);
    assert_eq!(table.cards_remaining(), 0);
    for hand in table.hands() {
        assert_eq!(hand.len(), 13);
    }

    let hands = table.hands();
    assert_eq!(hands[0][0], card(Suit::Spade, 13));
    assert_eq!(hands[1][0], card(Suit::Spade, 12));
    assert_eq!(hands[2][0], card(Suit::Spade, 11));
    assert_eq!(hands[3][0], card(Suit::Spade, 10));
    assert_eq!(hands[0][1], card(Suit::Spade, 9));
    assert_eq!(hands[0][12], card(Suit::Club, 4));
    assert_eq!(hands[3][12], card(Suit::Club, 1));
    assert_conserved(&table);
}

#[test]
fn deal_partial_amount_leaves_rest_in_pile() {
    let mut table = table(1, 3, true);

    assert_eq!(table.deal(5).unwrap(), 15);
    assert_eq!(table.cards_remaining(), 54 - 15);
    assert!(table.hands().iter().all(|h| h.len() == 5));
    assert_eq!(table.hand(0).unwrap()[0], Card::joker());
    assert_eq!(table.hand(1).unwrap()[0], Card::joker());
    assert_conserved(&table);
}

#[test]
fn deal_without_enough_cards_moves_nothing() {
    let mut table = table(1, 4, false);

    assert_eq!(
        table.deal(14).unwrap_err(),
        DealError::NotEnoughCards {
            needed: 56,
            remaining: 52
        }
    );
    assert_eq!(table.cards_remaining(), 52);
    assert!(table.hands().iter().all(Deck::is_empty));
}

#[test]
fn deal_available_stops_when_pile_runs_out() {
    let mut table = table(1, 3, false);

    assert_eq!(table.deal_available(20), 52);
    assert_eq!(table.cards_remaining(), 0);
    assert_eq!(table.hand(0).unwrap().len(), 18);
    assert_eq!(table.hand(1).unwrap().len(), 17);
    assert_eq!(table.hand(2).unwrap().len(), 17);
    assert_eq!(table.deal_available(1), 0);
    assert_conserved(&table);
}

#[test]
fn draw_moves_pile_end_into_hand() {
    let mut table = table(1, 2, false);

    assert_eq!(table.draw(1).unwrap(), card(Suit::Spade, 13));
    assert_eq!(table.hand(1).unwrap().cards(), &[card(Suit::Spade, 13)]);
    assert_eq!(table.cards_remaining(), 51);
    assert_eq!(table.draw(2).unwrap_err(), DrawError::PlayerOutOfRange);
    assert_conserved(&table);
}

#[test]
fn draw_from_empty_pile_fails() {
    let mut table = table(1, 1, false);
    table.deal(52).unwrap();

    assert_eq!(table.draw(0).unwrap_err(), DrawError::NoCards);
    assert_eq!(table.hand(0).unwrap().len(), 52);
}

#[test]
fn play_moves_card_to_discard() {
    let mut table = table(1, 4, false);
    table.shuffle();
    table.deal(13).unwrap();

    let held = table.hand(2).unwrap()[5];
    assert_eq!(table.play(2, held).unwrap(), held);
    assert_eq!(table.hand(2).unwrap().len(), 12);
    assert!(!table.hand(2).unwrap().contains(&held));
    assert_eq!(table.discard().cards(), &[held]);
    assert_conserved(&table);
}

#[test]
fn play_errors_leave_hand_unchanged() {
    let mut table = table(1, 4, false);
    table.deal(13).unwrap();
    let before = table.hand(0).unwrap().clone();

    // Player 1 was dealt the queen of spades.
    assert_eq!(
        table.play(0, card(Suit::Spade, 12)).unwrap_err(),
        PlayError::CardNotFound
    );
    assert_eq!(
        table.play(4, card(Suit::Spade, 13)).unwrap_err(),
        PlayError::PlayerOutOfRange
    );
    assert_eq!(table.play_at(0, 13).unwrap_err(), PlayError::IndexOutOfRange);
    assert_eq!(table.play_at(9, 0).unwrap_err(), PlayError::PlayerOutOfRange);
    assert_eq!(table.hand(0).unwrap(), &before);
    assert!(table.discard().is_empty());
}

#[test]
fn play_duplicate_card_removes_one_copy() {
    let mut table = table(2, 1, true);
    table.deal(108).unwrap();

    table.play(0, Card::joker()).unwrap();
    let jokers = table.hand(0).unwrap().iter().filter(|c| c.is_joker()).count();
    assert_eq!(jokers, 3);
    assert_conserved(&table);
}

#[test]
fn play_at_removes_by_position() {
    let mut table = table(1, 4, false);
    table.deal(13).unwrap();
    table.sort_hands(SortOrder::RankDescending);

    let expected = table.hand(2).unwrap()[3];
    assert_eq!(table.play_at(2, 3).unwrap(), expected);
    assert_eq!(table.hand(2).unwrap().len(), 12);
    assert_conserved(&table);
}

#[rstest]
#[case(SortOrder::RankDescending)]
#[case(SortOrder::SuitDescending)]
#[case(SortOrder::RankAscending)]
fn sort_hands_sorts_every_hand(#[case] order: SortOrder) {
    let mut table = table(1, 4, false);
    table.shuffle();
    table.deal(13).unwrap();
    let before: Vec<Deck> = table.hands().to_vec();

    table.sort_hands(order);

    for (hand, original) in table.hands().iter().zip(&before) {
        assert!(
            hand.cards()
                .windows(2)
                .all(|w| order.compare(&w[0], &w[1]).is_le())
        );
        assert_eq!(sorted(hand.iter().copied()), sorted(original.iter().copied()));
    }
}

#[test]
fn sort_hands_default_uses_configured_order() {
    let options = TableOptions::default()
        .with_players(2)
        .with_hand_order(SortOrder::RankAscending);
    let mut table = Table::new(options, 3).unwrap();
    table.shuffle();
    table.deal(10).unwrap();

    table.sort_hands_default();
    let mut expected = table.hand(0).unwrap().clone();
    expected.sort(SortOrder::RankAscending);
    assert_eq!(table.hand(0).unwrap(), &expected);
}

#[test]
fn collect_returns_all_cards_to_pile() {
    let mut table = table(1, 4, false);
    table.shuffle();
    table.deal(10).unwrap();
    table.play_at(1, 0).unwrap();
    table.draw(3).unwrap();

    table.collect();

    assert_eq!(table.cards_remaining(), 52);
    assert!(table.hands().iter().all(Deck::is_empty));
    assert!(table.discard().is_empty());
    assert_eq!(
        sorted(table.pile().iter().copied()),
        sorted(Deck::standard(false).iter().copied())
    );
}

#[test]
fn hand_accessors_check_bounds() {
    let mut table = table(1, 2, false);
    assert!(table.hand(2).is_none());
    assert!(table.hand_mut(2).is_none());

    table.draw(0).unwrap();
    let hand = table.hand_mut(0).unwrap();
    hand.sort(SortOrder::SuitDescending);
    assert_eq!(hand.len(), 1);
}

#[test]
fn four_player_session() {
    let mut table = table(1, 4, false);
    table.shuffle();
    table.deal(13).unwrap();

    assert!(table.hands().iter().all(|h| h.len() == 13));
    assert_eq!(table.cards_remaining(), 0);

    let held = table.hand(2).unwrap()[0];
    table.play(2, held).unwrap();
    assert_eq!(table.hand(2).unwrap().len(), 12);
    assert!(!table.hand(2).unwrap().contains(&held));
    assert_conserved(&table);
}
