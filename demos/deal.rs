//! Deals a shuffled deck to four players and plays a card.

use std::time::{SystemTime, UNIX_EPOCH};

use cardpile::{DisplayMode, SortOrder, Table, TableOptions, render};

fn print_hands(table: &Table) {
    for (player, hand) in table.hands().iter().enumerate() {
        println!("Player {player} {hand}");
    }
}

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = TableOptions::default().with_decks(1).with_players(4);
    let mut table = match Table::new(options, seed) {
        Ok(table) => table,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    println!("{table}");
    table.shuffle();
    println!("{table}");

    if let Err(err) = table.deal(13) {
        println!("Deal error: {err}");
        return;
    }
    print_hands(&table);

    println!("Sort");
    table.sort_hands(SortOrder::RankDescending);
    print_hands(&table);

    if let Some(hand) = table.hand(2) {
        println!("Player 2 by suit:\n{}", render(hand, DisplayMode::BySuit));
        if let Some(card) = hand.get(3) {
            println!(
                "Player 2, card 3: {card} Rank: {} Suit: {:?}",
                card.rank_label(),
                card.suit
            );
        }
    }

    match table.play_at(2, 3) {
        Ok(card) => println!("Play 2, 3 ({card})"),
        Err(err) => println!("Play error: {err}"),
    }
    if let Some(hand) = table.hand(2) {
        println!("Player 2 {hand}");
    }
}
