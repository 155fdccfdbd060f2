//! Walkthrough of the deck API.

use deckrs::{Card, Deck, DeckError, Rank, Suit};

fn main() -> Result<(), DeckError> {
    println!("=== Deck demo ===");

    let mut deck = Deck::new();
    println!("Created a new deck with {} cards", deck.size());

    println!("\nTop 5 cards in order:");
    print_numbered(&deck.peek_n(5)?);

    println!("\nShuffling...");
    deck.shuffle();
    println!("Top 5 cards after shuffle:");
    print_numbered(&deck.peek_n(5)?);

    println!("\nDealing 5 cards:");
    let hand = deck.deal_n(5)?;
    for (i, card) in hand.iter().enumerate() {
        let color = if card.is_red() { "red" } else { "black" };
        let face = if card.is_face_card() { " (face card)" } else { "" };
        println!("{}. {} - {color}{face}", i + 1, format_card(card));
    }
    println!("\nCards remaining: {}", deck.size());

    let red = deck.filter(Card::is_red);
    println!("Red cards remaining: {}", red.size());

    println!("\nCards by suit:");
    let counts = deck.count_by_suit();
    for suit in Suit::ALL {
        let count = counts.get(&suit).copied().unwrap_or(0);
        println!("{suit}: {count}");
    }

    println!("\nCustom hand (royal flush), as dealt:");
    let mut royal = Deck::empty();
    for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace] {
        royal.add_card(Card::new(Suit::Spades, rank));
    }
    print_numbered(&royal.cards());

    println!("\nSorted:");
    royal.sort();
    print_numbered(&royal.cards());

    println!("\nInsert and remove:");
    let joker_stand_in = Card::new(Suit::Hearts, Rank::Two);
    royal.insert_card(joker_stand_in, 0)?;
    println!("Top after insert: {}", royal.peek()?);
    println!("Removed: {}", royal.remove_card(joker_stand_in));
    println!("Removed again: {}", royal.remove_card(joker_stand_in));

    if let Err(err) = royal.deal_n(royal.size() + 1) {
        println!("Dealing too many: {err}");
    }

    println!("\nReproducible shuffle with seed 42:");
    let mut first = Deck::new();
    let mut second = Deck::new();
    first.shuffle_with_seed(42);
    second.shuffle_with_seed(42);
    println!("Deck 1 top 3: {}", format_cards(&first.peek_n(3)?));
    println!("Deck 2 top 3: {}", format_cards(&second.peek_n(3)?));
    println!("Identical: {}", first == second);

    deck.reset();
    println!("\nAfter reset: {} cards, top {}", deck.size(), deck.peek()?);

    Ok(())
}

fn print_numbered(cards: &[Card]) {
    for (i, card) in cards.iter().enumerate() {
        println!("{}. {card} ({})", i + 1, format_card(card));
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.is_red() { "31" } else { "34" };
    colorize(&card.short_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
