// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{CardSet, Error, Result};

#[cfg(feature = "parallel")]
mod parallel;

/// A Poker card.
///
/// A card is the index of its bit in a [CardSet](crate::CardSet) mask, each
/// suit takes a 16 bits lane and the rank is the offset in the lane:
///
/// ```text
///   +--------+
///   |xxsspppp|   (pppp < 13)
///   +--------+
///   ss   = suit of card (spades=0,hearts=1,diamonds=2,clubs=3)
///   pppp = rank of card (deuce=0,trey=1,four=2,five=3,...,ace=12)
/// ```
///
/// Cards serialize as their id, deserializing an id that is not a card is an
/// [Error::InvalidCardId].
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Card(u8);

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(((suit as u8) << 4) | rank as u8)
    }

    /// Create a card from a numeric rank (2..=14, ace is 14) and a numeric
    /// suit (0..=3 for spades, hearts, diamonds, clubs).
    ///
    /// ```
    /// # use riverbed_cards::{Card, Rank, Suit};
    /// let card = Card::try_from_pair(14, 1).unwrap();
    /// assert_eq!(card, Card::new(Rank::Ace, Suit::Hearts));
    /// assert!(Card::try_from_pair(15, 1).is_err());
    /// assert!(Card::try_from_pair(270, 1).is_err());
    /// ```
    pub fn try_from_pair(rank: i32, suit: i32) -> Result<Card> {
        let r = u8::try_from(rank).ok().and_then(Rank::from_value);
        let s = u8::try_from(suit).ok().and_then(Suit::from_index);
        match (r, s) {
            (Some(r), Some(s)) => Ok(Card::new(r, s)),
            _ => Err(Error::InvalidCard { rank, suit }),
        }
    }

    /// This card unique id, the position of the card bit in a card set.
    #[inline]
    pub const fn id(&self) -> u8 {
        self.0
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.suit_bits() {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Diamonds,
            _ => Suit::Clubs,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        Rank::from_index(self.rank_bits())
    }

    /// Returns the rank bits.
    #[inline]
    pub const fn rank_bits(&self) -> u8 {
        self.0 & 0xf
    }

    /// Returns the suit bits.
    #[inline]
    pub const fn suit_bits(&self) -> u8 {
        (self.0 >> 4) & 0x3
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank(), self.suit())
    }
}

impl TryFrom<u8> for Card {
    type Error = Error;

    fn try_from(id: u8) -> Result<Card> {
        if id & 0xf < 13 && id >> 6 == 0 {
            Ok(Card(id))
        } else {
            Err(Error::InvalidCardId(id))
        }
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.0
    }
}

impl FromStr for Card {
    type Err = Error;

    /// Parses a card like `As`, `td` or `10h`.
    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::ParseCard(s.to_string());

        let text = s.trim();
        let (rank, rest) = match text.strip_prefix("10") {
            Some(rest) => (Some(Rank::Ten), rest),
            None => {
                let mut chars = text.chars();
                (chars.next().and_then(Rank::from_char), chars.as_str())
            }
        };

        let mut chars = rest.chars();
        match (rank, chars.next().and_then(Suit::from_char), chars.next()) {
            (Some(rank), Some(suit), None) => Ok(Card::new(rank, suit)),
            _ => Err(err()),
        }
    }
}

/// Parses a list of cards separated by whitespace or commas.
///
/// ```
/// # use riverbed_cards::parse_cards;
/// let cards = parse_cards("As Kd, 7c").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert!(parse_cards("As Xd").is_err());
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    const ALL: [Rank; 13] = {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        Self::ALL.into_iter()
    }

    /// Returns the rank for a 0-based index, deuce is 0 and ace 12.
    ///
    /// Panics if the index is greater than 12.
    #[inline]
    pub fn from_index(idx: u8) -> Rank {
        Self::ALL[idx as usize]
    }

    /// Returns the rank for a face value, deuce is 2 and ace 14.
    pub fn from_value(value: u8) -> Option<Rank> {
        (2..=14)
            .contains(&value)
            .then(|| Self::from_index(value - 2))
    }

    /// The rank face value, deuce is 2 and ace 14.
    pub fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Parses a rank character.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit.
    Spades = 0,
    /// Hearts suit.
    Hearts = 1,
    /// Diamonds suit.
    Diamonds = 2,
    /// Clubs suit.
    Clubs = 3,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs].into_iter()
    }

    /// Returns the suit for an index in 0..=3.
    pub fn from_index(idx: u8) -> Option<Suit> {
        Self::suits().nth(idx as usize)
    }

    /// Parses a suit character.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spades),
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns None if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure with the cards of each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let mut h = [Card(0); 7];
        for_each_combination(self.cards.len(), k, |positions| {
            for (slot, pos) in h.iter_mut().zip(Positions(positions)) {
                *slot = self.cards[pos];
            }

            f(&h[0..k]);
        });
    }

    /// Calls the `f` closure with the card set of each k-cards hand.
    ///
    /// ```
    /// # use riverbed_cards::Deck;
    /// let mut count = 0;
    /// Deck::default().for_each_set(2, |hand| {
    ///     assert_eq!(hand.len(), 2);
    ///     count += 1;
    /// });
    /// assert_eq!(count, 1_326);
    /// ```
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each_set<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(CardSet),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");
        for_each_combination(self.cards.len(), k, |positions| f(self.hand_set(positions)));
    }

    /// The set of the cards at the deck positions in the `positions` mask.
    fn hand_set(&self, positions: u64) -> CardSet {
        Positions(positions).map(|pos| self.cards[pos]).collect()
    }
}

/// Calls `f` with each mask of `k` bits set among the lowest `n` bits, in
/// increasing order.
fn for_each_combination<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(u64),
{
    if k == 0 || k > n {
        return;
    }

    let end = 1u64 << n;
    let mut x = (1u64 << k) - 1;
    while x < end {
        f(x);

        // Next mask with the same number of bits (Gosper's hack).
        let low = x & x.wrapping_neg();
        let ripple = x + low;
        x = (((ripple ^ x) >> 2) / low) | ripple;
    }
}

/// Iterator over the set bits positions of a mask, lowest first.
struct Positions(u64);

impl Iterator for Positions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }

        let pos = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(pos)
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(card.id() & 0xF, card.rank() as u8);
            assert_eq!(card.id() >> 4, card.suit() as u8);
            assert_eq!(Card::new(card.rank(), card.suit()), card);
            cards.insert(card.id());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);

        let kd = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(kd.id(), 0x2b);

        let fs = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(fs.id(), 0x03);
    }

    #[test]
    fn card_from_pair() {
        let c = Card::try_from_pair(2, 0).unwrap();
        assert_eq!(c, Card::new(Rank::Deuce, Suit::Spades));

        let c = Card::try_from_pair(14, 3).unwrap();
        assert_eq!(c, Card::new(Rank::Ace, Suit::Clubs));

        for (rank, suit) in [(1, 0), (0, 0), (15, 2), (10, 4), (-1, 0), (2, -3), (270, 0), (14, 256)] {
            assert_eq!(
                Card::try_from_pair(rank, suit),
                Err(Error::InvalidCard { rank, suit })
            );
        }

        for rank in Rank::ranks() {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "AH");
    }

    #[test]
    fn card_from_string() {
        assert_eq!("As".parse(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("td".parse(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("10h".parse(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
        assert_eq!("2C".parse(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));

        for s in ["", "A", "Ax", "1s", "Asd", "11h", "10", "é", "ñs", "Aé", "1é", "10é", "Ké5"] {
            assert_eq!(s.parse::<Card>(), Err(Error::ParseCard(s.to_string())));
        }

        for card in Deck::default() {
            assert_eq!(card.to_string().parse(), Ok(card));
        }
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    // Goes through 133M hands, slow in debug mode.
    #[test]
    #[ignore]
    fn deck_for_each_7cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 133_784_560);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
            count += 1;
        });
        assert_eq!(count, 2_118_760);
    }

    #[test]
    fn deck_for_each_set() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Deuce, Suit::Clubs));

        let mut hands = HashSet::default();
        deck.for_each_set(4, |hand| {
            assert_eq!(hand.len(), 4);
            assert!(!hand.contains(Card::new(Rank::Deuce, Suit::Clubs)));
            hands.insert(hand);
        });
        assert_eq!(hands.len(), 249_900);

        // Same hands as the cards enumeration.
        deck.for_each(4, |cards| {
            assert!(hands.remove(&CardSet::from_cards(cards).unwrap()));
        });
        assert!(hands.is_empty());
    }

    #[test]
    fn deck_for_each_short_deck() {
        let mut deck = Deck::default();
        for card in Deck::default().into_iter().skip(4) {
            deck.remove(card);
        }
        assert_eq!(deck.count(), 4);

        let mut hands = Vec::new();
        deck.for_each(3, |cards| hands.push(cards.to_vec()));
        assert_eq!(hands.len(), 4);

        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn card_serde() {
        let ks = Card::new(Rank::King, Suit::Spades);
        let json = serde_json::to_string(&ks).unwrap();
        assert_eq!(json, "11");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), ks);

        for card in Deck::default() {
            let json = serde_json::to_string(&card).unwrap();
            assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
        }

        // Ids that are not cards.
        for id in [13u8, 15, 0x1d, 0x40, 0x4c, 255] {
            assert_eq!(Card::try_from(id), Err(Error::InvalidCardId(id)));
            assert!(serde_json::from_str::<Card>(&id.to_string()).is_err());
        }
    }
}
