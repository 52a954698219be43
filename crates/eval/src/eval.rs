// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator works on the per suit ranks masks of a [CardSet], it finds
//! the best category directly using bitwise operations and two compile time
//! lookup tables instead of checking the 21 five cards subsets of a 7 cards
//! hand.
//!
//! The hand value is a `u32` with the following format:
//!
//! ```text
//!   +--------+--------+--------+--------+
//!   |xxxxxxxx|xxxxcccc|aaaabbbb|ddddeeee|  (plus f in bits 16..20)
//!   +--------+--------+--------+--------+
//!   c = hand rank (high card=0,...,straight flush=8)
//!   f,a,b,d,e = the five hand ranks in descending significance
//! ```
//!
//! ranks of a pair, trips, or quads are repeated for each card so that
//! comparing two values compares category, groups, and kickers in order.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, CardSet, Error, Rank, Result, Suit, parse_cards};

mod tables;
use tables::{KICKERS, NO_STRAIGHT, STRAIGHTS, top_ranks};

/// The hand rank.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    const ALL: [HandRank; 9] = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
    ];

    /// Number of hand ranks.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns all hand ranks from the lowest.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        f.write_str(s)
    }
}

/// The value of the best five cards hand, higher is better.
///
/// Values serialize as their integer value, deserializing an integer that is
/// not a hand value is an [Error::InvalidHandValue].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct HandValue(u32);

impl HandValue {
    /// Evaluates a 5, 6, or 7 cards hand.
    ///
    /// The cards are not validated, use [HandValue::try_eval] for untrusted
    /// input.
    ///
    /// ```
    /// # use riverbed_eval::*;
    /// let cards = parse_cards("Ah Kh Qh 2c 3d 4h 5h").unwrap();
    /// let v = HandValue::eval(&cards);
    /// assert_eq!(v.rank(), HandRank::Flush);
    /// ```
    pub fn eval(cards: &[Card]) -> HandValue {
        debug_assert!((5..=7).contains(&cards.len()));
        Self::eval_set(cards.iter().copied().collect())
    }

    /// Evaluates a 5, 6, or 7 cards hand checking the size and that there are
    /// no duplicate cards.
    pub fn try_eval(cards: &[Card]) -> Result<HandValue> {
        if !(5..=7).contains(&cards.len()) {
            return Err(Error::HandSize(cards.len()));
        }

        CardSet::from_cards(cards).map(Self::eval_set)
    }

    /// Evaluates the best five cards hand in a set of 5 to 7 cards.
    pub fn eval_set(set: CardSet) -> HandValue {
        debug_assert!((5..=7).contains(&set.len()));

        if let Some(suit) = flush_suit(set) {
            let mask = set.suit_mask(suit);
            let top = STRAIGHTS[mask as usize];
            return if top != NO_STRAIGHT {
                straight(HandRank::StraightFlush, top)
            } else {
                make(HandRank::Flush, KICKERS[mask as usize])
            };
        }

        let [s, h, d, c] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs]
            .map(|suit| set.suit_mask(suit));
        let ranks = set.ranks_mask();

        // Ranks found in at least 2, 3, and 4 suits.
        let ge2 = (s & h) | (s & d) | (s & c) | (h & d) | (h & c) | (d & c);
        let ge3 = (s & h & (d | c)) | (d & c & (s | h));
        let quads = s & h & d & c;

        if quads != 0 {
            let q = highest(quads);
            let k = top_ranks(ranks & !(1u16 << q), 1);
            return make(HandRank::FourOfAKind, repeat(q, 4) << 4 | k);
        }

        if ge3 != 0 {
            let t = highest(ge3);
            let pairs = ge2 & !(1u16 << t);
            if pairs != 0 {
                let p = highest(pairs);
                return make(HandRank::FullHouse, repeat(t, 3) << 8 | repeat(p, 2));
            }
        }

        let top = STRAIGHTS[ranks as usize];
        if top != NO_STRAIGHT {
            return straight(HandRank::Straight, top);
        }

        if ge3 != 0 {
            let t = highest(ge3);
            let kickers = top_ranks(ranks & !(1u16 << t), 2);
            return make(HandRank::ThreeOfAKind, repeat(t, 3) << 8 | kickers);
        }

        if ge2 != 0 {
            let p1 = highest(ge2);
            let rest = ge2 & !(1u16 << p1);
            if rest != 0 {
                let p2 = highest(rest);
                let k = top_ranks(ranks & !(1u16 << p1) & !(1u16 << p2), 1);
                let pairs = repeat(p1, 2) << 8 | repeat(p2, 2);
                return make(HandRank::TwoPair, pairs << 4 | k);
            }

            let kickers = top_ranks(ranks & !(1u16 << p1), 3);
            return make(HandRank::OnePair, repeat(p1, 2) << 12 | kickers);
        }

        make(HandRank::HighCard, KICKERS[ranks as usize])
    }

    /// Evaluates a 5, 6, or 7 cards hand and returns the five cards that make
    /// the best hand, ordered by significance.
    ///
    /// ```
    /// # use riverbed_eval::*;
    /// let cards = parse_cards("7c 7d 7h 4s 4c 9d 2h").unwrap();
    /// let (v, best) = HandValue::eval_with_best_hand(&cards);
    /// assert_eq!(v.rank(), HandRank::FullHouse);
    /// assert_eq!(best.map(|c| c.rank()), [Rank::Seven, Rank::Seven, Rank::Seven, Rank::Four, Rank::Four]);
    /// ```
    pub fn eval_with_best_hand(cards: &[Card]) -> (HandValue, [Card; 5]) {
        let set = cards.iter().copied().collect::<CardSet>();
        let value = Self::eval_set(set);
        let ranks = value.ranks();

        let best = match (value.rank(), flush_suit(set)) {
            (HandRank::Flush | HandRank::StraightFlush, Some(suit)) => {
                ranks.map(|r| Card::new(r, suit))
            }
            _ => {
                let mut left = set;
                ranks.map(|r| {
                    let card = Suit::suits()
                        .map(|s| Card::new(r, s))
                        .find(|&c| left.contains(c))
                        .unwrap_or(Card::new(r, Suit::Spades));
                    left.remove(card);
                    card
                })
            }
        };

        (value, best)
    }

    /// The hand rank for this value.
    pub fn rank(&self) -> HandRank {
        HandRank::ALL[(self.0 >> 20) as usize]
    }

    /// The five ranks of the best hand in descending significance, a wheel
    /// straight ends with the ace.
    pub fn ranks(&self) -> [Rank; 5] {
        [16, 12, 8, 4, 0].map(|shift| Rank::from_index(((self.0 >> shift) & 0xf) as u8))
    }

    /// The integer value, it compares the same way as the hand value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for HandValue {
    type Error = Error;

    fn try_from(value: u32) -> Result<HandValue> {
        let category = (value >> 20) as usize;
        let ranks = [16, 12, 8, 4, 0].iter().all(|shift| (value >> shift) & 0xf < 13);
        if category < HandRank::COUNT && ranks {
            Ok(HandValue(value))
        } else {
            Err(Error::InvalidHandValue(value))
        }
    }
}

impl From<HandValue> for u32 {
    fn from(value: HandValue) -> u32 {
        value.0
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r1, r2, r3, r4, r5] = self.ranks();
        write!(f, "{} {r1}{r2}{r3}{r4}{r5}", self.rank())
    }
}

/// Evaluates a 7 cards hand given as `(rank, suit)` pairs, ranks are in 2..=14
/// with the ace as 14 and suits in 0..=3 for spades, hearts, diamonds, and
/// clubs.
///
/// ```
/// # use riverbed_eval::*;
/// let royal = [(14, 0), (13, 0), (12, 0), (11, 0), (10, 0), (2, 1), (3, 2)];
/// let v = evaluate_hand(&royal).unwrap();
/// assert_eq!(v.rank(), HandRank::StraightFlush);
///
/// let invalid = [(15, 0), (13, 0), (12, 0), (11, 0), (10, 0), (2, 1), (3, 2)];
/// assert!(matches!(evaluate_hand(&invalid), Err(Error::InvalidCard { rank: 15, suit: 0 })));
/// ```
pub fn evaluate_hand(cards: &[(i32, i32); 7]) -> Result<HandValue> {
    CardSet::from_pairs(cards).map(HandValue::eval_set)
}

/// Evaluates two hole cards with five board cards.
pub fn evaluate_holding(hole: &[Card; 2], board: &[Card; 5]) -> Result<HandValue> {
    let mut set = CardSet::from_cards(board)?;
    for &card in hole {
        set.try_insert(card)?;
    }

    Ok(HandValue::eval_set(set))
}

/// Evaluates hole and board cards given as strings like `"As Kd"`.
pub fn evaluate_strings(hole: &str, board: &str) -> Result<HandValue> {
    let hole = parse_cards(hole)?;
    let board = parse_cards(board)?;

    match (<[Card; 2]>::try_from(hole.as_slice()), <[Card; 5]>::try_from(board.as_slice())) {
        (Ok(hole), Ok(board)) => evaluate_holding(&hole, &board),
        _ => Err(Error::HandSize(hole.len() + board.len())),
    }
}

/// Compares two holdings on the same board.
pub fn compare(a: &[Card; 2], b: &[Card; 2], board: &[Card; 5]) -> Result<Ordering> {
    if let Some(&dup) = a.iter().find(|c| b.contains(c)) {
        return Err(Error::DuplicateCard(dup));
    }

    let va = evaluate_holding(a, board)?;
    let vb = evaluate_holding(b, board)?;
    Ok(va.cmp(&vb))
}

/// Returns the suit with at least five cards.
#[inline]
fn flush_suit(set: CardSet) -> Option<Suit> {
    Suit::suits().find(|&suit| set.suit_mask(suit).count_ones() >= 5)
}

/// Index of the highest set bit.
#[inline]
fn highest(mask: u16) -> u32 {
    15 - mask.leading_zeros()
}

/// Repeats a rank nibble n times.
#[inline]
fn repeat(rank: u32, n: u32) -> u32 {
    (0..n).fold(0, |acc, _| acc << 4 | rank)
}

#[inline]
fn make(rank: HandRank, ranks: u32) -> HandValue {
    HandValue((rank as u32) << 20 | ranks)
}

/// Makes a straight value with the five consecutive ranks, the ace plays low
/// in the wheel.
#[inline]
fn straight(rank: HandRank, top: u8) -> HandValue {
    let top = top as u32;
    let ranks = (0..5).fold(0, |acc, i| {
        let r = if top == 3 && i == 4 { 12 } else { top - i };
        acc << 4 | r
    });

    make(rank, ranks)
}
