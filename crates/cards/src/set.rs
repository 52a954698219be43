// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A set of cards stored as a bitmask.
use std::{fmt, ops};

use crate::{Card, Error, Rank, Result, Suit};

/// Mask of the 13 rank bits in a suit lane.
const RANKS_MASK: u64 = 0x1fff;

/// An unordered set of distinct cards.
///
/// Each card is a bit in a 64 bits mask, the mask has four 16 bits lanes one
/// for each suit with the card rank bits in the lowest 13 bits of the lane:
///
/// ```text
///   +----------------+----------------+----------------+----------------+
///   |xxxAKQJT98765432|xxxAKQJT98765432|xxxAKQJT98765432|xxxAKQJT98765432|
///   +----------------+----------------+----------------+----------------+
///         clubs          diamonds          hearts            spades
/// ```
///
/// so union is a bitwise or and the number of cards is the popcount.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CardSet(u64);

impl CardSet {
    /// The empty set.
    pub const EMPTY: CardSet = CardSet(0);

    /// Creates a set from distinct cards.
    ///
    /// ```
    /// # use riverbed_cards::{CardSet, Error, parse_cards};
    /// let cards = parse_cards("As Ks Qs").unwrap();
    /// let set = CardSet::from_cards(&cards).unwrap();
    /// assert_eq!(set.len(), 3);
    ///
    /// let cards = parse_cards("As Ks As").unwrap();
    /// assert!(matches!(CardSet::from_cards(&cards), Err(Error::DuplicateCard(_))));
    /// ```
    pub fn from_cards(cards: &[Card]) -> Result<CardSet> {
        let mut set = CardSet::EMPTY;
        for &card in cards {
            set.try_insert(card)?;
        }

        Ok(set)
    }

    /// Creates a set from `(rank, suit)` pairs, ranks in 2..=14 and suits in
    /// 0..=3, rejecting invalid and duplicate cards.
    pub fn from_pairs(pairs: &[(i32, i32)]) -> Result<CardSet> {
        let mut set = CardSet::EMPTY;
        for &(rank, suit) in pairs {
            set.try_insert(Card::try_from_pair(rank, suit)?)?;
        }

        Ok(set)
    }

    /// The raw mask.
    #[inline]
    pub const fn mask(&self) -> u64 {
        self.0
    }

    /// Adds a card to the set, returns false if the card was already there.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.id();
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Removes a card from the set, returns false if the card was not there.
    #[inline]
    pub fn remove(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.id();
        let removed = self.0 & bit != 0;
        self.0 &= !bit;
        removed
    }

    /// Adds a card to the set, fails if the card is already in the set.
    pub fn try_insert(&mut self, card: Card) -> Result<()> {
        if self.insert(card) {
            Ok(())
        } else {
            Err(Error::DuplicateCard(card))
        }
    }

    /// Checks if the card is in this set.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1u64 << card.id()) != 0
    }

    /// The union of two sets.
    #[inline]
    pub const fn union(self, other: CardSet) -> CardSet {
        CardSet(self.0 | other.0)
    }

    /// Checks if the two sets have no cards in common.
    #[inline]
    pub const fn is_disjoint(&self, other: &CardSet) -> bool {
        self.0 & other.0 == 0
    }

    /// The number of cards in this set.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The ranks mask for the given suit, bit 0 is deuce and bit 12 ace.
    #[inline]
    pub const fn suit_mask(&self, suit: Suit) -> u16 {
        ((self.0 >> (16 * suit as u32)) & RANKS_MASK) as u16
    }

    /// The ranks mask of all suits.
    #[inline]
    pub const fn ranks_mask(&self) -> u16 {
        let m = self.0 | (self.0 >> 16) | (self.0 >> 32) | (self.0 >> 48);
        (m & RANKS_MASK) as u16
    }

    /// Iterates the cards in the set, by suit then rank.
    pub fn iter(&self) -> Iter {
        Iter(self.0)
    }
}

impl ops::BitOr for CardSet {
    type Output = CardSet;

    fn bitor(self, rhs: CardSet) -> CardSet {
        self.union(rhs)
    }
}

impl ops::BitOrAssign for CardSet {
    fn bitor_assign(&mut self, rhs: CardSet) {
        self.0 |= rhs.0;
    }
}

impl From<Card> for CardSet {
    fn from(card: Card) -> Self {
        CardSet(1u64 << card.id())
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = CardSet::EMPTY;
        for card in iter {
            set.insert(card);
        }

        set
    }
}

impl IntoIterator for CardSet {
    type Item = Card;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.0)
    }
}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the cards in a [CardSet].
#[derive(Debug, Clone)]
pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.0 == 0 {
            return None;
        }

        let id = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;

        let (rank, suit) = (id & 0xf, id >> 4);
        Some(Card::new(Rank::from_index(rank), Suit::from_index(suit)?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, parse_cards};

    #[test]
    fn set_insert_contains() {
        let mut set = CardSet::default();
        assert!(set.is_empty());

        let ah = Card::new(Rank::Ace, Suit::Hearts);
        assert!(set.insert(ah));
        assert!(!set.insert(ah));
        assert!(set.contains(ah));
        assert!(!set.contains(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!(set.len(), 1);

        assert_eq!(set.try_insert(ah), Err(Error::DuplicateCard(ah)));

        assert!(set.remove(ah));
        assert!(!set.remove(ah));
        assert!(set.is_empty());
    }

    #[test]
    fn set_all_cards() {
        let set = Deck::default().into_iter().collect::<CardSet>();
        assert_eq!(set.len(), Deck::SIZE);

        for suit in Suit::suits() {
            assert_eq!(set.suit_mask(suit), 0x1fff);
        }

        assert_eq!(set.ranks_mask(), 0x1fff);
        assert_eq!(set.iter().count(), Deck::SIZE);
        assert!(set.iter().zip(Deck::default()).all(|(l, r)| l == r));
    }

    #[test]
    fn set_masks() {
        let cards = parse_cards("As Ks 2h 2d Tc").unwrap();
        let set = CardSet::from_cards(&cards).unwrap();

        assert_eq!(set.suit_mask(Suit::Spades), (1 << 12) | (1 << 11));
        assert_eq!(set.suit_mask(Suit::Hearts), 1);
        assert_eq!(set.suit_mask(Suit::Diamonds), 1);
        assert_eq!(set.suit_mask(Suit::Clubs), 1 << 8);
        assert_eq!(set.ranks_mask(), (1 << 12) | (1 << 11) | (1 << 8) | 1);
    }

    #[test]
    fn set_union() {
        let hole = CardSet::from_cards(&parse_cards("As Ks").unwrap()).unwrap();
        let board = CardSet::from_cards(&parse_cards("Qs Js Ts").unwrap()).unwrap();

        assert!(hole.is_disjoint(&board));
        let all = hole | board;
        assert_eq!(all.len(), 5);
        assert_eq!(all, hole.union(board));
        assert!(!all.is_disjoint(&hole));
    }

    #[test]
    fn set_from_pairs() {
        let set = CardSet::from_pairs(&[(14, 0), (13, 0), (2, 3)]).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(Card::new(Rank::Deuce, Suit::Clubs)));

        assert_eq!(
            CardSet::from_pairs(&[(14, 0), (1, 0)]),
            Err(Error::InvalidCard { rank: 1, suit: 0 })
        );

        assert_eq!(
            CardSet::from_pairs(&[(14, 0), (270, 0)]),
            Err(Error::InvalidCard { rank: 270, suit: 0 })
        );

        assert_eq!(
            CardSet::from_pairs(&[(14, 0), (14, 0)]),
            Err(Error::DuplicateCard(Card::new(Rank::Ace, Suit::Spades)))
        );
    }
}
