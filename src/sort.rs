//! Deck sort order and merge sort.

use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::Card;

/// Returns whether `lhs` sorts before `rhs` in deck order.
///
/// Suits are compared first, Spades before Hearts before Clubs before
/// Diamonds. Within a suit the higher rank comes first, from King down to a
/// low Ace. Distinct cards never compare equal.
///
/// ```
/// use deckrs::{Card, Rank, Suit, sorts_before};
///
/// let two_of_spades = Card::new(Suit::Spades, Rank::Two);
/// let king_of_hearts = Card::new(Suit::Hearts, Rank::King);
/// let ace_of_spades = Card::new(Suit::Spades, Rank::Ace);
///
/// assert!(sorts_before(&two_of_spades, &king_of_hearts));
/// assert!(sorts_before(&two_of_spades, &ace_of_spades));
/// ```
#[must_use]
pub fn sorts_before(lhs: &Card, rhs: &Card) -> bool {
    let lhs_priority = lhs.suit.sort_priority();
    let rhs_priority = rhs.suit.sort_priority();

    if lhs_priority != rhs_priority {
        return lhs_priority < rhs_priority;
    }

    lhs.outranks(rhs)
}

/// Total ordering consistent with [`sorts_before`], for use with slice sorts.
#[must_use]
pub fn sort_order(lhs: &Card, rhs: &Card) -> Ordering {
    if sorts_before(lhs, rhs) {
        Ordering::Less
    } else if sorts_before(rhs, lhs) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Sorts `items` with a top-down merge sort.
///
/// `before(a, b)` must return whether `a` belongs strictly before `b`. Equal
/// elements keep their relative order.
pub fn merge_sort_by<T, F>(items: &mut [T], mut before: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    if items.len() < 2 {
        return;
    }

    let mut scratch = Vec::with_capacity(items.len());
    sort_range(items, &mut scratch, &mut before);
}

fn sort_range<T, F>(items: &mut [T], scratch: &mut Vec<T>, before: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    if items.len() < 2 {
        return;
    }

    let mid = items.len() / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        sort_range(left, scratch, before);
        sort_range(right, scratch, before);
    }
    merge(items, mid, scratch, before);
}

/// Merges the sorted runs `items[..mid]` and `items[mid..]` in place.
fn merge<T, F>(items: &mut [T], mid: usize, scratch: &mut Vec<T>, before: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    scratch.clear();
    scratch.extend_from_slice(items);
    let (left, right) = scratch.split_at(mid);

    let mut left_index = 0;
    let mut right_index = 0;

    for slot in items.iter_mut() {
        let take_right = match (left.get(left_index), right.get(right_index)) {
            (Some(l), Some(r)) => before(r, l),
            (None, Some(_)) => true,
            _ => false,
        };

        if take_right {
            *slot = right[right_index];
            right_index += 1;
        } else {
            *slot = left[left_index];
            left_index += 1;
        }
    }
}
