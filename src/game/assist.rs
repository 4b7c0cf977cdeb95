use alloc::vec::Vec;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::hand::Hand;

use super::Game;

impl Game {
    /// Picks an easy-mode replacement from the deck, biased toward cards
    /// that connect with the just-played `reference` card.
    ///
    /// Policy, deterministic given the random source:
    /// 1. Candidates are the deck cards sharing suit or rank with the
    ///    reference; with no candidate, fall back to the front of the deck.
    /// 2. Candidates split into a same-suit group and a same-rank group.
    ///    One Bernoulli draw with probability `bias` prefers the same-suit
    ///    group; an empty preferred group falls back to the other.
    /// 3. Within the chosen group, the first card in deck order whose rank
    ///    also appears among the remaining hand cards wins; otherwise the
    ///    group's first card in deck order.
    ///
    /// This biases the next hand toward staying connected. It is not a
    /// playability guarantee.
    pub(super) fn assisted_draw(
        deck: &mut Vec<Card>,
        hand: &Hand,
        skip_slot: usize,
        reference: Card,
        bias: f64,
        rng: &mut ChaCha8Rng,
    ) -> Card {
        let candidates: Vec<usize> = deck
            .iter()
            .enumerate()
            .filter(|(_, card)| card.matches(reference))
            .map(|(index, _)| index)
            .collect();

        if candidates.is_empty() {
            return deck.remove(0);
        }

        let (same_suit, same_rank): (Vec<usize>, Vec<usize>) = candidates
            .into_iter()
            .partition(|&index| deck[index].suit == reference.suit);

        let group = if rng.random_bool(bias) {
            if same_suit.is_empty() { &same_rank } else { &same_suit }
        } else if same_rank.is_empty() {
            &same_suit
        } else {
            &same_rank
        };

        let index = group
            .iter()
            .copied()
            .find(|&index| hand.holds_rank_besides(skip_slot, deck[index].rank))
            .unwrap_or(group[0]);

        deck.remove(index)
    }
}
