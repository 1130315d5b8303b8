//! Ordered card collection with index identity and connection edges.

use crate::card::Card;

/// Ordered sequence of cards.
///
/// Insertion order is z-order, draw order, and hit-test priority. Cards are
/// never removed, so an index stays valid for the life of the store.
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
}

impl CardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card and return its index.
    pub fn add(&mut self, card: Card) -> usize {
        self.cards.push(card);
        self.cards.len() - 1
    }

    /// Overwrite the card at `index` in place.
    pub fn replace(&mut self, index: usize, card: Card) {
        self.cards[index] = card;
    }

    /// Record a link from `source` to `dest`.
    ///
    /// Self-links are ignored and repeated requests are idempotent. The
    /// membership check (rather than a set) keeps insertion order, so draw
    /// order stays deterministic.
    pub fn connect(&mut self, source: usize, dest: usize) {
        if source == dest {
            return;
        }
        let links = &mut self.cards[source].links;
        if !links.contains(&dest) {
            links.push(dest);
        }
    }

    /// The card at `index`.
    pub fn card(&self, index: usize) -> &Card {
        &self.cards[index]
    }

    /// All cards in z-order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Drawn connector endpoints as `(source, dest)` index pairs, in draw
    /// order.
    ///
    /// A link is stored on the card that initiated it, but the line is drawn
    /// from the other endpoint into the initiator: entry `v` on card `i`
    /// yields `(v, i)`, routed as `compute_path(store[v], store[i])`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .flat_map(|(i, card)| card.links.iter().map(move |&v| (v, i)))
    }
}
