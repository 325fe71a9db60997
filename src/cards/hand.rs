use super::card::Card;
use super::kind::Kind;
use crate::Arbitrary;

/// An ordered sequence of camel cards.
///
/// Hands compare by Kind first, then card by card from the left, and a
/// shorter hand loses a tie on a shared prefix. The Kind is computed once at
/// construction so that field order alone gives the derived ordering.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand {
    kind: Kind,
    cards: Vec<Card>,
}

impl Hand {
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn size(&self) -> usize {
        self.cards.len()
    }
}

/// Vec<Card> isomorphism
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            kind: Kind::from(cards.as_slice()),
            cards,
        }
    }
}
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.cards
    }
}

/// str isomorphism
/// punctuation and whitespace inside the hand are ignored
/// "KT-JJT" -> KTJJT
impl TryFrom<&str> for Hand {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = s
            .chars()
            .filter(|c| !c.is_ascii_punctuation() && !c.is_whitespace())
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, _>>()?;
        if cards.is_empty() {
            return Err(anyhow::anyhow!("empty hand: {:?}", s));
        }
        Ok(Self::from(cards))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl Arbitrary for Hand {
    fn random() -> Self {
        Self::from(
            (0..5)
                .map(|_| Card::from(rand::random_range(0..Card::N as u8)))
                .collect::<Vec<Card>>(),
        )
    }
}
