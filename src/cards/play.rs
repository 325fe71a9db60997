use super::hand::Hand;

/// A hand together with its bid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    hand: Hand,
    bid: u64,
}

impl Play {
    pub fn hand(&self) -> &Hand {
        &self.hand
    }
    pub fn bid(&self) -> u64 {
        self.bid
    }
}

impl From<(Hand, u64)> for Play {
    fn from((hand, bid): (Hand, u64)) -> Self {
        Self { hand, bid }
    }
}

/// str injection
/// the last whitespace separates the hand from its bid
/// "32T3K 765"
impl TryFrom<&str> for Play {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (hand, bid) = s
            .trim()
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| anyhow::anyhow!("missing bid in {:?}", s))?;
        let bid = bid
            .parse::<u64>()
            .map_err(|e| anyhow::anyhow!("invalid bid {:?}: {}", bid, e))?;
        let hand = Hand::try_from(hand)?;
        Ok(Self::from((hand, bid)))
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.hand, self.bid)
    }
}
