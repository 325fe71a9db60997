use super::card::Card;

/// A camel hand's type, weakest first.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Kind {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOAK,
    FullHouse,
    FourOAK,
    FiveOAK,
}

/// Occurrences of each label in a hand.
struct Tally([usize; Card::N]);

impl From<&[Card]> for Tally {
    fn from(cards: &[Card]) -> Self {
        let mut counts = [0; Card::N];
        for card in cards {
            counts[u8::from(*card) as usize] += 1;
        }
        Self(counts)
    }
}

impl Tally {
    fn find_kind(&self) -> Kind {
        None.or_else(|| self.find_n_oak(5).then_some(Kind::FiveOAK))
            .or_else(|| self.find_n_oak(4).then_some(Kind::FourOAK))
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_n_oak(3).then_some(Kind::ThreeOAK))
            .or_else(|| (self.n_exact(2) == 2).then_some(Kind::TwoPair))
            .or_else(|| (self.n_exact(2) >= 1).then_some(Kind::OnePair))
            .unwrap_or(Kind::HighCard)
    }
    fn find_n_oak(&self, n: usize) -> bool {
        self.0.iter().any(|&count| count >= n)
    }
    fn find_full_house(&self) -> Option<Kind> {
        (self.n_exact(3) > 0 && self.n_exact(2) > 0).then_some(Kind::FullHouse)
    }
    fn n_exact(&self, n: usize) -> usize {
        self.0.iter().filter(|&&count| count == n).count()
    }
}

impl From<&[Card]> for Kind {
    fn from(cards: &[Card]) -> Self {
        Tally::from(cards).find_kind()
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::HighCard => write!(f, "HighCard"),
            Kind::OnePair => write!(f, "OnePair"),
            Kind::TwoPair => write!(f, "TwoPair"),
            Kind::ThreeOAK => write!(f, "ThreeOfAKind"),
            Kind::FullHouse => write!(f, "FullHouse"),
            Kind::FourOAK => write!(f, "FourOfAKind"),
            Kind::FiveOAK => write!(f, "FiveOfAKind"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(s: &str) -> Kind {
        let cards = s
            .chars()
            .map(|c| Card::try_from(c).unwrap())
            .collect::<Vec<Card>>();
        Kind::from(cards.as_slice())
    }

    #[test]
    fn every_kind() {
        assert_eq!(kind("AAAAA"), Kind::FiveOAK);
        assert_eq!(kind("AA8AA"), Kind::FourOAK);
        assert_eq!(kind("23332"), Kind::FullHouse);
        assert_eq!(kind("TTT98"), Kind::ThreeOAK);
        assert_eq!(kind("23432"), Kind::TwoPair);
        assert_eq!(kind("A23A4"), Kind::OnePair);
        assert_eq!(kind("23456"), Kind::HighCard);
    }

    #[test]
    fn ordered_weakest_first() {
        assert!(Kind::HighCard < Kind::OnePair);
        assert!(Kind::TwoPair < Kind::ThreeOAK);
        assert!(Kind::ThreeOAK < Kind::FullHouse);
        assert!(Kind::FullHouse < Kind::FourOAK);
        assert!(Kind::FourOAK < Kind::FiveOAK);
    }

    #[test]
    fn odd_lengths() {
        assert_eq!(kind(""), Kind::HighCard);
        assert_eq!(kind("KKKKKK"), Kind::FiveOAK);
        assert_eq!(kind("223344"), Kind::OnePair);
    }
}
