use super::play::Play;

/// Every play at the table, ranked weakest to strongest on demand.
#[derive(Debug, Clone, Default)]
pub struct Table(Vec<Play>);

impl Table {
    /// Plays sorted weakest first. Equal hands keep their input order.
    pub fn ranked(&self) -> Vec<&Play> {
        let mut plays = self.0.iter().collect::<Vec<&Play>>();
        plays.sort_by(|a, b| a.hand().cmp(b.hand()));
        plays
    }

    /// Sum of each bid times its rank, the weakest hand holding rank 1.
    pub fn winnings(&self) -> u64 {
        self.ranked()
            .into_iter()
            .zip(1..)
            .map(|(play, rank)| play.bid() * rank)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Play> for Table {
    fn from_iter<I: IntoIterator<Item = Play>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
