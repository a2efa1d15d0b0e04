use rand::Rng;
use std::fmt;
use tweetquiz_common::AccountPair;

/// Which of the two offered accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The digit the player types for this side.
    pub fn number(self) -> u8 {
        match self {
            Side::First => 1,
            Side::Second => 2,
        }
    }

    pub fn handle(self, pair: &AccountPair) -> &str {
        match self {
            Side::First => &pair.first,
            Side::Second => &pair.second,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Eligible post texts for both accounts. Immutable once the quiz starts.
#[derive(Debug, Clone)]
pub struct QuizPools {
    pair: AccountPair,
    first: Vec<String>,
    second: Vec<String>,
}

impl QuizPools {
    pub fn new(pair: AccountPair, first: Vec<String>, second: Vec<String>) -> Self {
        Self {
            pair,
            first,
            second,
        }
    }

    pub fn pair(&self) -> &AccountPair {
        &self.pair
    }

    pub fn pool(&self, side: Side) -> &[String] {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    /// Size of the pooled union, duplicates counted once per pool.
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, text: &str) -> bool {
        self.first.iter().chain(&self.second).any(|t| t == text)
    }

    /// Uniform pick over the concatenation of both pools.
    ///
    /// Exactly one draw from `rng` per call, `None` only when both pools are empty.
    pub fn sample<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> Option<&'a str> {
        if self.is_empty() {
            return None;
        }
        let i = rng.gen_range(0..self.len());
        let text = match self.first.get(i) {
            Some(text) => text,
            None => &self.second[i - self.first.len()],
        };
        Some(text.as_str())
    }

    /// Who posted `text`.
    ///
    /// The first pool is checked first, so a text both accounts posted is credited
    /// to the first account. Anything not in the first pool is credited to the
    /// second; callers only pass texts returned by [`QuizPools::sample`].
    pub fn attribute(&self, text: &str) -> Side {
        if self.first.iter().any(|t| t == text) {
            Side::First
        } else {
            Side::Second
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    fn pools(first: &[&str], second: &[&str]) -> QuizPools {
        QuizPools::new(
            AccountPair::new("pizzafan", "tacofan"),
            first.iter().map(|s| s.to_string()).collect(),
            second.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn sampling_stays_inside_the_union_and_reaches_both_pools() {
        let p = pools(&["I love pizza"], &["I love tacos"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let text = p.sample(&mut rng).unwrap();
            assert!(p.contains(text));
            seen.insert(text.to_string());
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn sampling_works_with_one_side_empty() {
        let p = pools(&[], &["only me"]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_eq!(p.sample(&mut rng), Some("only me"));
        }
    }

    #[test]
    fn empty_pools_have_nothing_to_sample() {
        let p = pools(&[], &[]);
        assert!(p.is_empty());
        assert_eq!(p.sample(&mut StdRng::seed_from_u64(0)), None);
    }

    #[test]
    fn attribution_prefers_the_first_pool() {
        let p = pools(&["gm", "I love pizza"], &["gm", "I love tacos"]);
        assert_eq!(p.attribute("I love pizza"), Side::First);
        assert_eq!(p.attribute("I love tacos"), Side::Second);
        assert_eq!(p.attribute("gm"), Side::First);
    }

    #[test]
    fn sides_map_to_handles_and_digits() {
        let p = pools(&[], &[]);
        assert_eq!(Side::First.handle(p.pair()), "pizzafan");
        assert_eq!(Side::Second.handle(p.pair()), "tacofan");
        assert_eq!(Side::Second.to_string(), "2");
    }
}
