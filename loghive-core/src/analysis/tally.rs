use ahash::AHashMap;

/// Group-and-count accumulator that remembers the order keys were first seen.
#[derive(Debug, Default)]
pub struct Tally<'a> {
    index: AHashMap<&'a str, usize>,
    slots: Vec<(&'a str, u64)>,
}

impl<'a> Tally<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: &'a str) {
        match self.index.get(key) {
            Some(&slot) => self.slots[slot].1 += 1,
            None => {
                self.index.insert(key, self.slots.len());
                self.slots.push((key, 1));
            }
        }
    }

    /// Descending by count; equal counts keep first-seen order.
    pub fn ranked(mut self) -> Vec<(String, u64)> {
        self.slots.sort_by(|a, b| b.1.cmp(&a.1));
        self.slots
            .into_iter()
            .map(|(key, count)| (key.to_string(), count))
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for Tally<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.record(key);
        }
        tally
    }
}

/// Rank keys by count and keep the first `n`.
pub fn rank_by_count<'a, I>(keys: I, n: usize) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ranked = keys.into_iter().collect::<Tally<'a>>().ranked();
    ranked.truncate(n);
    ranked
}
