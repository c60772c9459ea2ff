use std::collections::HashMap;

use vzor_morph::Paradigm;

/// Counts that can be scaled into `[0, 1]`
pub trait Count: Copy {
    fn as_f64(self) -> f64;
}

impl Count for u64 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Count for f64 {
    fn as_f64(self) -> f64 {
        self
    }
}

/// Divide every value by the maximum. Empty or all-zero input gives an
/// empty map.
pub fn normalize<V: Count>(counts: &HashMap<String, V>) -> HashMap<String, f64> {
    let max = counts
        .values()
        .map(|v| v.as_f64())
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return HashMap::new();
    }
    counts
        .iter()
        .map(|(suffix, v)| (suffix.clone(), v.as_f64() / max))
        .collect()
}

/// Paradigms sharing the most affixes with the observed suffixes, as
/// `(paradigm, intersection)`.
///
/// The first `n` are kept together with every paradigm tied with the `n`-th.
pub fn n_best<'p, I>(observed: &HashMap<String, f64>, candidates: I, n: usize) -> Vec<(&'p Paradigm, usize)>
where
    I: IntoIterator<Item = &'p Paradigm>,
{
    let mut ranked: Vec<(&Paradigm, usize)> = candidates
        .into_iter()
        .map(|paradigm| {
            let shared = observed
                .keys()
                .filter(|suffix| paradigm.affixes().contains(suffix))
                .count();
            (paradigm, shared)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.id().cmp(b.0.id())));

    if n == 0 {
        return Vec::new();
    }
    if let Some(&(_, cutoff)) = ranked.get(n - 1) {
        let keep = ranked.iter().take_while(|(_, shared)| *shared >= cutoff).count();
        ranked.truncate(keep);
    }
    ranked
}
