//! Bounded list of the most frequent names, kept sorted while counts grow.

mod tracker;

pub use tracker::TopK;

/// The `size` most common non-empty suffixes over all `lemmas`
pub fn most_common_suffixes<I, S>(lemmas: I, size: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tracker = TopK::with_capacity(size.saturating_mul(100));
    let mut seen = 0usize;

    for lemma in lemmas {
        let lemma = lemma.as_ref();
        seen += 1;
        for (i, _) in lemma.char_indices() {
            let suffix = &lemma[i..];
            if !tracker.increase(suffix) {
                tracker.add(suffix, 1);
            }
        }
    }

    tracing::debug!("Tracked suffixes of {} lemmas, {} kept", seen, tracker.len());
    tracker
        .first_n(size)
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_common_suffixes_prefer_longer_on_ties() {
        let lemmas = ["kočka", "matka", "ryba", "hrad"];
        // "a" occurs 3 times, "ka" twice
        assert_eq!(most_common_suffixes(lemmas, 2), vec!["a", "ka"]);
        assert!(most_common_suffixes(lemmas, 0).is_empty());
    }
}
