use std::collections::HashMap;
use std::io::BufRead;

use vzor_core::{FreqListLayout, Result, freqlist::read_rows};

/// One character step of the trie. `value` is the frequency of the word
/// ending here, 0 when no word ends here.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    value: u64,
}

impl TrieNode {
    fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Follow `ch`, or its upper-case form when the literal character is missing
    fn child_any_case(&self, ch: char) -> Option<&TrieNode> {
        self.child(ch).or_else(|| {
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(u), None) if u != ch => self.child(u),
                _ => None,
            }
        })
    }

    /// Sum of the values of every path spelling `chars` in any letter case
    fn fold_value(&self, chars: &[char]) -> u64 {
        let Some((&ch, rest)) = chars.split_first() else {
            return self.value;
        };
        let lower = single_char(ch.to_lowercase(), ch);
        let upper = single_char(ch.to_uppercase(), ch);

        let mut total = self.child(lower).map_or(0, |child| child.fold_value(rest));
        if upper != lower {
            total += self.child(upper).map_or(0, |child| child.fold_value(rest));
        }
        total
    }

    fn collect(&self, tail: &mut String, out: &mut HashMap<String, u64>) {
        if self.value > 0 {
            *out.entry(tail.to_lowercase()).or_default() += self.value;
        }
        for (&ch, child) in &self.children {
            tail.push(ch);
            child.collect(tail, out);
            tail.pop();
        }
    }
}

fn single_char(mut mapped: impl Iterator<Item = char>, fallback: char) -> char {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => c,
        _ => fallback,
    }
}

/// Word → frequency prefix tree
#[derive(Debug, Default)]
pub struct FreqTrie {
    root: TrieNode,
    words: usize,
}

impl FreqTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: &str, frequency: u64) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.value == 0 && frequency > 0 {
            self.words += 1;
        } else if node.value > 0 && frequency == 0 {
            self.words -= 1;
        }
        node.value = frequency;
    }

    /// Add `frequency` to the value stored for `word`
    pub fn add(&mut self, word: &str, frequency: u64) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.value == 0 && frequency > 0 {
            self.words += 1;
        }
        node.value += frequency;
    }

    /// Stored frequency of `word`, 0 when it was never inserted
    pub fn lookup(&self, word: &str) -> u64 {
        let mut node = &self.root;
        for ch in word.chars() {
            match node.child(ch) {
                Some(child) => node = child,
                None => return 0,
            }
        }
        node.value
    }

    /// Total frequency of the keys that spell `word` when lower-cased, so a
    /// plain word finds its case-marked segmentations
    pub fn surface_frequency(&self, word: &str) -> u64 {
        let chars: Vec<char> = word.chars().collect();
        self.root.fold_value(&chars)
    }

    /// Every completion of `prefix` as lower-cased tail → frequency.
    ///
    /// Each prefix character matches literally or as its upper-case form, so a
    /// lower-case prefix can cross case-marked piece boundaries. Tails that
    /// lower-case to the same string are summed.
    pub fn suffixes(&self, prefix: &str) -> HashMap<String, u64> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            match node.child_any_case(ch) {
                Some(child) => node = child,
                None => return HashMap::new(),
            }
        }

        let mut out = HashMap::new();
        node.collect(&mut String::new(), &mut out);
        out
    }

    /// Number of words with a non-zero frequency
    pub fn len(&self) -> usize {
        self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Build from the rows of one first-letter bucket of a sorted list.
    ///
    /// The list may be sorted case-insensitively or byte-wise with capitals
    /// first. Rows outside the bucket are skipped and reading stops at the
    /// first lower-case row past the lower-case part of the bucket. Repeated
    /// keys have their frequencies summed.
    pub fn from_bucket<R: BufRead>(reader: R, layout: FreqListLayout, letter: char) -> Result<Self> {
        let letter = letter.to_lowercase().next().unwrap_or(letter);
        let mut trie = Self::new();
        let mut lower_seen = false;

        for row in read_rows(reader, layout) {
            let row = row?;
            let lower_key = row.key.chars().next().is_some_and(char::is_lowercase);
            if row.bucket_letter() == Some(letter) {
                lower_seen |= lower_key;
                trie.add(&row.key, row.frequency);
            } else if lower_seen && lower_key {
                break;
            }
        }

        Ok(trie)
    }
}

impl<'a> FromIterator<(&'a str, u64)> for FreqTrie {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        let mut trie = Self::new();
        for (word, frequency) in iter {
            trie.insert(word, frequency);
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vzor_core::BoundaryFormat;

    fn kocka() -> FreqTrie {
        [("kočka", 120), ("kočky", 45), ("kočce", 30)].into_iter().collect()
    }

    #[test]
    fn lookup_returns_inserted_frequency() {
        let trie = kocka();
        assert_eq!(trie.lookup("kočky"), 45);
        assert_eq!(trie.lookup("koč"), 0);
        assert_eq!(trie.lookup("kočkami"), 0);
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn suffixes_below_prefix() {
        let trie = kocka();
        let expected: HashMap<String, u64> = [("ka", 120), ("ky", 45), ("ce", 30)]
            .into_iter()
            .map(|(s, f)| (s.to_string(), f))
            .collect();
        assert_eq!(trie.suffixes("koč"), expected);
        assert!(!trie.suffixes("koč").contains_key(""));
        assert_eq!(trie.suffixes("kočka")[""], 120);
        assert!(trie.suffixes("pes").is_empty());
        assert_eq!(trie.suffixes("").len(), 3);
    }

    #[test]
    fn case_marked_boundaries_are_crossed() {
        let trie: FreqTrie = [("kočKa", 120), ("kočKy", 45), ("kočKAmi", 2), ("kočkAmi", 3)]
            .into_iter()
            .collect();
        let suffixes = trie.suffixes("koč");
        assert_eq!(suffixes["ka"], 120);
        assert_eq!(suffixes["kami"], 5);
        // a literal match is preferred over the upper-case one
        assert_eq!(trie.suffixes("kočk").len(), 1);
        assert_eq!(trie.suffixes("kočk")["ami"], 3);
    }

    #[test]
    fn bucket_stops_after_its_letter() {
        let list = "hrad 10\nKočka 5\nkočky 4\nkos 3\nLes 2\nlano 2\nkoza 1\n";
        let trie = FreqTrie::from_bucket(list.as_bytes(), FreqListLayout::WordFreq, 'k').unwrap();
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.lookup("Kočka"), 5);
        assert_eq!(trie.lookup("hrad"), 0);
        assert_eq!(trie.lookup("koza"), 0);
    }

    #[test]
    fn byte_sorted_bucket_reaches_lower_case_rows() {
        let list = "Karel 9\nLes 2\nkočka 120\nkos 3\nles 1\nmost 4\n";

        let k = FreqTrie::from_bucket(list.as_bytes(), FreqListLayout::WordFreq, 'k').unwrap();
        assert_eq!(k.len(), 3);
        assert_eq!(k.lookup("Karel"), 9);
        assert_eq!(k.lookup("kočka"), 120);

        let l = FreqTrie::from_bucket(list.as_bytes(), FreqListLayout::WordFreq, 'l').unwrap();
        assert_eq!(l.len(), 2);
        assert_eq!(l.lookup("Les"), 2);
        assert_eq!(l.lookup("les"), 1);
        assert_eq!(l.lookup("most"), 0);
    }

    #[test]
    fn repeated_rows_are_summed() {
        let list = "ženy žena 30\nženy ženy 5\nžeň žeň 2\n";
        let trie = FreqTrie::from_bucket(list.as_bytes(), FreqListLayout::WordLemmaFreq, 'ž').unwrap();
        assert_eq!(trie.lookup("ženy"), 35);
        assert_eq!(trie.len(), 2);
        assert_eq!(trie.suffixes("žen")["y"], 35);
    }

    #[test]
    fn surface_frequency_ignores_piece_boundaries() {
        let trie: FreqTrie = [("kočKa", 120), ("kočKAmi", 2), ("kočkAmi", 3), ("Kos", 7)]
            .into_iter()
            .collect();
        assert_eq!(trie.surface_frequency("kočka"), 120);
        assert_eq!(trie.surface_frequency("kočkami"), 5);
        assert_eq!(trie.surface_frequency("kos"), 7);
        assert_eq!(trie.surface_frequency("kočky"), 0);
        assert_eq!(trie.lookup("kočka"), 0);
    }

    #[test]
    fn segmented_bucket_is_keyed_case_marked() {
        let layout = FreqListLayout::SegmentedWordFreq(BoundaryFormat::EqualsJoined);
        let list = "koč=ka kočka 120\nkoč=ky kočky 45\n";
        let trie = FreqTrie::from_bucket(list.as_bytes(), layout, 'K').unwrap();
        assert_eq!(trie.lookup("kočKa"), 120);
        assert_eq!(trie.suffixes("koč")["ky"], 45);
    }
}
