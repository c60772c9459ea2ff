use std::collections::HashMap;

use vzor_core::{Result, VzorError};

/// Affixes of one paradigm in template order, each with its tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffixTable {
    entries: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl AffixTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append tags to an affix, creating it at the end if it is new
    pub fn add_tags<I>(&mut self, affix: String, tags: I)
    where
        I: IntoIterator<Item = String>,
    {
        match self.index.get(&affix) {
            Some(&i) => self.entries[i].1.extend(tags),
            None => {
                self.index.insert(affix.clone(), self.entries.len());
                self.entries.push((affix, tags.into_iter().collect()));
            }
        }
    }

    pub fn contains(&self, affix: &str) -> bool {
        self.index.contains_key(affix)
    }

    pub fn tags(&self, affix: &str) -> Option<&[String]> {
        self.index.get(affix).map(|&i| self.entries[i].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(affix, tags)| (affix.as_str(), tags.as_slice()))
    }

    pub fn affixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(affix, _)| affix.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Same affixes with the same tags, in any order
    pub fn same_mapping(&self, other: &AffixTable) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(affix, tags)| other.tags(affix) == Some(tags))
    }

    /// Number of affixes both tables share
    pub fn intersection(&self, other: &AffixTable) -> usize {
        self.affixes().filter(|a| other.contains(a)).count()
    }
}

/// A named inflectional pattern
#[derive(Debug, Clone, PartialEq)]
pub struct Paradigm {
    id: String,
    affixes: AffixTable,
    common_suffix: String,
    root: String,
    spread: HashMap<String, f64>,
}

impl Paradigm {
    /// Derive the common suffix and root of a paradigm.
    ///
    /// The common suffix is the longest affix carrying a citation tag that the
    /// citation form ends with, or failing that the longest affix the citation
    /// form ends with at all.
    pub(crate) fn new(
        id: String,
        affixes: AffixTable,
        citation_markers: &[String],
        origin: &str,
        line: usize,
    ) -> Result<Self> {
        let citation = citation_form(&id);

        let tagged = longest_ending(
            citation,
            affixes
                .iter()
                .filter(|(_, tags)| {
                    tags.iter()
                        .any(|tag| citation_markers.iter().any(|m| tag.contains(m.as_str())))
                })
                .map(|(affix, _)| affix),
        );

        let common_suffix = match tagged.or_else(|| longest_ending(citation, affixes.affixes())) {
            Some(suffix) => suffix,
            None => {
                return Err(VzorError::malformed(
                    origin,
                    line,
                    format!("no affix of paradigm {id} ends its citation form"),
                ));
            }
        };

        let root = citation[..citation.len() - common_suffix.len()].to_string();

        Ok(Self {
            id,
            affixes,
            common_suffix,
            root,
            spread: HashMap::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The model word the paradigm is named after
    pub fn citation_form(&self) -> &str {
        citation_form(&self.id)
    }

    pub fn affixes(&self) -> &AffixTable {
        &self.affixes
    }

    pub fn common_suffix(&self) -> &str {
        &self.common_suffix
    }

    /// Citation form without its common suffix
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Observed affix frequencies, empty until a spread is loaded
    pub fn spread(&self) -> &HashMap<String, f64> {
        &self.spread
    }

    pub(crate) fn spread_mut(&mut self) -> &mut HashMap<String, f64> {
        &mut self.spread
    }

    pub(crate) fn reset_spread(&mut self) {
        self.spread = self.affixes.affixes().map(|a| (a.to_string(), 0.0)).collect();
    }

    /// Affix realizing `word` as a form of the model word
    pub fn affix_of<'w>(&self, word: &'w str) -> Option<&'w str> {
        word.strip_prefix(self.root.as_str())
            .filter(|affix| self.affixes.contains(affix))
    }

    /// Primary grammatical category: the first two characters of the first tag
    pub fn primary_category(&self) -> Option<&str> {
        let (_, tags) = self.affixes.iter().next()?;
        let tag = tags.first()?;
        let end = tag.char_indices().nth(2).map_or(tag.len(), |(i, _)| i);
        Some(&tag[..end])
    }
}

fn longest_ending<'a>(word: &str, affixes: impl Iterator<Item = &'a str>) -> Option<String> {
    affixes
        .filter(|affix| word.ends_with(affix))
        .max_by_key(|affix| affix.chars().count())
        .map(str::to_string)
}

/// Part of a paradigm id before the first `_`
pub fn citation_form(id: &str) -> &str {
    id.split('_').next().unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str)]) -> AffixTable {
        let mut table = AffixTable::new();
        for (affix, tag) in rows {
            table.add_tags(affix.to_string(), [tag.to_string()]);
        }
        table
    }

    fn markers() -> Vec<String> {
        vec!["nSc1".to_string(), "mF".to_string()]
    }

    #[test]
    fn tags_accumulate_in_insertion_order() {
        let table = table(&[("a", "k1nSc1"), ("y", "k1nSc2"), ("a", "k1nPc5")]);
        assert_eq!(table.affixes().collect::<Vec<_>>(), vec!["a", "y"]);
        assert_eq!(table.tags("a").unwrap(), ["k1nSc1", "k1nPc5"]);
    }

    #[test]
    fn citation_tag_wins_over_longer_affix() {
        let affixes = table(&[("ka", "k1nSc2"), ("a", "k1nSc1"), ("y", "k1nPc1")]);
        let paradigm = Paradigm::new("kočka".into(), affixes, &markers(), "t", 1).unwrap();
        assert_eq!(paradigm.common_suffix(), "a");
        assert_eq!(paradigm.root(), "kočk");
    }

    #[test]
    fn falls_back_to_longest_matching_affix() {
        let affixes = table(&[("t", "k5mI"), ("st", "k5mN"), ("e", "k5mR")]);
        let paradigm = Paradigm::new("nést_x".into(), affixes, &markers(), "t", 1).unwrap();
        assert_eq!(paradigm.citation_form(), "nést");
        assert_eq!(paradigm.common_suffix(), "st");
        assert_eq!(paradigm.root(), "né");
    }

    #[test]
    fn no_matching_affix_is_malformed() {
        let affixes = table(&[("ou", "k1nSc7")]);
        let err = Paradigm::new("žena".into(), affixes, &markers(), "x.par", 4).unwrap_err();
        assert!(matches!(err, VzorError::MalformedInput { line: 4, .. }));
    }

    #[test]
    fn primary_category_is_first_tag_prefix() {
        let affixes = table(&[("", "k1gInSc1"), ("u", "k1gInSc2")]);
        let paradigm = Paradigm::new("hrad".into(), affixes, &markers(), "t", 1).unwrap();
        assert_eq!(paradigm.primary_category(), Some("k1"));
        assert_eq!(paradigm.affix_of("hradu"), Some("u"));
        assert_eq!(paradigm.affix_of("hradem"), None);
    }
}
