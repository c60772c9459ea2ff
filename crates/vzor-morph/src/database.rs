use std::collections::{BTreeMap, HashMap, HashSet};

use vzor_core::{Result, VzorError};

use crate::paradigm::{AffixTable, Paradigm};
use crate::template::ParadigmTemplate;
use crate::vocabulary::Vocabulary;

/// Language conventions the database is built with
#[derive(Debug, Clone, Default)]
pub struct DatabaseOptions {
    /// Tag fragments marking the citation form (nominative singular, infinitive, ...)
    pub citation_markers: Vec<String>,
    /// Tags containing any of these fragments are dropped
    pub excluded_tag_markers: Vec<String>,
}

pub struct MorphDatabase {
    paradigms: BTreeMap<String, Paradigm>,
    vocabulary: Vocabulary,
    affix_index: HashMap<String, Vec<String>>,
    common_suffix_index: HashMap<String, Vec<String>>,
}

impl MorphDatabase {
    /// Cross every head of every paradigm with the endings of its aliases
    pub fn build(
        template: &ParadigmTemplate,
        vocabulary: Vocabulary,
        options: &DatabaseOptions,
    ) -> Result<Self> {
        let mut paradigms = BTreeMap::new();

        for decl in template.paradigms() {
            let mut affixes = AffixTable::new();
            for row in &decl.heads {
                for alias in &row.aliases {
                    let Some(group) = template.group(alias) else {
                        return Err(VzorError::malformed(
                            template.origin(),
                            row.line,
                            format!("unknown ending group {alias:?} in paradigm {}", decl.id),
                        ));
                    };
                    for (suffix, tag) in group {
                        if options
                            .excluded_tag_markers
                            .iter()
                            .any(|m| tag.contains(m.as_str()))
                        {
                            continue;
                        }
                        affixes.add_tags(format!("{}{}", row.head, suffix), [tag.clone()]);
                    }
                }
            }

            let paradigm = Paradigm::new(
                decl.id.clone(),
                affixes,
                &options.citation_markers,
                template.origin(),
                decl.line,
            )?;
            paradigms.insert(decl.id.clone(), paradigm);
        }

        let mut affix_index: HashMap<String, Vec<String>> = HashMap::new();
        let mut common_suffix_index: HashMap<String, Vec<String>> = HashMap::new();
        for (id, paradigm) in &paradigms {
            for affix in paradigm.affixes().affixes() {
                affix_index.entry(affix.to_string()).or_default().push(id.clone());
            }
            common_suffix_index
                .entry(paradigm.common_suffix().to_string())
                .or_default()
                .push(id.clone());
        }

        let unknown = vocabulary
            .entries()
            .iter()
            .filter(|(_, paradigm)| !paradigms.contains_key(paradigm))
            .count();
        if unknown > 0 {
            tracing::warn!("{} dictionary entries refer to unknown paradigms", unknown);
        }

        tracing::info!(
            "Built morphological database: {} paradigms, {} dictionary entries",
            paradigms.len(),
            vocabulary.len()
        );

        Ok(Self {
            paradigms,
            vocabulary,
            affix_index,
            common_suffix_index,
        })
    }

    pub fn paradigm(&self, id: &str) -> Option<&Paradigm> {
        self.paradigms.get(id)
    }

    /// Paradigms ordered by id
    pub fn paradigms(&self) -> impl Iterator<Item = &Paradigm> {
        self.paradigms.values()
    }

    pub(crate) fn paradigm_mut(&mut self, id: &str) -> Option<&mut Paradigm> {
        self.paradigms.get_mut(id)
    }

    pub(crate) fn paradigms_mut(&mut self) -> impl Iterator<Item = &mut Paradigm> {
        self.paradigms.values_mut()
    }

    pub fn len(&self) -> usize {
        self.paradigms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paradigms.is_empty()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Lemma without the paradigm's common suffix, cut by character count
    pub fn word_root<'w>(&self, lemma: &'w str, paradigm: &str) -> Option<&'w str> {
        let suffix_len = self.paradigms.get(paradigm)?.common_suffix().chars().count();
        if suffix_len == 0 {
            return Some(lemma);
        }
        let cut = lemma
            .char_indices()
            .rev()
            .nth(suffix_len - 1)
            .map_or(0, |(i, _)| i);
        Some(&lemma[..cut])
    }

    /// Every form of `lemma` inflected by `paradigm`; empty for unknown paradigms
    pub fn lemma_forms(&self, lemma: &str, paradigm: &str) -> HashSet<String> {
        let (Some(root), Some(data)) = (self.word_root(lemma, paradigm), self.paradigms.get(paradigm))
        else {
            return HashSet::new();
        };
        data.affixes()
            .affixes()
            .map(|affix| format!("{root}{affix}"))
            .collect()
    }

    /// `(form, lemma, paradigm)` for every lemma of the vocabulary
    pub fn all_forms(&self) -> impl Iterator<Item = (String, &str, &str)> {
        self.vocabulary.unique().flat_map(move |(lemma, paradigm)| {
            let mut forms: Vec<String> = self.lemma_forms(lemma, paradigm).into_iter().collect();
            forms.sort();
            forms.into_iter().map(move |form| (form, lemma, paradigm))
        })
    }

    /// Paradigms (by id) having `affix` among their affixes
    pub fn paradigms_with_affix(&self, affix: &str) -> &[String] {
        self.affix_index.get(affix).map_or(&[], Vec::as_slice)
    }

    /// Paradigms (by id) whose common suffix is `suffix`
    pub fn paradigms_with_common_suffix(&self, suffix: &str) -> &[String] {
        self.common_suffix_index.get(suffix).map_or(&[], Vec::as_slice)
    }

    pub fn is_known_affix(&self, affix: &str) -> bool {
        self.affix_index.contains_key(affix)
    }

    pub fn is_known_common_suffix(&self, suffix: &str) -> bool {
        self.common_suffix_index.contains_key(suffix)
    }
}
