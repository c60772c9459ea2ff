use std::collections::HashMap;

use crate::database::MorphDatabase;

/// Roots of every vocabulary lemma and paradigm model word, for answering
/// whether a word is an already known form.
#[derive(Debug, Clone, Default)]
pub struct FormIndex {
    roots: HashMap<String, Vec<String>>,
}

impl FormIndex {
    pub fn build(db: &MorphDatabase) -> Self {
        let mut index = Self::default();

        for paradigm in db.paradigms() {
            index.add(paradigm.root(), paradigm.id());
        }
        for (lemma, paradigm) in db.vocabulary().unique() {
            if let Some(root) = db.word_root(lemma, paradigm) {
                index.add(root, paradigm);
            }
        }

        tracing::debug!("Indexed {} roots of known words", index.roots.len());
        index
    }

    fn add(&mut self, root: &str, paradigm: &str) {
        let ids = self.roots.entry(root.to_lowercase()).or_default();
        if !ids.iter().any(|id| id == paradigm) {
            ids.push(paradigm.to_string());
        }
    }

    /// Whether `word` (case-insensitively) is root + affix of a known word
    pub fn form_present(&self, db: &MorphDatabase, word: &str) -> bool {
        let word = word.to_lowercase();
        word.char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(word.len()))
            .any(|cut| {
                let (root, affix) = word.split_at(cut);
                self.roots.get(root).is_some_and(|ids| {
                    ids.iter().any(|id| {
                        db.paradigm(id)
                            .is_some_and(|paradigm| paradigm.affixes().contains(affix))
                    })
                })
            })
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl MorphDatabase {
    pub fn form_index(&self) -> FormIndex {
        FormIndex::build(self)
    }
}
