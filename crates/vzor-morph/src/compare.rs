use crate::database::MorphDatabase;

/// When a guessed paradigm counts as the right one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameParadigmCriterion {
    /// Identical id
    SameId,
    /// Identical affix → tags mapping
    SameAffixes,
    /// At least `threshold` shared affixes
    CommonForms,
    /// Same primary grammatical category
    CommonTags,
}

impl SameParadigmCriterion {
    pub const ALL: [SameParadigmCriterion; 4] = [
        SameParadigmCriterion::SameId,
        SameParadigmCriterion::SameAffixes,
        SameParadigmCriterion::CommonForms,
        SameParadigmCriterion::CommonTags,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "same_paradigms" | "same_id" => Some(Self::SameId),
            "same_affixes" => Some(Self::SameAffixes),
            "common_forms" => Some(Self::CommonForms),
            "common_tags" => Some(Self::CommonTags),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SameId => "same_paradigms",
            Self::SameAffixes => "same_affixes",
            Self::CommonForms => "common_forms",
            Self::CommonTags => "common_tags",
        }
    }
}

impl MorphDatabase {
    /// Compare two paradigms by id; unknown ids never match
    pub fn same_paradigms(
        &self,
        a: &str,
        b: &str,
        criterion: SameParadigmCriterion,
        threshold: usize,
    ) -> bool {
        let (Some(first), Some(second)) = (self.paradigm(a), self.paradigm(b)) else {
            return false;
        };
        match criterion {
            SameParadigmCriterion::SameId => first.id() == second.id(),
            SameParadigmCriterion::SameAffixes => first.affixes().same_mapping(second.affixes()),
            SameParadigmCriterion::CommonForms => {
                first.affixes().intersection(second.affixes()) >= threshold
            }
            SameParadigmCriterion::CommonTags => {
                first.primary_category().is_some()
                    && first.primary_category() == second.primary_category()
            }
        }
    }

    /// Whether both paradigms inflect `word` into the same set of forms
    pub fn same_lemma(&self, word: &str, guessed: &str, actual: &str) -> bool {
        if self.paradigm(guessed).is_none() || self.paradigm(actual).is_none() {
            return false;
        }
        self.lemma_forms(word, guessed) == self.lemma_forms(word, actual)
    }
}
