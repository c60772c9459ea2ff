//! Morphological database: paradigms built from a template file, the lemma
//! vocabulary, and the observed affix spreads.

pub mod compare;
pub mod database;
pub mod forms;
pub mod paradigm;
pub mod spread;
pub mod template;
pub mod vocabulary;

pub use compare::SameParadigmCriterion;
pub use database::{DatabaseOptions, MorphDatabase};
pub use forms::FormIndex;
pub use paradigm::{AffixTable, Paradigm};
pub use spread::SpreadStats;
pub use template::ParadigmTemplate;
pub use vocabulary::Vocabulary;
