use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use vzor_core::{Result, Segmenter};
use vzor_morph::{MorphDatabase, ParadigmTemplate, SpreadStats, Vocabulary};

use crate::preprocess::CzechPreprocessor;
use crate::segmenter::{CharSegmenter, LookupSegmenter};
use crate::tags::database_options;

pub struct CzechLoader;

impl CzechLoader {
    /// Build the database from a paradigm template and a dictionary file
    pub fn load_database(paradigms: &Path, dictionary: &Path, only_formal: bool) -> Result<MorphDatabase> {
        tracing::info!("Loading paradigms from {}", paradigms.display());
        let template = ParadigmTemplate::parse(
            BufReader::new(File::open(paradigms)?),
            &paradigms.display().to_string(),
            &CzechPreprocessor,
        )?;

        tracing::info!("Loading dictionary from {}", dictionary.display());
        let vocabulary = Vocabulary::parse(
            BufReader::new(File::open(dictionary)?),
            &dictionary.display().to_string(),
            &CzechPreprocessor,
        )?;

        MorphDatabase::build(&template, vocabulary, &database_options(only_formal))
    }

    /// Fill the paradigm spreads from a filtered `paradigm word frequency` list
    pub fn load_spread(db: &mut MorphDatabase, path: &Path) -> Result<SpreadStats> {
        tracing::info!("Loading spread from {}", path.display());
        db.load_spread(BufReader::new(File::open(path)?))
    }

    /// Lookup segmenter for a segmentation list, the per-character baseline
    /// without one
    pub fn load_segmenter(path: Option<&Path>) -> Result<Box<dyn Segmenter>> {
        match path {
            Some(path) => {
                tracing::info!("Loading segmentations from {}", path.display());
                let segmenter = LookupSegmenter::parse(BufReader::new(File::open(path)?))?;
                tracing::info!("Loaded {} segmentations", segmenter.len());
                Ok(Box::new(segmenter))
            }
            None => Ok(Box::new(CharSegmenter)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_are_io_errors() {
        let err = CzechLoader::load_database(
            Path::new("/nonexistent/current.par"),
            Path::new("/nonexistent/current.dic"),
            false,
        )
        .err()
        .unwrap();
        assert!(matches!(err, vzor_core::VzorError::Io(_)));
    }

    #[test]
    fn no_segmentation_list_means_per_character() {
        let segmenter = CzechLoader::load_segmenter(None).unwrap();
        assert_eq!(segmenter.segment("les"), vec!["l", "e", "s"]);
    }
}
