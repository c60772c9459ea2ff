use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use vzor_config::Config;
use vzor_core::Segmenter;
use vzor_lang_czech::CzechLoader;
use vzor_morph::MorphDatabase;

pub mod evaluate;
pub mod forms;
pub mod guess;
pub mod suffixes;
pub mod test;

/// Database from the configured template and dictionary, with the spread
/// loaded when a filtered frequency list is configured
pub fn load_database(config: &Config) -> anyhow::Result<MorphDatabase> {
    let data = &config.data;
    let mut db = CzechLoader::load_database(
        Path::new(&data.paradigms),
        Path::new(&data.dictionary),
        data.only_formal,
    )
    .context("cannot build the morphological database")?;

    if let Some(list) = &data.filtered_frequency_list {
        let stats = CzechLoader::load_spread(&mut db, Path::new(list))
            .with_context(|| format!("cannot load spread from {list}"))?;
        if stats.matched == 0 {
            tracing::warn!("No spread row matched a paradigm affix in {}", list);
        }
    }

    Ok(db)
}

pub fn load_segmenter(config: &Config) -> anyhow::Result<Box<dyn Segmenter>> {
    let path = config.data.segmentation_list.as_deref().map(Path::new);
    CzechLoader::load_segmenter(path).context("cannot load the segmentation list")
}

/// Buffered file, or stdout when no path is given
pub fn open_output(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
