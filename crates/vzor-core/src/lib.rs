pub mod error;
pub mod freqlist;
pub mod language;
pub mod preprocess;
pub mod segment;
pub mod types;

pub use error::{Result, VzorError};
pub use freqlist::{FreqListLayout, FreqRow};
pub use language::Segmenter;
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use segment::{BoundaryFormat, SegmentedWord};
pub use types::{Direction, RankedParadigm, ScoringPolicy, WordTarget};
