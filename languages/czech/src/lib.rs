pub mod loader;
pub mod preprocess;
pub mod segmenter;
pub mod tags;

pub use loader::CzechLoader;
pub use preprocess::{CzechPreprocessor, repair_encoding};
pub use segmenter::{CharSegmenter, LookupSegmenter};
pub use tags::database_options;
