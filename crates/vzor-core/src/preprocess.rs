use unicode_normalization::UnicodeNormalization;

/// Line-level cleanup applied before template and dictionary parsing.
///
/// Leading whitespace is significant in the template format, so the default
/// implementation only normalizes to NFC and drops the line terminator.
pub trait Preprocessor {
    fn process(&self, line: &str) -> String {
        line.trim_end_matches(['\n', '\r']).nfc().collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
