/// Word segmentation collaborator (SentencePiece, Morfessor, per-character
/// baseline, ...). Must be deterministic for a fixed model and input.
pub trait Segmenter {
    /// Split a word into ordered sub-word pieces
    fn segment(&self, word: &str) -> Vec<String>;
}

impl<F> Segmenter for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn segment(&self, word: &str) -> Vec<String> {
        self(word)
    }
}
