/// A raw entry that classification accepted as text.
///
/// Derived from a [`repofold_utils::types::RawEntry`]; never persisted.
/// The decoded content owns the original byte buffer where the declared
/// encoding allowed reuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedEntry {
    /// Relative, forward-slash path inside the cloned tree.
    pub path: String,
    /// Decoded UTF-8 content.
    pub content: String,
}

impl ClassifiedEntry {
    /// Decoded byte length used for budget accounting.
    ///
    /// This is the length of the decoded text, not of the original raw
    /// bytes; decoding may change the size.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.content.len()
    }
}
