/// File extensions recognized as audio embeds, matched case-insensitively.
pub const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "wav", "ogg", "m4a"];

/// A single audio embed found in a note buffer.
///
/// Offsets are byte offsets into the buffer the match was produced from.
/// They stay valid for splicing only while matches are consumed in reverse
/// document order: inserting after a later match never moves an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedMatch {
    /// The full matched embed text, e.g. `![[clip.mp3]]`.
    pub full_text: String,
    /// The captured file name, e.g. `clip.mp3`.
    pub file_name: String,
    /// Byte offset of the match start in the scanned buffer.
    pub start: usize,
    /// Byte length of the match.
    pub len: usize,
}

impl EmbedMatch {
    /// Byte offset just past the embed; the insertion point for a transcript.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}
