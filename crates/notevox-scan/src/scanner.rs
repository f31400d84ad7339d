use regex::Regex;
use tracing::debug;

use crate::types::EmbedMatch;

/// Embed pattern: `![[name.ext]]` with a recognized audio extension.
///
/// The bracket content excludes `]`, so names with nested brackets are not
/// supported. The extension match is case-insensitive.
const EMBED_PATTERN: &str = r"(?i)!\[\[([^\]]+\.(?:mp3|wav|ogg|m4a))\]\]";

/// Scans note buffers for audio embeds.
pub struct EmbedScanner {
    re: Regex,
}

impl Default for EmbedScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbedScanner {
    pub fn new() -> Self {
        // The pattern is a compile-time literal.
        Self {
            re: Regex::new(EMBED_PATTERN).expect("embed pattern compiles"),
        }
    }

    /// Scan `content` for audio embeds, reported in document order.
    ///
    /// An empty result means "no audio found"; it is not an error.
    pub fn scan(&self, content: &str) -> Vec<EmbedMatch> {
        let matches: Vec<EmbedMatch> = self
            .re
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let name = caps.get(1)?;
                Some(EmbedMatch {
                    full_text: whole.as_str().to_string(),
                    file_name: name.as_str().to_string(),
                    start: whole.start(),
                    len: whole.len(),
                })
            })
            .collect();
        debug!("found {} audio embed(s)", matches.len());
        matches
    }
}
