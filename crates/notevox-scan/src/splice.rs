use crate::types::EmbedMatch;

/// Insert `text` into the buffer immediately after the embed's end offset.
///
/// Callers splicing multiple matches must proceed in reverse document order
/// so the offsets of earlier matches stay valid.
pub fn splice_after(content: &mut String, embed: &EmbedMatch, text: &str) {
    content.insert_str(embed.end(), text);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::EmbedScanner;

    #[test]
    fn inserts_directly_after_the_embed() {
        let scanner = EmbedScanner::new();
        let mut content = "See ![[clip.mp3]] end".to_string();
        let matches = scanner.scan(&content);
        splice_after(
            &mut content,
            &matches[0],
            "\n\n**Transcript (en):**\nhello world\n",
        );
        assert_eq!(
            content,
            "See ![[clip.mp3]]\n\n**Transcript (en):**\nhello world\n end"
        );
    }

    #[test]
    fn reverse_order_splicing_keeps_earlier_offsets_valid() {
        let scanner = EmbedScanner::new();
        let mut content = "![[a.mp3]] mid ![[b.wav]] tail".to_string();
        let matches = scanner.scan(&content);
        assert_eq!(matches.len(), 2);

        // Splice the later match first; the earlier match's offsets still
        // point at its embed.
        splice_after(&mut content, &matches[1], " B");
        splice_after(&mut content, &matches[0], " A");
        assert_eq!(content, "![[a.mp3]] A mid ![[b.wav]] B tail");
    }

    #[test]
    fn byte_offsets_hold_with_multibyte_text_before_the_embed() {
        let scanner = EmbedScanner::new();
        let mut content = "héllo — ![[clip.ogg]] fin".to_string();
        let matches = scanner.scan(&content);
        splice_after(&mut content, &matches[0], "*");
        assert_eq!(content, "héllo — ![[clip.ogg]]* fin");
    }
}
