//! Text normalization shared by matching and classification

/// Normalize text for similarity matching.
///
/// Lowercase, drop every character that is not a Unicode letter, number,
/// or whitespace, collapse whitespace runs to single spaces, trim.
pub fn normalize_for_match(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Count the characters that carry content: letters and numbers only.
///
/// Whitespace, punctuation, symbols, and emoji do not count.
pub fn content_char_count(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphanumeric()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize_for_match("전세, 월세?!"), "전세 월세");
    }

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize_for_match("LTV 한도"), "ltv 한도");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize_for_match("  보금자리론   이란  "), "보금자리론 이란");
    }

    #[test]
    fn test_normalize_strips_emoji() {
        assert_eq!(normalize_for_match("집 👍 좋아요"), "집 좋아요");
    }

    #[test]
    fn test_content_char_count() {
        assert_eq!(content_char_count(""), 0);
        assert_eq!(content_char_count("!!"), 0);
        assert_eq!(content_char_count("ㅇㅇ"), 2);
        assert_eq!(content_char_count("전세 3억"), 4);
    }
}
