use regex::Regex;

/// Split text into lowercase tokens of letters and digits.
///
/// Unicode character classes, not ASCII ranges: the catalog carries names
/// in Cyrillic, Han, and accented Latin scripts, and all of them must be
/// searchable. Station names also lean on short tokens ("FM", "BBC 1",
/// "NRJ"), so nothing is filtered by length. Indexing and query parsing
/// share this function so a query term can only ever miss the vocabulary
/// through the edit tolerance, never through a normalization mismatch.
pub fn tokenize(text: &str) -> Vec<String> {
    let re = Regex::new(r"[\p{L}\p{N}]+").unwrap();
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}
