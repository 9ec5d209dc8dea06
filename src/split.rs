//! Splitting a body of text into sentences that can be fed to
//! [`Chain::add_sentence()`](crate::Chain::add_sentence()).

/// Splits `text` into sentences on any of the `terminators`.
///
/// Line breaks (`\r\n`, `\n` and `\r`) become single spaces first, so a sentence may span
/// several lines. Fragments that are empty or only whitespace are skipped. The terminators
/// themselves are not part of the returned sentences.
///
/// ```
/// # use sentencechain::split::split_sentences;
/// let sentences = split_sentences("Hello there.\nGeneral\r\nKenobi! ", &['.', '!']);
/// assert_eq!(sentences, vec!["Hello there", " General Kenobi"]);
/// ```
pub fn split_sentences(text: &str, terminators: &[char]) -> Vec<String> {
    let normalized = text.replace("\r\n", " ").replace(['\n', '\r'], " ");

    normalized
        .split(terminators)
        .filter(|fragment| !fragment.trim().is_empty())
        .map(str::to_string)
        .collect()
}
