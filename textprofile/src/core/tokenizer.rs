// src/core/tokenizer.rs

/// The only characters that close a sentence.
pub const SENTENCE_STOPPERS: [char; 3] = ['.', '?', '!'];

/// Fragments with fewer whitespace-delimited words are not sentences.
pub const MIN_SENTENCE_WORDS: usize = 2;

#[inline]
#[must_use]
pub fn is_stopper(c: char) -> bool {
    SENTENCE_STOPPERS.contains(&c)
}

/// Canonical words of a line: digits and punctuation dropped, lower-cased,
/// split on whitespace runs. `"Don't stop-2-me"` gives `["dont", "stopme"]`.
#[must_use]
pub fn words_of(line: &str) -> Vec<String> {
    let cleaned: String = line
        .chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Whitespace-delimited words with no cleaning, as counted for line and
/// document totals.
#[inline]
#[must_use]
pub fn raw_word_count(line: &str) -> usize {
    line.split_whitespace().count()
}

/// Splits a stream of lines into sentences.
///
/// State carries across lines: a line break contributes a single space to the
/// open buffer, so a sentence may span several lines. Whatever is left open
/// when the stream ends is not a sentence.
#[derive(Debug, Default)]
pub struct SentenceSplitter {
    buffer: String,
}

impl SentenceSplitter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Feeds one line and returns the sentences it closed, in order.
    pub fn push_line(&mut self, line: &str) -> Vec<String> {
        let mut closed = Vec::new();
        if !self.buffer.is_empty() {
            self.buffer.push(' ');
        }

        for c in line.chars() {
            self.buffer.push(c);
            if is_stopper(c) {
                let fragment = std::mem::take(&mut self.buffer);
                if let Some(sentence) = accept_fragment(&fragment) {
                    closed.push(sentence);
                }
            }
        }

        closed
    }

    /// Ends the stream, returning the discarded unterminated fragment if it
    /// held anything but whitespace.
    #[must_use]
    pub fn finish(self) -> Option<String> {
        let rest = self.buffer.trim();
        if rest.is_empty() {
            None
        } else {
            log::debug!("discarding unterminated trailing fragment: {rest:?}");
            Some(rest.to_owned())
        }
    }
}

fn accept_fragment(fragment: &str) -> Option<String> {
    let trimmed = fragment.trim();
    if trimmed
        .chars()
        .all(|c| is_stopper(c) || c.is_whitespace())
    {
        return None;
    }
    if raw_word_count(trimmed) < MIN_SENTENCE_WORDS {
        return None;
    }
    Some(trimmed.to_owned())
}

/// Runs a [`SentenceSplitter`] over `lines` and collects every sentence.
pub fn sentences_of<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut splitter = SentenceSplitter::new();
    let mut sentences = Vec::new();
    for line in lines {
        sentences.extend(splitter.push_line(line.as_ref()));
    }
    // The open fragment is dropped on purpose.
    let _discarded = splitter.finish();
    sentences
}
