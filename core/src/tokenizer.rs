use crate::config::TermFolding;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::str::SplitWhitespace;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref PUNCT: Regex = Regex::new(r"[[:punct:]]").expect("valid regex");
}

/// Line breaks inside tweet text are exported as this literal marker.
const NEWLINE_MARKER: &str = "[newline]";

/// Split text on runs of whitespace. No empty tokens, no normalization.
///
/// The iterator is lazy and `Clone`, so a caller can restart it from a saved copy.
pub fn tokenize(text: &str) -> SplitWhitespace<'_> {
    text.split_whitespace()
}

/// NFKC + lowercase, then drop the newline marker and ASCII punctuation.
/// Returns `None` when nothing is left.
pub fn fold_term(token: &str) -> Option<String> {
    let lowered = token.nfkc().collect::<String>().to_lowercase();
    let without_marker = lowered.replace(NEWLINE_MARKER, "");
    let folded = PUNCT.replace_all(&without_marker, "");
    if folded.is_empty() {
        None
    } else {
        Some(folded.into_owned())
    }
}

/// Index terms of a text under the given folding mode.
#[derive(Clone)]
pub struct Terms<'a> {
    tokens: SplitWhitespace<'a>,
    folding: TermFolding,
}

impl<'a> Iterator for Terms<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = self.tokens.next()?;
            match self.folding {
                TermFolding::Verbatim => return Some(Cow::Borrowed(token)),
                TermFolding::Folded => {
                    if let Some(term) = fold_term(token) {
                        return Some(Cow::Owned(term));
                    }
                }
            }
        }
    }
}

pub fn terms(text: &str, folding: TermFolding) -> Terms<'_> {
    Terms { tokens: tokenize(text), folding }
}

/// Map a user-supplied query term onto the key space the index was built with.
pub fn query_term(term: &str, folding: TermFolding) -> Option<Cow<'_, str>> {
    match folding {
        TermFolding::Verbatim => Some(Cow::Borrowed(term)),
        TermFolding::Folded => fold_term(term.trim()).map(Cow::Owned),
    }
}
