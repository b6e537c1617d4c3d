//! Fixed word banks for the three fields a profile code carries.
//!
//! Each enum value owns five words. Encoding always emits the first word;
//! decoding accepts any of the five. Words are unique across all banks.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::domain::learner::{ChallengeLevel, InterfaceStyle, LearningStyle};

/// Words per enum value.
pub const WORDS_PER_VALUE: usize = 5;

type Entries<T> = &'static [(T, [&'static str; WORDS_PER_VALUE])];

/// One field's value-to-words table with a reverse index built on first use.
pub struct WordBank<T: 'static> {
    name: &'static str,
    entries: Entries<T>,
    index: Lazy<HashMap<&'static str, T>>,
}

impl<T: Copy + PartialEq> WordBank<T> {
    /// Bank name used in diagnostics ("style", "interface", "challenge").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every `(value, words)` row, in table order.
    pub fn entries(&self) -> Entries<T> {
        self.entries
    }

    /// All words for `value`. Empty only if the table is missing a row.
    pub fn words_for(&self, value: T) -> &'static [&'static str] {
        self.entries
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, words)| &words[..])
            .unwrap_or(&[])
    }

    /// The word encoding emits for `value`.
    pub fn primary_word(&self, value: T) -> Option<&'static str> {
        self.words_for(value).first().copied()
    }

    /// The value whose word list contains `word`.
    pub fn lookup(&self, word: &str) -> Option<T> {
        self.index.get(word).copied()
    }

    /// Iterates every word in the bank.
    pub fn words(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().flat_map(|(_, words)| words.iter().copied())
    }
}

fn index_of<T: Copy>(entries: Entries<T>) -> HashMap<&'static str, T> {
    entries
        .iter()
        .flat_map(|(value, words)| words.iter().map(move |w| (*w, *value)))
        .collect()
}

const STYLE_ENTRIES: Entries<LearningStyle> = &[
    (LearningStyle::Visual, ["bright", "sharp", "clear", "vivid", "crystal"]),
    (LearningStyle::Auditory, ["melodic", "rhythmic", "harmonic", "tuned", "resonant"]),
    (LearningStyle::Kinesthetic, ["swift", "agile", "dynamic", "active", "kinetic"]),
    (LearningStyle::Reading, ["wise", "studious", "scholarly", "thoughtful", "detailed"]),
];

const INTERFACE_ENTRIES: Entries<InterfaceStyle> = &[
    (InterfaceStyle::Premium, ["eagle", "falcon", "phoenix", "hawk", "dragon"]),
    (InterfaceStyle::Simple, ["oak", "pine", "cedar", "maple", "willow"]),
    (InterfaceStyle::Accessible, ["gentle", "calm", "steady", "patient", "kind"]),
];

const CHALLENGE_ENTRIES: Entries<ChallengeLevel> = &[
    (ChallengeLevel::High, ["summit", "peak", "apex", "zenith", "crest"]),
    (ChallengeLevel::Medium, ["bridge", "path", "journey", "flow", "stream"]),
    (ChallengeLevel::Low, ["meadow", "garden", "harbor", "haven", "grove"]),
];

/// First token: learning style.
pub static STYLE_BANK: WordBank<LearningStyle> = WordBank {
    name: "style",
    entries: STYLE_ENTRIES,
    index: Lazy::new(|| index_of(STYLE_ENTRIES)),
};

/// Second token: interface style.
pub static INTERFACE_BANK: WordBank<InterfaceStyle> = WordBank {
    name: "interface",
    entries: INTERFACE_ENTRIES,
    index: Lazy::new(|| index_of(INTERFACE_ENTRIES)),
};

/// Third token: challenge level.
pub static CHALLENGE_BANK: WordBank<ChallengeLevel> = WordBank {
    name: "challenge",
    entries: CHALLENGE_ENTRIES,
    index: Lazy::new(|| index_of(CHALLENGE_ENTRIES)),
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_value_has_five_words() {
        for style in LearningStyle::ALL {
            assert_eq!(STYLE_BANK.words_for(*style).len(), WORDS_PER_VALUE);
        }
        for interface in InterfaceStyle::ALL {
            assert_eq!(INTERFACE_BANK.words_for(*interface).len(), WORDS_PER_VALUE);
        }
        for challenge in ChallengeLevel::ALL {
            assert_eq!(CHALLENGE_BANK.words_for(*challenge).len(), WORDS_PER_VALUE);
        }
    }

    #[test]
    fn primary_words() {
        assert_eq!(STYLE_BANK.primary_word(LearningStyle::Visual), Some("bright"));
        assert_eq!(INTERFACE_BANK.primary_word(InterfaceStyle::Simple), Some("oak"));
        assert_eq!(CHALLENGE_BANK.primary_word(ChallengeLevel::Low), Some("meadow"));
    }

    #[test]
    fn lookup_accepts_any_word_of_a_value() {
        assert_eq!(STYLE_BANK.lookup("kinetic"), Some(LearningStyle::Kinesthetic));
        assert_eq!(INTERFACE_BANK.lookup("willow"), Some(InterfaceStyle::Simple));
        assert_eq!(CHALLENGE_BANK.lookup("zenith"), Some(ChallengeLevel::High));
    }

    #[test]
    fn lookup_is_per_bank() {
        // "eagle" is an interface word, not a style word.
        assert_eq!(STYLE_BANK.lookup("eagle"), None);
        assert_eq!(CHALLENGE_BANK.lookup("bright"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(STYLE_BANK.lookup("Bright"), None);
    }

    #[test]
    fn words_are_unique_across_banks() {
        let all: Vec<_> = STYLE_BANK
            .words()
            .chain(INTERFACE_BANK.words())
            .chain(CHALLENGE_BANK.words())
            .collect();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(all.len(), (4 + 3 + 3) * WORDS_PER_VALUE);
    }

    #[test]
    fn words_are_lowercase_ascii() {
        for word in STYLE_BANK
            .words()
            .chain(INTERFACE_BANK.words())
            .chain(CHALLENGE_BANK.words())
        {
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{}", word);
        }
    }
}
