//! Canonical book and difficulty identifiers

use crate::error::{QuizError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! books {
    ($($variant:ident => $name:literal, $stem:literal;)+) => {
        /// One of the 66 canonical books, in canonical order
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Book {
            $($variant,)+
        }

        impl Book {
            /// Every book in canonical order
            pub const ALL: &'static [Book] = &[$(Book::$variant,)+];

            /// Display name, e.g. "1 Samuel"
            pub fn name(self) -> &'static str {
                match self {
                    $(Book::$variant => $name,)+
                }
            }

            /// File stem used by file-backed sources, e.g. "1_samuel"
            pub fn file_stem(self) -> &'static str {
                match self {
                    $(Book::$variant => $stem,)+
                }
            }
        }
    };
}

books! {
    Genesis => "Genesis", "genesis";
    Exodus => "Exodus", "exodus";
    Leviticus => "Leviticus", "leviticus";
    Numbers => "Numbers", "numbers";
    Deuteronomy => "Deuteronomy", "deuteronomy";
    Joshua => "Joshua", "joshua";
    Judges => "Judges", "judges";
    Ruth => "Ruth", "ruth";
    FirstSamuel => "1 Samuel", "1_samuel";
    SecondSamuel => "2 Samuel", "2_samuel";
    FirstKings => "1 Kings", "1_kings";
    SecondKings => "2 Kings", "2_kings";
    FirstChronicles => "1 Chronicles", "1_chronicles";
    SecondChronicles => "2 Chronicles", "2_chronicles";
    Ezra => "Ezra", "ezra";
    Nehemiah => "Nehemiah", "nehemiah";
    Esther => "Esther", "esther";
    Job => "Job", "job";
    Psalms => "Psalms", "psalms";
    Proverbs => "Proverbs", "proverbs";
    Ecclesiastes => "Ecclesiastes", "ecclesiastes";
    SongOfSolomon => "Song of Solomon", "song_of_solomon";
    Isaiah => "Isaiah", "isaiah";
    Jeremiah => "Jeremiah", "jeremiah";
    Lamentations => "Lamentations", "lamentations";
    Ezekiel => "Ezekiel", "ezekiel";
    Daniel => "Daniel", "daniel";
    Hosea => "Hosea", "hosea";
    Joel => "Joel", "joel";
    Amos => "Amos", "amos";
    Obadiah => "Obadiah", "obadiah";
    Jonah => "Jonah", "jonah";
    Micah => "Micah", "micah";
    Nahum => "Nahum", "nahum";
    Habakkuk => "Habakkuk", "habakkuk";
    Zephaniah => "Zephaniah", "zephaniah";
    Haggai => "Haggai", "haggai";
    Zechariah => "Zechariah", "zechariah";
    Malachi => "Malachi", "malachi";
    Matthew => "Matthew", "matthew";
    Mark => "Mark", "mark";
    Luke => "Luke", "luke";
    John => "John", "john";
    Acts => "Acts", "acts";
    Romans => "Romans", "romans";
    FirstCorinthians => "1 Corinthians", "1_corinthians";
    SecondCorinthians => "2 Corinthians", "2_corinthians";
    Galatians => "Galatians", "galatians";
    Ephesians => "Ephesians", "ephesians";
    Philippians => "Philippians", "philippians";
    Colossians => "Colossians", "colossians";
    FirstThessalonians => "1 Thessalonians", "1_thessalonians";
    SecondThessalonians => "2 Thessalonians", "2_thessalonians";
    FirstTimothy => "1 Timothy", "1_timothy";
    SecondTimothy => "2 Timothy", "2_timothy";
    Titus => "Titus", "titus";
    Philemon => "Philemon", "philemon";
    Hebrews => "Hebrews", "hebrews";
    James => "James", "james";
    FirstPeter => "1 Peter", "1_peter";
    SecondPeter => "2 Peter", "2_peter";
    FirstJohn => "1 John", "1_john";
    SecondJohn => "2 John", "2_john";
    ThirdJohn => "3 John", "3_john";
    Jude => "Jude", "jude";
    Revelation => "Revelation", "revelation";
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Book {
    type Err = QuizError;

    /// Accepts the display name or the file stem, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Book::ALL
            .iter()
            .copied()
            .find(|book| {
                book.name().eq_ignore_ascii_case(needle)
                    || book.file_stem().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| QuizError::UnknownBook(s.to_string()))
    }
}

impl Serialize for Book {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Book {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Difficulty filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| QuizError::UnknownDifficulty(s.to_string()))
    }
}
