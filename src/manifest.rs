/// Fragment files merged into the book, in reading order.
///
/// Each entry carries its own trailing space so the command builder can
/// append entries without any join logic.
const BOOK_FRAGMENTS: [&str; 20] = [
    "splash.html ",
    "contents.html ",
    "chapter1_introduction.html ",
    "chapter2_installation.html ",
    "chapter3_basics.html ",
    "chapter4_interactive_prompt.html ",
    "chapter5_languages.html ",
    "chapter6_parsing.html ",
    "chapter7_evaluation.html ",
    "chapter8_error_handling.html ",
    "chapter9_s_expressions.html ",
    "chapter10_q_expressions.html ",
    "chapter11_variables.html ",
    "chapter12_functions.html ",
    "chapter13_conditionals.html ",
    "chapter14_strings.html ",
    "chapter15_standard_library.html ",
    "chapter16_bonus_projects.html ",
    "credits.html ",
    "appendix_a_hand_rolled_parser.html ",
];

/// Separator baked into every manifest entry.
pub const ENTRY_DELIMITER: char = ' ';

/// Ordered, immutable list of fragment entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<String>,
}

impl Manifest {
    /// The book's manifest: splash, contents, chapters 1-16, credits, appendix.
    pub fn book() -> Self {
        Self::from_entries(BOOK_FRAGMENTS)
    }

    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a manifest from entries that already include their delimiter.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entries with the trailing delimiter removed.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|e| e.strip_suffix(ENTRY_DELIMITER).unwrap_or(e.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
