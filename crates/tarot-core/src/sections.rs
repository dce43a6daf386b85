//! Parsing interpretation text into labeled sections.
//!
//! The service is asked for four paragraphs separated by blank lines. Parsing
//! never fails: short or truncated text just yields fewer sections, and
//! callers treat a missing section as empty.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Maximum number of sections kept from a reading.
pub const MAX_SECTIONS: usize = 4;

/// Label of a reading section, index-aligned with the parsed blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionLabel {
    /// About the Past card.
    Past,
    /// About the Present card.
    Present,
    /// About the Future card.
    Future,
    /// The overall message.
    Overall,
}

impl SectionLabel {
    /// All labels in section order.
    pub const ALL: [SectionLabel; MAX_SECTIONS] = [
        SectionLabel::Past,
        SectionLabel::Present,
        SectionLabel::Future,
        SectionLabel::Overall,
    ];

    /// Index of this section.
    pub fn index(self) -> usize {
        match self {
            Self::Past => 0,
            Self::Present => 1,
            Self::Future => 2,
            Self::Overall => 3,
        }
    }

    /// Localized heading.
    pub fn title(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Past, Language::En) => "Past",
            (Self::Present, Language::En) => "Present",
            (Self::Future, Language::En) => "Future",
            (Self::Overall, Language::En) => "Overall",
            (Self::Past, Language::Vi) => "Quá khứ",
            (Self::Present, Language::Vi) => "Hiện tại",
            (Self::Future, Language::Vi) => "Tương lai",
            (Self::Overall, Language::Vi) => "Tổng quan",
        }
    }
}

/// Split raw interpretation text into at most four trimmed blocks.
///
/// Blocks are separated by blank lines (lines that are empty or whitespace
/// only). Windows line endings are accepted. Empty input yields no blocks.
pub fn parse_sections(raw: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in raw.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            flush(&mut block, &mut sections);
        } else {
            block.push(line);
        }
    }
    flush(&mut block, &mut sections);

    sections.truncate(MAX_SECTIONS);
    sections
}

fn flush(block: &mut Vec<&str>, sections: &mut Vec<String>) {
    if block.is_empty() {
        return;
    }
    let text = block.join("\n").trim().to_string();
    block.clear();
    if !text.is_empty() {
        sections.push(text);
    }
}

/// A parsed reading, index-aligned to Past/Present/Future/Overall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sections(Vec<String>);

impl Sections {
    /// Parse raw interpretation text.
    pub fn parse(raw: &str) -> Self {
        Self(parse_sections(raw))
    }

    /// Text of a section, or `""` if the reading did not contain it.
    pub fn get(&self, label: SectionLabel) -> &str {
        self.0.get(label.index()).map(String::as_str).unwrap_or("")
    }

    /// The sections that are present, in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of sections present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no section was parsed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All four labels with their text, blank where missing.
    pub fn labeled(&self) -> impl Iterator<Item = (SectionLabel, &str)> {
        SectionLabel::ALL.into_iter().map(|label| (label, self.get(label)))
    }
}
