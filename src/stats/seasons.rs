use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::league::{ArchiveSeason, SeasonDefinition, SeasonLabel};

fn short_label_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^s(\d+)$").expect("valid short season pattern"))
}

fn season_word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"season\s*(\d+)").expect("valid season word pattern"))
}

fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(19|20)\d{2}").expect("valid year pattern"))
}

/// Season number from labels such as `3`, `"S3"`, `"Season 3"` or `"03"`
pub fn parse_season_number(label: &SeasonLabel) -> Option<i64> {
    let text = match label {
        SeasonLabel::Number(number) => return Some(*number),
        SeasonLabel::Text(text) => text.trim().to_lowercase(),
    };

    let captured = short_label_pattern()
        .captures(&text)
        .or_else(|| season_word_pattern().captures(&text))
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse().ok());
    if captured.is_some() {
        return captured;
    }

    if text.len() <= 2 && !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        return text.parse().ok();
    }

    None
}

/// Four-digit year in the 1900s or 2000s
pub fn extract_year(label: &SeasonLabel) -> Option<i32> {
    match label {
        SeasonLabel::Number(number) if *number > 1900 => i32::try_from(*number).ok(),
        SeasonLabel::Number(_) => None,
        SeasonLabel::Text(text) => year_pattern()
            .find(text)
            .and_then(|year| year.as_str().parse().ok()),
    }
}

/// Maps archive season blocks onto canonical season definitions.
///
/// Resolution order: explicit id, then a season number label (`s<N>`), then
/// the year. Definitions sharing a year are handed out in order to the
/// blocks naming that year; once exhausted, the last one keeps matching.
#[derive(Debug)]
pub struct SeasonResolver<'a> {
    definitions: &'a [SeasonDefinition],
    year_usage: HashMap<i32, usize>,
}

impl<'a> SeasonResolver<'a> {
    pub fn new(definitions: &'a [SeasonDefinition]) -> Self {
        Self {
            definitions,
            year_usage: HashMap::new(),
        }
    }

    pub fn resolve(&mut self, block: &ArchiveSeason) -> Option<&'a SeasonDefinition> {
        if let Some(id) = block.explicit_id() {
            if let Some(definition) = self.find(id) {
                return Some(definition);
            }
        }

        let season_number = block
            .season
            .as_ref()
            .and_then(parse_season_number)
            .filter(|number| *number != 0);
        if let Some(number) = season_number {
            if let Some(definition) = self.find(&format!("s{number}")) {
                return Some(definition);
            }
        }

        let year = block
            .season
            .as_ref()
            .and_then(extract_year)
            .or_else(|| block.year.as_ref().and_then(extract_year))?;

        let matching: Vec<&'a SeasonDefinition> = self
            .definitions
            .iter()
            .filter(|definition| definition.year == Some(year))
            .collect();
        if matching.is_empty() {
            return None;
        }

        let used = self.year_usage.entry(year).or_insert(0);
        let definition = matching[(*used).min(matching.len() - 1)];
        *used += 1;
        Some(definition)
    }

    fn find(&self, id: &str) -> Option<&'a SeasonDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.id == id)
    }
}

/// Resolves a single block with a fresh year counter
pub fn resolve_season_key(
    block: &ArchiveSeason,
    definitions: &[SeasonDefinition],
) -> Option<String> {
    SeasonResolver::new(definitions)
        .resolve(block)
        .map(|definition| definition.id.clone())
}
