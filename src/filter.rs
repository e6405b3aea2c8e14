//! Fuzzy narrowing of the tab list.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::model::Tab;

/// A tab that survived the query, with the char positions (into [`search_text`])
/// that matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub index: usize,
    pub score: i64,
    pub positions: Vec<usize>,
}

impl Match {
    /// Positions that fall inside the visible part of the title.
    pub fn title_positions(&self, title: &str, visible: usize) -> Vec<usize> {
        let title_len = title.chars().count();
        self.positions
            .iter()
            .copied()
            .filter(|&p| p < title_len && p < visible)
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filtered {
    pub tabs: Vec<Tab>,
    /// `None` when the query was empty: nothing to highlight.
    pub matches: Option<Vec<Match>>,
}

impl Filtered {
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn match_at(&self, row: usize) -> Option<&Match> {
        self.matches.as_ref().and_then(|m| m.get(row))
    }
}

pub fn search_text(tab: &Tab) -> String {
    format!("{} {}", tab.title, tab.domain)
}

pub struct TabFilter {
    matcher: SkimMatcherV2,
}

impl Default for TabFilter {
    fn default() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }
}

impl TabFilter {
    pub fn apply(&self, query: &str, tabs: &[Tab]) -> Filtered {
        let query = query.trim();
        if query.is_empty() {
            return Filtered {
                tabs: tabs.to_vec(),
                matches: None,
            };
        }

        let mut matches: Vec<Match> = tabs
            .iter()
            .enumerate()
            .filter_map(|(index, tab)| {
                self.matcher
                    .fuzzy_indices(&search_text(tab), query)
                    .map(|(score, positions)| Match {
                        index,
                        score,
                        positions,
                    })
            })
            .collect();
        // stable: equal scores keep recency order
        matches.sort_by(|a, b| b.score.cmp(&a.score));

        Filtered {
            tabs: matches.iter().map(|m| tabs[m.index].clone()).collect(),
            matches: Some(matches),
        }
    }
}

#[cfg(test)]
#[path = "tests/filter/filter_tests.rs"]
mod tests;
