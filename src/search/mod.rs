//! Mock search data producer.
//!
//! Supplies the event source behind the `generate` operation: a fixed,
//! deterministic set of synthetic arXiv-style search results rendered as
//! streamed generation chunks. Swapping in a real search backend only
//! replaces this module's source; the session core is untouched.

use crate::session::message::OutboundMessage;
use crate::session::source::{EventSource, SequenceSource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Leading verbs stripped from a generate input to obtain the query.
const QUERY_PREFIXES: [&str; 3] = ["search ", "find ", "lookup "];

/// One synthetic search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Article title.
    pub title: String,
    /// Article authors.
    pub authors: Vec<String>,
    /// Subject categories.
    pub categories: Vec<String>,
    /// Link to the article.
    pub link: String,
}

impl SearchResult {
    /// Render this result as the text block of a generation chunk.
    fn render(&self, position: usize) -> String {
        format!(
            "{}. {}\n   Authors: {}\n   Categories: {}\n   Link: {}\n\n",
            position,
            self.title,
            self.authors.join(", "),
            self.categories.join(", "),
            self.link
        )
    }
}

/// Extract the search query from a generate input.
///
/// Strips one leading search verb (`search `, `find `, `lookup `),
/// case-insensitive; anything else is taken as the query verbatim.
///
/// # Examples
///
/// ```
/// use mcp_sse_server::search::extract_query;
///
/// assert_eq!(extract_query("search quantum computing"), "quantum computing");
/// assert_eq!(extract_query("quantum computing"), "quantum computing");
/// ```
pub fn extract_query(input: &str) -> &str {
    for prefix in QUERY_PREFIXES {
        match input.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(prefix) => {
                return input[prefix.len()..].trim_start();
            }
            _ => {}
        }
    }
    input
}

/// Produce the synthetic results for a query.
///
/// Two deterministic entries parameterized by the query; a real backend
/// would replace this function.
pub fn mock_results(query: &str) -> Vec<SearchResult> {
    vec![
        SearchResult {
            title: format!("Example Article 1 about {}", query),
            authors: vec!["Author A".to_string(), "Author B".to_string()],
            categories: vec!["cs.AI".to_string(), "cs.LG".to_string()],
            link: "https://arxiv.org/abs/0000.0000".to_string(),
        },
        SearchResult {
            title: format!("Example Article 2 about {}", query),
            authors: vec!["Author C".to_string(), "Author D".to_string()],
            categories: vec!["cs.CL".to_string(), "cs.AI".to_string()],
            link: "https://arxiv.org/abs/0000.0001".to_string(),
        },
    ]
}

/// Event source yielding one generation chunk per mock search result.
///
/// Finite: the last chunk is flagged `done = true`, which closes the
/// session after it is written.
pub struct SearchEventSource {
    inner: SequenceSource,
}

impl SearchEventSource {
    /// Build the source for `query`.
    pub fn new(query: &str) -> Self {
        Self::from_results(&mock_results(query))
    }

    /// Build the source from an explicit result list.
    ///
    /// An empty list produces an empty source, which a session treats as
    /// an immediate terminal condition.
    pub fn from_results(results: &[SearchResult]) -> Self {
        let last = results.len().saturating_sub(1);
        let messages = results
            .iter()
            .enumerate()
            .map(|(i, result)| OutboundMessage::generate(result.render(i + 1), i == last))
            .collect();
        Self {
            inner: SequenceSource::new(messages),
        }
    }
}

#[async_trait]
impl EventSource for SearchEventSource {
    async fn next_message(&mut self) -> Option<OutboundMessage> {
        self.inner.next_message().await
    }
}
