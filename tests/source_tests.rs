#![cfg(test)]

use mcp_sse_server::search::{SearchEventSource, extract_query, mock_results};
use mcp_sse_server::session::message::{MessageKind, OutboundMessage};
use mcp_sse_server::session::source::{EventSource, SequenceSource, TickerSource};

#[tokio::test]
async fn test_sequence_source_yields_in_order() {
    let mut source = SequenceSource::new(vec![
        OutboundMessage::generate("one\n", false),
        OutboundMessage::generate("two\n", true),
    ]);
    assert_eq!(source.len(), 2);

    let first = source.next_message().await.unwrap();
    assert_eq!(first.payload["response"], "one\n");
    assert!(!first.done);

    let second = source.next_message().await.unwrap();
    assert!(second.done);

    assert!(source.next_message().await.is_none());
    assert!(source.is_empty());
}

#[tokio::test]
async fn test_empty_sequence_source_is_exhausted() {
    let mut source = SequenceSource::new(vec![]);
    assert!(source.is_empty());
    assert!(source.next_message().await.is_none());
}

#[tokio::test]
async fn test_ticker_source_counts_up_and_never_finishes() {
    let mut source = TickerSource::new();

    for expected in 0..3u64 {
        let message = source.next_message().await.expect("ticker is infinite");
        assert_eq!(message.kind, MessageKind::Tick);
        assert_eq!(message.payload["count"], expected);
        assert!(!message.done, "tick frames are never terminal");
    }
}

#[tokio::test]
async fn test_ticker_source_starting_offset() {
    let mut source = TickerSource::starting_at(5);
    let message = source.next_message().await.unwrap();
    assert_eq!(message.payload["count"], 5);
}

#[test]
fn test_extract_query_strips_search_verbs() {
    assert_eq!(extract_query("search quantum computing"), "quantum computing");
    assert_eq!(extract_query("find neural networks"), "neural networks");
    assert_eq!(extract_query("lookup graph theory"), "graph theory");
}

#[test]
fn test_extract_query_is_case_insensitive() {
    assert_eq!(extract_query("Search quantum computing"), "quantum computing");
    assert_eq!(extract_query("FIND neural networks"), "neural networks");
}

#[test]
fn test_extract_query_passes_through_plain_input() {
    assert_eq!(extract_query("quantum computing"), "quantum computing");
    // A verb with no trailing space is part of the query, not a prefix
    assert_eq!(extract_query("searching"), "searching");
}

#[test]
fn test_mock_results_are_parameterized_by_query() {
    let results = mock_results("rust");
    assert_eq!(results.len(), 2);
    assert!(results[0].title.contains("rust"));
    assert!(results[1].title.contains("rust"));
    assert!(!results[0].authors.is_empty());
    assert!(results[0].link.starts_with("https://arxiv.org/"));
}

#[tokio::test]
async fn test_search_source_renders_numbered_results() {
    let mut source = SearchEventSource::new("rust");

    let first = source.next_message().await.unwrap();
    let text = first.payload["response"].as_str().unwrap();
    assert!(text.starts_with("1. Example Article 1 about rust\n"));
    assert!(text.contains("Authors: Author A, Author B"));
    assert!(text.contains("Categories: cs.AI, cs.LG"));
    assert!(text.contains("Link: https://arxiv.org/abs/0000.0000"));
    assert!(!first.done);

    let second = source.next_message().await.unwrap();
    assert!(second.payload["response"]
        .as_str()
        .unwrap()
        .starts_with("2. "));
    assert!(second.done, "last result closes the sequence");

    assert!(source.next_message().await.is_none());
}

#[tokio::test]
async fn test_search_source_from_empty_results() {
    let mut source = SearchEventSource::from_results(&[]);
    assert!(source.next_message().await.is_none());
}
