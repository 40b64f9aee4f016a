use std::pin::Pin;

use bytes::Bytes;
use futures::stream::{Stream, StreamExt};

use crate::error::StoryError;

use super::stream::StreamResponse;

const DATA_PREFIX: &str = "data: ";
const DONE_PAYLOAD: &str = "[DONE]";

/// Converts a streaming chat-completions response into a stream of content
/// deltas.
///
/// Each HTTP chunk is decoded and split into lines on its own; a line split
/// across two chunks is not reassembled. Upstream frames whole `data:` lines
/// per chunk, and compatibility with that framing is part of the contract
/// (see DESIGN.md).
pub(crate) fn create_sse_stream(
    response: reqwest::Response,
) -> Pin<Box<dyn Stream<Item = Result<String, StoryError>> + Send>> {
    let stream = response
        .bytes_stream()
        .map(handle_chunk)
        .flat_map(futures::stream::iter);

    Box::pin(stream)
}

fn handle_chunk(chunk: Result<Bytes, reqwest::Error>) -> Vec<Result<String, StoryError>> {
    let bytes = match chunk {
        Ok(bytes) => bytes,
        Err(err) => return vec![Err(StoryError::HttpError(err.to_string()))],
    };

    let text = String::from_utf8_lossy(&bytes);
    parse_chunk(&text).into_iter().map(Ok).collect()
}

/// Extracts every content delta carried by one decoded chunk.
fn parse_chunk(chunk: &str) -> Vec<String> {
    chunk.split('\n').filter_map(parse_data_line).collect()
}

/// Parses one line, returning delta content when the line is a data line
/// carrying a non-empty fragment.
///
/// Lines that are not data lines, the `[DONE]` marker, malformed JSON
/// payloads, and chunks without content all yield nothing. Malformed
/// payloads are skipped rather than surfaced so envelope variations cannot
/// abort the stream; the marker does not end the read loop either, only
/// transport end-of-stream does.
fn parse_data_line(line: &str) -> Option<String> {
    let payload = line.strip_prefix(DATA_PREFIX)?;
    if payload == DONE_PAYLOAD {
        return None;
    }

    let envelope: StreamResponse = match serde_json::from_str(payload) {
        Ok(envelope) => envelope,
        Err(err) => {
            log::trace!("skipping unparseable SSE line: {err}");
            return None;
        }
    };

    let content = envelope.content()?;
    if content.is_empty() {
        return None;
    }
    Some(content.to_string())
}

#[cfg(test)]
#[path = "sse_tests.rs"]
mod tests;
