//! Event-stream decoding
//!
//! Reassembles `data: {json}` events delivered in arbitrarily split byte
//! chunks into one text. Each event carries a delta at
//! `choices[0].delta.content`; the stream ends with `data: [DONE]` or when the
//! transport closes.

use crate::error::{TierError, TierResult};
use futures::{Stream, StreamExt};
use serde::Deserialize;

const DATA_PREFIX: &str = "data:";
const DONE_SENTINEL: &str = "[DONE]";

#[derive(Deserialize)]
struct StreamEvent {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Option<StreamDelta>,
}

#[derive(Deserialize)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}

/// Why a single event was skipped
#[derive(Debug, thiserror::Error)]
enum StreamParseError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("event has no choices")]
    NoChoices,
    #[error("event has no delta content")]
    NoContent,
}

/// Incremental decoder state for one streaming call
#[derive(Debug, Default)]
pub struct StreamDecoder {
    /// Bytes after the last newline seen so far
    buffer: Vec<u8>,
    assembled: String,
}

impl StreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw chunk.
    ///
    /// Complete lines are consumed immediately; the trailing partial line is
    /// kept for the next chunk.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);

        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            self.process_line(&String::from_utf8_lossy(&line));
        }
    }

    /// Flush the trailing buffer and return the assembled text.
    ///
    /// Fails with [`TierError::NoContent`] when nothing but whitespace arrived.
    pub fn finish(mut self) -> TierResult<String> {
        if !self.buffer.is_empty() {
            let rest = std::mem::take(&mut self.buffer);
            self.process_line(&String::from_utf8_lossy(&rest));
        }

        if self.assembled.trim().is_empty() {
            return Err(TierError::NoContent);
        }
        Ok(self.assembled)
    }

    fn process_line(&mut self, line: &str) {
        let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
            return;
        };
        let payload = payload.trim();
        if payload.is_empty() || payload == DONE_SENTINEL {
            return;
        }

        match parse_delta(payload) {
            Ok(delta) => self.assembled.push_str(&delta),
            Err(e) => tracing::trace!("[Stream] Skipping event: {}", e),
        }
    }
}

fn parse_delta(payload: &str) -> Result<String, StreamParseError> {
    let event: StreamEvent = serde_json::from_str(payload)?;
    let choice = event
        .choices
        .into_iter()
        .next()
        .ok_or(StreamParseError::NoChoices)?;
    choice
        .delta
        .and_then(|d| d.content)
        .ok_or(StreamParseError::NoContent)
}

/// Drain a byte stream through a [`StreamDecoder`].
///
/// A transport error mid-stream fails the call; content decoded up to that
/// point is discarded.
pub async fn decode_event_stream<S, B, E>(stream: S) -> TierResult<String>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    TierError: From<E>,
{
    let mut decoder = StreamDecoder::new();
    futures::pin_mut!(stream);

    while let Some(chunk) = stream.next().await {
        decoder.push(chunk?.as_ref());
    }

    decoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO_EVENT: &str = "data: {\"choices\":[{\"delta\":{\"content\":\"Hello\"}}]}\n\n";

    fn decode_chunks(chunks: &[&str]) -> TierResult<String> {
        let mut decoder = StreamDecoder::new();
        for chunk in chunks {
            decoder.push(chunk.as_bytes());
        }
        decoder.finish()
    }

    #[test]
    fn test_payload_split_mid_json() {
        let text = decode_chunks(&[
            "data: {\"choices\":[{\"delta\":{\"content\":\"Hel",
            "lo\"}}]}\n\n",
        ])
        .unwrap();
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_any_split_matches_single_chunk() {
        let body = format!(
            "{}data: {{\"choices\":[{{\"delta\":{{\"content\":\", wörld\"}}}}]}}\n\ndata: [DONE]\n\n",
            HELLO_EVENT
        );
        let whole = decode_chunks(&[&body]).unwrap();
        assert_eq!(whole, "Hello, wörld");

        let bytes = body.as_bytes();
        for first in 1..bytes.len() {
            for second in (first..bytes.len()).step_by(7) {
                let mut decoder = StreamDecoder::new();
                decoder.push(&bytes[..first]);
                decoder.push(&bytes[first..second]);
                decoder.push(&bytes[second..]);
                assert_eq!(decoder.finish().unwrap(), whole, "split at {first}/{second}");
            }
        }
    }

    #[test]
    fn test_one_byte_chunks() {
        let mut decoder = StreamDecoder::new();
        for byte in HELLO_EVENT.as_bytes() {
            decoder.push(std::slice::from_ref(byte));
        }
        assert_eq!(decoder.finish().unwrap(), "Hello");
    }

    #[test]
    fn test_malformed_events_are_skipped() {
        let text = decode_chunks(&[
            "data: {not json}\n",
            "data: {\"choices\":[]}\n",
            "data: {\"choices\":[{\"delta\":{}}]}\n",
            ": keep-alive comment\n",
            "event: ping\n",
            HELLO_EVENT,
            "data: [DONE]\n",
        ])
        .unwrap();
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_indented_data_line_is_not_an_event() {
        let text = decode_chunks(&[
            "  data: {\"choices\":[{\"delta\":{\"content\":\"ignored\"}}]}\n",
            HELLO_EVENT,
        ])
        .unwrap();
        assert_eq!(text, "Hello");
    }

    #[test]
    fn test_trailing_buffer_without_newline() {
        let text = decode_chunks(&["data: {\"choices\":[{\"delta\":{\"content\":\"tail\"}}]}"])
            .unwrap();
        assert_eq!(text, "tail");
    }

    #[test]
    fn test_no_content() {
        assert!(matches!(decode_chunks(&[]), Err(TierError::NoContent)));
        assert!(matches!(
            decode_chunks(&["data: {\"choices\":[{\"delta\":{\"content\":\"  \"}}]}\n", "data: [DONE]\n"]),
            Err(TierError::NoContent)
        ));
    }

    #[test]
    fn test_crlf_lines() {
        let text = decode_chunks(&["data: {\"choices\":[{\"delta\":{\"content\":\"Hi\"}}]}\r\n\r\n"])
            .unwrap();
        assert_eq!(text, "Hi");
    }

    #[tokio::test]
    async fn test_decode_event_stream() {
        let chunks: Vec<Result<&[u8], TierError>> = vec![
            Ok("data: {\"choices\":[{\"delta\":{\"content\":\"Hel".as_bytes()),
            Ok("lo\"}}]}\n\ndata: [DONE]\n\n".as_bytes()),
        ];
        let text = decode_event_stream(futures::stream::iter(chunks)).await.unwrap();
        assert_eq!(text, "Hello");
    }

    #[tokio::test]
    async fn test_decode_event_stream_transport_error() {
        let chunks: Vec<Result<&[u8], TierError>> =
            vec![Ok(HELLO_EVENT.as_bytes()), Err(TierError::NoContent)];
        assert!(decode_event_stream(futures::stream::iter(chunks)).await.is_err());
    }
}
