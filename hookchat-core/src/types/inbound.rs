//! Normalized webhook reply unit.

/// One normalized unit of a webhook reply. The transport guarantees callers
/// only ever receive an ordered sequence of these, never the raw wire shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundItem {
    /// Display text.
    Text(String),
    /// Base64-encoded audio bytes.
    Audio(String),
}
