// ABOUTME: Opaque chat-client capability returned by the connector factory.
// ABOUTME: Exposes configuration identity only; transport lives elsewhere.

use crate::options::ConnectorType;

/// A configured chat client handed across the factory boundary.
///
/// The capability is opaque: consumers learn which connector built it, which
/// model it targets, and its token limit, nothing more. Wiring an actual
/// transport onto it is the host's concern.
pub trait ChatClient: Send + Sync + std::fmt::Debug {
    fn connector_type(&self) -> ConnectorType;
    fn model(&self) -> &str;
    fn max_tokens(&self) -> Option<u32>;
}
