//! OpenAI-compatible reasoning gateway
//!
//! Speaks the chat-completions dialect over HTTP. Any endpoint that
//! accepts it works: the hosted API, local inference servers, proxies.

mod gateway;
mod session;

pub use gateway::{GatewaySettings, OpenAiGateway};
pub use session::OpenAiSession;
