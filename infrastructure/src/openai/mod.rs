//! OpenAI-compatible backend adapter.

mod gateway;
mod protocol;

pub use gateway::OpenAiGateway;
