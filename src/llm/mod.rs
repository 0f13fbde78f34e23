//! LLM completion module for recap
//!
//! The only part of the pipeline that touches the network: one async
//! call-and-return boundary to a text-completion service.

mod client;
mod groq;

pub use client::{build_provider, CompletionProvider};
pub use groq::GroqClient;
