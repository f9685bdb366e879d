mod client;
mod interface;
pub mod schema;
mod types;

pub use client::WorkersAiClient;
pub use interface::{InferenceBackend, InferenceError};
pub use types::{
    batch_from_queries, batch_from_users, BatchEnvelope, PollRequest, RunOptions,
    TranslationRequest, UserProfile,
};
