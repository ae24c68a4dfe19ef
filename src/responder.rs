//! Submission handlers that turn a submitted line into a response.
//!
//! A responder plays the role of the embedding application's submit
//! callback. It runs off the key-handling path, so the editor keeps
//! accepting keystrokes while a response is being computed.

use crate::config::{ResponderConfig, ResponderMode};
use async_trait::async_trait;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Responder trait
// ---------------------------------------------------------------------------

/// Computes the response text for one submitted line.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Short name used in logs and the startup banner.
    fn name(&self) -> &'static str;

    async fn respond(&self, line: &str) -> String;
}

// ---------------------------------------------------------------------------
// Built-in responders
// ---------------------------------------------------------------------------

/// Responder backed by one of the configured [`ResponderMode`]s.
#[derive(Debug, Clone)]
pub struct BuiltinResponder {
    mode: ResponderMode,
    delay: Duration,
}

impl BuiltinResponder {
    pub fn new(mode: ResponderMode, delay: Duration) -> Self {
        Self { mode, delay }
    }

    pub fn from_config(config: &ResponderConfig) -> Self {
        Self::new(config.mode, Duration::from_millis(config.delay_ms))
    }

    /// Apply the transformation without any delay.
    pub fn transform(&self, line: &str) -> String {
        match self.mode {
            ResponderMode::Echo => line.to_string(),
            ResponderMode::Upper => line.to_uppercase(),
            ResponderMode::Reverse => line.chars().rev().collect(),
            ResponderMode::Count => line.chars().count().to_string(),
        }
    }
}

#[async_trait]
impl Responder for BuiltinResponder {
    fn name(&self) -> &'static str {
        match self.mode {
            ResponderMode::Echo => "echo",
            ResponderMode::Upper => "upper",
            ResponderMode::Reverse => "reverse",
            ResponderMode::Count => "count",
        }
    }

    async fn respond(&self, line: &str) -> String {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.transform(line)
    }
}
