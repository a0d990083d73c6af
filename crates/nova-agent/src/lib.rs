// SPDX-FileCopyrightText: 2026 Nova Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation engine and dual control loops for the Nova voice assistant.
//!
//! The [`ConversationEngine`] is the central coordinator that:
//! - Owns conversation history and long-term memory behind locks
//! - Sends rendered prompts to the model backend
//! - Decodes replies into typed actions and dispatches them
//!
//! Two independently scheduled loops share one engine instance: the
//! reactive [`SpeechLoop`] and the proactive [`IntrospectionRunner`]. A
//! shared [`CancellationToken`](tokio_util::sync::CancellationToken)
//! stops both.

pub mod engine;
pub mod introspection;
pub mod shutdown;
pub mod speech_loop;

pub use engine::ConversationEngine;
pub use introspection::{IntrospectionRunner, ALL_GOOD_SENTINEL};
pub use speech_loop::{SpeechLoop, EXIT_PHRASES};
