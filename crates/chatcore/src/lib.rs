//! In-memory state for the document chat demo: chat sessions, the staged
//! upload queue and the uploaded-documents list. No UI and no wasm here,
//! so the whole observable behavior stays unit testable on the host.

pub mod chat;
pub mod library;
pub mod upload;

pub use chat::{ChatModel, ChatSession, ChatStore, Message, MessageRole, PendingReply};
pub use library::DocumentLibrary;
pub use upload::{DocumentKind, SubmitOutcome, UploadCandidate, UploadQueue};

/// Simulated per-file ingestion latency, in milliseconds.
pub const UPLOAD_LATENCY_MS: u32 = 1000;

/// Simulated assistant reply latency, in milliseconds.
pub const REPLY_LATENCY_MS: u32 = 2000;

/// How many recently uploaded files the landing page lists.
pub const RECENT_FILES_SHOWN: usize = 3;
