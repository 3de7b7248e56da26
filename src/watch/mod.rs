// src/watch/mod.rs

//! Change detection for the watched tree.
//!
//! This module is responsible for deciding, once per poll, whether anything
//! under the watch target changed since the previous poll. Detection is
//! poll-based by design: the tree is re-fingerprinted on every scan instead
//! of subscribing to OS-level filesystem events.
//!
//! It does **not** know about commands or rendering; it only answers
//! "changed or not".

pub mod scanner;

pub use scanner::{FingerprintScanner, Scan};
