//! `dm-creation` — two-click line creation with a live preview.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`protocol`] | `CreationProtocol`, `CreationState`, `ClickOutcome`        |
//! | [`preview`]  | `PreviewLine` — the visual-only rubber band                |
//!
//! The protocol is independent of the line engine.  `dm-sync` composes the
//! two: a [`ClickOutcome::Completed`] becomes a `LineEngine::create_line`
//! call on the same side.

pub mod preview;
pub mod protocol;


pub use preview::PreviewLine;
pub use protocol::{ClickOutcome, CreationProtocol, CreationState};
