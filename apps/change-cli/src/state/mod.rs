//! # State Module
//!
//! Holds the interactive form between commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ChangeForm                                           │
//! │                                                                         │
//! │  target_input ──┐                                                       │
//! │                 ├──► submit() ──► validation ──► solve ──► ResultView   │
//! │  coins_input ───┘                     │                                 │
//! │                                       ▼                                 │
//! │                               per-field errors                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The form is owned by one session; nothing is shared between threads.

mod form;

pub use form::{ChangeForm, ResultView};
