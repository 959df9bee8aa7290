//! `ratatui-dropdown` provides a dropdown "select" control for terminal UIs built on ratatui.
//!
//! The widget is a **controlled component**: the caller owns the selection and passes it into
//! every call; the widget owns only transient UI state (open/closed, highlighted row) and
//! reports user-intended selection changes as [`select::SelectAction::Changed`] values the
//! caller decides how to apply. The widget never mutates the caller's selection.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: all state transitions are synchronous, inside your event loop.
//! - Mode safety: single vs. multiple selection is a sum type ([`select::Selection`]), so a
//!   mismatched value shape is unrepresentable rather than a runtime error.
//!
//! ## Getting started
//!
//! Build a [`select::SelectView`] from a list of [`select::SelectItem`]s, keep a
//! [`select::Selection`] next to it, and feed both input events and render calls:
//!
//! - [`select::SelectView::handle_event`]: map an [`input::InputEvent`] to a
//!   [`select::SelectAction`]; store the selection carried by `Changed`.
//! - [`select::SelectView::render`]: draw the control row (and the option list while open)
//!   into a `ratatui` buffer. Rendering also records the hit regions mouse dispatch uses.
//!
//! With the `crossterm` feature, `crossterm_input::input_event_from_crossterm` converts
//! terminal events (keys, mouse, focus loss) into the crate's input model.
pub mod theme;

pub mod input;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod render;
pub mod select;
