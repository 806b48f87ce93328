//! Frame loop for terminal games.
//!
//! [`Runtime`] owns the terminal for the duration of [`Runtime::run`] and
//! drives an [`App`] with three kinds of events: ticks carrying the elapsed
//! wall-clock time, render requests, and terminal input (keys and mouse).

pub use self::{app::App, event_loop::RenderMode, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
