//! The page capabilities the handlers work against.
//!
//! Views are cheap handles onto shared page state, so a handler can pass a
//! clone into a scheduled task that updates the page later.

pub mod contact;
pub mod event;
pub mod navigation;
pub mod output;
