//! Embassy async tasks
//!
//! Each task runs independently and communicates via the statics in
//! `channels`.

pub mod blink;
pub mod input;

pub use blink::blink_task;
pub use input::input_task;
