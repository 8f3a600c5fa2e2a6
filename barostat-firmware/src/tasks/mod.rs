//! Embassy async tasks
//!
//! Two independently-timed tasks: slow pressure control and fast display
//! refresh. The display frame static in `crate::channels` is the only
//! state they share.

pub mod control;
pub mod display;

pub use control::control_task;
pub use display::display_task;
