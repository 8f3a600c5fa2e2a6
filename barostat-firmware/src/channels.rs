//! Inter-task communication
//!
//! The display frame is the only state shared between tasks: the control
//! task is its single writer, the display refresh task its single
//! reader. Both hold the lock just long enough to copy four bytes, so
//! the refresh task never observes a partially written frame.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

use barostat_core::display::DisplayFrame;

/// Shared display frame, rewritten once per control tick
pub static DISPLAY_FRAME: Mutex<CriticalSectionRawMutex, DisplayFrame> =
    Mutex::new(DisplayFrame::blank());
