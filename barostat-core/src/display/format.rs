//! Numeric formatting into display frames
//!
//! The display's physical digit order is wired opposite to reading order,
//! so the formatter scans the text in reverse and fills slots left to
//! right. A decimal point is not a digit of its own: it is folded into
//! the segment code of the digit it decorates by ANDing the two
//! active-low patterns.

use core::fmt::Write;

use heapless::String;

use super::frame::{DisplayFrame, DIGIT_COUNT};
use super::segment::{codes, encode};

/// Text rendered while the pressure sensor is faulted
pub const FAULT_TEXT: &str = "----";

/// Render a decimal string into a display frame
///
/// Consumes characters until the source is exhausted or all four slots
/// are written, whichever comes first. Leftover slots stay blank;
/// leftover characters are dropped. A point with no following character
/// in scan order renders as the point-only glyph.
pub fn render(text: &str) -> DisplayFrame {
    let mut frame = DisplayFrame::blank();
    let mut source = text.as_bytes().iter().rev();

    for slot in 0..DIGIT_COUNT {
        match source.next() {
            None => break,
            Some(&b'.') => {
                // Fold the point into the digit it decorates (the next
                // character in scan order); blank AND point degrades to
                // the point-only glyph
                let decorated = source.next().copied().unwrap_or(b' ');
                frame.set(slot, encode(decorated) & codes::POINT);
            }
            Some(&c) => frame.set(slot, encode(c)),
        }
    }

    frame
}

/// Format a pressure value as a fixed-width "D.DDD" string
///
/// The controller always sees the raw value; only the rendering clamps,
/// so an in-band slightly-negative reading shows as "0.000" and anything
/// past full scale saturates at "9.999".
pub fn format_pressure(pressure_x1000: i32) -> String<5> {
    let clamped = pressure_x1000.clamp(0, 9_999);
    let mut text = String::new();
    let _ = write!(text, "{}.{:03}", clamped / 1000, clamped % 1000);
    text
}

/// Format and render a pressure value in one step
pub fn render_pressure(pressure_x1000: i32) -> DisplayFrame {
    render(&format_pressure(pressure_x1000))
}
