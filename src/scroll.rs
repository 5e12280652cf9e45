//! Hardware scroll types
//!
//! The controller scrolls display RAM by itself once programmed; the
//! framebuffer is not involved. This module defines the parameter and
//! state types; the command sequences are issued by
//! [`Display::start_scroll_right`](crate::Display::start_scroll_right),
//! [`Display::start_scroll_left`](crate::Display::start_scroll_left) and
//! [`Display::stop_scroll`](crate::Display::stop_scroll).
//!
//! The controller requires any active scroll to be deactivated before a
//! new one is programmed; the `Display` methods always emit the deactivate
//! command first and track the resulting state.

/// Time interval between scroll steps, in frames
///
/// Discriminants are the controller's interval encoding, which is not
/// monotonic in the frame count.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(u8)]
pub enum ScrollSpeed {
    /// Step every 2 frames (fastest)
    Frames2 = 0x07,
    /// Step every 3 frames
    Frames3 = 0x04,
    /// Step every 4 frames
    Frames4 = 0x05,
    /// Step every 5 frames
    Frames5 = 0x00,
    /// Step every 25 frames
    Frames25 = 0x06,
    /// Step every 64 frames
    Frames64 = 0x01,
    /// Step every 128 frames
    Frames128 = 0x02,
    /// Step every 256 frames (slowest)
    Frames256 = 0x03,
}

/// Horizontal scroll direction
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDirection {
    /// Content moves left
    Left,
    /// Content moves right
    Right,
}

/// Vertical component of a scroll
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VerticalScroll {
    /// Pure horizontal scroll
    None,
    /// Diagonal scroll drifting toward the top
    Top,
    /// Diagonal scroll drifting toward the bottom
    Bottom,
}

impl VerticalScroll {
    /// Vertical scrolling offset operand for the combined scroll command
    pub fn offset(self) -> u8 {
        match self {
            Self::None => 0x00,
            Self::Top => 0x01,
            Self::Bottom => 0x3F,
        }
    }
}

/// Controller-side scroll state as tracked by the driver
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollState {
    /// No scroll active
    Stopped,
    /// A scroll has been activated
    Scrolling {
        /// Horizontal direction
        direction: ScrollDirection,
        /// Vertical component
        vertical: VerticalScroll,
    },
}
