//! Color definitions.
//!
//! Colors are plain indices into a 16-color palette; the front end decides
//! how each index is actually displayed.

/// Color constants
pub const CLR_BLACK: u8 = 0;
pub const CLR_RED: u8 = 1;
pub const CLR_GREEN: u8 = 2;
pub const CLR_BROWN: u8 = 3;
pub const CLR_BLUE: u8 = 4;
pub const CLR_MAGENTA: u8 = 5;
pub const CLR_CYAN: u8 = 6;
pub const CLR_GRAY: u8 = 7;
pub const CLR_ORANGE: u8 = 9;
pub const CLR_BRIGHT_GREEN: u8 = 10;
pub const CLR_YELLOW: u8 = 11;
pub const CLR_BRIGHT_BLUE: u8 = 12;
pub const CLR_BRIGHT_MAGENTA: u8 = 13;
pub const CLR_BRIGHT_CYAN: u8 = 14;
pub const CLR_WHITE: u8 = 15;
