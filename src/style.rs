//! Typed inline-style configuration for the layout containers.
//!
//! A [`StackStyle`] renders to an inline CSS declaration list, so the recognized
//! layout options stay in one typed place instead of scattered string literals.

use std::fmt;

/// CSS positioning scheme for a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Static,
    Sticky,
    Fixed,
}

impl Position {
    fn css(self) -> &'static str {
        match self {
            Position::Static => "static",
            Position::Sticky => "sticky",
            Position::Fixed => "fixed",
        }
    }
}

/// Main-axis distribution of a flex row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    FlexStart,
    Center,
    SpaceBetween,
}

impl Justify {
    fn css(self) -> &'static str {
        match self {
            Justify::FlexStart => "flex-start",
            Justify::Center => "center",
            Justify::SpaceBetween => "space-between",
        }
    }
}

/// A horizontal, vertically centered flex row with a fixed set of options.
#[derive(Debug, Clone, PartialEq)]
pub struct StackStyle {
    pub position: Position,
    pub background: &'static str,
    pub padding_rem: f32,
    pub justify: Justify,
}

/// Style of the top navigation header: pinned to the viewport top, dark,
/// children pushed to opposite ends.
pub const NAVBAR: StackStyle = StackStyle {
    position: Position::Sticky,
    background: "#000",
    padding_rem: 1.0,
    justify: Justify::SpaceBetween,
};

impl fmt::Display for StackStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "display: flex; flex-direction: row; align-items: center; \
             justify-content: {}; position: {}; top: 0; background: {}; padding: {}rem;",
            self.justify.css(),
            self.position.css(),
            self.background,
            self.padding_rem,
        )
    }
}
