// File: crates/splot-core/src/axis.rs
// Summary: Y-axis selection and per-axis layout styling.

use std::fmt;
use std::str::FromStr;

use crate::error::SplotError;

/// Which y-axis a trace is drawn against. Both share the x-axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum YAxis {
    /// Left axis, `"y"`.
    #[default]
    Primary,
    /// Right axis overlaying the primary, `"y2"`.
    Secondary,
}

impl YAxis {
    /// Layout identifier: `y` or `y2`.
    pub fn id(self) -> &'static str {
        match self {
            YAxis::Primary => "y",
            YAxis::Secondary => "y2",
        }
    }
}

impl FromStr for YAxis {
    type Err = SplotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" | "y" => Ok(YAxis::Primary),
            "right" | "y2" => Ok(YAxis::Secondary),
            other => Err(SplotError::InvalidAxis(other.to_string())),
        }
    }
}

impl fmt::Display for YAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Bottom,
}

/// RGB triple used by layout styling, independent of the drawing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Styling for one axis of a 2D layout.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Edge of the plot area the axis line and tick labels sit on.
    pub side: Side,
    /// Id of the axis this one is drawn over, if any.
    pub overlaying: Option<YAxis>,
    pub grid_color: Rgb,
    pub zero_line_color: Rgb,
}

impl AxisStyle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            overlaying: None,
            grid_color: Rgb::WHITE,
            zero_line_color: Rgb::WHITE,
        }
    }

    pub fn x() -> Self { Self::new(Side::Bottom) }

    pub fn y() -> Self { Self::new(Side::Left) }

    pub fn y2() -> Self {
        let mut a = Self::new(Side::Right);
        a.overlaying = Some(YAxis::Primary);
        a
    }
}
