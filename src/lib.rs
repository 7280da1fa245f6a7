#![doc = include_str!("../readme.md")]

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

mod geom;
mod popup;

pub use geom::{Rect, Size};
pub use popup::*;

/// Placement of the popup relative to its anchor.
///
/// The plain `Top`/`Bottom` variants center the popup over the
/// anchor, plain `Left`/`Right` center it vertically beside it.
/// The `*Start`/`*End` variants align with the anchor's start/end
/// edge instead. Under RTL start and end mirror.
///
/// The wire form is the kebab-case name (`"bottom-start"`, ...),
/// available via [Display] and [FromStr].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Placement {
    /// Above the anchor. Centered.
    Top,
    /// Above the anchor. Aligned with the start edge.
    TopStart,
    /// Above the anchor. Aligned with the end edge.
    TopEnd,
    /// Below the anchor. Centered.
    #[default]
    Bottom,
    /// Below the anchor. Aligned with the start edge.
    BottomStart,
    /// Below the anchor. Aligned with the end edge.
    BottomEnd,
    /// Before the anchor. Centered vertically.
    Left,
    /// Before the anchor. Aligned with the top edge.
    LeftStart,
    /// Before the anchor. Aligned with the bottom edge.
    LeftEnd,
    /// After the anchor. Centered vertically.
    Right,
    /// After the anchor. Aligned with the top edge.
    RightStart,
    /// After the anchor. Aligned with the bottom edge.
    RightEnd,
}

impl Placement {
    /// Horizontal translation fraction for the popup's transform.
    ///
    /// -1 shifts the popup left by its own width, -0.5 centers it,
    /// 0 keeps it at its left edge. Left/right placements and the
    /// start/end alignments mirror under RTL.
    pub fn x_transform(self, rtl: bool) -> f64 {
        match self {
            Placement::Left | Placement::LeftStart | Placement::LeftEnd => {
                if rtl { 0.0 } else { -1.0 }
            }
            Placement::Right | Placement::RightStart | Placement::RightEnd => {
                if rtl { -1.0 } else { 0.0 }
            }
            Placement::TopStart | Placement::BottomStart => {
                if rtl { -1.0 } else { 0.0 }
            }
            Placement::TopEnd | Placement::BottomEnd => {
                if rtl { 0.0 } else { -1.0 }
            }
            Placement::Top | Placement::Bottom => -0.5,
        }
    }

    /// Vertical translation fraction for the popup's transform,
    /// if the placement needs one.
    pub fn y_transform(self) -> Option<f64> {
        match self {
            Placement::Top
            | Placement::TopStart
            | Placement::TopEnd
            | Placement::LeftEnd
            | Placement::RightEnd => Some(-1.0),
            Placement::Left | Placement::Right => Some(-0.5),
            _ => None,
        }
    }

    /// The combined translate for the popup, in percent of the
    /// popup's own size.
    ///
    /// Returns "" when there is nothing to shift, so no no-op
    /// transform is emitted.
    ///
    /// Percent translations don't work for rotated elements. The
    /// renderer has to resolve the fractions against the popup's
    /// size and apply them as lengths in that case.
    pub fn transform(self, rtl: bool) -> String {
        let x = self.x_transform(rtl);
        let y = self.y_transform();
        if x == 0.0 && y.is_none() {
            return String::default();
        }
        format!("translate({}%, {}%)", x * 100.0, y.unwrap_or(0.0) * 100.0)
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Placement::Top => "top",
            Placement::TopStart => "top-start",
            Placement::TopEnd => "top-end",
            Placement::Bottom => "bottom",
            Placement::BottomStart => "bottom-start",
            Placement::BottomEnd => "bottom-end",
            Placement::Left => "left",
            Placement::LeftStart => "left-start",
            Placement::LeftEnd => "left-end",
            Placement::Right => "right",
            Placement::RightStart => "right-start",
            Placement::RightEnd => "right-end",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "top" => Placement::Top,
            "top-start" => Placement::TopStart,
            "top-end" => Placement::TopEnd,
            "bottom" => Placement::Bottom,
            "bottom-start" => Placement::BottomStart,
            "bottom-end" => Placement::BottomEnd,
            "left" => Placement::Left,
            "left-start" => Placement::LeftStart,
            "left-end" => Placement::LeftEnd,
            "right" => Placement::Right,
            "right-start" => Placement::RightStart,
            "right-end" => Placement::RightEnd,
            _ => return Err(PlacementError::InvalidPlacement(s.into())),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Not a known placement name.
    InvalidPlacement(String),
}

impl Display for PlacementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for PlacementError {}

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
