use crate::_private::NonExhaustive;
use crate::{Placement, Rect, Size};
use log::debug;

/// Height of the host's top toolbar in pixels.
///
/// Default lower bound for popup y positions. Popups never resolve
/// into this band.
pub const TOOLBAR_HEIGHT: f64 = 32.0;

/// Extra spacing between anchor and popup.
///
/// Applied along the placement's axis. May be negative to overlap
/// the anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Spacing {
    pub x: f64,
    pub y: f64,
}

impl Spacing {
    /// New spacing.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Resolved popup position.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Offset {
    /// Clamped absolute x for the popup's reference point.
    pub x: f64,
    /// Clamped absolute y for the popup's reference point.
    pub y: f64,
    /// The anchor's width, for callers that size the popup
    /// relative to its anchor.
    pub width: f64,
    /// The anchor's height.
    pub height: f64,
}

/// Measurement of a host element.
///
/// The host supplies the bounding rectangle and the scrollable
/// content size. The scroll size can exceed the bounding rect when
/// content overflows; placement counts the full content size
/// against the clamp.
///
/// [Rect] implements this as the identity, so hosts that already
/// hold a snapshot of rectangles pass them straight through.
pub trait Measure {
    /// Bounding rectangle in absolute pixel coordinates.
    fn bounding_rect(&self) -> Rect;

    /// Scrollable content size.
    fn scroll_size(&self) -> Size {
        self.bounding_rect().size()
    }
}

impl Measure for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}

/// Raw horizontal position for the popup, relative to the body's
/// left edge.
///
/// The dock, when given, replaces the anchor as the horizontal
/// reference point. The anchor still provides the width for the
/// end/center candidates. Start/end placements mirror under RTL.
pub fn x_offset(
    placement: Placement,
    spacing: f64,
    anchor: Rect,
    dock: Option<Rect>,
    body: Rect,
    rtl: bool,
) -> f64 {
    let ref_x = dock.map_or(anchor.x, |v| v.x);
    let left_aligned = body.x + ref_x - spacing;
    let right_aligned = body.x + ref_x + anchor.width + spacing;
    let center_aligned = body.x + ref_x + anchor.width / 2.0;

    match placement {
        Placement::BottomStart
        | Placement::TopStart
        | Placement::Left
        | Placement::LeftStart
        | Placement::LeftEnd => {
            if rtl { right_aligned } else { left_aligned }
        }
        Placement::BottomEnd
        | Placement::TopEnd
        | Placement::Right
        | Placement::RightStart
        | Placement::RightEnd => {
            if rtl { left_aligned } else { right_aligned }
        }
        Placement::Bottom | Placement::Top => center_aligned,
    }
}

/// Raw vertical position for the popup.
pub fn y_offset(placement: Placement, spacing: f64, anchor: Rect) -> f64 {
    match placement {
        Placement::Bottom
        | Placement::BottomStart
        | Placement::BottomEnd
        | Placement::LeftEnd
        | Placement::RightEnd => anchor.y + anchor.height + spacing,
        Placement::Top
        | Placement::TopStart
        | Placement::TopEnd
        | Placement::LeftStart
        | Placement::RightStart => anchor.y - spacing,
        Placement::Left | Placement::Right => anchor.y + anchor.height / 2.0,
    }
}

/// Computes the position for a popup attached to an anchor.
///
/// Configure placement, spacing and text direction, then run
/// [layout](PopupPlacement::layout) over a snapshot of rectangles,
/// or [compute](PopupPlacement::compute) over the [Measure] seam.
///
/// The raw position is clamped to the body so the popup's visual
/// box, after its transform shifts it, stays visible. The y
/// position additionally never resolves above
/// [min_top](PopupPlacement::min_top).
///
/// Holds no state across calls. Rerun on resize, scroll or
/// content growth.
#[derive(Debug, Clone)]
pub struct PopupPlacement {
    pub placement: Placement,
    pub spacing: Spacing,
    pub rtl: bool,
    pub dock: Option<Rect>,
    pub min_top: f64,

    pub non_exhaustive: NonExhaustive,
}

impl Default for PopupPlacement {
    fn default() -> Self {
        Self {
            placement: Default::default(),
            spacing: Default::default(),
            rtl: false,
            dock: None,
            min_top: TOOLBAR_HEIGHT,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl PopupPlacement {
    /// New.
    pub fn new() -> Self {
        Self::default()
    }

    /// Placement of the popup relative to the anchor.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Spacing between anchor and popup.
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets only the horizontal spacing.
    /// See [spacing](Self::spacing)
    pub fn x_spacing(mut self, spacing: f64) -> Self {
        self.spacing.x = spacing;
        self
    }

    /// Sets only the vertical spacing.
    /// See [spacing](Self::spacing)
    pub fn y_spacing(mut self, spacing: f64) -> Self {
        self.spacing.y = spacing;
        self
    }

    /// Right-to-left text direction. Mirrors start/end alignment.
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Alternate horizontal reference.
    ///
    /// Used instead of the anchor when the anchor sits inside a
    /// positioned toolbar.
    pub fn dock(mut self, dock: Rect) -> Self {
        self.dock = Some(dock);
        self
    }

    /// Alternate horizontal reference.
    pub fn dock_opt(mut self, dock: Option<Rect>) -> Self {
        self.dock = dock;
        self
    }

    /// Lower bound for the popup's y position.
    ///
    /// Defaults to [TOOLBAR_HEIGHT].
    pub fn min_top(mut self, min_top: f64) -> Self {
        self.min_top = min_top;
        self
    }

    /// Measure anchor, popup and body and compute the clamped
    /// popup position.
    ///
    /// The popup rect is widened to at least its scrollable
    /// content size before clamping. A popup that has not been
    /// measured yet computes against zero dimensions; run again
    /// once it has a size.
    pub fn compute(
        &self,
        anchor: &dyn Measure,
        popup: Option<&dyn Measure>,
        body: &dyn Measure,
    ) -> Offset {
        let popup_rect = popup.map(|popup| {
            let mut rect = popup.bounding_rect();
            let scroll = popup.scroll_size();
            rect.width = rect.width.max(scroll.width);
            rect.height = rect.height.max(scroll.height);
            rect
        });
        self.layout(anchor.bounding_rect(), popup_rect, body.bounding_rect())
    }

    /// Compute the clamped popup position from already measured
    /// rectangles.
    ///
    /// The popup rect must include any overflowing content, see
    /// [compute](Self::compute).
    pub fn layout(&self, anchor: Rect, popup: Option<Rect>, body: Rect) -> Offset {
        let popup = popup.unwrap_or_default();

        let x = x_offset(
            self.placement,
            self.spacing.x,
            anchor,
            self.dock,
            body,
            self.rtl,
        );
        // the clamp bound uses the logical fraction, not the
        // rtl-mirrored one.
        let max_x = body.width - popup.width - self.placement.x_transform(false) * popup.width;

        let y = y_offset(self.placement, self.spacing.y, anchor);
        let max_y = body.height + body.y
            - popup.height
            - self.placement.y_transform().unwrap_or(0.0) * popup.height;

        debug!(
            "layout {:?} raw {}/{} max {}/{}",
            self.placement, x, y, max_x, max_y
        );

        Offset {
            x: x.min(max_x).max(0.0),
            y: y.min(max_y).max(self.min_top),
            width: anchor.width,
            height: anchor.height,
        }
    }
}
