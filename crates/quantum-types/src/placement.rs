//! Placement arithmetic for floating content.
//!
//! Given the anchor's rectangle, the floating element's size and the viewport,
//! [`compute_position`] returns where the floating element goes: offset from
//! the anchor, flipped to the opposite side when the preferred one overflows,
//! shifted along the cross axis to stay on screen without detaching from the
//! anchor, plus the arrow offset and whether the anchor left the viewport.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuantumError;

pub const DEFAULT_OFFSET: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn opposite(&self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Top and bottom place the content on the vertical axis.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Start,
    #[default]
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub side: Side,
    pub alignment: Alignment,
}

impl Placement {
    pub const fn new(side: Side, alignment: Alignment) -> Self {
        Self { side, alignment }
    }

    fn flipped(&self) -> Self {
        Self {
            side: self.side.opposite(),
            alignment: self.alignment,
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(Side::Bottom, Alignment::Start)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alignment {
            Alignment::Center => write!(f, "{}", self.side.as_str()),
            Alignment::Start => write!(f, "{}-start", self.side.as_str()),
            Alignment::End => write!(f, "{}-end", self.side.as_str()),
        }
    }
}

impl FromStr for Placement {
    type Err = QuantumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (side, alignment) = match s.split_once('-') {
            Some((side, alignment)) => (side, Some(alignment)),
            None => (s, None),
        };
        let side = match side {
            "top" => Side::Top,
            "right" => Side::Right,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            _ => return Err(QuantumError::InvalidPlacement(s.to_string())),
        };
        let alignment = match alignment {
            None => Alignment::Center,
            Some("start") => Alignment::Start,
            Some("end") => Alignment::End,
            Some(_) => return Err(QuantumError::InvalidPlacement(s.to_string())),
        };
        Ok(Self { side, alignment })
    }
}

impl Serialize for Placement {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Placement {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Axis-aligned rectangle in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Size of `self` along the edge of a floating element placed on `side`.
    pub fn cross_size(&self, side: Side) -> f64 {
        if side.is_vertical() {
            self.width
        } else {
            self.height
        }
    }

    /// True when no part of `self` overlaps `other`.
    pub fn is_outside(&self, other: &Rect) -> bool {
        self.right() <= other.x
            || self.x >= other.right()
            || self.bottom() <= other.y
            || self.y >= other.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    pub placement: Placement,
    pub offset: f64,
    pub detect_padding: f64,
    /// Arrow size along the cross axis, when an arrow is rendered.
    pub arrow: Option<f64>,
    pub hide_when_detached: bool,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            offset: DEFAULT_OFFSET,
            detect_padding: DEFAULT_OFFSET,
            arrow: None,
            hide_when_detached: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ArrowOffset {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub placement: Placement,
    pub arrow: ArrowOffset,
    pub reference_hidden: bool,
}

fn coords_for(anchor: &Rect, floating: &Rect, placement: Placement, offset: f64) -> (f64, f64) {
    let align = |start: f64, anchor_len: f64, floating_len: f64| match placement.alignment {
        Alignment::Start => start,
        Alignment::Center => start + (anchor_len - floating_len) / 2.0,
        Alignment::End => start + anchor_len - floating_len,
    };

    match placement.side {
        Side::Bottom => (
            align(anchor.x, anchor.width, floating.width),
            anchor.bottom() + offset,
        ),
        Side::Top => (
            align(anchor.x, anchor.width, floating.width),
            anchor.y - floating.height - offset,
        ),
        Side::Right => (
            anchor.right() + offset,
            align(anchor.y, anchor.height, floating.height),
        ),
        Side::Left => (
            anchor.x - floating.width - offset,
            align(anchor.y, anchor.height, floating.height),
        ),
    }
}

/// Pixels by which the floating box spills past the padded viewport on `side`.
fn main_axis_overflow(x: f64, y: f64, floating: &Rect, viewport: &Rect, side: Side, padding: f64) -> f64 {
    match side {
        Side::Bottom => (y + floating.height) - (viewport.bottom() - padding),
        Side::Top => (viewport.y + padding) - y,
        Side::Right => (x + floating.width) - (viewport.right() - padding),
        Side::Left => (viewport.x + padding) - x,
    }
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if max < min {
        return min;
    }
    value.max(min).min(max)
}

pub fn compute_position(anchor: Rect, floating: Rect, viewport: Rect, options: PositionOptions) -> Position {
    let mut placement = options.placement;
    let (mut x, mut y) = coords_for(&anchor, &floating, placement, options.offset);

    let overflow = main_axis_overflow(x, y, &floating, &viewport, placement.side, options.detect_padding);
    if overflow > 0.0 {
        let candidate = placement.flipped();
        let (fx, fy) = coords_for(&anchor, &floating, candidate, options.offset);
        let flipped_overflow =
            main_axis_overflow(fx, fy, &floating, &viewport, candidate.side, options.detect_padding);
        if flipped_overflow < overflow {
            placement = candidate;
            x = fx;
            y = fy;
        }
    }

    let padding = options.detect_padding;
    if placement.side.is_vertical() {
        x = clamp(x, viewport.x + padding, viewport.right() - padding - floating.width);
        x = clamp(x, anchor.x - floating.width, anchor.right());
    } else {
        y = clamp(y, viewport.y + padding, viewport.bottom() - padding - floating.height);
        y = clamp(y, anchor.y - floating.height, anchor.bottom());
    }

    let mut arrow = ArrowOffset::default();
    if let Some(size) = options.arrow {
        if placement.side.is_vertical() {
            let center = anchor.x + anchor.width / 2.0 - size / 2.0;
            arrow.x = clamp(center - x, 0.0, floating.width - size);
        } else {
            let center = anchor.y + anchor.height / 2.0 - size / 2.0;
            arrow.y = clamp(center - y, 0.0, floating.height - size);
        }
    }

    Position {
        x,
        y,
        placement,
        arrow,
        reference_hidden: options.hide_when_detached && anchor.is_outside(&viewport),
    }
}

/// Inline CSS for an arrow sitting on `side` of the floating content.
pub fn arrow_style(side: Side, arrow: ArrowOffset, x_offset: f64, y_offset: f64) -> String {
    match side {
        Side::Top => format!(
            "position: absolute; bottom: 0px; left: {}px; transform: rotate(180deg); transform-origin: center 100%;",
            arrow.x + x_offset
        ),
        Side::Bottom => format!(
            "position: absolute; top: 0px; left: {}px; transform: translateY(-100%);",
            arrow.x + x_offset
        ),
        Side::Left => format!(
            "position: absolute; top: {}px; right: 0px; transform: translateX(100%) rotate(90deg) translateY(50%);",
            arrow.y + y_offset
        ),
        Side::Right => format!(
            "position: absolute; top: {}px; left: 0px; transform: translateX(-100%) rotate(-90deg) translateY(50%);",
            arrow.y + y_offset
        ),
    }
}
