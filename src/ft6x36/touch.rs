//! Touch report decoding and the display rotation transform.

use core::fmt;
use core::ops::Deref;

/// Maximum number of simultaneous contacts the controller reports.
pub const MAX_POINTS: usize = 2;

/// Size of one point record (`Px_XH` through `Px_MISC`).
pub(crate) const POINT_RECORD_LEN: usize = 6;

/// Both point records, read back to back.
pub(crate) const POINT_BLOCK_LEN: usize = POINT_RECORD_LEN * MAX_POINTS;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    #[default]
    None,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ZoomIn,
    ZoomOut,
}

impl Gesture {
    pub fn from_u8(val: u8) -> Self {
        use Gesture::*;
        match val {
            0x10 => MoveUp,
            0x14 => MoveRight,
            0x18 => MoveDown,
            0x1C => MoveLeft,
            0x48 => ZoomIn,
            0x49 => ZoomOut,
            _ => None,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Orientation of the display the panel is mounted on.
///
/// This only selects how raw panel coordinates are remapped; the controller
/// itself is unaware of it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    Portrait,
    Landscape,
    PortraitInverted,
    LandscapeInverted,
}

impl Rotation {
    /// Maps raw panel coordinates into display coordinates.
    ///
    /// No clamping is applied: a raw coordinate beyond `width`/`height` yields
    /// a negative output, and callers clamp to their own display bounds.
    pub fn transform(self, x: u16, y: u16, width: u16, height: u16) -> (i32, i32) {
        let (x, y) = (i32::from(x), i32::from(y));
        let (w, h) = (i32::from(width), i32::from(height));
        match self {
            Rotation::Portrait => (x, y),
            Rotation::Landscape => (y, w - x),
            Rotation::PortraitInverted => (w - x, h - y),
            Rotation::LandscapeInverted => (h - y, x),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoint {
    pub x: i32,
    pub y: i32,
    /// Contact weight (pressure/size proxy)
    pub weight: u8,
    /// Low nibble of `Px_MISC`: touch area
    pub area: u8,
}

impl TouchPoint {
    /// Decodes one point record and rotates it into display coordinates.
    ///
    /// The top nibble of the X and Y high bytes carries event/id flags and is
    /// masked off before rotating, as is the top nibble of the misc byte.
    fn from_record(record: &[u8], rotation: Rotation, width: u16, height: u16) -> Self {
        let raw_x = u16::from_be_bytes([record[0], record[1]]) & 0x0FFF;
        let raw_y = u16::from_be_bytes([record[2], record[3]]) & 0x0FFF;
        let (x, y) = rotation.transform(raw_x, raw_y, width, height);
        TouchPoint {
            x,
            y,
            weight: record[4],
            area: record[5] & 0x0F,
        }
    }
}

impl fmt::Display for TouchPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} : w {} : a {}", self.x, self.y, self.weight, self.area)
    }
}

/// The points of a single report, in register order.
///
/// Dereferences to a slice of at most [`MAX_POINTS`] elements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchPoints {
    points: [TouchPoint; MAX_POINTS],
    len: usize,
}

impl TouchPoints {
    /// Decodes the `Px` register block.
    ///
    /// `status` is the raw `TD_STATUS` byte; its low nibble is the point
    /// count, clamped to [`MAX_POINTS`]. Both records are decoded and rotated
    /// regardless of the count; slots past the count are left at default so
    /// stale records never take part in comparisons.
    pub(crate) fn decode(
        status: u8,
        block: &[u8; POINT_BLOCK_LEN],
        rotation: Rotation,
        width: u16,
        height: u16,
    ) -> Self {
        let len = usize::from(status & 0x0F).min(MAX_POINTS);
        let mut points = [TouchPoint::default(); MAX_POINTS];
        for (point, record) in points.iter_mut().zip(block.chunks_exact(POINT_RECORD_LEN)) {
            *point = TouchPoint::from_record(record, rotation, width, height);
        }
        for point in &mut points[len..] {
            *point = TouchPoint::default();
        }
        TouchPoints { points, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[TouchPoint] {
        &self.points[..self.len]
    }
}

impl Deref for TouchPoints {
    type Target = [TouchPoint];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a TouchPoints {
    type Item = &'a TouchPoint;
    type IntoIter = core::slice::Iter<'a, TouchPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Gesture detection tuning (`0x91`..=`0x96`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureParams {
    /// Minimum allowed angle for a rotating gesture
    pub minimum_angle: u8,
    pub offset_left_right: u8,
    pub offset_up_down: u8,
    pub distance_left_right: u8,
    pub distance_up_down: u8,
    pub distance_zoom: u8,
}

impl GestureParams {
    pub(crate) const LEN: usize = 6;

    pub(crate) fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        GestureParams {
            minimum_angle: bytes[0],
            offset_left_right: bytes[1],
            offset_up_down: bytes[2],
            distance_left_right: bytes[3],
            distance_up_down: bytes[4],
            distance_zoom: bytes[5],
        }
    }

    pub(crate) fn to_bytes(self) -> [u8; Self::LEN] {
        [
            self.minimum_angle,
            self.offset_left_right,
            self.offset_up_down,
            self.distance_left_right,
            self.distance_up_down,
            self.distance_zoom,
        ]
    }
}
