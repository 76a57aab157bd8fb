use crate::clipper::constants::{DEFAULT_ARC_TOLERANCE, DEFAULT_MITER_LIMIT};
use crate::clipper::enums::{EndType, JoinType};
use crate::error::GeometryError;
use crate::utils::bit_ops::{get_bits, set_bits};

/// Offset settings, fixed once a `ClipperWrapper` is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipperConfig {
    /// Corner style for polygon offsets.
    pub join_type: JoinType,
    /// Cap style for offsets of open paths.
    pub open_end_type: EndType,
    pub miter_limit: f64,
    /// Maximum deviation of rounded arcs, in engine units.
    pub arc_tolerance: f64,
}

// join, open end type, miter limit x10, arc tolerance x100
const CONFIG_OFFSETS: [u8; 4] = [0, 2, 5, 13];

const CONFIG_BITS: [u8; 4] = [2, 3, 8, 8];

impl Default for ClipperConfig {
    fn default() -> Self {
        Self {
            join_type: JoinType::Miter,
            open_end_type: EndType::OpenButt,
            miter_limit: DEFAULT_MITER_LIMIT,
            arc_tolerance: DEFAULT_ARC_TOLERANCE,
        }
    }
}

impl ClipperConfig {
    pub fn new(join_type: JoinType, open_end_type: EndType) -> Self {
        Self {
            join_type,
            open_end_type,
            ..Self::default()
        }
    }

    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }

    pub fn with_arc_tolerance(mut self, arc_tolerance: f64) -> Self {
        self.arc_tolerance = arc_tolerance;
        self
    }

    pub fn deserialize(packed: u32) -> Result<Self, GeometryError> {
        let join_type =
            JoinType::try_from(get_bits(packed, CONFIG_OFFSETS[0], CONFIG_BITS[0]) as u8)?;
        let open_end_type =
            EndType::try_from(get_bits(packed, CONFIG_OFFSETS[1], CONFIG_BITS[1]) as u8)?;
        let miter_limit = get_bits(packed, CONFIG_OFFSETS[2], CONFIG_BITS[2]) as f64 / 10.0;
        let arc_tolerance = get_bits(packed, CONFIG_OFFSETS[3], CONFIG_BITS[3]) as f64 / 100.0;

        // A zeroed field means "use the default".
        let defaults = Self::default();

        Ok(Self {
            join_type,
            open_end_type,
            miter_limit: if miter_limit > 0.0 {
                miter_limit
            } else {
                defaults.miter_limit
            },
            arc_tolerance: if arc_tolerance > 0.0 {
                arc_tolerance
            } else {
                defaults.arc_tolerance
            },
        })
    }

    pub fn serialize(&self) -> u32 {
        let mut result: u32 = 0;

        result = set_bits(
            result,
            self.join_type as u16,
            CONFIG_OFFSETS[0],
            CONFIG_BITS[0],
        );
        result = set_bits(
            result,
            self.open_end_type as u16,
            CONFIG_OFFSETS[1],
            CONFIG_BITS[1],
        );
        result = set_bits(
            result,
            (self.miter_limit * 10.0).round().clamp(0.0, 255.0) as u16,
            CONFIG_OFFSETS[2],
            CONFIG_BITS[2],
        );
        result = set_bits(
            result,
            (self.arc_tolerance * 100.0).round().clamp(0.0, 255.0) as u16,
            CONFIG_OFFSETS[3],
            CONFIG_BITS[3],
        );

        result
    }
}
