use crate::error::GeometryError;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum PolyType {
    Subject = 0,
    Clip = 1,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum ClipType {
    Intersection = 0,
    Union = 1,
    Difference = 2,
    Xor = 3,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum JoinType {
    Square = 0,
    Round = 1,
    Miter = 2,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[repr(u8)]
pub enum EndType {
    ClosedPolygon = 0,
    ClosedLine = 1,
    OpenButt = 2,
    OpenSquare = 3,
    OpenRound = 4,
}

impl EndType {
    pub fn is_open(self) -> bool {
        !matches!(self, EndType::ClosedPolygon | EndType::ClosedLine)
    }
}

impl TryFrom<u8> for ClipType {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ClipType::Intersection),
            1 => Ok(ClipType::Union),
            2 => Ok(ClipType::Difference),
            3 => Ok(ClipType::Xor),
            _ => Err(GeometryError::InvalidClipType(value)),
        }
    }
}

impl FromStr for ClipType {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "intersection" | "intersect" => Ok(ClipType::Intersection),
            "union" | "merge" => Ok(ClipType::Union),
            "difference" | "sub" => Ok(ClipType::Difference),
            "xor" => Ok(ClipType::Xor),
            _ => Err(GeometryError::UnknownClipType(s.to_string())),
        }
    }
}

impl TryFrom<u8> for JoinType {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(JoinType::Square),
            1 => Ok(JoinType::Round),
            2 => Ok(JoinType::Miter),
            _ => Err(GeometryError::InvalidJoinType(value)),
        }
    }
}

impl TryFrom<u8> for EndType {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EndType::ClosedPolygon),
            1 => Ok(EndType::ClosedLine),
            2 => Ok(EndType::OpenButt),
            3 => Ok(EndType::OpenSquare),
            4 => Ok(EndType::OpenRound),
            _ => Err(GeometryError::InvalidEndType(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_type_codes_match_engine_numbering() {
        for clip_type in [
            ClipType::Intersection,
            ClipType::Union,
            ClipType::Difference,
            ClipType::Xor,
        ] {
            assert_eq!(ClipType::try_from(clip_type as u8), Ok(clip_type));
        }

        assert_eq!(ClipType::try_from(4), Err(GeometryError::InvalidClipType(4)));
    }

    #[test]
    fn clip_type_parses_names() {
        assert_eq!("Union".parse::<ClipType>(), Ok(ClipType::Union));
        assert_eq!("sub".parse::<ClipType>(), Ok(ClipType::Difference));
        assert_eq!(
            "subtract".parse::<ClipType>(),
            Err(GeometryError::UnknownClipType("subtract".to_string()))
        );
    }

    #[test]
    fn unknown_offset_styles_fail() {
        assert_eq!(JoinType::try_from(3), Err(GeometryError::InvalidJoinType(3)));
        assert_eq!(EndType::try_from(5), Err(GeometryError::InvalidEndType(5)));
        assert!(EndType::OpenButt.is_open());
        assert!(!EndType::ClosedLine.is_open());
    }
}
