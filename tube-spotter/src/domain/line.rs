//! Transit line identifiers and their fixed attributes.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when a line name is not one of the known lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown line: {name:?}")]
pub struct UnknownLine {
    name: String,
}

/// Transport mode of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Underground,
    Overground,
    LightRail,
    NationalRail,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::Underground,
        Mode::Overground,
        Mode::LightRail,
        Mode::NationalRail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Underground => "underground",
            Mode::Overground => "overground",
            Mode::LightRail => "light-rail",
            Mode::NationalRail => "national-rail",
        }
    }

    /// Mode name as used in TfL's `Line/Mode/{modes}` endpoints.
    pub fn feed_name(&self) -> &'static str {
        match self {
            Mode::Underground => "tube",
            Mode::Overground => "overground",
            Mode::LightRail => "dlr",
            Mode::NationalRail => "national-rail",
        }
    }
}

/// A display colour for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl LineColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    const BLACK: LineColor = LineColor::rgb(0x00, 0x00, 0x00);
    const BLUE: LineColor = LineColor::rgb(0x00, 0x00, 0xff);
    const BROWN: LineColor = LineColor::rgb(0x99, 0x66, 0x33);
    const CYAN: LineColor = LineColor::rgb(0x00, 0xff, 0xff);
    const GRAY: LineColor = LineColor::rgb(0x80, 0x80, 0x80);
    const GREEN: LineColor = LineColor::rgb(0x00, 0xff, 0x00);
    const ORANGE: LineColor = LineColor::rgb(0xff, 0x80, 0x00);
    const PINK: LineColor = LineColor::rgb(0xff, 0x2d, 0x55);
    const PURPLE: LineColor = LineColor::rgb(0x80, 0x00, 0x80);
    const RED: LineColor = LineColor::rgb(0xff, 0x00, 0x00);
    const TEAL: LineColor = LineColor::rgb(0x30, 0xb0, 0xc7);
    const YELLOW: LineColor = LineColor::rgb(0xff, 0xff, 0x00);
}

impl fmt::Display for LineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for LineColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One of the known transit lines.
///
/// Ordering follows declaration order, which is what resolved line lists
/// are sorted by.
///
/// # Examples
///
/// ```
/// use tube_spotter::domain::{LineId, Mode};
///
/// let line = LineId::parse("Hammersmith & City").unwrap();
/// assert_eq!(line, LineId::HammersmithAndCity);
/// assert_eq!(line.feed_id(), "hammersmith-city");
/// assert_eq!(line.mode(), Mode::Underground);
///
/// assert!(LineId::parse("hammersmith & city").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LineId {
    Bakerloo,
    C2c,
    Central,
    ChilternRailways,
    Circle,
    District,
    Dlr,
    Elizabeth,
    GreatNorthern,
    GreatWestern,
    GreaterAnglia,
    HammersmithAndCity,
    HeathrowConnect,
    HeathrowExpress,
    Jubilee,
    LondonMidland,
    Metropolitan,
    Northern,
    LondonOverground,
    Piccadilly,
    SouthWestern,
    Southeastern,
    Southern,
    TflRail,
    Thameslink,
    Tramlink,
    Victoria,
    WaterlooAndCity,
}

impl LineId {
    pub const ALL: [LineId; 28] = [
        LineId::Bakerloo,
        LineId::C2c,
        LineId::Central,
        LineId::ChilternRailways,
        LineId::Circle,
        LineId::District,
        LineId::Dlr,
        LineId::Elizabeth,
        LineId::GreatNorthern,
        LineId::GreatWestern,
        LineId::GreaterAnglia,
        LineId::HammersmithAndCity,
        LineId::HeathrowConnect,
        LineId::HeathrowExpress,
        LineId::Jubilee,
        LineId::LondonMidland,
        LineId::Metropolitan,
        LineId::Northern,
        LineId::LondonOverground,
        LineId::Piccadilly,
        LineId::SouthWestern,
        LineId::Southeastern,
        LineId::Southern,
        LineId::TflRail,
        LineId::Thameslink,
        LineId::Tramlink,
        LineId::Victoria,
        LineId::WaterlooAndCity,
    ];

    /// Parse a line from its exact display name.
    pub fn parse(name: &str) -> Result<Self, UnknownLine> {
        LineId::ALL
            .into_iter()
            .find(|line| line.display_name() == name)
            .ok_or_else(|| UnknownLine {
                name: name.to_string(),
            })
    }

    /// Name as it appears in the station/line association data.
    pub fn display_name(&self) -> &'static str {
        match self {
            LineId::Bakerloo => "Bakerloo",
            LineId::C2c => "C2C",
            LineId::Central => "Central",
            LineId::ChilternRailways => "Chiltern Railways",
            LineId::Circle => "Circle",
            LineId::District => "District",
            LineId::Dlr => "DLR",
            LineId::Elizabeth => "Elizabeth",
            LineId::GreatNorthern => "Great Northern",
            LineId::GreatWestern => "Great Western",
            LineId::GreaterAnglia => "Greater Anglia",
            LineId::HammersmithAndCity => "Hammersmith & City",
            LineId::HeathrowConnect => "Heathrow Connect",
            LineId::HeathrowExpress => "Heathrow Express",
            LineId::Jubilee => "Jubilee",
            LineId::LondonMidland => "London Midland",
            LineId::Metropolitan => "Metropolitan",
            LineId::Northern => "Northern",
            LineId::LondonOverground => "London Overground",
            LineId::Piccadilly => "Piccadilly",
            LineId::SouthWestern => "South Western",
            LineId::Southeastern => "Southeastern",
            LineId::Southern => "Southern",
            LineId::TflRail => "TfL Rail",
            LineId::Thameslink => "Thameslink",
            LineId::Tramlink => "Tramlink",
            LineId::Victoria => "Victoria",
            LineId::WaterlooAndCity => "Waterloo & City",
        }
    }

    /// Identifier of this line in the TfL status feed.
    ///
    /// Kept as an explicit table so that a naming change in the feed shows
    /// up as a failing test rather than a silently missing status.
    pub fn feed_id(&self) -> &'static str {
        match self {
            LineId::Bakerloo => "bakerloo",
            LineId::C2c => "c2c",
            LineId::Central => "central",
            LineId::ChilternRailways => "chiltern-railways",
            LineId::Circle => "circle",
            LineId::District => "district",
            LineId::Dlr => "dlr",
            LineId::Elizabeth => "elizabeth",
            LineId::GreatNorthern => "great-northern",
            LineId::GreatWestern => "great-western",
            LineId::GreaterAnglia => "greater-anglia",
            LineId::HammersmithAndCity => "hammersmith-city",
            LineId::HeathrowConnect => "heathrow-connect",
            LineId::HeathrowExpress => "heathrow-express",
            LineId::Jubilee => "jubilee",
            LineId::LondonMidland => "london-midland",
            LineId::Metropolitan => "metropolitan",
            LineId::Northern => "northern",
            LineId::LondonOverground => "london-overground",
            LineId::Piccadilly => "piccadilly",
            LineId::SouthWestern => "south-western",
            LineId::Southeastern => "southeastern",
            LineId::Southern => "southern",
            LineId::TflRail => "tfl-rail",
            LineId::Thameslink => "thameslink",
            LineId::Tramlink => "tramlink",
            LineId::Victoria => "victoria",
            LineId::WaterlooAndCity => "waterloo-city",
        }
    }

    pub fn color(&self) -> LineColor {
        match self {
            LineId::Bakerloo | LineId::ChilternRailways => LineColor::BROWN,
            LineId::C2c | LineId::District => LineColor::GREEN,
            LineId::Central => LineColor::RED,
            LineId::Circle => LineColor::YELLOW,
            LineId::Dlr => LineColor::CYAN,
            LineId::Elizabeth | LineId::HeathrowExpress | LineId::Metropolitan => {
                LineColor::PURPLE
            }
            LineId::GreatNorthern
            | LineId::GreatWestern
            | LineId::GreaterAnglia
            | LineId::LondonMidland
            | LineId::Northern
            | LineId::TflRail => LineColor::BLACK,
            LineId::HammersmithAndCity => LineColor::PINK,
            LineId::HeathrowConnect | LineId::WaterlooAndCity => LineColor::TEAL,
            LineId::Jubilee => LineColor::GRAY,
            LineId::LondonOverground
            | LineId::SouthWestern
            | LineId::Southeastern
            | LineId::Southern => LineColor::ORANGE,
            LineId::Piccadilly | LineId::Thameslink | LineId::Tramlink | LineId::Victoria => {
                LineColor::BLUE
            }
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            LineId::Bakerloo
            | LineId::Central
            | LineId::Circle
            | LineId::District
            | LineId::Elizabeth
            | LineId::HammersmithAndCity
            | LineId::Jubilee
            | LineId::Metropolitan
            | LineId::Northern
            | LineId::Piccadilly
            | LineId::Thameslink
            | LineId::Victoria
            | LineId::WaterlooAndCity => Mode::Underground,
            LineId::C2c
            | LineId::ChilternRailways
            | LineId::GreatNorthern
            | LineId::GreatWestern
            | LineId::GreaterAnglia
            | LineId::HeathrowConnect
            | LineId::HeathrowExpress
            | LineId::LondonMidland
            | LineId::SouthWestern
            | LineId::Southeastern
            | LineId::Southern
            | LineId::TflRail
            | LineId::Tramlink => Mode::NationalRail,
            LineId::Dlr => Mode::LightRail,
            LineId::LondonOverground => Mode::Overground,
        }
    }
}

/// Derive a feed identifier from a display name.
///
/// Lower-cases, turns `" & "` into `"-"`, then the remaining spaces into
/// `"-"`. [`LineId::feed_id`] must agree with this for every line.
pub fn derive_feed_id(display_name: &str) -> String {
    display_name
        .to_lowercase()
        .replace(" & ", "-")
        .replace(' ', "-")
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for LineId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}
