//! Command facade used by front ends.
//!
//! Front ends hand over a verb and the raw user input; [`GeohashCore`]
//! parses the input, calls the pure codec or geometry function and renders
//! the result according to its [`OutputSettings`].

use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use log::debug;
use serde_json::json;
use thiserror::Error;

use crate::codec::{self, types::parse_component, Axis, CodecError, Coordinate};
use crate::geometry::{self, BoundingBox, GeometryError};
use crate::settings::{OutputFormat, OutputSettings, MAX_DECIMAL_PLACES};

/// Operations reachable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `"lat, lng"` to a 12-character geohash
    Encode,
    /// Geohash to `"lat, lng"`
    Decode,
    /// `"lat, lng, radius_km"` to a bounding box
    BoundingBox,
    /// `"lat1, lng1, lat2, lng2"` to kilometres
    Distance,
    /// `"radius_km"` to a geohash length
    EstimateLength,
}

/// Verb table; the first entry for each command is its canonical name.
const COMMANDS: &[(&str, Command)] = &[
    ("encode", Command::Encode),
    ("e", Command::Encode),
    ("decode", Command::Decode),
    ("d", Command::Decode),
    ("bbox", Command::BoundingBox),
    ("bounding-box", Command::BoundingBox),
    ("distance", Command::Distance),
    ("length", Command::EstimateLength),
    ("estimate-length", Command::EstimateLength),
];

impl Command {
    /// Canonical verb for this command.
    #[must_use]
    pub fn name(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|(_, command)| *command == self)
            .map_or("unknown", |(name, _)| *name)
    }

    /// Describes the input this command expects.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::Encode => "lat, lng",
            Self::Decode => "geohash",
            Self::BoundingBox => "lat, lng, radius_km",
            Self::Distance => "lat1, lng1, lat2, lng2",
            Self::EstimateLength => "radius_km",
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self> {
        let verb = s.trim().to_ascii_lowercase();
        COMMANDS
            .iter()
            .find(|(name, _)| *name == verb)
            .map(|(_, command)| *command)
            .ok_or_else(|| CommandError::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by [`GeohashCore::execute`].
#[derive(Debug, Error)]
pub enum CommandError {
    /// The verb is not in the command table.
    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),

    /// Wrong number of comma-separated fields.
    #[error("{command} expects \"{usage}\", got {got} field(s)")]
    Arguments {
        /// The command being run.
        command: Command,
        /// The input shape the command expects.
        usage: &'static str,
        /// Number of fields found in the input.
        got: usize,
    },

    /// A non-coordinate number (radius) failed to parse.
    #[error("Invalid {name} {token:?}: {source}")]
    InvalidNumber {
        /// What the number was for.
        name: &'static str,
        /// The offending token, trimmed.
        token: String,
        /// The underlying float parsing error.
        source: ParseFloatError,
    },

    /// Coordinate parsing or geohash decoding failed.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Bounding box computation failed.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result type alias for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Entry point for all geohash operations.
///
/// # Examples
///
/// ```
/// use geohash_core::{Command, GeohashCore};
///
/// let core = GeohashCore::default();
/// let hash = core.execute(Command::Encode, "21.0278, 105.8342").unwrap();
/// assert_eq!(hash, "w7er87fpgd52");
///
/// let coords = core.execute(Command::Decode, &hash).unwrap();
/// assert_eq!(coords, "21.0278, 105.8342");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeohashCore {
    settings: OutputSettings,
}

impl GeohashCore {
    /// Creates a `GeohashCore` rendering with the given settings.
    #[must_use]
    pub const fn new(settings: OutputSettings) -> Self {
        Self { settings }
    }

    /// Gets the current output settings.
    #[must_use]
    pub const fn settings(&self) -> &OutputSettings {
        &self.settings
    }

    /// Updates the output settings.
    pub fn set_settings(&mut self, settings: OutputSettings) {
        self.settings = settings;
    }

    /// Looks up `verb` in the command table and executes it.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownCommand`] for an unknown verb, and
    /// otherwise whatever [`GeohashCore::execute`] returns.
    pub fn run(&self, verb: &str, input: &str) -> Result<String> {
        self.execute(verb.parse()?, input)
    }

    /// Parses `input` for `command`, runs it and renders the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the input has the wrong shape, a number does not
    /// parse, a coordinate is out of range, a geohash contains an invalid
    /// character, or a bounding box cannot be computed.
    pub fn execute(&self, command: Command, input: &str) -> Result<String> {
        debug!("executing {command} on {input:?}");
        match command {
            Command::Encode => {
                let coord: Coordinate = input.parse()?;
                Ok(self.render_geohash(&codec::encode(coord)))
            }
            Command::Decode => {
                let coord = codec::decode(input.trim())?;
                Ok(self.render_coordinate(coord))
            }
            Command::BoundingBox => {
                let [lat, lng, radius] = split_fields(command, input)?;
                let center = parse_coordinate(lat, lng)?;
                let radius = parse_number("radius", radius)?;
                let area = geometry::bounding_box(center, radius)?;
                Ok(self.render_bounding_box(&area))
            }
            Command::Distance => {
                let [lat1, lng1, lat2, lng2] = split_fields(command, input)?;
                let from = parse_coordinate(lat1, lng1)?;
                let to = parse_coordinate(lat2, lng2)?;
                Ok(self.render_distance(geometry::distance(from, to)))
            }
            Command::EstimateLength => {
                let [radius] = split_fields(command, input)?;
                let radius = parse_number("radius", radius)?;
                Ok(self.render_length(geometry::estimate_length(radius)))
            }
        }
    }

    fn round(&self, value: f64) -> f64 {
        let places = self.settings.decimal_places.min(MAX_DECIMAL_PLACES);
        let multiplier = 10_f64.powi(i32::from(places));
        (value * multiplier).round() / multiplier
    }

    fn fixed(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.settings.precision())
    }

    fn render_geohash(&self, hash: &str) -> String {
        match self.settings.format {
            OutputFormat::Plain => hash.to_string(),
            OutputFormat::Json => json!({ "geohash": hash }).to_string(),
        }
    }

    fn render_coordinate(&self, coord: Coordinate) -> String {
        match self.settings.format {
            OutputFormat::Plain => format!(
                "{}, {}",
                self.fixed(coord.latitude()),
                self.fixed(coord.longitude())
            ),
            OutputFormat::Json => json!({
                "latitude": self.round(coord.latitude()),
                "longitude": self.round(coord.longitude()),
            })
            .to_string(),
        }
    }

    fn render_bounding_box(&self, area: &BoundingBox) -> String {
        match self.settings.format {
            OutputFormat::Plain => format!(
                "{}, {}, {}, {}",
                self.fixed(area.min_lat),
                self.fixed(area.max_lat),
                self.fixed(area.min_lng),
                self.fixed(area.max_lng)
            ),
            OutputFormat::Json => json!({
                "min_lat": self.round(area.min_lat),
                "max_lat": self.round(area.max_lat),
                "min_lng": self.round(area.min_lng),
                "max_lng": self.round(area.max_lng),
            })
            .to_string(),
        }
    }

    fn render_distance(&self, km: f64) -> String {
        match self.settings.format {
            OutputFormat::Plain => self.fixed(km),
            OutputFormat::Json => json!({ "distance_km": self.round(km) }).to_string(),
        }
    }

    fn render_length(&self, length: usize) -> String {
        match self.settings.format {
            OutputFormat::Plain => length.to_string(),
            OutputFormat::Json => json!({ "length": length }).to_string(),
        }
    }
}

/// Splits `input` on commas into exactly `N` fields.
fn split_fields<const N: usize>(command: Command, input: &str) -> Result<[&str; N]> {
    let fields: Vec<&str> = input.split(',').collect();
    let got = fields.len();
    fields
        .try_into()
        .map_err(|_| CommandError::Arguments {
            command,
            usage: command.usage(),
            got,
        })
}

fn parse_coordinate(lat: &str, lng: &str) -> Result<Coordinate> {
    let latitude = parse_component(Axis::Latitude, lat)?;
    let longitude = parse_component(Axis::Longitude, lng)?;
    Ok(Coordinate::new(latitude, longitude)?)
}

fn parse_number(name: &'static str, token: &str) -> Result<f64> {
    let token = token.trim();
    token.parse().map_err(|source| CommandError::InvalidNumber {
        name,
        token: token.to_string(),
        source,
    })
}
