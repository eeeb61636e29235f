//! Geohash Core Library
//!
//! Converts (latitude, longitude) pairs into fixed-length, sortable geohash
//! strings and back, with the geometry helpers needed to turn a search
//! radius into geohash prefixes.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![deny(unsafe_code)]

mod api;
pub mod codec;
pub mod geometry;
pub mod settings;

pub use api::{Command, CommandError, GeohashCore};
