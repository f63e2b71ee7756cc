//! Text parsing for conversion requests (CLI arguments, single lines).

use std::str::FromStr;

use serde::Serialize;

use super::dispatch::{convert_bbox, route, Route};
use super::{BoxFormat, ImageSize};
use crate::error::ConvertError;

/// A conversion request as typed by a user: raw tags, coordinates and an
/// optional image size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub coords: Vec<f64>,
    pub size: Option<ImageSize>,
}

impl ConversionRequest {
    /// Parse coordinate tokens and an optional size string into a request.
    ///
    /// Tags are kept verbatim; they are resolved when the request runs so
    /// that an unknown tag reports as an unsupported conversion.
    pub fn parse<S: AsRef<str>>(
        from: &str,
        to: &str,
        coords: &[S],
        size: Option<&str>,
    ) -> Result<Self, ConvertError> {
        let names = from
            .parse::<BoxFormat>()
            .map(|format| format.field_names())
            .ok();
        let coords = coords
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                let field = names
                    .and_then(|names| names.get(i).copied())
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("coord{}", i + 1));
                parse_coord(raw.as_ref(), &field)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let size = size.map(str::parse::<ImageSize>).transpose()?;

        Ok(Self {
            from: from.to_string(),
            to: to.to_string(),
            coords,
            size,
        })
    }

    /// The route the tags resolve to, if they name a supported pair.
    pub fn route(&self) -> Option<Route> {
        let from = self.from.parse::<BoxFormat>().ok()?;
        let to = self.to.parse::<BoxFormat>().ok()?;
        route(from, to)
    }

    /// Run the conversion through the string-tag dispatcher.
    pub fn run(&self) -> Result<[f64; 4], ConvertError> {
        convert_bbox(&self.from, &self.to, &self.coords, self.size)
    }
}

/// Parse a single coordinate token; anything that is not a number is a
/// type error naming `field`.
pub fn parse_coord(raw: &str, field: &str) -> Result<f64, ConvertError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ConvertError::NonNumeric {
            field: field.to_string(),
            value: format!("'{raw}'"),
        })
}

impl FromStr for ImageSize {
    type Err = ConvertError;

    /// Accepts `WxH` or `W,H`, e.g. `640x480`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(['x', 'X', ',']).collect();
        let dims = parts
            .iter()
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| ConvertError::MalformedSize(format!("'{s}'")))
            })
            .collect::<Result<Vec<f64>, _>>()?;
        ImageSize::try_from(dims.as_slice())
            .map_err(|_| ConvertError::MalformedSize(format!("'{s}'")))
    }
}

/// Parse a whitespace-separated line `FROM TO A B C D [WxH]`.
pub fn parse_request_line(line: &str) -> Result<ConversionRequest, ConvertError> {
    // Count before collecting so pathological input does not allocate unbounded memory.
    let found = line.split_whitespace().count();
    if !(2..=MAX_REQUEST_TOKENS).contains(&found) {
        return Err(ConvertError::MalformedRequest { found });
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (from, to, rest) = (tokens[0], tokens[1], &tokens[2..]);
    match rest.len() {
        4 => ConversionRequest::parse(from, to, rest, None),
        5 => ConversionRequest::parse(from, to, &rest[..4], Some(rest[4])),
        found => Err(ConvertError::WrongArity { found }),
    }
}

/// `FROM TO` plus four coordinates and an optional size.
const MAX_REQUEST_TOKENS: usize = 7;

/// Fuzz-only entrypoint for request-line parsing and conversion.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_request(line: &str) -> Result<(), ConvertError> {
    let _ = parse_request_line(line)?.run()?;
    Ok(())
}
