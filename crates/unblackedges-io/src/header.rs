//! PBM header reading
//!
//! Parses the magic number and dimensions of a PBM stream without
//! touching the raster. Comments (`#` to end of line) are accepted
//! anywhere whitespace is.

use crate::{IoError, IoResult};
use std::io::BufRead;

/// Magic numbers for PNM types
mod magic {
    pub const PBM_ASCII: &[u8] = b"P1";
    pub const PGM_ASCII: &[u8] = b"P2";
    pub const PPM_ASCII: &[u8] = b"P3";
    pub const PBM_BINARY: &[u8] = b"P4";
    pub const PGM_BINARY: &[u8] = b"P5";
    pub const PPM_BINARY: &[u8] = b"P6";
    pub const PAM: &[u8] = b"P7";
}

/// PBM raster encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PbmKind {
    /// `P1`: one `0`/`1` character per pixel
    Plain,
    /// `P4`: rows packed MSB-first, padded to a byte boundary
    Raw,
}

impl PbmKind {
    /// The two-byte magic number for this encoding.
    pub fn magic(self) -> &'static str {
        match self {
            Self::Plain => "P1",
            Self::Raw => "P4",
        }
    }
}

/// Bitmap metadata read without decoding the raster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PbmHeader {
    /// Raster encoding
    pub kind: PbmKind,
    /// Width in pixels (> 0)
    pub width: u32,
    /// Height in pixels (> 0)
    pub height: u32,
}

/// Read a PBM header, leaving `reader` positioned at the first raster byte.
///
/// For `P4` the single whitespace byte that separates the height from
/// the raster is consumed.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] if the stream is not PNM at all
/// - [`IoError::WrongImageType`] for graymap, pixmap and PAM streams
/// - [`IoError::InvalidData`] for missing, zero or malformed dimensions
pub fn read_header<R: BufRead>(reader: &mut R) -> IoResult<PbmHeader> {
    let kind = read_magic(reader)?;
    let width = read_dimension(reader, "width")?;
    let height = read_dimension(reader, "height")?;

    if kind == PbmKind::Raw {
        match next_byte(reader)? {
            Some(b) if is_pnm_space(b) => {}
            Some(b) => {
                return Err(IoError::InvalidData(format!(
                    "expected whitespace before P4 raster, found byte 0x{b:02x}"
                )));
            }
            None => {
                return Err(IoError::InvalidData(
                    "truncated header: no raster follows P4 height".to_string(),
                ));
            }
        }
    }

    Ok(PbmHeader {
        kind,
        width,
        height,
    })
}

/// Read a PBM header from bytes.
pub fn read_header_mem(data: &[u8]) -> IoResult<PbmHeader> {
    let mut reader = data;
    read_header(&mut reader)
}

fn read_magic<R: BufRead>(reader: &mut R) -> IoResult<PbmKind> {
    let mut bytes = [0u8; 2];
    for b in bytes.iter_mut() {
        *b = next_byte(reader)?.ok_or_else(|| {
            IoError::UnsupportedFormat("not enough data to detect format".to_string())
        })?;
    }

    match &bytes[..] {
        magic::PBM_ASCII => Ok(PbmKind::Plain),
        magic::PBM_BINARY => Ok(PbmKind::Raw),
        magic::PGM_ASCII
        | magic::PPM_ASCII
        | magic::PGM_BINARY
        | magic::PPM_BINARY
        | magic::PAM => Err(IoError::WrongImageType(
            String::from_utf8_lossy(&bytes).into_owned(),
        )),
        _ => Err(IoError::UnsupportedFormat(format!(
            "unrecognised magic number {:?}",
            String::from_utf8_lossy(&bytes)
        ))),
    }
}

fn read_dimension<R: BufRead>(reader: &mut R, name: &str) -> IoResult<u32> {
    skip_space_and_comments(reader)?;

    let mut value: u32 = 0;
    let mut digits = 0usize;
    while let Some(b) = peek_byte(reader)? {
        if !b.is_ascii_digit() {
            break;
        }
        reader.consume(1);
        digits += 1;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(b - b'0')))
            .ok_or_else(|| IoError::InvalidData(format!("{name} too large")))?;
    }

    if digits == 0 {
        return Err(match peek_byte(reader)? {
            Some(b) => IoError::InvalidData(format!(
                "expected {name}, found {:?}",
                char::from(b)
            )),
            None => IoError::InvalidData(format!("truncated header: missing {name}")),
        });
    }
    if value == 0 {
        return Err(IoError::InvalidData(format!("{name} must be positive")));
    }
    Ok(value)
}

/// PNM whitespace: space, tab, LF, VT, FF, CR.
#[inline]
pub(crate) fn is_pnm_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Skip whitespace and `#` comments.
pub(crate) fn skip_space_and_comments<R: BufRead>(reader: &mut R) -> IoResult<()> {
    while let Some(b) = peek_byte(reader)? {
        if is_pnm_space(b) {
            reader.consume(1);
        } else if b == b'#' {
            while let Some(c) = next_byte(reader)? {
                if c == b'\n' || c == b'\r' {
                    break;
                }
            }
        } else {
            break;
        }
    }
    Ok(())
}

#[inline]
pub(crate) fn peek_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    Ok(reader.fill_buf()?.first().copied())
}

#[inline]
pub(crate) fn next_byte<R: BufRead>(reader: &mut R) -> IoResult<Option<u8>> {
    let b = peek_byte(reader)?;
    if b.is_some() {
        reader.consume(1);
    }
    Ok(b)
}
