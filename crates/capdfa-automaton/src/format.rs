//! Serialized automaton files.
//!
//! Binary layout: a 16-byte header followed by a postcard payload.
//!
//! - 0-3: magic `b"CDFA"`
//! - 4-7: format version
//! - 8-11: payload length in bytes
//! - 12-15: CRC32 of the payload
//!
//! JSON documents carry the same [`AutomatonParts`] without a header.
//! Both paths validate through [`Automaton::new`].

use std::fs;
use std::path::Path;

use log::debug;

use crate::automaton::{Automaton, AutomatonParts};
use crate::error::AutomatonError;

pub const MAGIC: [u8; 4] = *b"CDFA";
pub const VERSION: u32 = 1;
pub const HEADER_SIZE: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub magic: [u8; 4],
    pub version: u32,
    pub payload_len: u32,
    pub checksum: u32,
}

impl Header {
    pub fn for_payload(payload: &[u8]) -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            payload_len: payload.len() as u32,
            checksum: crc32fast::hash(payload),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AutomatonError> {
        if bytes.len() < HEADER_SIZE {
            return Err(AutomatonError::FileTooSmall(bytes.len()));
        }
        let word = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        Ok(Self {
            magic: [bytes[0], bytes[1], bytes[2], bytes[3]],
            version: word(4),
            payload_len: word(8),
            checksum: word(12),
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic);
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.payload_len.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.checksum.to_le_bytes());
        bytes
    }

    pub fn validate_magic(&self) -> bool {
        self.magic == MAGIC
    }

    pub fn validate_version(&self) -> bool {
        self.version == VERSION
    }
}

impl Automaton {
    /// Encode as header + postcard payload.
    pub fn to_bytes(&self) -> Result<Vec<u8>, AutomatonError> {
        let payload = postcard::to_allocvec(self)?;
        let header = Header::for_payload(&payload);
        let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
        out.extend_from_slice(&header.to_bytes());
        out.extend_from_slice(&payload);
        Ok(out)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AutomatonError> {
        let header = Header::from_bytes(bytes)?;
        if !header.validate_magic() {
            return Err(AutomatonError::InvalidMagic);
        }
        if !header.validate_version() {
            return Err(AutomatonError::UnsupportedVersion(header.version));
        }

        let payload = &bytes[HEADER_SIZE..];
        if header.payload_len as usize != payload.len() {
            return Err(AutomatonError::SizeMismatch {
                header: header.payload_len,
                actual: payload.len(),
            });
        }
        let actual = crc32fast::hash(payload);
        if actual != header.checksum {
            return Err(AutomatonError::ChecksumMismatch {
                expected: header.checksum,
                actual,
            });
        }

        // Decode the raw parts first so validation failures keep their own
        // error variant instead of surfacing as a postcard message.
        let parts: AutomatonParts = postcard::from_bytes(payload)?;
        Automaton::new(parts)
    }

    pub fn from_json(json: &str) -> Result<Self, AutomatonError> {
        let parts: AutomatonParts = serde_json::from_str(json)?;
        Automaton::new(parts)
    }

    pub fn to_json_pretty(&self) -> Result<String, AutomatonError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a binary or JSON automaton, telling them apart by the magic.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AutomatonError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        if bytes.starts_with(&MAGIC) {
            debug!("loading binary automaton from {}", path.display());
            return Self::from_bytes(&bytes);
        }
        debug!("loading json automaton from {}", path.display());
        let json = String::from_utf8_lossy(&bytes);
        Self::from_json(&json)
    }
}
