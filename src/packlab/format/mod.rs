//! File format parsing layer for PackLab containers.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────┐
//! │ 02 13 01        │ magic/version
//! │ flags           │ 0x80 compressed, 0x40 encrypted, 0x20 checksummed
//! ├─────────────────┤
//! │ dictionary [16] │ only if compressed
//! │ checksum (BE16) │ only if checksummed
//! ├─────────────────┤ ← header::parse_header() ends here
//! │ payload         │
//! └─────────────────┘
//! ```

pub mod header;
