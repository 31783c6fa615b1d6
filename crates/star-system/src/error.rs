use std::fmt;

use crate::path::SystemPath;

/// Structural contract violations of a system tree.
///
/// These never come from bad luck in the random draws; they mean the tree
/// was built wrong, so generation of the affected system stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemError {
    BodyOutOfRange { index: u32, len: usize },
    ForeignPath { path: SystemPath, system: SystemPath },
    MalformedGravityPoint { index: u32, children: usize },
    NotABodyPath { path: SystemPath },
    NotCoOrbital { index: u32 },
    BrokenLink { index: u32 },
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::BodyOutOfRange { index, len } => {
                write!(f, "body index {} out of range for {} bodies", index, len)
            }
            SystemError::ForeignPath { path, system } => {
                write!(f, "path {} does not belong to system {}", path, system)
            }
            SystemError::MalformedGravityPoint { index, children } => write!(
                f,
                "gravity point {} has {} children, expected 2",
                index, children
            ),
            SystemError::NotABodyPath { path } => write!(f, "path {} names no body", path),
            SystemError::NotCoOrbital { index } => {
                write!(f, "body {} has no gravity-point parent", index)
            }
            SystemError::BrokenLink { index } => {
                write!(f, "body {} is not linked into the tree exactly once", index)
            }
        }
    }
}

impl std::error::Error for SystemError {}
