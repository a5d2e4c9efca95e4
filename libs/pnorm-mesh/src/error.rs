//! # Mesh Errors
//!
//! Error types for parameter validation and mesh checks. The generator itself
//! never fails; these errors come from the upstream validator
//! ([`SurfaceParams::new`](crate::SurfaceParams::new)) and from
//! [`Mesh::validate`](crate::Mesh::validate).

use thiserror::Error;

/// Errors that can occur around mesh generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// A surface parameter is outside its domain
    #[error("Invalid {name}: {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Invalid mesh topology
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// A vertex or normal holds NaN or infinity
    #[error("Non-finite {kind} at index {index}")]
    NonFinite { kind: &'static str, index: usize },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
