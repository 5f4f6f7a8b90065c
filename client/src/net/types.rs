//! Wire types for the client/server boundary.
//!
//! The data model is shared with the server through the `roster` crate, so
//! this module only re-exports it and adds the error envelope.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

pub use roster::{ClubInfo, Coach, Credentials, NewPlayer, Player, PositionUpdate, Role};

/// JSON body of a non-2xx API response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}
