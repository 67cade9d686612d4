use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The id used by the item routes of the smoke test server.
pub const DEFAULT_SMOKE_ITEM_ID: u64 = 123;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SmokeMethod {
    Get,
    Post,
    Put,
    Patch,
}

impl SmokeMethod {
    pub const ALL: [Self; 4] = [Self::Get, Self::Post, Self::Put, Self::Patch];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for SmokeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown smoke test method {0:?}, expected one of get, post, put, patch")]
pub struct UnknownSmokeMethod(pub String);

impl FromStr for SmokeMethod {
    type Err = UnknownSmokeMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownSmokeMethod(s.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokePostBody {
    pub name: String,
}

impl Default for SmokePostBody {
    fn default() -> Self {
        Self {
            name: "Samuel".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokePutBody {
    pub update: String,
}

impl Default for SmokePutBody {
    fn default() -> Self {
        Self {
            update: "New Data".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokePatchBody {
    pub partial: String,
}

impl Default for SmokePatchBody {
    fn default() -> Self {
        Self {
            partial: "Updated".into(),
        }
    }
}
