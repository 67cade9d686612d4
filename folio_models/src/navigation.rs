use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The class marking the mobile navigation as open.
pub const ACTIVE_CLASS: &str = "active";

/// The elements participating in the mobile navigation toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavElement {
    /// The hamburger button toggling the menu.
    Toggle,
    Menu,
}

impl NavElement {
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Toggle => "menu-toggle",
            Self::Menu => "nav-menu",
        }
    }
}

/// Where a click on the page landed, relative to the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickTarget {
    Toggle,
    /// Inside the menu, but not on a link.
    Menu,
    /// A link inside the menu.
    Link,
    Outside,
}

impl ClickTarget {
    pub const ALL: [Self; 4] = [Self::Toggle, Self::Menu, Self::Link, Self::Outside];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Toggle => "toggle",
            Self::Menu => "menu",
            Self::Link => "link",
            Self::Outside => "outside",
        }
    }
}

impl fmt::Display for ClickTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown click target {0:?}, expected one of toggle, menu, link, outside")]
pub struct UnknownClickTarget(pub String);

impl FromStr for ClickTarget {
    type Err = UnknownClickTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownClickTarget(s.into()))
    }
}
