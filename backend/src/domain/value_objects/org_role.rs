use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A member's function within the council faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrgRole {
    Fraktionsvorsitzender,
    StvFraktionsvorsitzender,
    Fraktionsgeschaeftsfuehrer,
    Ratsmitglied,
    SachkundigerBuerger,
    Mitglied,
}

impl OrgRole {
    pub const ALL: [OrgRole; 6] = [
        Self::Fraktionsvorsitzender,
        Self::StvFraktionsvorsitzender,
        Self::Fraktionsgeschaeftsfuehrer,
        Self::Ratsmitglied,
        Self::SachkundigerBuerger,
        Self::Mitglied,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fraktionsvorsitzender => "fraktionsvorsitzender",
            Self::StvFraktionsvorsitzender => "stv_fraktionsvorsitzender",
            Self::Fraktionsgeschaeftsfuehrer => "fraktionsgeschaeftsfuehrer",
            Self::Ratsmitglied => "ratsmitglied",
            Self::SachkundigerBuerger => "sachkundiger_buerger",
            Self::Mitglied => "mitglied",
        }
    }
}

impl FromStr for OrgRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("Invalid org_role: {s}"))
    }
}

impl fmt::Display for OrgRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
