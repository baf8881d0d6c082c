use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 1-based position of a team in the team catalog.
pub type TeamId = u32;

/// Asset identifier. Catalogs use plain numbers (`1`) as well as tags (`"CH-01"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetId {
    Number(i64),
    Text(String),
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetId::Number(n) => write!(f, "{}", n),
            AssetId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for AssetId {
    fn from(n: i64) -> Self {
        AssetId::Number(n)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        AssetId::Text(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        AssetId::Text(s)
    }
}

/// A piece of equipment or location under preventive maintenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Asset {
    pub fn new(id: impl Into<AssetId>, name: &str, description: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }
}

/// A maintenance crew. Its `TeamId` is its 1-based position in the catalog,
/// not a field of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl Team {
    pub fn new(key: &str, name: &str, members: &[&str]) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            members: members.iter().map(|m| m.to_string()).collect(),
        }
    }
}

// ── Weekday ───────────────────────────────────────────────────

/// Working days carrying a PM schedule. Weekends have no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Senin,
        Weekday::Selasa,
        Weekday::Rabu,
        Weekday::Kamis,
        Weekday::Jumat,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Senin => "SENIN",
            Weekday::Selasa => "SELASA",
            Weekday::Rabu => "RABU",
            Weekday::Kamis => "KAMIS",
            Weekday::Jumat => "JUMAT",
        }
    }

    /// Monday = 0 .. Friday = 4.
    pub fn days_from_monday(&self) -> u32 {
        match self {
            Weekday::Senin => 0,
            Weekday::Selasa => 1,
            Weekday::Rabu => 2,
            Weekday::Kamis => 3,
            Weekday::Jumat => 4,
        }
    }

    /// `None` for Saturday and Sunday.
    pub fn from_chrono(day: chrono::Weekday) -> Option<Self> {
        match day {
            chrono::Weekday::Mon => Some(Weekday::Senin),
            chrono::Weekday::Tue => Some(Weekday::Selasa),
            chrono::Weekday::Wed => Some(Weekday::Rabu),
            chrono::Weekday::Thu => Some(Weekday::Kamis),
            chrono::Weekday::Fri => Some(Weekday::Jumat),
            chrono::Weekday::Sat | chrono::Weekday::Sun => None,
        }
    }

    /// Lenient parse for user input: trims and ignores case.
    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_uppercase();
        Weekday::ALL.into_iter().find(|d| d.name() == upper)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::from_name(s).ok_or_else(|| format!("unknown weekday: {}", s))
    }
}

// ── Cycle week ────────────────────────────────────────────────

/// One of the four buckets of the repeating PM rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CycleWeek {
    #[serde(rename = "week1")]
    Week1,
    #[serde(rename = "week2")]
    Week2,
    #[serde(rename = "week3")]
    Week3,
    #[serde(rename = "week4")]
    Week4,
}

impl CycleWeek {
    pub const ALL: [CycleWeek; 4] = [
        CycleWeek::Week1,
        CycleWeek::Week2,
        CycleWeek::Week3,
        CycleWeek::Week4,
    ];

    /// `None` outside `1..=4`.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(CycleWeek::Week1),
            2 => Some(CycleWeek::Week2),
            3 => Some(CycleWeek::Week3),
            4 => Some(CycleWeek::Week4),
            _ => None,
        }
    }

    /// `((week_in_year - 1) mod 4) + 1`. Week 0 is treated as week 1.
    pub fn for_week_in_year(week_in_year: u32) -> Self {
        match week_in_year.saturating_sub(1) % 4 {
            0 => CycleWeek::Week1,
            1 => CycleWeek::Week2,
            2 => CycleWeek::Week3,
            _ => CycleWeek::Week4,
        }
    }

    pub fn number(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Zero-based array index.
    pub fn index(&self) -> usize {
        match self {
            CycleWeek::Week1 => 0,
            CycleWeek::Week2 => 1,
            CycleWeek::Week3 => 2,
            CycleWeek::Week4 => 3,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            CycleWeek::Week1 => "week1",
            CycleWeek::Week2 => "week2",
            CycleWeek::Week3 => "week3",
            CycleWeek::Week4 => "week4",
        }
    }
}

impl fmt::Display for CycleWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CycleWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CycleWeek::ALL
            .into_iter()
            .find(|w| w.key() == s)
            .ok_or_else(|| format!("unknown cycle week: {}", s))
    }
}
