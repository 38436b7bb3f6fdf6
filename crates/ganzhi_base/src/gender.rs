//! Gender and the fortune-progression direction derived from it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::Polarity;

/// Gender of the chart subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Chinese name (男 / 女).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl FromStr for Gender {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err("expected male or female"),
        }
    }
}

/// Direction in which luck periods advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// 顺行
    Forward,
    /// 逆行
    Backward,
}

impl Direction {
    /// Forward for a male born in a yang year or a female born in a yin year.
    pub const fn for_birth(gender: Gender, year_polarity: Polarity) -> Self {
        match (gender, year_polarity) {
            (Gender::Male, Polarity::Yang) | (Gender::Female, Polarity::Yin) => Self::Forward,
            _ => Self::Backward,
        }
    }

    /// Ring step: +1 forward, −1 backward.
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Forward => "顺行",
            Self::Backward => "逆行",
        }
    }
}
