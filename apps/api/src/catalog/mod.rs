//! Program catalog: the static set of program records eligible for matching.
//!
//! Compiled into the binary and never mutated. All text fields that take part
//! in matching are stored lower-case.

pub mod handlers;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    Undergraduate,
    Postgraduate,
    Master,
    Certificate,
    Bootcamp,
}

impl ProgramType {
    pub const ALL: [ProgramType; 5] = [
        ProgramType::Undergraduate,
        ProgramType::Postgraduate,
        ProgramType::Master,
        ProgramType::Certificate,
        ProgramType::Bootcamp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::Undergraduate => "undergraduate",
            ProgramType::Postgraduate => "postgraduate",
            ProgramType::Master => "master",
            ProgramType::Certificate => "certificate",
            ProgramType::Bootcamp => "bootcamp",
        }
    }

    /// Comma-separated list of valid values, for user-facing messages.
    pub fn valid_values() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProgramType(pub String);

impl FromStr for ProgramType {
    type Err = UnknownProgramType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or(UnknownProgramType(normalized))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramRecord {
    pub university: &'static str,
    pub program: &'static str,
    pub location: &'static str,
    pub program_type: ProgramType,
    pub keywords: &'static [&'static str],
}

impl ProgramRecord {
    pub fn has_keyword(&self, token: &str) -> bool {
        self.keywords.iter().any(|k| *k == token)
    }

    /// Location with each word capitalised, e.g. `"Berkeley, Ca"`.
    pub fn display_location(&self) -> String {
        title_case(self.location)
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

static PROGRAMS: [ProgramRecord; 8] = [
    ProgramRecord {
        university: "Stanford University",
        program: "Artificial Intelligence Master Program",
        location: "stanford, ca",
        program_type: ProgramType::Master,
        keywords: &["ai", "machine learning", "computer science"],
    },
    ProgramRecord {
        university: "Massachusetts Institute of Technology",
        program: "Data Science Certificate",
        location: "cambridge, ma",
        program_type: ProgramType::Certificate,
        keywords: &["data science", "statistics", "machine learning"],
    },
    ProgramRecord {
        university: "UC Berkeley",
        program: "Full Stack Development Bootcamp",
        location: "berkeley, ca",
        program_type: ProgramType::Certificate,
        keywords: &["web development", "programming", "software engineering"],
    },
    ProgramRecord {
        university: "Tech University",
        program: "Bachelor in Computer Science",
        location: "new york",
        program_type: ProgramType::Undergraduate,
        keywords: &["computer science", "programming", "software engineering"],
    },
    ProgramRecord {
        university: "Data Institute",
        program: "Master in Data Science",
        location: "california",
        program_type: ProgramType::Postgraduate,
        keywords: &["data science", "machine learning", "ai"],
    },
    ProgramRecord {
        university: "Carnegie Mellon University",
        program: "Master of Science in Robotics",
        location: "pittsburgh, pa",
        program_type: ProgramType::Master,
        keywords: &["robotics", "ai", "mechanical engineering"],
    },
    ProgramRecord {
        university: "Harvard University",
        program: "Business Analytics Certificate",
        location: "cambridge, ma",
        program_type: ProgramType::Certificate,
        keywords: &["business", "data analysis", "statistics"],
    },
    ProgramRecord {
        university: "General Assembly",
        program: "UX Design Bootcamp",
        location: "new york, ny",
        program_type: ProgramType::Bootcamp,
        keywords: &["design", "ux", "web development"],
    },
];

/// The compiled-in sample catalog.
pub fn catalog() -> &'static [ProgramRecord] {
    &PROGRAMS
}
