use crate::error::{Error, Result};
use std::str::FromStr;

pub const MAX_MARK: i64 = 100;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub mark1: i64,
    pub mark2: i64,
    pub mark3: i64,
    pub total: i64,
    pub average: f64,
}

/// Three subject marks, each within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marks([i64; 3]);

impl Marks {
    pub fn new(m1: i64, m2: i64, m3: i64) -> Result<Self> {
        for (subject, mark) in [m1, m2, m3].into_iter().enumerate() {
            if !(0..=MAX_MARK).contains(&mark) {
                return Err(Error::input(format!(
                    "mark {} for subject {} is outside 0..={MAX_MARK}",
                    mark,
                    subject + 1
                )));
            }
        }
        Ok(Self([m1, m2, m3]))
    }

    pub fn values(&self) -> [i64; 3] {
        self.0
    }

    pub fn total(&self) -> i64 {
        self.0.iter().sum()
    }

    pub fn average(&self) -> f64 {
        self.total() as f64 / 3.0
    }
}

/// How the console names a student: by id when the text is an integer,
/// otherwise by exact name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentRef {
    Id(i64),
    Name(String),
}

impl FromStr for StudentRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::input("student name or id is required"));
        }
        Ok(match s.parse::<i64>() {
            Ok(id) => StudentRef::Id(id),
            Err(_) => StudentRef::Name(s.to_string()),
        })
    }
}
