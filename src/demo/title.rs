use std::error::Error;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::core::{cmd::Cmd, out::OutReturn};

lazy_static! {
    static ref TITLE_PATTERN: Regex =
        Regex::new(r"^[\p{L}\p{N} _\-]+$").expect("title pattern should compile");
}

/// Editable heading with a display-width limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub max_width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleEffect {
    Log(String),
}

/// Why a rename was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleError {
    Empty,
    TooWide { width: usize, max_width: usize },
    InvalidCharacters(String),
}

impl fmt::Display for TitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleError::Empty => write!(f, "title must not be empty"),
            TitleError::TooWide { width, max_width } => {
                write!(f, "title is {width} columns wide (max {max_width})")
            }
            TitleError::InvalidCharacters(text) => {
                write!(f, "title contains invalid characters: {text:?}")
            }
        }
    }
}

impl Error for TitleError {}

impl Title {
    pub fn new(text: impl Into<String>, max_width: usize) -> Self {
        Self {
            text: text.into(),
            max_width,
        }
    }

    pub fn validate(&self, text: &str) -> Result<String, TitleError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TitleError::Empty);
        }
        if !TITLE_PATTERN.is_match(text) {
            return Err(TitleError::InvalidCharacters(text.to_string()));
        }
        let width = text.width();
        if width > self.max_width {
            return Err(TitleError::TooWide {
                width,
                max_width: self.max_width,
            });
        }
        Ok(text.to_string())
    }
}

/// Elm-like update for [`Title`]
///
/// A valid rename replaces the text and reports the accepted title. An
/// invalid one leaves the title untouched and reports the error.
pub fn update(
    text: String,
    mut title: Title,
) -> OutReturn<Title, TitleEffect, Result<String, TitleError>> {
    match title.validate(&text) {
        Ok(accepted) => {
            let log = TitleEffect::Log(format!("renamed from {:?}", title.text));
            title.text.clone_from(&accepted);
            OutReturn::new(title, Cmd::single(log), Ok(accepted))
        }
        Err(err) => OutReturn::new(title, Cmd::none(), Err(err)),
    }
}
