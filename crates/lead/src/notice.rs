use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::{FormSchema, Outcome};

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[strum(serialize_all = "snake_case")]
pub enum Level {
    Success,
    Error,
}

/// Transient, dismissible message shown after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: Level,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Provider error text is never part of the notice.
    pub fn for_outcome(schema: &FormSchema, outcome: &Outcome) -> Option<Self> {
        match outcome {
            Outcome::Delivered(_) => Some(Self::success(
                schema.success.title,
                schema.success.description,
            )),
            Outcome::Failed(_) => Some(Self::error(
                schema.failure.title,
                schema.failure.description,
            )),
            Outcome::Rejected(err) => Some(Self::error(err.title(), err.description())),
            Outcome::Ignored => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}
