//! Human-readable diagnostics for song validation failures.
//!
//! A [`Diagnostic`] is the presentation of a [`SongError`]: a severity
//! prefix followed by a short Chinese message. Construction failures are
//! errors (`[错误]`), failed updates are advisories (`[提示]`) telling the
//! user the change was ignored.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::domain::{SongError, SongField};

/// Operation during which a validation failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Building a new song.
    Construction,
    /// Changing a field or the tag list of an existing song.
    Update,
}

/// Severity shown in front of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rendered as `[错误]`.
    Error,
    /// Rendered as `[提示]`.
    Notice,
}

impl Severity {
    /// Returns the bracketed prefix for this severity.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Error => "[错误]",
            Self::Notice => "[提示]",
        }
    }
}

/// A user-facing validation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity prefix.
    pub severity: Severity,
    /// Message body without prefix.
    pub message: &'static str,
}

impl Diagnostic {
    /// Builds the diagnostic for `error` raised during `stage`.
    #[must_use]
    pub fn for_error(error: &SongError, stage: Stage) -> Self {
        let severity = match stage {
            Stage::Construction => Severity::Error,
            Stage::Update => Severity::Notice,
        };
        let message = match (stage, error) {
            (Stage::Construction, SongError::EmptyField { field: SongField::Title }) => {
                "标题不能为空"
            }
            (Stage::Construction, SongError::EmptyField { field: SongField::Artist }) => {
                "艺人不能为空"
            }
            (Stage::Construction, SongError::InvalidDuration { .. }) => "时长必须为正整数（秒）",
            (Stage::Construction, SongError::InvalidRating { .. }) => "评分必须在 1...5 之间",
            (Stage::Update, SongError::EmptyField { field: SongField::Title }) => {
                "标题不能为空，已忽略本次修改"
            }
            (Stage::Update, SongError::EmptyField { field: SongField::Artist }) => {
                "艺人不能为空，已忽略本次修改"
            }
            (Stage::Update, SongError::InvalidDuration { .. }) => "时长需为正整数，已忽略本次修改",
            (Stage::Update, SongError::InvalidRating { .. }) => "评分需在 1..5，已忽略本次修改",
            (_, SongError::EmptyField { field: SongField::Tag }) => "空标签已忽略",
            (_, SongError::DuplicateTag { .. }) => "标签已存在（忽略大小写）",
            (_, SongError::TagNotFound { .. }) => "未找到该标签",
            (_, SongError::IdsExhausted) => "歌曲编号已用尽",
        };
        Self { severity, message }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.severity.prefix(), self.message)
    }
}

impl SongError {
    /// Shortcut for [`Diagnostic::for_error`].
    #[must_use]
    pub fn diagnostic(&self, stage: Stage) -> Diagnostic {
        Diagnostic::for_error(self, stage)
    }
}
