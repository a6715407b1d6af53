//! Transient Notices
//!
//! One banner at a time: class-tagged success/error messages appended to
//! the end of the page body. The page surface is responsible for removing
//! any previous banner and for running the dismiss timeline; the content
//! and the timing contract live here.

use std::time::Duration;

use crate::client::render::escape_html;

/// Auto-dismiss: the fade transition starts after this long...
pub const FADE_AFTER: Duration = Duration::from_secs(3);
/// ...and the banner is removed from the page once it completes.
pub const REMOVE_AFTER: Duration = Duration::from_millis(3500);

/// Banner flavor, mapped to a CSS class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "alert-success",
            NoticeKind::Error => "alert-error",
        }
    }
}

/// A transient on-page message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }

    /// Banner markup appended to the document body.
    ///
    /// The message is escaped even when it came from the backend; server
    /// error strings are not trusted to be sanitized.
    pub fn html(&self) -> String {
        format!(
            "<div class=\"alert {}\">\
                <div class=\"alert-content\">\
                    <span class=\"alert-message\">{}</span>\
                    <button class=\"alert-close\">&times;</button>\
                </div>\
            </div>",
            self.kind.css_class(),
            escape_html(&self.message)
        )
    }
}
