//! Fake-news check prompting and reply interpretation.

mod language;
pub mod prompt;

pub use language::Language;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Real,
    Fake,
}

impl Verdict {
    pub const REAL_TAG: &'static str = "[VERDICT:REAL]";
    pub const FAKE_TAG: &'static str = "[VERDICT:FAKE]";

    /// Reads the tag from the first non-empty line of a model reply.
    pub fn from_reply(reply: &str) -> Option<Verdict> {
        let first = reply.lines().map(str::trim).find(|l| !l.is_empty())?;
        if first.contains(Self::REAL_TAG) {
            Some(Verdict::Real)
        } else if first.contains(Self::FAKE_TAG) {
            Some(Verdict::Fake)
        } else {
            None
        }
    }
}
