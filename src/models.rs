use chrono::NaiveDateTime;

/// Timestamps read from a filesystem entry, in local time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathTimes {
    pub created: Option<NaiveDateTime>,
    pub updated: Option<NaiveDateTime>,
    pub accessed: Option<NaiveDateTime>,
}

impl PathTimes {
    /// All three timestamps absent, as reported for a missing path.
    pub fn none() -> Self {
        Self::default()
    }
}

/// A file name split on its last interior delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixSuffix {
    pub prefix: String,
    pub suffix: Option<String>,
}

impl PrefixSuffix {
    pub fn new(prefix: impl Into<String>, suffix: Option<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix,
        }
    }

    /// A name that is never split (hidden file, no delimiter, trailing delimiter).
    pub fn whole(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}
