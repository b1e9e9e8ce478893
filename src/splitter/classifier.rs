#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Compiled class file, goes to the class list
    Class,
    /// Any other resource (images, audio, text)
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Blank or comment line, dropped before classification
    Skip,
    Entry(EntryKind, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRules {
    pub class_suffix: String,
    pub comment_marker: char,
}

impl Default for SplitRules {
    fn default() -> Self {
        Self {
            class_suffix: ".class".to_string(),
            comment_marker: '#',
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EntryClassifier {
    rules: SplitRules,
}

impl EntryClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: SplitRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SplitRules {
        &self.rules
    }

    /// Classify one raw line as read from the list file.
    ///
    /// The blank/comment check looks at the untrimmed line, so a line made of
    /// spaces only is kept and ends up as an empty `Other` entry.
    pub fn classify_line(&self, line: &str) -> LineClass {
        if line.is_empty() || line.starts_with(self.rules.comment_marker) {
            return LineClass::Skip;
        }

        let entry = trim_entry(line);
        LineClass::Entry(self.kind_of(entry), entry.to_string())
    }

    pub fn kind_of(&self, entry: &str) -> EntryKind {
        if entry.ends_with(self.rules.class_suffix.as_str()) {
            EntryKind::Class
        } else {
            EntryKind::Other
        }
    }
}

/// Strips control characters and spaces from both ends.
pub fn trim_entry(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}
