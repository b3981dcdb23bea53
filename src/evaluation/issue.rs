use serde::Serialize;

/// Severity of a recorded data-quality issue.
///
/// `Warning` covers healed values, `Error` dropped entries where
/// downstream construction still proceeds, `FatalError` conditions that
/// make the owning entity unbuildable (that entity is skipped, the rest
/// of the model continues).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueSeverity {
    Warning,
    Error,
    FatalError,
}

/// One recorded data-quality issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub severity: IssueSeverity,
    pub message: String,
}

impl Issue {
    #[must_use]
    pub fn new(severity: IssueSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(IssueSeverity::Warning, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(IssueSeverity::Error, message)
    }

    #[must_use]
    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(IssueSeverity::FatalError, message)
    }
}

/// An explicit issue accumulator, threaded through every healing and
/// builder call in place of any ambient logger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IssueList {
    issues: Vec<Issue>,
}

impl IssueList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue.
    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Records a warning-level issue.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.add(Issue::warning(message));
    }

    /// Records an error-level issue.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.add(Issue::error(message));
    }

    /// Records a fatal issue.
    pub fn add_fatal(&mut self, message: impl Into<String>) {
        self.add(Issue::fatal(message));
    }

    /// Appends all issues of `other`.
    pub fn merge(&mut self, other: IssueList) {
        self.issues.extend(other.issues);
    }

    /// `true` if any recorded issue is fatal.
    #[must_use]
    pub fn has_fatal(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| issue.severity == IssueSeverity::FatalError)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Iterates over the recorded issues.
    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }
}

impl<'a> IntoIterator for &'a IssueList {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

/// A healed value together with the issues recorded while healing it.
#[derive(Debug, Clone, Serialize)]
pub struct Healed<T> {
    pub value: T,
    pub issues: IssueList,
}

impl<T> Healed<T> {
    #[must_use]
    pub fn new(value: T, issues: IssueList) -> Self {
        Self { value, issues }
    }

    /// A value with no issues.
    #[must_use]
    pub fn clean(value: T) -> Self {
        Self::new(value, IssueList::new())
    }

    /// Maps the value, keeping the issues.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Healed<U> {
        Healed::new(f(self.value), self.issues)
    }

    /// Splits into value and issues.
    #[must_use]
    pub fn into_parts(self) -> (T, IssueList) {
        (self.value, self.issues)
    }
}
