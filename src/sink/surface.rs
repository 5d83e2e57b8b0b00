//! The commit-input surface: where a generated message goes when the user
//! will finish the commit themselves.

use std::io;
use std::path::PathBuf;

use tracing::debug;

/// A writable commit message input.
#[cfg_attr(test, mockall::automock)]
pub trait CommitInput: Send {
    /// Replace the pending commit message with `message`.
    fn set_value(&mut self, message: &str) -> io::Result<()>;

    /// Bring the input to the user's attention.
    fn reveal(&self);
}

/// Availability of a commit-input surface, decided once per invocation.
pub enum CommitSurface {
    Available(Box<dyn CommitInput>),
    Unavailable,
}

impl CommitSurface {
    /// Select the surface for this invocation.
    ///
    /// A message file (as handed to a `prepare-commit-msg` hook) is the only
    /// surface a terminal session has; without one the sink falls back to
    /// prompting.
    pub fn detect(message_file: Option<PathBuf>) -> Self {
        match message_file {
            Some(path) => {
                debug!("Commit surface: message file {}", path.display());
                CommitSurface::Available(Box::new(MessageFile::new(path)))
            }
            None => {
                debug!("Commit surface: unavailable");
                CommitSurface::Unavailable
            }
        }
    }
}

/// The commit message file git opens in the editor after the
/// `prepare-commit-msg` hook runs.
#[derive(Debug, Clone)]
pub struct MessageFile {
    path: PathBuf,
}

impl MessageFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CommitInput for MessageFile {
    /// Write `message` as the file's content, keeping git's `#` comment
    /// lines below it.
    fn set_value(&mut self, message: &str) -> io::Result<()> {
        let existing = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e),
        };

        std::fs::write(&self.path, compose_message_file(message, &existing))
    }

    fn reveal(&self) {
        println!("Commit message written to {}", self.path.display());
    }
}

/// Build the new file content from the message and the previous content.
fn compose_message_file(message: &str, existing: &str) -> String {
    let comments: Vec<&str> = existing
        .lines()
        .filter(|line| line.starts_with('#'))
        .collect();

    let mut content = String::from(message);
    content.push('\n');
    if !comments.is_empty() {
        content.push('\n');
        content.push_str(&comments.join("\n"));
        content.push('\n');
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_without_file_is_unavailable() {
        assert!(matches!(
            CommitSurface::detect(None),
            CommitSurface::Unavailable
        ));
    }

    #[test]
    fn test_detect_with_file_is_available() {
        let surface = CommitSurface::detect(Some(PathBuf::from("COMMIT_EDITMSG")));
        assert!(matches!(surface, CommitSurface::Available(_)));
    }

    #[test]
    fn test_compose_keeps_comment_lines() {
        let existing = "\n# Please enter the commit message for your changes.\n# On branch main\n";
        let content = compose_message_file("Add hello to x.txt", existing);
        assert_eq!(
            content,
            "Add hello to x.txt\n\n# Please enter the commit message for your changes.\n# On branch main\n"
        );
    }

    #[test]
    fn test_compose_replaces_previous_message() {
        let content = compose_message_file("new message", "old message\n");
        assert_eq!(content, "new message\n");
    }

    #[test]
    fn test_message_file_set_value_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, "\n# comment\n").unwrap();

        let mut file = MessageFile::new(&path);
        file.set_value("fix bug").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fix bug\n\n# comment\n");
    }

    #[test]
    fn test_message_file_set_value_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("COMMIT_EDITMSG");

        let mut file = MessageFile::new(&path);
        file.set_value("fix bug").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fix bug\n");
    }

    #[test]
    fn test_message_file_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = MessageFile::new(dir.path().join("missing").join("COMMIT_EDITMSG"));
        assert!(file.set_value("fix bug").is_err());
    }
}
