//! Prompt construction for AI-generated commit messages.

/// Instructions placed before the diff.
const COMMIT_INSTRUCTIONS: &str = "You're an experienced developer. Write a clean, concise, conventional commit message \
summarizing the following staged Git diff. Focus on what changed and why. \
Avoid file names or line counts.";

/// Build the LLM prompt for generating a commit message.
///
/// The diff is interpolated verbatim: no truncation, escaping or
/// sanitization.
pub fn build_commit_prompt(diff: &str) -> String {
    format!("{COMMIT_INSTRUCTIONS}\nDiff:\n{diff}")
}
