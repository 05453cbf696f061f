//! Markdown rendering of the link change report

use super::grouping::{FileChanges, group_by_file};
use crate::changes::LinkChange;
use crate::constants::report::{
    CHANGES_HEADING, FOOTER, NO_CHANGES_MESSAGE, SUMMARY_LABEL, TITLE,
};

/// Build the pull request body describing `changes`
///
/// The output is fully determined by the input order. An empty list yields
/// only [`NO_CHANGES_MESSAGE`]. Otherwise the report has a title, a summary
/// with total link and file counts, one collapsible section per file (in the
/// order files first appear) and a fixed footer.
pub fn build_report(changes: &[LinkChange]) -> String {
    if changes.is_empty() {
        return NO_CHANGES_MESSAGE.to_string();
    }

    let groups = group_by_file(changes);
    tracing::debug!(
        changes = changes.len(),
        files = groups.len(),
        "building link update report"
    );

    let mut body = format!("{TITLE}\n\n");

    body.push_str(&format!("{SUMMARY_LABEL}\n"));
    body.push_str(&format!(
        "- Total updates: `{}` {}\n",
        changes.len(),
        pluralize(changes.len(), "link")
    ));
    body.push_str(&format!(
        "- Files modified: `{}` {}\n\n",
        groups.len(),
        pluralize(groups.len(), "file")
    ));

    body.push_str(&format!("{CHANGES_HEADING}\n\n"));
    for group in &groups {
        push_file_section(&mut body, group);
    }

    body.push_str("---\n\n");
    body.push_str(FOOTER);

    body
}

fn push_file_section(body: &mut String, group: &FileChanges<'_>) {
    let count = group.changes.len();

    body.push_str(&format!("### 📄 `{}`\n\n", display_name(group.file)));
    body.push_str(&format!(
        "<details>\n<summary>View {} {}</summary>\n\n",
        count,
        pluralize(count, "change")
    ));

    body.push_str("| Original | Updated |\n");
    body.push_str("|----------|---------|\n");
    for change in &group.changes {
        body.push_str(&format!(
            "| `{}` | `{}` |\n",
            change.old_link, change.new_link
        ));
    }

    body.push_str("\n</details>\n\n");
}

/// Noun form for `count` items: singular only for exactly one
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// Final path component of a file identifier, used as its section heading
///
/// Identifiers without a `/`, or ending in one, are shown whole.
pub fn display_name(file: &str) -> &str {
    match file.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => file,
    }
}
