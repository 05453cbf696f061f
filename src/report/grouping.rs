//! Grouping of link changes by the file they occurred in

use crate::changes::LinkChange;
use std::collections::HashMap;

/// All changes made to one file, in the order they were discovered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChanges<'a> {
    pub file: &'a str,
    pub changes: Vec<&'a LinkChange>,
}

/// Partition `changes` by file without reordering anything
///
/// Groups appear in the order their file is first seen, and each group keeps
/// the relative input order of its records. Concatenating the groups yields
/// every input record exactly once.
pub fn group_by_file(changes: &[LinkChange]) -> Vec<FileChanges<'_>> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<FileChanges<'_>> = Vec::new();

    for change in changes {
        let slot = *positions.entry(change.file.as_str()).or_insert_with(|| {
            groups.push(FileChanges {
                file: change.file.as_str(),
                changes: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].changes.push(change);
    }

    groups
}
