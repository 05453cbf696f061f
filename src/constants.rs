//! Central constants for the link-updater application

/// Default values for pull request publication
pub mod github {
    /// Title of every pull request the tool opens
    pub const DEFAULT_PR_TITLE: &str = "link-updater: update repository links";

    /// Branch the pull request is opened against
    pub const DEFAULT_BASE_BRANCH: &str = "main";
}

/// Fixed texts of the markdown report
pub mod report {
    /// Entire report body when no link was changed
    pub const NO_CHANGES_MESSAGE: &str = "No links were changed in this update.";

    pub const TITLE: &str = "# 🔄 Link Updates";

    pub const SUMMARY_LABEL: &str = "📊 **Summary**";

    pub const CHANGES_HEADING: &str = "## 📝 Changes by File";

    pub const FOOTER: &str = "> 🤖 *This PR was automatically generated by the [Link Updater](https://github.com/iamvikshan/link-updater).*";
}

/// Default values for configuration
pub mod config {
    /// Change list written by the rewriting stage
    pub const DEFAULT_CHANGES_FILE: &str = "link-changes.json";
}
