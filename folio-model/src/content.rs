use serde::{Deserialize, Serialize};

use crate::present;

/// Free-form detail content of an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Sections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub approach: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub what_i_learned: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub problems_encountered: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub future_work: Vec<String>,
}

impl Sections {
    pub fn problem(&self) -> Option<&str> {
        present::text(self.problem.as_deref())
    }

    pub fn approach(&self) -> Option<&[String]> {
        present::list(&self.approach)
    }

    pub fn results(&self) -> Option<&[String]> {
        present::list(&self.results)
    }

    pub fn what_i_learned(&self) -> Option<&[String]> {
        present::list(&self.what_i_learned)
    }

    pub fn problems_encountered(&self) -> Option<&[String]> {
        present::list(&self.problems_encountered)
    }

    pub fn future_work(&self) -> Option<&[String]> {
        present::list(&self.future_work)
    }
}

/// Outbound links of an entry. Values are URLs or site-local paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    /// Source repository. Lab data spells this `repo`.
    #[serde(alias = "repo", skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl Links {
    /// Repository link, unless absent or the `"#"` placeholder.
    pub fn github(&self) -> Option<&str> {
        present::text_except(self.github.as_deref(), present::LINK_PLACEHOLDER)
    }

    pub fn demo(&self) -> Option<&str> {
        present::text(self.demo.as_deref())
    }

    pub fn video(&self) -> Option<&str> {
        present::text(self.video.as_deref())
    }

    pub fn report(&self) -> Option<&str> {
        present::text(self.report.as_deref())
    }

    /// True if at least one link would be shown.
    pub fn any(&self) -> bool {
        self.github().is_some()
            || self.demo().is_some()
            || self.video().is_some()
            || self.report().is_some()
    }
}
