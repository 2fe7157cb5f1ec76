use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("No section at index {0}")]
    SectionNotFound(usize),
    #[error("No member at index {member} in section {section}")]
    MemberNotFound { section: usize, member: usize },
}

pub type Result<T> = std::result::Result<T, RosterError>;

/// A person shown on one card.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Member {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub job_title: Option<String>,
    pub image_path: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_intern: bool,
}

impl Member {
    pub fn new(name: impl Into<String>, image_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job_title: None,
            image_path: image_path.into(),
            is_intern: false,
        }
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }
}

/// A named, ordered group of members (e.g. a department).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub members: Vec<Member>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            members: Vec::new(),
        }
    }

    pub fn with_members(title: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            title: title.into(),
            members,
        }
    }
}

/// The root roster owned by the application.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sections: Vec<Section>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: "Vores Team".to_string(),
            sections: vec![
                Section::new("Administrationen"),
                Section::new("Sygeplejersker"),
            ],
        }
    }
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn total_members(&self) -> usize {
        self.sections.iter().map(|s| s.members.len()).sum()
    }

    pub fn intern_count(&self) -> usize {
        self.members().filter(|m| m.is_intern).count()
    }

    /// All members, section by section, in input order
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.sections.iter().flat_map(|s| s.members.iter())
    }
}

/// One section's slice of members on a single page, shown under one header.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageGroup {
    pub title: String,
    pub members: Vec<Member>,
}

/// One physical sheet of output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    pub title: String,
    pub sections: Vec<PageGroup>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn member_count(&self) -> usize {
        self.sections.iter().map(|g| g.members.len()).sum()
    }

    /// True when no group on the page holds a member
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|g| g.members.is_empty())
    }

    pub fn group(&self, title: &str) -> Option<&PageGroup> {
        self.sections.iter().find(|g| g.title == title)
    }

    pub(crate) fn group_mut(&mut self, title: &str) -> Option<&mut PageGroup> {
        self.sections.iter_mut().find(|g| g.title == title)
    }
}

/// Card size category, derived once per document from the total member count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizeTier {
    Large,
    Medium,
    Small,
}

impl SizeTier {
    pub fn name(self) -> &'static str {
        match self {
            SizeTier::Large => "large",
            SizeTier::Medium => "medium",
            SizeTier::Small => "small",
        }
    }
}

impl std::fmt::Display for SizeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
