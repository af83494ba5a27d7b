use crate::snippets::{self, TextBlock};

#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
    serde::Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Javascript,
    Python,
    Java,
}

impl Lang {
    /// the informal label the fixtures carry, not a validated enumeration
    pub fn get_tag(&self) -> &'static str {
        match self {
            Self::Javascript => "js",
            Self::Python => "python",
            Self::Java => "java",
        }
    }

    pub fn get_extension(&self) -> &'static str {
        match self {
            Self::Javascript => "js",
            Self::Python => "py",
            Self::Java => "java",
        }
    }

    pub fn get_snippet(&self) -> &'static str {
        match self {
            Self::Javascript => snippets::JS,
            Self::Python => snippets::PYTHON,
            Self::Java => snippets::JAVA,
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            Self::Javascript => "add_function",
            Self::Python => "fibonacci",
            Self::Java => "calculator",
        }
    }

    pub fn get_block(&self) -> TextBlock {
        TextBlock {
            name: self.get_name(),
            lang: *self,
            body: self.get_snippet(),
        }
    }
}
