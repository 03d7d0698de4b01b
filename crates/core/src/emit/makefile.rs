//! Minimal Makefile syntax: rules and variable assignments.

/// A make rule: target, prerequisites, recipe lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    target: String,
    prerequisites: Vec<String>,
    recipe: Vec<String>,
}

impl Rule {
    /// A rule with no prerequisites and an empty recipe.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            prerequisites: Vec::new(),
            recipe: Vec::new(),
        }
    }

    /// Appends prerequisites.
    #[must_use]
    pub fn prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites
            .extend(prerequisites.into_iter().map(Into::into));
        self
    }

    /// Appends one recipe line (without the leading tab).
    #[must_use]
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.recipe.push(line.into());
        self
    }

    /// Target name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Prerequisites in order.
    pub fn prerequisite_list(&self) -> &[String] {
        &self.prerequisites
    }

    /// Recipe lines in order.
    pub fn recipe(&self) -> &[String] {
        &self.recipe
    }

    /// Renders the rule, ending with a newline.
    pub fn render(&self) -> String {
        let mut out = format!("{}:", self.target);
        for prerequisite in &self.prerequisites {
            out.push(' ');
            out.push_str(prerequisite);
        }
        out.push('\n');
        for line in &self.recipe {
            out.push('\t');
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Renders `NAME=value`.
pub fn assignment(name: &str, value: &str) -> String {
    format!("{name}={value}\n")
}
