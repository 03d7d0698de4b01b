//! Structured simulator command line.
//!
//! A [`SimCommand`] is the program plus an ordered list of arguments. It is
//! serialized by [`SimCommand::render`] alone, so quoting and make escaping
//! happen in exactly one place.

use std::borrow::Cow;

/// One element of the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// `--name value`.
    Flag {
        /// Flag without its leading dashes.
        name: String,
        /// Value, quoted on render if needed.
        value: String,
    },
    /// Reference to a make variable, rendered as `${NAME}` and expanded by make at run time.
    Var(String),
}

/// Simulator invocation for one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimCommand {
    program: String,
    args: Vec<Arg>,
}

impl SimCommand {
    /// Starts a command with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends `--name value`.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push(Arg::Flag {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Appends `--name value` when `value` is present.
    #[must_use]
    pub fn flag_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.flag(name, v),
            None => self,
        }
    }

    /// Appends a make variable reference.
    #[must_use]
    pub fn var(mut self, name: impl Into<String>) -> Self {
        self.args.push(Arg::Var(name.into()));
        self
    }

    /// Program being invoked.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments in order.
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Value of the first occurrence of `--name`, if any.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.args.iter().find_map(|arg| match arg {
            Arg::Flag { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Renders the command as one recipe line.
    ///
    /// Words containing shell metacharacters are single-quoted and every `$`
    /// is doubled so make passes it through literally.
    pub fn render(&self) -> String {
        let mut words = vec![escape(&self.program).into_owned()];
        for arg in &self.args {
            match arg {
                Arg::Flag { name, value } => {
                    words.push(format!("--{name}"));
                    words.push(escape(value).into_owned());
                }
                Arg::Var(name) => words.push(format!("${{{name}}}")),
            }
        }
        words.join(" ")
    }
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '+' | '=' | ':' | ',' | '@' | '%')
}

/// Quotes a word for `/bin/sh` and escapes it for a make recipe.
///
/// # Examples
///
/// ```
/// use rvtestgen_core::emit::command::escape;
///
/// assert_eq!(escape("output/nax/dhrystone"), "output/nax/dhrystone");
/// assert_eq!(escape("my image.elf"), "'my image.elf'");
/// assert_eq!(escape("$sym"), "'$$sym'");
/// ```
pub fn escape(word: &str) -> Cow<'_, str> {
    if !word.is_empty() && word.chars().all(is_shell_safe) {
        return Cow::Borrowed(word);
    }
    let quoted = format!("'{}'", word.replace('\'', r"'\''"));
    Cow::Owned(quoted.replace('$', "$$"))
}
