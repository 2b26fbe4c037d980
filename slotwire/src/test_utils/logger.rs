/// A named logger component. Two loggers with the same name are still
/// distinct components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Create a logger with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The logger's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
