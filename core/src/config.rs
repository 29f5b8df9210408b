/// Settings for a single [`Scanner`](crate::lexer::scanner::Scanner).
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    echo_diagnostics: bool,
}

impl ScannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether fatal errors are written to stderr as they are detected.
    pub fn with_echo_diagnostics(mut self, echo: bool) -> Self {
        self.echo_diagnostics = echo;
        self
    }

    pub fn echo_diagnostics(&self) -> bool {
        self.echo_diagnostics
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            echo_diagnostics: true,
        }
    }
}
