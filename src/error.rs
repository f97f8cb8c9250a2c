use std::fmt;

/// Simple custom Error for the opcode generator
pub struct Error {
    pub kind: ErrorKind,
    /// the document (e.g. "LDA.md") the error originated in, if any
    pub ctx: Option<String>,
    pub msg: String,
    /// every error collected during a build; only populated for ErrorKind::Build
    pub causes: Vec<Error>,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// a document lacks its required Implementation section
    Structural,
    /// an addressing mode label that the registry doesn't support (or has disabled)
    UnsupportedMode,
    /// two rows declare the same opcode byte
    OpcodeConflict,
    /// a table row whose opcode or cycle field can't be parsed
    MalformedRow,
    /// underlying io error
    IO,
    /// aggregate of every error found while building the model
    Build,
}

impl Error {
    pub fn new(kind: ErrorKind, ctx: Option<String>, message: &str) -> Error {
        Error {
            kind,
            ctx,
            msg: String::from(message),
            causes: Vec::new(),
        }
    }
    /// Wraps a list of errors in a single ErrorKind::Build error.
    pub fn build(causes: Vec<Error>) -> Error {
        Error {
            kind: ErrorKind::Build,
            ctx: None,
            msg: format!("build failed with {} error(s)", causes.len()),
            causes,
        }
    }
    /// Count of the leaf errors of the given kind (self included).
    pub fn count_kind(&self, kind: ErrorKind) -> usize {
        let own = usize::from(self.kind == kind);
        own + self.causes.iter().map(|e| e.count_kind(kind)).sum::<usize>()
    }
    /// First leaf error of the given kind (self included).
    #[cfg(test)]
    pub fn find_kind(&self, kind: ErrorKind) -> Option<&Error> {
        if self.kind == kind {
            return Some(self);
        }
        self.causes.iter().find_map(|e| e.find_kind(kind))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self { Error::new(ErrorKind::IO, None, e.to_string().as_str()) }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}: {}", red!("opgen::Error"), self) }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(ctx) = &self.ctx {
            write!(f, "{}: ", ctx)?;
        }
        write!(f, "{}", self.msg)?;
        for cause in &self.causes {
            write!(f, "\n  {}", cause)?;
        }
        Ok(())
    }
}
impl std::error::Error for Error {}
