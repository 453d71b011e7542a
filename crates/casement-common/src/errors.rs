use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Invalid-precondition failures raised by the window registry.
///
/// None of these leave partial state behind: the operation is rejected
/// before anything is mutated.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WindowError {
    #[error("window group '{0}' already exists")]
    DuplicateGroup(String),

    #[error("window group '{0}' not found")]
    UnknownGroup(String),

    #[error("invalid window group name '{0}'")]
    InvalidGroupName(String),

    #[error("layout preset '{0}' not found")]
    UnknownLayoutPreset(String),

    #[error("window preset '{0}' not found")]
    UnknownWindowPreset(String),

    #[error("layout '{0}' not found")]
    UnknownNamedLayout(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("state file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("state encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("path error: {0}")]
    Path(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CasementError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl From<std::io::Error> for CasementError {
    fn from(err: std::io::Error) -> Self {
        CasementError::Persistence(PersistenceError::Io(err))
    }
}

impl From<serde_json::Error> for CasementError {
    fn from(err: serde_json::Error) -> Self {
        CasementError::Persistence(PersistenceError::Json(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("screen.width = 0".into());
        assert_eq!(err.to_string(), "config validation error: screen.width = 0");
    }

    #[test]
    fn window_error_display() {
        let err = WindowError::DuplicateGroup("editors".into());
        assert_eq!(err.to_string(), "window group 'editors' already exists");

        let err = WindowError::UnknownLayoutPreset("spiral".into());
        assert_eq!(err.to_string(), "layout preset 'spiral' not found");

        let err = WindowError::UnknownWindowPreset("kiosk".into());
        assert_eq!(err.to_string(), "window preset 'kiosk' not found");

        let err = WindowError::UnknownNamedLayout("work".into());
        assert_eq!(err.to_string(), "layout 'work' not found");

        let err = WindowError::InvalidGroupName("../x".into());
        assert_eq!(err.to_string(), "invalid window group name '../x'");
    }

    #[test]
    fn casement_error_from_window() {
        let err: CasementError = WindowError::UnknownGroup("g".into()).into();
        assert!(matches!(err, CasementError::Window(WindowError::UnknownGroup(_))));
        assert!(err.to_string().contains("'g'"));
    }

    #[test]
    fn casement_error_from_io_goes_through_persistence() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "state missing");
        let err: CasementError = io_err.into();
        assert!(matches!(err, CasementError::Persistence(PersistenceError::Io(_))));
        assert!(err.to_string().contains("state missing"));
    }

    #[test]
    fn casement_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err: CasementError = json_err.into();
        assert!(matches!(err, CasementError::Persistence(PersistenceError::Json(_))));
    }
}
