//! Errors raised while assembling the scene at startup.
use std::{fmt, io};

/// Everything that can stop the scene from loading.
///
/// All of these are raised before the app starts; none are recoverable.
#[derive(Debug)]
pub enum SceneLoadError {
    Io { path: String, source: io::Error },
    Parse { path: String, message: String },
    MissingObjectLayer { layer: String },
    MissingSpawn { layer: String },
    MissingTrigger { name: String, layer: String },
    UnknownSequence { referrer: String, sequence: String },
}

impl SceneLoadError {
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Failed to read map {}: {}", path, source),
            Self::Parse { path, message } => write!(f, "Failed to parse map {}: {}", path, message),
            Self::MissingObjectLayer { layer } => {
                write!(f, "Map has no object layer named '{}'", layer)
            }
            Self::MissingSpawn { layer } => {
                write!(f, "Object layer '{}' has no 'spawn' object", layer)
            }
            Self::MissingTrigger { name, layer } => {
                write!(
                    f,
                    "Object layer '{}' has no trigger object named '{}'",
                    layer, name
                )
            }
            Self::UnknownSequence { referrer, sequence } => {
                write!(
                    f,
                    "'{}' refers to unknown dialogue sequence '{}'",
                    referrer, sequence
                )
            }
        }
    }
}

impl std::error::Error for SceneLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_object() {
        let spawn = SceneLoadError::MissingSpawn {
            layer: "objects".to_string(),
        };
        assert!(spawn.to_string().contains("'spawn'"));

        let trigger = SceneLoadError::MissingTrigger {
            name: "dialogue3".to_string(),
            layer: "objects".to_string(),
        };
        assert!(trigger.to_string().contains("dialogue3"));

        let io = SceneLoadError::io(
            "maps/none.json",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(std::error::Error::source(&io).is_some());
        assert!(io.to_string().contains("maps/none.json"));
    }
}
