//! Templates read from a directory on disk

use std::{
    fs, io,
    path::{Component, Path, PathBuf},
};

use tracing::debug;

use crate::domain::notifications::templates::{TemplateSource, TemplateSourceError};

/// Reads templates from `<root>/<logical path>`, e.g. to brand the emails
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    root: PathBuf,
}

impl DirectoryTemplates {
    /// Creates a source rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, TemplateSourceError> {
        let relative = Path::new(path);

        if path.is_empty() || !relative.components().all(|c| matches!(c, Component::Normal(_))) {
            return Err(TemplateSourceError::InvalidPath(path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

impl TemplateSource for DirectoryTemplates {
    fn read_file(&self, path: &str) -> Result<Vec<u8>, TemplateSourceError> {
        let file = self.resolve(path)?;

        debug!("reading template {}", file.display());

        fs::read(&file).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => TemplateSourceError::NotFound(path.to_string()),
            _ => TemplateSourceError::Io(err),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::notifications::templates::PASSWORD_RESET;

    use super::*;

    fn source() -> DirectoryTemplates {
        DirectoryTemplates::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
    }

    #[test]
    fn test_reads_template_from_root() -> TestResult {
        let template = source().read_to_string(PASSWORD_RESET)?;

        assert!(template.contains("{{ Url }}"));

        Ok(())
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let result = source().read_file("mail/missing.html");

        assert!(matches!(result, Err(TemplateSourceError::NotFound(_))));
    }

    #[test]
    fn test_paths_cannot_escape_root() {
        for path in ["../Cargo.toml", "/etc/passwd", "mail/../../Cargo.toml", ""] {
            let result = source().read_file(path);

            assert!(
                matches!(result, Err(TemplateSourceError::InvalidPath(_))),
                "{path} was accepted"
            );
        }
    }
}
