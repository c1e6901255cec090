//! Template sources

use std::io;

use thiserror::Error;

#[cfg(test)]
use mockall::mock;

/// Errors that can occur when reading a template
#[derive(Debug, Error)]
pub enum TemplateSourceError {
    /// No template exists at the logical path
    #[error("template {0:?} not found")]
    NotFound(String),

    /// The logical path is not allowed, e.g. it escapes the asset root
    #[error("template path {0:?} is invalid")]
    InvalidPath(String),

    /// The template exists but could not be read
    #[error("unable to read template: {0}")]
    Io(#[from] io::Error),
}

/// A provider of raw template files
pub trait TemplateSource: Clone + Send + Sync + 'static {
    /// Reads a template.
    ///
    /// # Arguments
    /// * `path` - The logical path of the template, e.g. `mail/password-reset.html`.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] containing the raw template bytes,
    /// or an [`Err`] containing a [`TemplateSourceError`] if it cannot be read.
    fn read_file(&self, path: &str) -> Result<Vec<u8>, TemplateSourceError>;

    /// Reads a template as UTF-8 text.
    fn read_to_string(&self, path: &str) -> Result<String, TemplateSourceError> {
        let bytes = self.read_file(path)?;

        String::from_utf8(bytes)
            .map_err(|err| TemplateSourceError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
    }
}

#[cfg(test)]
mock! {
    pub TemplateSource {}

    impl Clone for TemplateSource {
        fn clone(&self) -> Self;
    }

    impl TemplateSource for TemplateSource {
        fn read_file(&self, path: &str) -> Result<Vec<u8>, TemplateSourceError>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_to_string_decodes_utf8() {
        let mut source = MockTemplateSource::new();

        source
            .expect_read_file()
            .returning(|_| Ok("<p>Grüße {{ Inviter }}</p>".as_bytes().to_vec()));

        let text = source.read_to_string("mail/any.html");

        assert!(matches!(text, Ok(t) if t == "<p>Grüße {{ Inviter }}</p>"));
    }

    #[test]
    fn test_read_to_string_rejects_invalid_utf8() {
        let mut source = MockTemplateSource::new();

        source.expect_read_file().returning(|_| Ok(vec![0xff, 0xfe, 0x00]));

        let result = source.read_to_string("mail/any.html");

        assert!(matches!(result, Err(TemplateSourceError::Io(e)) if e.kind() == io::ErrorKind::InvalidData));
    }
}
