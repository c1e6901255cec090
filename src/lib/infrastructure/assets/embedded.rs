//! Templates compiled into the binary

use crate::domain::notifications::templates::{
    TemplateSource, TemplateSourceError, INVITE_EXISTING_USER, INVITE_NEW_USER, PASSWORD_RESET,
    SHARE_FOLDER_EXISTING_USER, SHARE_FOLDER_NEW_USER,
};

macro_rules! asset {
    ($file:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $file))
    };
}

/// The stock Documize email templates
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    fn lookup(path: &str) -> Option<&'static str> {
        let template = match path {
            INVITE_NEW_USER => asset!("mail/invite-new-user.html"),
            INVITE_EXISTING_USER => asset!("mail/invite-existing-user.html"),
            PASSWORD_RESET => asset!("mail/password-reset.html"),
            SHARE_FOLDER_EXISTING_USER => asset!("mail/share-folder-existing-user.html"),
            SHARE_FOLDER_NEW_USER => asset!("mail/share-folder-new-user.html"),
            _ => return None,
        };

        Some(template)
    }
}

impl TemplateSource for EmbeddedTemplates {
    fn read_file(&self, path: &str) -> Result<Vec<u8>, TemplateSourceError> {
        Self::lookup(path)
            .map(|template| template.as_bytes().to_vec())
            .ok_or_else(|| TemplateSourceError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::notifications::templates::ALL;

    use super::*;

    #[test]
    fn test_every_template_is_embedded() -> TestResult {
        for path in ALL {
            let template = EmbeddedTemplates.read_to_string(path)?;

            assert!(template.contains("{{ Subject }}"), "{path} has no subject");
            assert!(template.contains("{{ Url }}"), "{path} has no link");
        }

        Ok(())
    }

    #[test]
    fn test_unknown_template_is_not_found() {
        let result = EmbeddedTemplates.read_file("mail/welcome.html");

        assert!(matches!(result, Err(TemplateSourceError::NotFound(path)) if path == "mail/welcome.html"));
    }
}
