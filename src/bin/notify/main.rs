#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Sends a single Documize notification email

use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::{Parser, Subcommand};
use documize_mailer::{
    domain::notifications::{templates::TemplateSource, NotificationService, NotificationServiceImpl},
    infrastructure::{
        assets::{DirectoryTemplates, EmbeddedTemplates},
        config::MemoryConfig,
        email::smtp::{SmtpMailer, SmtpOptions},
    },
};
use tracing_subscriber::EnvFilter;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
#[command(about = "Send a Documize notification email")]
pub struct Args {
    /// The SMTP server settings
    #[clap(flatten)]
    pub smtp: SmtpOptions,

    /// Directory holding `mail/*.html` templates; the built-in templates are used when omitted
    #[clap(long, env = "TEMPLATE_DIR")]
    pub template_dir: Option<PathBuf>,

    /// The notification to send
    #[command(subcommand)]
    pub command: Command,
}

/// Notifications that can be sent
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Invite someone new, including their credentials
    InviteNewUser {
        /// Recipient address
        recipient: String,
        /// Link to sign in with
        url: String,
        /// Initial password
        password: String,
        /// Name of the inviting user
        #[clap(long, default_value = "")]
        inviter: String,
        /// Username, the recipient address when omitted
        #[clap(long, default_value = "")]
        username: String,
    },

    /// Invite an existing user to an organization
    InviteExistingUser {
        /// Recipient address
        recipient: String,
        /// Link to the organization
        url: String,
        /// Name of the inviting user
        #[clap(long, default_value = "")]
        inviter: String,
    },

    /// Send a password reset link
    PasswordReset {
        /// Recipient address
        recipient: String,
        /// Reset link
        url: String,
    },

    /// Tell an existing user about a shared folder
    ShareFolderExistingUser {
        /// Recipient address
        recipient: String,
        /// Link to the folder
        url: String,
        /// Folder name
        folder: String,
        /// Name of the sharing user
        #[clap(long, default_value = "")]
        inviter: String,
        /// Personal note
        #[clap(long, default_value = "")]
        intro: String,
    },

    /// Invite a new user to a shared folder
    ShareFolderNewUser {
        /// Recipient address
        recipient: String,
        /// Link to the folder
        url: String,
        /// Folder name
        folder: String,
        /// Name of the sharing user
        #[clap(long, default_value = "")]
        inviter: String,
        /// Invitation message
        #[clap(long, default_value = "")]
        invitation: String,
    },
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = Arc::new(MemoryConfig::from(args.smtp));

    match args.template_dir {
        Some(dir) => send(DirectoryTemplates::new(dir), config, args.command).await,
        None => send(EmbeddedTemplates, config, args.command).await,
    }
}

#[mutants::skip]
async fn send<T: TemplateSource>(templates: T, config: Arc<MemoryConfig>, command: Command) -> Result<()> {
    let mailer = SmtpMailer::new(config.clone());
    let service = NotificationServiceImpl::new(Arc::new(templates), config, Arc::new(mailer));

    match command {
        Command::InviteNewUser {
            recipient,
            url,
            password,
            inviter,
            username,
        } => {
            service
                .invite_new_user(&recipient, &inviter, &url, &username, &password)
                .await?
        }
        Command::InviteExistingUser {
            recipient,
            url,
            inviter,
        } => service.invite_existing_user(&recipient, &inviter, &url).await?,
        Command::PasswordReset { recipient, url } => service.password_reset(&recipient, &url).await?,
        Command::ShareFolderExistingUser {
            recipient,
            url,
            folder,
            inviter,
            intro,
        } => {
            service
                .share_folder_existing_user(&recipient, &inviter, &url, &folder, &intro)
                .await?
        }
        Command::ShareFolderNewUser {
            recipient,
            url,
            folder,
            inviter,
            invitation,
        } => {
            service
                .share_folder_new_user(&recipient, &inviter, &url, &folder, &invitation)
                .await?
        }
    }

    Ok(())
}
