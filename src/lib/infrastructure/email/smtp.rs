//! SMTP email service implementation

use std::sync::Arc;

use async_trait::async_trait;
use clap::Parser;
use lettre::{
    message::{Mailbox, SinglePart},
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use crate::domain::{
    communication::mailer::{EmailMessage, Mailer, MailerError},
    configuration::{ConfigProvider, SmtpSettings},
};

/// Port on which the server expects TLS from the first byte
const IMPLICIT_TLS_PORT: u16 = 465;

/// Hosts allowed to receive credentials over an unencrypted connection
const LOOPBACK_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "::1"];

/// How the SMTP session is encrypted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TlsMode {
    /// TLS from the first byte
    Wrapper,
    /// STARTTLS, refusing to continue without it
    Required,
    /// STARTTLS when the server offers it
    Opportunistic,
}

impl TlsMode {
    /// Credentials never travel in cleartext except to a loopback host.
    fn select(host: &str, port: u16, authenticated: bool) -> Self {
        if port == IMPLICIT_TLS_PORT {
            TlsMode::Wrapper
        } else if authenticated && !LOOPBACK_HOSTS.contains(&host) {
            TlsMode::Required
        } else {
            TlsMode::Opportunistic
        }
    }

    fn with(self, parameters: TlsParameters) -> Tls {
        match self {
            TlsMode::Wrapper => Tls::Wrapper(parameters),
            TlsMode::Required => Tls::Required(parameters),
            TlsMode::Opportunistic => Tls::Opportunistic(parameters),
        }
    }
}

/// SMTP settings given on the command line or in the environment
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpOptions {
    /// The SMTP host
    #[clap(long = "smtp-host", env = "SMTP_HOST", default_value = "")]
    pub host: String,

    /// The SMTP port, 587 when omitted
    #[clap(long = "smtp-port", env = "SMTP_PORT")]
    pub port: Option<u16>,

    /// The SMTP user
    #[clap(long = "smtp-userid", env = "SMTP_USERID", default_value = "")]
    pub userid: String,

    /// The SMTP password
    #[clap(
        long = "smtp-password",
        env = "SMTP_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// The sender email address
    #[clap(long = "smtp-sender", env = "SMTP_SENDER", default_value = "")]
    pub sender: String,
}

/// SMTP mailer
///
/// Settings are resolved from the [`ConfigProvider`] for every email and each
/// email opens its own SMTP session.
#[derive(Debug, Clone)]
pub struct SmtpMailer<C>
where
    C: ConfigProvider,
{
    config: Arc<C>,
}

impl<C> SmtpMailer<C>
where
    C: ConfigProvider,
{
    /// Create a new SMTP mailer
    pub fn new(config: Arc<C>) -> Self {
        Self { config }
    }

    /// Builds a transport from the current settings, authenticating with
    /// PLAIN when a user is configured. An authenticated session to anything
    /// but a loopback host must be encrypted.
    pub fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, MailerError> {
        let settings = SmtpSettings::new(self.config.as_ref());

        let host = settings.host();

        if host.is_empty() {
            return Err(MailerError::Configuration("SMTP host is not set".to_string()));
        }

        let port = settings.port();
        let port: u16 = port
            .parse()
            .map_err(|_| MailerError::Configuration(format!("SMTP port {port:?} is not a number")))?;

        let parameters = TlsParameters::new(host.clone())
            .map_err(|e| MailerError::Configuration(e.to_string()))?;

        let userid = settings.userid();
        let tls = TlsMode::select(&host, port, !userid.is_empty());

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host.as_str())
            .port(port)
            .tls(tls.with(parameters))
            .authentication(vec![Mechanism::Plain]);

        if !userid.is_empty() {
            builder = builder.credentials(Credentials::new(userid, settings.password()));
        }

        debug!("opening SMTP session to {host}:{port} ({tls:?})");

        Ok(builder.build())
    }
}

/// Converts an [`EmailMessage`] into a single-part HTML [`Message`]
pub fn build_message(message: &EmailMessage) -> Result<Message, MailerError> {
    let mut builder = Message::builder()
        .from(message.from.parse::<Mailbox>()?)
        .subject(message.subject.as_str());

    for to in &message.to {
        builder = builder.to(to.as_str().parse::<Mailbox>()?);
    }

    Ok(builder.singlepart(SinglePart::html(message.html.clone()))?)
}

#[async_trait]
impl<C> Mailer for SmtpMailer<C>
where
    C: ConfigProvider,
{
    async fn send_email(&self, message: &EmailMessage) -> Result<(), MailerError> {
        let email = build_message(message)?;

        match self.transport()?.send(email).await {
            Ok(_) => Ok(()),
            Err(e) => Err(MailerError::SendError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::communication::email_addresses::EmailAddress,
        infrastructure::config::MemoryConfig,
    };

    use super::*;

    fn message(from: &str) -> EmailMessage {
        EmailMessage::new(
            from.to_string(),
            EmailAddress::new_unchecked("alice@example.com"),
            "Documize password reset request".to_string(),
            "<p>https://x/reset/abc123</p>".to_string(),
        )
    }

    fn mailer(config: MemoryConfig) -> SmtpMailer<MemoryConfig> {
        SmtpMailer::new(Arc::new(config))
    }

    #[test]
    fn test_build_message_headers() -> TestResult {
        let email = build_message(&message("Documize <hello@documize.com>"))?;
        let formatted = String::from_utf8(email.formatted())?;

        assert!(formatted.contains("From: Documize <hello@documize.com>"));
        assert!(formatted.contains("To: alice@example.com"));
        assert!(formatted.contains("Subject: Documize password reset request"));
        assert!(formatted.contains("Content-Type: text/html"));

        Ok(())
    }

    #[test]
    fn test_build_message_rejects_missing_sender() {
        let result = build_message(&message(""));

        assert!(matches!(result, Err(MailerError::InvalidAddress)));
    }

    #[test]
    fn test_build_message_without_recipients_fails() {
        let mut empty = message("hello@documize.com");
        empty.to.clear();

        let result = build_message(&empty);

        assert!(matches!(result, Err(MailerError::MessageBuild(_))));
    }

    #[test]
    fn test_transport_requires_host() {
        let result = mailer(MemoryConfig::default()).transport();

        assert!(matches!(result, Err(MailerError::Configuration(_))));
    }

    #[test]
    fn test_transport_rejects_non_numeric_port() {
        let config = MemoryConfig::default()
            .with("SMTP", "host", "smtp.example.com")
            .with("SMTP", "port", "submission");

        let result = mailer(config).transport();

        assert!(matches!(result, Err(MailerError::Configuration(msg)) if msg.contains("submission")));
    }

    #[tokio::test]
    async fn test_transport_with_default_port() {
        let config = MemoryConfig::default()
            .with("SMTP", "host", "smtp.example.com")
            .with("SMTP", "userid", "documize")
            .with("SMTP", "password", "secret");

        assert!(mailer(config).transport().is_ok());
    }

    #[test]
    fn test_credentials_require_tls_on_remote_hosts() {
        assert_eq!(TlsMode::select("smtp.example.com", 587, true), TlsMode::Required);
        assert_eq!(TlsMode::select("smtp.example.com", 25, true), TlsMode::Required);
    }

    #[test]
    fn test_credentials_may_skip_tls_on_loopback() {
        for host in ["localhost", "127.0.0.1", "::1"] {
            assert_eq!(TlsMode::select(host, 587, true), TlsMode::Opportunistic);
        }
    }

    #[test]
    fn test_anonymous_sessions_use_opportunistic_tls() {
        assert_eq!(TlsMode::select("smtp.example.com", 587, false), TlsMode::Opportunistic);
    }

    #[test]
    fn test_implicit_tls_port_wraps_the_connection() {
        assert_eq!(TlsMode::select("smtp.example.com", 465, true), TlsMode::Wrapper);
        assert_eq!(TlsMode::select("localhost", 465, false), TlsMode::Wrapper);
    }

    #[tokio::test]
    async fn test_send_email_with_invalid_sender_does_not_connect() {
        let config = MemoryConfig::default().with("SMTP", "host", "smtp.invalid");

        let result = mailer(config).send_email(&message("not an address")).await;

        assert!(matches!(result, Err(MailerError::InvalidAddress)));
    }

    #[tokio::test]
    async fn test_send_email_without_host_fails() {
        let result = mailer(MemoryConfig::default())
            .send_email(&message("hello@documize.com"))
            .await;

        assert!(matches!(result, Err(MailerError::Configuration(_))));
    }
}
