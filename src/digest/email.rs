//! Email sender using SMTP with STARTTLS.

use anyhow::{Context, Result};
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::JobConfig;

/// Email sender for job digests.
pub struct EmailSender {
    config: JobConfig,
}

impl EmailSender {
    /// Create a new email sender with the given configuration.
    #[must_use]
    pub const fn new(config: JobConfig) -> Self {
        Self { config }
    }

    /// Send an HTML email. The message carries a single `text/html` part.
    ///
    /// Blocks (asynchronously) for the whole SMTP exchange; any connection,
    /// handshake, authentication or submission failure surfaces as an error.
    pub async fn send(&self, subject: &str, html_body: &str) -> Result<()> {
        let from: Mailbox = self
            .config
            .email_user
            .parse()
            .context("Invalid sender email address")?;

        let to: Mailbox = self
            .config
            .recipient
            .parse()
            .context("Invalid recipient email address")?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .multipart(
                MultiPart::alternative().singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_body.to_string()),
                ),
            )
            .context("Failed to build email message")?;

        // STARTTLS on the submission port, authenticated with the sender login
        let creds = Credentials::new(
            self.config.email_user.clone(),
            self.config.email_pass.clone(),
        );

        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
                .context("Failed to create SMTP transport")?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build();

        mailer
            .send(email)
            .await
            .context("Failed to send email via SMTP")?;

        tracing::info!(
            to = %self.config.recipient,
            subject = subject,
            "Email sent successfully"
        );

        Ok(())
    }
}
