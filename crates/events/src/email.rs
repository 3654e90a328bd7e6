//! SMTP delivery of rental notifications.
//!
//! [`EmailNotifier`] builds one `lettre` STARTTLS transport at startup and
//! reuses it for every message. When `SMTP_HOST` is unset the server never
//! builds one and uses [`LogNotifier`](crate::LogNotifier) instead.

use async_trait::async_trait;
use camquest_core::rental::request_reference;
use camquest_db::models::camera::Camera;
use camquest_db::models::rental_request::RentalRequest;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::message::{admin_notification, customer_confirmation, RenderedEmail};
use crate::notifier::RentalNotifier;

#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// Connecting, authenticating or sending failed.
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),
}

const SMTP_SUBMISSION_PORT: u16 = 587;
const FALLBACK_SENDER: &str = "CamQuest <noreply@camquest.local>";

/// SMTP relay settings read from `SMTP_*` environment variables.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Sender mailbox, either `addr@host` or `Name <addr@host>`.
    pub sender: String,
    /// `(user, password)`; only used when both are set.
    pub credentials: Option<(String, String)>,
}

impl EmailConfig {
    /// `None` when `SMTP_HOST` is unset, meaning email is disabled.
    ///
    /// `SMTP_PORT` defaults to 587 and `SMTP_FROM` to
    /// `CamQuest <noreply@camquest.local>`. An unparseable port also falls
    /// back to 587.
    pub fn from_env() -> Option<Self> {
        let env = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let smtp_host = env("SMTP_HOST")?;
        let smtp_port = env("SMTP_PORT")
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(SMTP_SUBMISSION_PORT);
        let sender = env("SMTP_FROM").unwrap_or_else(|| FALLBACK_SENDER.to_string());
        let credentials = env("SMTP_USER").zip(env("SMTP_PASSWORD"));

        Some(Self {
            smtp_host,
            smtp_port,
            sender,
            credentials,
        })
    }
}

/// Sends the admin notification and then the customer confirmation.
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    admin: Mailbox,
}

impl EmailNotifier {
    /// Validate both mailboxes and build the relay transport. No connection
    /// is opened until the first send.
    ///
    /// `admin_email` receives new-request notifications and is quoted to
    /// customers as the contact address.
    pub fn new(config: EmailConfig, admin_email: &str) -> Result<Self, EmailError> {
        let sender: Mailbox = config.sender.parse()?;
        let admin: Mailbox = admin_email.parse()?;

        let mut relay = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);
        if let Some((user, password)) = config.credentials {
            relay = relay.credentials(Credentials::new(user, password));
        }

        Ok(Self {
            transport: relay.build(),
            sender,
            admin,
        })
    }

    fn compose(&self, to: Mailbox, email: RenderedEmail) -> Result<Message, EmailError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(email.text, email.html))?;
        Ok(message)
    }

    async fn send(&self, to: Mailbox, email: RenderedEmail) -> Result<(), EmailError> {
        let subject = email.subject.clone();
        let recipient = to.email.to_string();

        let message = self.compose(to, email)?;
        self.transport.send(message).await?;

        tracing::info!(to = %recipient, %subject, "Notification email sent");
        Ok(())
    }
}

#[async_trait]
impl RentalNotifier for EmailNotifier {
    async fn notify_rental_created(&self, rental: &RentalRequest, camera: &Camera) -> bool {
        let reference = request_reference(rental.id);

        let admin_email = admin_notification(rental, camera);
        if let Err(e) = self.send(self.admin.clone(), admin_email).await {
            tracing::error!(error = %e, %reference, "Admin notification failed");
            return false;
        }

        // The admin notification is what counts; the confirmation is a
        // courtesy.
        let contact = self.admin.email.to_string();
        let confirmation = customer_confirmation(rental, camera, &contact);
        let outcome = match rental.customer_email.parse::<Mailbox>() {
            Ok(customer) => self.send(customer, confirmation).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = outcome {
            tracing::warn!(
                error = %e,
                %reference,
                to = %rental.customer_email,
                "Customer confirmation failed",
            );
        }

        true
    }
}
