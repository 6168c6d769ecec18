//! Outgoing mail.
//!
//! The `Mailer` delivers plain-text letters either through an SMTP relay or, for
//! development, by writing them to the log. Tests swap in an in-memory outbox.

use std::sync::Arc;

#[cfg(test)]
use std::sync::Mutex;

use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};

use crate::server::{
    config::{EmailBackend, EmailConfig},
    error::mail::MailError,
};

/// A letter as handed to the mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Clone)]
enum Transport {
    Console,
    Smtp(Arc<AsyncSmtpTransport<Tokio1Executor>>),
    #[cfg(test)]
    Memory(Arc<Mutex<Vec<Letter>>>),
}

#[derive(Clone)]
pub struct Mailer {
    from: String,
    transport: Transport,
}

impl Mailer {
    /// Builds the mailer selected by `EMAIL_BACKEND`.
    ///
    /// The SMTP transport connects lazily, so an unreachable relay only shows up
    /// as a delivery error.
    pub fn from_config(config: &EmailConfig) -> Self {
        let transport = match config.backend {
            EmailBackend::Console => Transport::Console,
            EmailBackend::Smtp => {
                let mut builder =
                    AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                        .port(config.port);
                if let (Some(username), Some(password)) = (&config.username, &config.password) {
                    builder =
                        builder.credentials(Credentials::new(username.clone(), password.clone()));
                }

                Transport::Smtp(Arc::new(builder.build()))
            }
        };

        Self {
            from: config.from_address.clone(),
            transport,
        }
    }

    /// Mailer that records letters instead of sending them.
    #[cfg(test)]
    pub fn in_memory(from: &str) -> (Self, Arc<Mutex<Vec<Letter>>>) {
        let outbox = Arc::new(Mutex::new(Vec::new()));
        let mailer = Self {
            from: from.to_string(),
            transport: Transport::Memory(outbox.clone()),
        };

        (mailer, outbox)
    }

    /// Sends one plain-text letter.
    pub async fn send(&self, letter: Letter) -> Result<(), MailError> {
        match &self.transport {
            Transport::Console => {
                tracing::info!(
                    to = %letter.to,
                    subject = %letter.subject,
                    "Email (console backend):\n{}",
                    letter.body
                );
            }
            Transport::Smtp(transport) => {
                let message = Message::builder()
                    .from(self.from.parse::<Mailbox>()?)
                    .to(letter.to.parse::<Mailbox>()?)
                    .subject(letter.subject)
                    .body(letter.body)?;

                transport.send(message).await?;
            }
            #[cfg(test)]
            Transport::Memory(outbox) => {
                if let Ok(mut outbox) = outbox.lock() {
                    outbox.push(letter);
                }
            }
        }

        Ok(())
    }
}
