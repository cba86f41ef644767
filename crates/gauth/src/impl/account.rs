use iso8601_timestamp::Timestamp;

use crate::{
    models::{Secret, TwoFactorAccount, TwoFactorState, Verification, MAX_ATTEMPTS},
    Error, GAuth, GAuthEvent, Result, Success,
};

impl TwoFactorAccount {
    /// Create an account without two-factor authentication
    pub fn new(id: impl Into<String>) -> TwoFactorAccount {
        TwoFactorAccount {
            id: id.into(),
            secret: None,
            activated: false,
            remaining_attempts: MAX_ATTEMPTS,
            enrolled_at: None,
        }
    }

    /// Save model
    pub async fn save(&self, gauth: &GAuth) -> Success {
        gauth.database.save_account(self).await
    }

    /// Secret, if two-factor authentication is enabled
    fn enabled_secret(&self) -> Option<&Secret> {
        self.secret.as_ref().filter(|secret| !secret.is_empty())
    }

    /// Whether two-factor authentication is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled_secret().is_some()
    }

    /// Current two-factor state
    pub fn state(&self) -> TwoFactorState {
        if !self.is_enabled() {
            TwoFactorState::Disabled
        } else if self.remaining_attempts == 0 {
            TwoFactorState::LockedOut
        } else {
            TwoFactorState::Active
        }
    }

    /// Enroll the account with a freshly generated secret
    ///
    /// Any existing secret is replaced and the attempt counter reset. The
    /// account is not saved.
    pub async fn enroll(&mut self, gauth: &GAuth) -> Success {
        let secret = gauth.authenticator.generate_secret()?;
        if secret.is_empty() {
            return Err(Error::InvalidSecret);
        }

        self.secret = Some(Secret::new(secret));
        self.activated = false;
        self.remaining_attempts = MAX_ATTEMPTS;
        self.enrolled_at = Some(Timestamp::now_utc());

        info!("Enrolled {} in two-factor authentication", self.id);

        gauth
            .publish_event(GAuthEvent::Enrolled {
                account_id: self.id.clone(),
            })
            .await;

        Ok(())
    }

    /// URL rendering the secret as a QR code
    ///
    /// `None` if the account is not enrolled.
    pub fn provisioning_url(&self, gauth: &GAuth, display_name: &str) -> Result<Option<String>> {
        match self.enabled_secret() {
            Some(secret) => gauth
                .authenticator
                .provisioning_url(&gauth.config.totp, display_name, secret.expose())
                .map(Some),
            None => Ok(None),
        }
    }

    /// Provisioning URL labelled with the configured application name
    pub fn qr_code_url(&self, gauth: &GAuth) -> Result<Option<String>> {
        self.provisioning_url(gauth, &gauth.config.qr_code.label)
    }

    /// Fetch the QR code image as a data URI
    pub async fn qr_code_data_uri(&self, gauth: &GAuth) -> Result<String> {
        let url = self.qr_code_url(gauth)?.ok_or(Error::TotpDisabled)?;
        gauth.config.qr_code.fetch_data_uri(&url).await
    }

    /// Check a submitted code and update the attempt counter
    ///
    /// Accounts without a secret always pass and locked out accounts always
    /// fail, neither touches the authenticator or the database. Otherwise
    /// the updated counter is saved before returning.
    ///
    /// This is a plain read-modify-write of the model, see
    /// [`GAuth::verify_account`] for attempts that must not race.
    pub async fn attempt(&mut self, gauth: &GAuth, code: Option<&str>) -> Result<Verification> {
        if !self.is_enabled() {
            return Ok(Verification::Disabled);
        }

        // counters stored out of range
        self.remaining_attempts = self.remaining_attempts.min(MAX_ATTEMPTS);

        if self.remaining_attempts == 0 {
            warn!("Rejected code for {}, account is locked out", self.id);

            gauth
                .publish_event(GAuthEvent::LockedOut {
                    account_id: self.id.clone(),
                })
                .await;

            return Ok(Verification::LockedOut);
        }

        let secret = self.enabled_secret().ok_or(Error::TotpDisabled)?;
        let verified = gauth.authenticator.verify(
            &gauth.config.totp,
            secret.expose(),
            code.unwrap_or_default(),
        )?;

        let (verification, event) = if verified {
            self.remaining_attempts = MAX_ATTEMPTS;

            debug!("Accepted code for {}", self.id);

            (
                Verification::Accepted,
                GAuthEvent::Verified {
                    account_id: self.id.clone(),
                },
            )
        } else {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);

            warn!(
                "Rejected code for {}, {} attempts left",
                self.id, self.remaining_attempts
            );

            (
                Verification::Rejected {
                    remaining_attempts: self.remaining_attempts,
                },
                GAuthEvent::VerificationFailed {
                    account_id: self.id.clone(),
                    remaining_attempts: self.remaining_attempts,
                },
            )
        };

        self.save(gauth).await?;
        gauth.publish_event(event).await;

        Ok(verification)
    }

    /// Verify a code generated by the user's authenticator app
    pub async fn verify_code(&mut self, gauth: &GAuth, code: Option<&str>) -> Result<bool> {
        self.attempt(gauth, code)
            .await
            .map(|verification| verification.is_success())
    }

    /// Mark the account as activated if the code verifies
    ///
    /// Every call overwrites the flag with the verification result. The flag
    /// is saved when it changes on an enrolled account; accounts without a
    /// secret are only updated in memory.
    pub async fn activate(&mut self, gauth: &GAuth, code: Option<&str>) -> Result<&mut Self> {
        let activated = self.verify_code(gauth, code).await?;

        if self.activated != activated {
            self.activated = activated;

            if self.is_enabled() {
                self.save(gauth).await?;
            }
        }

        Ok(self)
    }
}
