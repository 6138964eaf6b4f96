pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use lazy_static::lazy_static;
#[cfg(test)]
use mockall::automock;
use regex::Regex;

use {error::*, models::*};


pub const NAME_MIN_LEN: usize = 2;
pub const PASSWORD_MIN_LEN: usize = 6;

pub const NAME_TOO_SHORT_MSG: &str = "Name must be at least 2 characters";
pub const INVALID_EMAIL_MSG: &str = "Invalid email address";
pub const PASSWORD_TOO_SHORT_MSG: &str = "Password must be at least 6 characters";
pub const PASSWORD_MISMATCH_MSG: &str = "Passwords do not match";

lazy_static! {
    // ASCII letters only
    // Leading dots and consecutive dots are rejected separately in `is_valid_email`
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$"
    ).unwrap();
}

pub type DynProfileFormValidator = Arc<dyn ProfileFormValidator + Send + Sync>;

#[cfg_attr(test, automock)]
pub trait ProfileFormValidator {
    /// Checks a submitted profile form, returning it unchanged when valid or
    /// every violated field, in rule order, when not.
    fn validate(&self, input: ProfileFormInput) -> Result<ProfileFormInput>;
}

pub struct CoreProfileFormValidator;

impl CoreProfileFormValidator {
    pub fn new_dyn() -> DynProfileFormValidator {
        Arc::new(Self)
    }
}

impl ProfileFormValidator for CoreProfileFormValidator {
    fn validate(&self, input: ProfileFormInput) -> Result<ProfileFormInput> {
        let mut errors = Vec::new();

        if input.name.chars().count() < NAME_MIN_LEN {
            errors.push(FieldError::new(ProfileField::Name, NAME_TOO_SHORT_MSG));
        }

        if !is_valid_email(&input.email) {
            errors.push(FieldError::new(ProfileField::Email, INVALID_EMAIL_MSG));
        }

        // Only constrained when the user is changing their password
        if let Some(password) = input.new_password() {
            if password.chars().count() < PASSWORD_MIN_LEN {
                errors.push(FieldError::new(ProfileField::Password, PASSWORD_TOO_SHORT_MSG));
            }

            let confirmed = input.confirm_password.as_deref()
                .is_some_and(|confirm| !confirm.is_empty() && confirm == password);
            if !confirmed {
                errors.push(FieldError::new(ProfileField::ConfirmPassword, PASSWORD_MISMATCH_MSG));
            }
        }

        if errors.is_empty() { Ok(input) } else { Err(Error::InvalidForm(errors)) }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}
