//! Client-side form validation and submission gating.
//!
//! A form that fails [`Validate::validate`] never produces a request: the
//! only way to reach the network from a form is [`submit_if_valid`].

use std::collections::BTreeMap;

use crate::{
    models::{ArticlePayload, CategoryPayload, Credentials},
    text::plain_text,
};

/// Field name → message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    /// Record `message` for `field`; the first message per field wins.
    pub fn add(&mut self, field: &'static str, message: &str) {
        self.0.entry(field).or_insert_with(|| message.to_string());
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// A form schema.
pub trait Validate {
    /// Check every field; `Err` carries one message per failing field.
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// Run `send` only when `form` validates.
pub fn submit_if_valid<F, R>(form: &F, send: impl FnOnce() -> R) -> Result<R, FieldErrors>
where
    F: Validate + ?Sized,
{
    form.validate()?;
    Ok(send())
}

/// `POST /auth/login` form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Login name.
    pub username: String,
    /// Password.
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.username.is_empty() {
            errors.add("username", "Please enter your username");
        }
        if self.password.is_empty() {
            errors.add("password", "Please enter your password");
        }
        errors.into_result()
    }
}

impl LoginForm {
    /// Request body.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
            role: None,
        }
    }
}

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// `POST /auth/register` form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    /// Login name.
    pub username: String,
    /// Password, at least [`MIN_PASSWORD_LEN`] characters.
    pub password: String,
    /// Requested role; optional.
    pub role: Option<String>,
}

impl Validate for RegisterForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.username.is_empty() {
            errors.add("username", "Username field cannot be empty");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add("password", "Password must be at least 8 characters long");
        }
        errors.into_result()
    }
}

impl RegisterForm {
    /// Request body.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
            role: self.role.clone().filter(|role| !role.is_empty()),
        }
    }
}

/// Article create/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleForm {
    /// Headline.
    pub title: String,
    /// Selected category id.
    pub category_id: String,
    /// HTML body.
    pub content: String,
    /// Uploaded cover image URL.
    pub image_url: Option<String>,
}

impl Validate for ArticleForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.title.trim().is_empty() {
            errors.add("title", "Please enter title");
        }
        if self.category_id.is_empty() {
            errors.add("category_id", "Please select category");
        }
        if plain_text(&self.content).is_empty() {
            errors.add("content", "Content field cannot be empty");
        }
        if self.image_url.as_deref().map_or(true, |url| url.trim().is_empty()) {
            errors.add("image_url", "Please enter picture");
        }
        errors.into_result()
    }
}

impl ArticleForm {
    /// Request body; call after [`Validate::validate`] succeeded.
    pub fn payload(&self) -> ArticlePayload {
        ArticlePayload {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            category_id: self.category_id.clone(),
            image_url: self.image_url.clone().unwrap_or_default(),
        }
    }
}

/// Category add/rename form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryForm {
    /// Display name.
    pub name: String,
}

impl Validate for CategoryForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.add("name", "Category field cannot be empty");
        }
        errors.into_result()
    }
}

impl CategoryForm {
    /// Request body.
    pub fn payload(&self) -> CategoryPayload {
        CategoryPayload {
            name: self.name.trim().to_string(),
        }
    }
}

/// MIME types accepted by the image upload.
pub const ALLOWED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Reject anything that is not a JPG or PNG before uploading.
pub fn validate_image_type(mime: &str) -> Result<(), String> {
    if ALLOWED_IMAGE_TYPES.contains(&mime) {
        Ok(())
    } else {
        Err("Only JPG or PNG files are allowed.".to_string())
    }
}

/// Blocks a second submission while one is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    in_flight: bool,
}

impl SubmitGuard {
    /// Claim the slot; `false` when a submission is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Release the slot once the request settled.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn login_with_empty_password_never_sends() {
        let form = LoginForm {
            username: "alice".into(),
            password: String::new(),
        };
        let requests = Cell::new(0);

        let result = submit_if_valid(&form, || requests.set(requests.get() + 1));

        let errors = result.expect_err("empty password must fail");
        assert_eq!(errors.get("password"), Some("Please enter your password"));
        assert_eq!(errors.get("username"), None);
        assert_eq!(requests.get(), 0);
    }

    #[test]
    fn valid_login_sends_once() {
        let form = LoginForm {
            username: "alice".into(),
            password: "secret".into(),
        };
        let requests = Cell::new(0);
        let body = submit_if_valid(&form, || {
            requests.set(requests.get() + 1);
            form.credentials()
        })
        .expect("valid form");
        assert_eq!(requests.get(), 1);
        assert_eq!(body.role, None);
    }

    #[test]
    fn register_requires_eight_chars() {
        let mut form = RegisterForm {
            username: "bob".into(),
            password: "short".into(),
            role: None,
        };
        let errors = form.validate().expect_err("short password");
        assert_eq!(errors.get("password"), Some("Password must be at least 8 characters long"));

        form.password = "long-enough".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn register_drops_empty_role() {
        let form = RegisterForm {
            username: "bob".into(),
            password: "12345678".into(),
            role: Some(String::new()),
        };
        assert_eq!(form.credentials().role, None);
    }

    #[test]
    fn article_form_reports_every_missing_field() {
        let form = ArticleForm {
            content: "<p><br></p>".into(),
            ..ArticleForm::default()
        };
        let errors = form.validate().expect_err("empty form");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("content"), Some("Content field cannot be empty"));
        assert_eq!(errors.get("image_url"), Some("Please enter picture"));
    }

    #[test]
    fn article_payload_trims_title() {
        let form = ArticleForm {
            title: "  Title ".into(),
            category_id: "2".into(),
            content: "<p>Body</p>".into(),
            image_url: Some("https://cdn/x.png".into()),
        };
        assert!(form.validate().is_ok());
        assert_eq!(form.payload().title, "Title");
    }

    #[test]
    fn blank_category_name_is_rejected() {
        let form = CategoryForm {
            name: "   ".into(),
        };
        let errors = form.validate().expect_err("blank name");
        assert_eq!(errors.get("name"), Some("Category field cannot be empty"));
    }

    #[test]
    fn only_jpeg_and_png_upload() {
        assert!(validate_image_type("image/png").is_ok());
        assert!(validate_image_type("image/jpeg").is_ok());
        assert_eq!(
            validate_image_type("image/gif"),
            Err("Only JPG or PNG files are allowed.".to_string())
        );
    }

    #[test]
    fn content_starting_with_less_than_is_not_empty() {
        let form = ArticleForm {
            title: "Math".into(),
            category_id: "2".into(),
            content: "<p>< 3 items left</p>".into(),
            image_url: Some("https://cdn/x.png".into()),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn submit_guard_blocks_duplicates() {
        let mut guard = SubmitGuard::default();
        assert!(guard.try_begin());
        assert!(!guard.try_begin());
        guard.finish();
        assert!(guard.try_begin());
    }
}
