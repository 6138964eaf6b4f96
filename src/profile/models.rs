use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub current_password: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl ProfileFormInput {
    /// The submitted new password, or `None` when the user is not changing it.
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|pwd| !pwd.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField { Name, Email, Password, ConfirmPassword, }

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldError {
    pub field: ProfileField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: ProfileField, message: &str) -> Self {
        Self { field, message: message.to_string() }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct FieldErrorsResponseModel {
    pub errors: Vec<FieldError>,
}

#[derive(Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponseModel {
    pub name: String,
    pub email: String,
    pub changes_password: bool,
}

impl From<ProfileFormInput> for ProfileResponseModel {
    fn from(input: ProfileFormInput) -> Self {
        let changes_password = input.new_password().is_some();
        Self { name: input.name, email: input.email, changes_password }
    }
}
