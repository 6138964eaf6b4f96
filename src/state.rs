use axum_macros::FromRef;

use crate::profile::DynProfileFormValidator;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub profile_validator: DynProfileFormValidator,
}
