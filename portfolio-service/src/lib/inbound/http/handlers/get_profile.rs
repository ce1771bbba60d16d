use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use super::ProfileView;
use crate::inbound::http::middleware::AuthenticatedUser;

/// The auth gate already performed a fresh store read while resolving
/// the token; this handler only serializes that identity.
pub async fn get_profile(
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> ApiSuccess<GetProfileResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        GetProfileResponseData {
            user: ProfileView::from(&user),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetProfileResponseData {
    pub user: ProfileView,
}
