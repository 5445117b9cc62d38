use std::borrow::Cow;

use serde::Serialize;

pub mod contact;
pub mod recipient;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: Cow<'static, str>,
}
