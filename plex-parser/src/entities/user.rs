//! The account entity returned by the sign-in endpoint.

use crate::common::scalars::{HttpUrl, IntAsBool};
use crate::common::xml_decode;
use crate::error::ParseResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An account on the directory service.
///
/// Decoded from the sign-in response. `auth_token` is the capability
/// credential for every later call; it is opaque and redacted from the
/// `Debug` representation so it cannot leak into logs or error output.
#[derive(Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename = "user")]
pub struct User {
    #[serde(rename = "@email", default)]
    pub email: String,

    #[serde(rename = "@id", default)]
    pub id: u64,

    /// Avatar image URL
    #[serde(rename = "@thumb", default)]
    pub thumb: Option<HttpUrl>,

    #[serde(rename = "@username", default)]
    pub username: String,

    #[serde(rename = "@title", default)]
    pub title: String,

    #[serde(rename = "@locale", default)]
    pub locale: String,

    /// Opaque credential attached to every authenticated request
    #[serde(rename = "@authenticationToken", default)]
    pub auth_token: String,

    #[serde(rename = "@queueEmail", default)]
    pub queue_email: String,

    #[serde(rename = "subscription", default)]
    pub subscription: Subscription,
}

impl User {
    /// Decode an account from a sign-in response document.
    pub fn from_xml(xml: &str) -> ParseResult<Self> {
        xml_decode::parse(xml)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("email", &self.email)
            .field("id", &self.id)
            .field("thumb", &self.thumb)
            .field("username", &self.username)
            .field("title", &self.title)
            .field("locale", &self.locale)
            .field("auth_token", &"<redacted>")
            .field("queue_email", &self.queue_email)
            .field("subscription", &self.subscription)
            .finish()
    }
}

/// Subscription entitlement carried on the account.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Subscription {
    #[serde(rename = "@active", default)]
    pub active: IntAsBool,

    #[serde(rename = "@plan", default)]
    pub plan: String,
}
