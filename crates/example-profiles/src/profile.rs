//! Sample profile values.

use serde::{Deserialize, Serialize};

/// A generated contact profile as plain strings.
///
/// Serialises with the canonical camelCase field identifiers, omitting
/// absent handles and empty notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleProfile {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address derived from the name.
    pub email: String,
    /// Phone number in `555-NNNN` form.
    pub phone_number: String,
    /// Discord tag, when this person shares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discord_tag: Option<String>,
    /// Instagram username, when this person shares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_username: Option<String>,
    /// Free-form notes; often empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl ExampleProfile {
    /// Identifier and value pairs in canonical field order.
    ///
    /// Absent handles and empty notes are left out, as a user would leave
    /// those form fields blank.
    ///
    /// # Example
    ///
    /// ```
    /// use example_profiles::ExampleProfile;
    ///
    /// let profile = ExampleProfile {
    ///     first_name: "Ada".to_owned(),
    ///     last_name: "Byron".to_owned(),
    ///     email: "ada.byron@example.com".to_owned(),
    ///     phone_number: "555-0100".to_owned(),
    ///     discord_tag: None,
    ///     instagram_username: Some("ada".to_owned()),
    ///     notes: String::new(),
    /// };
    ///
    /// let keys: Vec<_> = profile.fields().into_iter().map(|(key, _)| key).collect();
    /// assert_eq!(keys, ["firstName", "lastName", "email", "phoneNumber", "instagramUsername"]);
    /// ```
    #[must_use]
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("phoneNumber", self.phone_number.as_str()),
        ];
        if let Some(tag) = &self.discord_tag {
            pairs.push(("discordTag", tag.as_str()));
        }
        if let Some(username) = &self.instagram_username {
            pairs.push(("instagramUsername", username.as_str()));
        }
        if !self.notes.is_empty() {
            pairs.push(("notes", self.notes.as_str()));
        }
        pairs
    }
}
