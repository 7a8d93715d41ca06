//! Read-only view of a profile for the viewer screen.
//!
//! Each entry is copyable: the UI copies [`CardEntry::copy_text`] to the
//! clipboard when the entry is tapped.

use super::ProfileRecord;

/// What a card entry shows. The UI maps these to localised labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardLabel {
    /// Full name.
    Name,
    /// Email address.
    Email,
    /// Phone number.
    PhoneNumber,
    /// Discord tag.
    Discord,
    /// Instagram username.
    Instagram,
    /// Notes.
    Notes,
}

/// A single labelled, copyable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    label: CardLabel,
    value: String,
}

impl CardEntry {
    /// Label the UI should display.
    #[must_use]
    pub const fn label(&self) -> CardLabel {
        self.label
    }

    /// Displayed value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Text placed on the clipboard when the entry is tapped.
    #[must_use]
    pub fn copy_text(&self) -> &str {
        &self.value
    }
}

/// A profile laid out for display.
///
/// Entries appear in a fixed order: name, email, phone number, then the
/// Discord tag and Instagram username when shared, then notes when not
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    heading: String,
    entries: Vec<CardEntry>,
}

impl ProfileCard {
    /// Lay out `record` for display.
    #[must_use]
    pub fn from_record(record: &ProfileRecord) -> Self {
        let heading = record.name().to_string();
        let social = record.social_networks();

        let mut entries = vec![
            card_entry(CardLabel::Name, heading.clone()),
            card_entry(CardLabel::Email, record.email().to_string()),
            card_entry(CardLabel::PhoneNumber, record.phone_number().to_string()),
        ];
        if let Some(tag) = social.discord_tag() {
            entries.push(card_entry(CardLabel::Discord, tag.to_string()));
        }
        if let Some(username) = social.instagram_username() {
            entries.push(card_entry(CardLabel::Instagram, username.to_owned()));
        }
        if !record.notes().is_empty() {
            entries.push(card_entry(CardLabel::Notes, record.notes().to_owned()));
        }

        Self { heading, entries }
    }

    /// Title shown above the entries; the owner's full name.
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[CardEntry] {
        &self.entries
    }

    /// Entry for `label`, if the card shows one.
    #[must_use]
    pub fn entry(&self, label: CardLabel) -> Option<&CardEntry> {
        self.entries.iter().find(|candidate| candidate.label == label)
    }
}

const fn card_entry(label: CardLabel, value: String) -> CardEntry {
    CardEntry { label, value }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ProfileParts;

    fn record(discord_tag: Option<&str>, instagram: Option<&str>, notes: &str) -> ProfileRecord {
        ProfileRecord::try_from_parts(ProfileParts {
            first_name: "Jane".to_owned(),
            last_name: "Doe".to_owned(),
            email: "jane@doe.com".to_owned(),
            phone_number: "555-1234".to_owned(),
            discord_tag: discord_tag.map(str::to_owned),
            instagram_username: instagram.map(str::to_owned),
            notes: notes.to_owned(),
        })
        .expect("valid profile")
    }

    fn labels(card: &ProfileCard) -> Vec<CardLabel> {
        card.entries().iter().map(CardEntry::label).collect()
    }

    #[rstest]
    fn full_profile_lists_every_entry_in_order() {
        let card = ProfileCard::from_record(&record(Some("jane#1234"), Some("jane"), "hi"));

        assert_eq!(card.heading(), "Jane Doe");
        assert_eq!(
            labels(&card),
            vec![
                CardLabel::Name,
                CardLabel::Email,
                CardLabel::PhoneNumber,
                CardLabel::Discord,
                CardLabel::Instagram,
                CardLabel::Notes,
            ]
        );
    }

    #[rstest]
    fn absent_handles_and_empty_notes_are_omitted() {
        let card = ProfileCard::from_record(&record(None, None, ""));
        assert_eq!(
            labels(&card),
            vec![CardLabel::Name, CardLabel::Email, CardLabel::PhoneNumber]
        );
        assert!(card.entry(CardLabel::Discord).is_none());
    }

    #[rstest]
    fn tapping_copies_the_displayed_value() {
        let card = ProfileCard::from_record(&record(Some("jane#1234"), None, ""));
        let discord = card.entry(CardLabel::Discord).expect("discord entry");
        assert_eq!(discord.copy_text(), "jane#1234");
        assert_eq!(discord.copy_text(), discord.value());
    }
}
