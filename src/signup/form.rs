//! Registration form data types.
//!
//! This module contains the editable form values, the field identifiers used
//! by input events and error maps, and the validated payload handed to the
//! wallet once the form passes validation.

use super::error::SignupError;
use fake::Dummy;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Specifying the membership tiers offered at registration.
///
#[derive(Clone, Copy, Debug, Default, Dummy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipType {
    #[default]
    Regular,
    Premium,
}

impl MembershipType {
    /// Return the wire value passed to the wallet.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipType::Regular => "regular",
            MembershipType::Premium => "premium",
        }
    }

    /// Return the label shown in the membership selector.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            MembershipType::Regular => "Regular Member",
            MembershipType::Premium => "Premium Member",
        }
    }

    /// Return the other tier.
    ///
    pub fn toggle(self) -> Self {
        match self {
            MembershipType::Regular => MembershipType::Premium,
            MembershipType::Premium => MembershipType::Regular,
        }
    }
}

impl fmt::Display for MembershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MembershipType {
    type Err = SignupError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "regular" => Ok(MembershipType::Regular),
            "premium" => Ok(MembershipType::Premium),
            other => Err(SignupError::UnknownMembershipType(other.to_string())),
        }
    }
}

/// Specifying the editable form fields.
///
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Field {
    Name,
    Email,
    PhoneNumber,
    MembershipType,
}

impl Field {
    /// Fields that carry free text and can fail validation.
    pub const TEXT: [Field; 3] = [Field::Name, Field::Email, Field::PhoneNumber];

    /// Return the key used for this field in input events and error maps.
    ///
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::PhoneNumber => "phoneNumber",
            Field::MembershipType => "membershipType",
        }
    }
}

impl FromStr for Field {
    type Err = SignupError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phoneNumber" => Ok(Field::PhoneNumber),
            "membershipType" => Ok(Field::MembershipType),
            other => Err(SignupError::UnknownField(other.to_string())),
        }
    }
}

/// Current values of the registration form.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub membership_type: MembershipType,
}

impl FormData {
    /// Return the raw value of a field as displayed.
    ///
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::MembershipType => self.membership_type.as_str(),
        }
    }

    /// Replace the value of a single field. Membership values must name a
    /// known tier.
    ///
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), SignupError> {
        match field {
            Field::Name => self.name = value.to_owned(),
            Field::Email => self.email = value.to_owned(),
            Field::PhoneNumber => self.phone_number = value.to_owned(),
            Field::MembershipType => self.membership_type = value.parse()?,
        }
        Ok(())
    }

    /// Restore every field to its default.
    ///
    pub fn reset(&mut self) {
        *self = FormData::default();
    }
}

/// Registration payload built from a form that passed validation.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub membership_type: MembershipType,
}

impl From<&FormData> for Registration {
    fn from(form: &FormData) -> Self {
        Registration {
            name: form.name.clone(),
            email: form.email.clone(),
            phone_number: form.phone_number.clone(),
            membership_type: form.membership_type,
        }
    }
}
