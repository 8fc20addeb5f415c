//! Add-User Form State
//!
//! Every form input is bound to one `FormField`, and a change event
//! replaces exactly the leaf that field addresses in the `UserDraft`.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;
use crate::models::UserDraft;

/// One editable leaf of a `UserDraft`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Username,
    Email,
    Phone,
    Website,
    Street,
    Suite,
    City,
    Zipcode,
    Lat,
    Lng,
    CompanyName,
    CatchPhrase,
    Bs,
}

/// HTML input flavour for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Url,
    MultiLine,
}

impl InputKind {
    /// Value for the `type` attribute (multi-line renders as a textarea)
    pub fn as_attr(self) -> &'static str {
        match self {
            InputKind::Text | InputKind::MultiLine => "text",
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Url => "url",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSection {
    Personal,
    Address,
    Company,
}

impl FormSection {
    pub fn title(self) -> &'static str {
        match self {
            FormSection::Personal => "Personal Information",
            FormSection::Address => "Address Information",
            FormSection::Company => "Company Information",
        }
    }

    pub fn fields(self) -> impl Iterator<Item = FormField> {
        FormField::ALL.into_iter().filter(move |f| f.section() == self)
    }
}

impl FormField {
    /// Fields in form order
    pub const ALL: [FormField; 14] = [
        FormField::Name,
        FormField::Username,
        FormField::Email,
        FormField::Phone,
        FormField::Website,
        FormField::Street,
        FormField::Suite,
        FormField::City,
        FormField::Zipcode,
        FormField::Lat,
        FormField::Lng,
        FormField::CompanyName,
        FormField::CatchPhrase,
        FormField::Bs,
    ];

    /// Replace the addressed leaf of `draft` with `value`
    pub fn apply(self, draft: &mut UserDraft, value: String) {
        *self.slot(draft) = value;
    }

    pub fn value(self, draft: &UserDraft) -> &str {
        match self {
            FormField::Name => &draft.name,
            FormField::Username => &draft.username,
            FormField::Email => &draft.email,
            FormField::Phone => &draft.phone,
            FormField::Website => &draft.website,
            FormField::Street => &draft.address.street,
            FormField::Suite => &draft.address.suite,
            FormField::City => &draft.address.city,
            FormField::Zipcode => &draft.address.zipcode,
            FormField::Lat => &draft.address.geo.lat,
            FormField::Lng => &draft.address.geo.lng,
            FormField::CompanyName => &draft.company.name,
            FormField::CatchPhrase => &draft.company.catch_phrase,
            FormField::Bs => &draft.company.bs,
        }
    }

    fn slot(self, draft: &mut UserDraft) -> &mut String {
        match self {
            FormField::Name => &mut draft.name,
            FormField::Username => &mut draft.username,
            FormField::Email => &mut draft.email,
            FormField::Phone => &mut draft.phone,
            FormField::Website => &mut draft.website,
            FormField::Street => &mut draft.address.street,
            FormField::Suite => &mut draft.address.suite,
            FormField::City => &mut draft.address.city,
            FormField::Zipcode => &mut draft.address.zipcode,
            FormField::Lat => &mut draft.address.geo.lat,
            FormField::Lng => &mut draft.address.geo.lng,
            FormField::CompanyName => &mut draft.company.name,
            FormField::CatchPhrase => &mut draft.company.catch_phrase,
            FormField::Bs => &mut draft.company.bs,
        }
    }

    /// Dotted name used for the input's `name` and `id` attributes
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Username => "username",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Website => "website",
            FormField::Street => "address.street",
            FormField::Suite => "address.suite",
            FormField::City => "address.city",
            FormField::Zipcode => "address.zipcode",
            FormField::Lat => "address.geo.lat",
            FormField::Lng => "address.geo.lng",
            FormField::CompanyName => "company.name",
            FormField::CatchPhrase => "company.catchPhrase",
            FormField::Bs => "company.bs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Username => "Username",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Website => "Website",
            FormField::Street => "Street",
            FormField::Suite => "Suite",
            FormField::City => "City",
            FormField::Zipcode => "Zipcode",
            FormField::Lat => "Latitude",
            FormField::Lng => "Longitude",
            FormField::CompanyName => "Company Name",
            FormField::CatchPhrase => "Catch Phrase",
            FormField::Bs => "Business Strategy",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Name => "Enter full name",
            FormField::Username => "Enter username",
            FormField::Email => "Enter email address",
            FormField::Phone => "Enter phone number",
            FormField::Website => "Enter website URL",
            FormField::Street => "Street address",
            FormField::Suite => "Suite/Apt",
            FormField::City => "City",
            FormField::Zipcode => "Zipcode",
            FormField::Lat => "Latitude",
            FormField::Lng => "Longitude",
            FormField::CompanyName => "Company name",
            FormField::CatchPhrase => "Company catch phrase",
            FormField::Bs => "Business strategy",
        }
    }

    pub fn kind(self) -> InputKind {
        match self {
            FormField::Email => InputKind::Email,
            FormField::Phone => InputKind::Tel,
            FormField::Website => InputKind::Url,
            FormField::Bs => InputKind::MultiLine,
            _ => InputKind::Text,
        }
    }

    pub fn required(self) -> bool {
        matches!(
            self,
            FormField::Name
                | FormField::Username
                | FormField::Email
                | FormField::Phone
                | FormField::Street
                | FormField::City
                | FormField::Zipcode
                | FormField::CompanyName
        )
    }

    pub fn section(self) -> FormSection {
        match self {
            FormField::Name
            | FormField::Username
            | FormField::Email
            | FormField::Phone
            | FormField::Website => FormSection::Personal,
            FormField::Street
            | FormField::Suite
            | FormField::City
            | FormField::Zipcode
            | FormField::Lat
            | FormField::Lng => FormSection::Address,
            FormField::CompanyName | FormField::CatchPhrase | FormField::Bs => {
                FormSection::Company
            }
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses dotted names.
///
/// Coordinates are accepted as `address.geo.lat`, `address.lat` and the bare
/// `lat` used by older markup; all three address the same leaf.
impl FromStr for FormField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field = match s.split_once('.') {
            Some(("address", rest)) => match rest {
                "street" => FormField::Street,
                "suite" => FormField::Suite,
                "city" => FormField::City,
                "zipcode" => FormField::Zipcode,
                "lat" | "geo.lat" => FormField::Lat,
                "lng" | "geo.lng" => FormField::Lng,
                _ => return Err(FormError::UnknownField(s.to_string())),
            },
            Some(("company", rest)) => match rest {
                "name" => FormField::CompanyName,
                "catchPhrase" => FormField::CatchPhrase,
                "bs" => FormField::Bs,
                _ => return Err(FormError::UnknownField(s.to_string())),
            },
            Some(_) => return Err(FormError::UnknownField(s.to_string())),
            None => match s {
                "name" => FormField::Name,
                "username" => FormField::Username,
                "email" => FormField::Email,
                "phone" => FormField::Phone,
                "website" => FormField::Website,
                "lat" => FormField::Lat,
                "lng" => FormField::Lng,
                _ => return Err(FormError::UnknownField(s.to_string())),
            },
        };
        Ok(field)
    }
}

/// A single input change
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub field: FormField,
    pub value: String,
}

impl FieldChange {
    pub fn new(field: FormField, value: impl Into<String>) -> Self {
        Self { field, value: value.into() }
    }

    /// Build a change from a raw `name`/`value` pair
    pub fn parse(name: &str, value: impl Into<String>) -> Result<Self, FormError> {
        Ok(Self::new(name.parse()?, value))
    }
}

/// Apply `change` to `draft`, returning the updated draft
pub fn merge(mut draft: UserDraft, change: FieldChange) -> UserDraft {
    change.field.apply(&mut draft, change.value);
    draft
}

impl UserDraft {
    /// Required fields that are still blank
    pub fn missing_required(&self) -> Vec<FormField> {
        FormField::ALL
            .iter()
            .copied()
            .filter(|f| f.required() && f.value(self).trim().is_empty())
            .collect()
    }
}
