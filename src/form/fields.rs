//! Field registry and validators for the order form.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Deliberately permissive: something before the `@`, a dotted domain,
    /// no whitespace anywhere.
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    /// French postal code: exactly five digits.
    static ref POSTAL_RE: Regex = Regex::new(r"^\d{5}$").unwrap();
}

/// Logical form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    FirstName,
    LastName,
    Address,
    City,
    PostalCode,
    Country,
    Amount,
}

impl Field {
    /// Wire name posted to the backend.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::FirstName => "prenom",
            Field::LastName => "nom",
            Field::Address => "adresse",
            Field::City => "ville",
            Field::PostalCode => "code_postal",
            Field::Country => "pays",
            Field::Amount => "montant",
        }
    }

    /// Whether the field gates submission. The amount only drives the
    /// summary.
    pub fn required(&self) -> bool {
        !matches!(self, Field::Amount)
    }

    /// Validate a raw field value.
    pub fn validate(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            Field::Email => EMAIL_RE.is_match(value),
            Field::PostalCode => POSTAL_RE.is_match(value),
            _ => !value.is_empty(),
        }
    }
}

/// All form fields, built once at controller construction: the explicit
/// mapping from logical field to wire name.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: Vec<Field>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self {
            fields: vec![
                Field::Email,
                Field::FirstName,
                Field::LastName,
                Field::Address,
                Field::City,
                Field::PostalCode,
                Field::Country,
                Field::Amount,
            ],
        }
    }

    /// Every registered field, in wire order.
    pub fn all(&self) -> &[Field] {
        &self.fields
    }

    /// The fields gating submission.
    pub fn required(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied().filter(Field::required)
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(Field::Email.validate("jean.dupont@example.fr"));
        assert!(Field::Email.validate("  a@b.co  "));
        assert!(!Field::Email.validate("jean.dupont"));
        assert!(!Field::Email.validate("jean@dupont"));
        assert!(!Field::Email.validate("jean dupont@example.fr"));
        assert!(!Field::Email.validate(""));
    }

    #[test]
    fn test_postal_code_validation() {
        assert!(Field::PostalCode.validate("75011"));
        assert!(!Field::PostalCode.validate("7501"));
        assert!(!Field::PostalCode.validate("750111"));
        assert!(!Field::PostalCode.validate("75O11"));
        assert!(!Field::PostalCode.validate(""));
    }

    #[test]
    fn test_generic_fields_require_non_blank() {
        assert!(Field::City.validate("Paris"));
        assert!(!Field::City.validate("   "));
        assert!(!Field::Country.validate(""));
    }

    #[test]
    fn test_registry_required_excludes_amount() {
        let registry = FieldRegistry::new();
        assert_eq!(registry.all().len(), 8);
        let required: Vec<Field> = registry.required().collect();
        assert_eq!(required.len(), 7);
        assert!(!required.contains(&Field::Amount));
    }
}
