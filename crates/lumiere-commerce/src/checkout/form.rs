//! Checkout form state.

use crate::checkout::PINCODE_LEN;
use serde::{Deserialize, Serialize};

/// Length of a complete mobile number.
pub const MOBILE_LEN: usize = 10;

/// Contact and address fields collected at checkout.
///
/// Serialized as the `customer` object of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub address1: String,
    pub address2: String,
    pub pincode: String,
}

/// One field of the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Mobile,
    Address1,
    Address2,
    Pincode,
}

impl FormField {
    /// Every field, in form order.
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Mobile,
        FormField::Address1,
        FormField::Address2,
        FormField::Pincode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Mobile => "mobile",
            FormField::Address1 => "address1",
            FormField::Address2 => "address2",
            FormField::Pincode => "pincode",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Email => "Email",
            FormField::Mobile => "Mobile Number",
            FormField::Address1 => "Address Line 1",
            FormField::Address2 => "Address Line 2",
            FormField::Pincode => "Pin Code",
        }
    }

    /// Input limit for digit-only fields.
    fn digit_limit(&self) -> Option<usize> {
        match self {
            FormField::Mobile => Some(MOBILE_LEN),
            FormField::Pincode => Some(PINCODE_LEN),
            _ => None,
        }
    }
}

impl CheckoutForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a field.
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Mobile => &self.mobile,
            FormField::Address1 => &self.address1,
            FormField::Address2 => &self.address2,
            FormField::Pincode => &self.pincode,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Mobile => &mut self.mobile,
            FormField::Address1 => &mut self.address1,
            FormField::Address2 => &mut self.address2,
            FormField::Pincode => &mut self.pincode,
        }
    }

    /// Store raw user input for a field.
    ///
    /// This is the input layer: mobile and pincode keep only digits and are
    /// truncated to their length. The validator never filters.
    pub fn set_field(&mut self, field: FormField, input: &str) {
        let value = match field.digit_limit() {
            Some(limit) => digits_only(input, limit),
            None => input.to_string(),
        };
        *self.field_mut(field) = value;
    }

    /// Fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.field(*f).is_empty())
            .collect()
    }

    /// Reset every field to the empty string.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if every field is empty.
    pub fn is_blank(&self) -> bool {
        self.missing_fields().len() == FormField::ALL.len()
    }
}

/// Keep ASCII digits only, at most `max_len` of them.
pub fn digits_only(input: &str, max_len: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_len)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("98-765 43210", 10), "9876543210");
        assert_eq!(digits_only("98765432109999", 10), "9876543210");
        assert_eq!(digits_only("abc", 6), "");
    }

    #[test]
    fn test_set_field_filters_numeric_fields() {
        let mut form = CheckoutForm::new();
        form.set_field(FormField::Mobile, "+91 98765 43210");
        form.set_field(FormField::Pincode, "400 001 extra 9");
        form.set_field(FormField::Name, "Asha 2");

        assert_eq!(form.mobile, "9198765432");
        assert_eq!(form.pincode, "400001");
        assert_eq!(form.name, "Asha 2");
    }

    #[test]
    fn test_missing_fields_in_order() {
        let mut form = CheckoutForm::new();
        form.set_field(FormField::Email, "a@b.c");
        assert_eq!(
            form.missing_fields(),
            vec![
                FormField::Name,
                FormField::Mobile,
                FormField::Address1,
                FormField::Address2,
                FormField::Pincode
            ]
        );
    }

    #[test]
    fn test_reset() {
        let mut form = CheckoutForm::new();
        form.set_field(FormField::Address1, "12 MG Road");
        assert!(!form.is_blank());
        form.reset();
        assert!(form.is_blank());
        assert_eq!(form, CheckoutForm::default());
    }

    #[test]
    fn test_serializes_as_customer() {
        let mut form = CheckoutForm::new();
        form.set_field(FormField::Name, "Asha");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["name"], "Asha");
        assert_eq!(json["address2"], "");
    }
}
