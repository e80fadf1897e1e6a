//! Pre-submission checks.

use crate::cart::Cart;
use crate::checkout::{CheckoutForm, MOBILE_LEN, PINCODE_LEN};
use crate::error::ValidationError;

/// Decide whether a checkout attempt may be submitted.
///
/// Checks run in a fixed order and the first failure is returned:
/// empty cart, any empty field, mobile length, pincode length.
/// Lengths count characters; digit filtering happens at input time
/// in [`CheckoutForm::set_field`].
pub fn validate_checkout(cart: &Cart, form: &CheckoutForm) -> Result<(), ValidationError> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }

    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    if form.mobile.chars().count() != MOBILE_LEN {
        return Err(ValidationError::BadMobile);
    }

    if form.pincode.chars().count() != PINCODE_LEN {
        return Err(ValidationError::BadPincode);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::checkout::FormField;
    use crate::ids::ProductId;
    use crate::money::Money;

    fn filled_cart() -> Cart {
        let stock = vec![Product::new(1, "Rings", "Band", Money::new(1000)).with_stock(1)];
        let mut cart = Cart::new();
        cart.add(stock.as_slice(), ProductId::new(1)).unwrap();
        cart
    }

    fn complete_form() -> CheckoutForm {
        CheckoutForm {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9876543210".to_string(),
            address1: "12 MG Road".to_string(),
            address2: "Indiranagar".to_string(),
            pincode: "560038".to_string(),
        }
    }

    #[test]
    fn test_valid_checkout() {
        assert_eq!(validate_checkout(&filled_cart(), &complete_form()), Ok(()));
    }

    #[test]
    fn test_empty_cart_wins() {
        let result = validate_checkout(&Cart::new(), &CheckoutForm::new());
        assert_eq!(result, Err(ValidationError::EmptyCart));
    }

    #[test]
    fn test_missing_fields() {
        let mut form = complete_form();
        form.address2.clear();
        let result = validate_checkout(&filled_cart(), &form);
        assert_eq!(
            result,
            Err(ValidationError::MissingFields(vec![FormField::Address2]))
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "Please fill in all fields"
        );
    }

    #[test]
    fn test_missing_fields_before_length_checks() {
        let mut form = complete_form();
        form.name.clear();
        form.mobile = "123".to_string();
        assert!(matches!(
            validate_checkout(&filled_cart(), &form),
            Err(ValidationError::MissingFields(_))
        ));
    }

    #[test]
    fn test_short_mobile() {
        let mut form = complete_form();
        form.mobile = "98765".to_string();
        form.pincode = "12".to_string();
        let result = validate_checkout(&filled_cart(), &form);
        assert_eq!(result, Err(ValidationError::BadMobile));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Mobile number must be 10 digits"
        );
    }

    #[test]
    fn test_short_pincode() {
        let mut form = complete_form();
        form.set_field(FormField::Pincode, "5600");
        let result = validate_checkout(&filled_cart(), &form);
        assert_eq!(result, Err(ValidationError::BadPincode));
        assert_eq!(result.unwrap_err().to_string(), "Pin code must be 6 digits");
    }
}
