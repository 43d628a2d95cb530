//! Request types for the order-creation endpoint.

use order_core::{FieldValue, OrderSelection};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Path of the order-creation endpoint.
pub const CREATE_ORDER_PATH: &str = "/create";

/// JSON body for `POST /create`: a flat object mapping each answered
/// field to its value, in form order.
///
/// The key set is whatever the form's `FormSpec` declared - the contract
/// layer owns it, so this type serializes the collected selection as-is
/// instead of fixing a field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderRequest {
    selection: OrderSelection,
}

impl CreateOrderRequest {
    pub fn new(selection: OrderSelection) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &OrderSelection {
        &self.selection
    }

    /// The request body as a JSON string.
    pub fn to_json(&self) -> Result<String, crate::SubmitError> {
        serde_json::to_string(self)
            .map_err(|e| crate::SubmitError::Serialization(e.to_string()))
    }
}

impl Serialize for CreateOrderRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.selection.len()))?;
        for (key, value) in self.selection.iter() {
            match value {
                FieldValue::Text(text) => map.serialize_entry(key, text)?,
                FieldValue::Flag(flag) => map.serialize_entry(key, flag)?,
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_core::{FormSpec, OrderForm};

    #[test]
    fn body_is_a_flat_object_of_answered_fields() {
        let mut form = OrderForm::new(FormSpec::music_video());
        form.select("mood", "Sad");
        form.select("videoLength", "60");
        form.select("pricing", "pro");
        form.set_text("vision", "neon skyline at dusk");
        form.set_toggle("branding", true);
        form.set_text("brandName", "Acme");

        let body = CreateOrderRequest::new(form.selection()).to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(parsed["mood"], "Sad");
        assert_eq!(parsed["videoLength"], "60");
        assert_eq!(parsed["pricing"], "pro");
        assert_eq!(parsed["vision"], "neon skyline at dusk");
        assert_eq!(parsed["branding"], true);
        assert_eq!(parsed["brandName"], "Acme");
        // unanswered groups are absent, not null or empty
        assert!(parsed.get("age").is_none());
        assert!(parsed.get("style").is_none());
        assert!(parsed.get("length").is_none());
    }

    #[test]
    fn empty_selection_serializes_to_an_empty_object() {
        let form = OrderForm::new(FormSpec::music_video());
        let body = CreateOrderRequest::new(form.selection()).to_json().unwrap();
        assert_eq!(body, "{}");
    }
}
