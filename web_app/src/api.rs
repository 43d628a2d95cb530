//! Fetch client for the order-creation endpoint.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use web_common::{CreateOrderRequest, SubmitError, CREATE_ORDER_PATH};

/// POST the collected order as JSON and return the server's structured
/// result verbatim.
///
/// One best-effort request: no retry, no timeout, no abort. The caller
/// owns disabling the submit control while this is in flight.
pub async fn create_order(order: &CreateOrderRequest) -> Result<serde_json::Value, SubmitError> {
    let body = order.to_json()?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(CREATE_ORDER_PATH, &init)
        .map_err(|e| SubmitError::Network(js_message(&e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| SubmitError::Network(js_message(&e)))?;

    let window =
        web_sys::window().ok_or_else(|| SubmitError::Network("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| SubmitError::Network(js_message(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| SubmitError::InvalidResponse("fetch did not yield a response".to_string()))?;

    let text = JsFuture::from(
        response
            .text()
            .map_err(|e| SubmitError::Network(js_message(&e)))?,
    )
    .await
    .map_err(|e| SubmitError::Network(js_message(&e)))?
    .as_string()
    .unwrap_or_default();

    if !response.ok() {
        let message = if text.trim().is_empty() {
            response.status_text()
        } else {
            text
        };
        return Err(SubmitError::Status {
            code: response.status(),
            message,
        });
    }

    serde_json::from_str(&text).map_err(|e| SubmitError::InvalidResponse(e.to_string()))
}

fn js_message(error: &JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{error:?}"))
}
