//! Plain HTTP GET returning the response body as text.
//!
//! The browser build goes through `window.fetch`, native builds through reqwest.

use crate::fetcher::FetchError;

#[derive(Clone, Default)]
pub struct HttpTransport {
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(target_arch = "wasm32")]
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, Response};

        let window =
            web_sys::window().ok_or_else(|| FetchError::Network("No window".to_string()))?;
        let opts = RequestInit::new();
        opts.set_method("GET");

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| FetchError::Network(format!("{:?}", e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| FetchError::Network("Not a Response".to_string()))?;

        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }

        let promise = resp
            .text()
            .map_err(|e| FetchError::Decode(format!("{:?}", e)))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| FetchError::Decode(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| FetchError::Decode("Response body is not text".to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.text()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
