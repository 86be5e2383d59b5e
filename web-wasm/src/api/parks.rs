//! NYC Open Data（Socrata）への問い合わせ
//!
//! `fetch` に `AbortController` のシグナルを渡し、トークンがキャンセルされたら
//! 通信自体も中断する。

use async_trait::async_trait;
use futures::future::{self, Either};
use nyc_finder_common::{
    decode_response, CancellationToken, Error, ParkQuery, ParkRecord, ParkSource, Result,
    DATASET_URL,
};
use std::pin::pin;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, AbortSignal, Request, RequestInit, RequestMode, Response};

fn network(value: JsValue) -> Error {
    Error::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// ブラウザの `fetch` による取得元
#[derive(Debug, Clone)]
pub struct FetchParkSource {
    endpoint: String,
}

impl Default for FetchParkSource {
    fn default() -> Self {
        Self::new(DATASET_URL)
    }
}

impl FetchParkSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    async fn request(&self, query: &ParkQuery, signal: &AbortSignal) -> Result<Vec<ParkRecord>> {
        let url = query.url(&self.endpoint);
        log::debug!("GET {}", url);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        opts.set_signal(Some(signal));

        let request = Request::new_with_str_and_init(&url, &opts).map_err(network)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(network)?;

        let window = web_sys::window().ok_or_else(|| Error::Network("no window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network)?;
        let resp: Response = resp_value.dyn_into().map_err(network)?;

        if !resp.ok() {
            return Err(Error::RequestFailed(resp.status()));
        }

        let text = JsFuture::from(resp.text().map_err(network)?)
            .await
            .map_err(network)?;
        decode_response(&text.as_string().unwrap_or_default())
    }
}

#[async_trait(?Send)]
impl ParkSource for FetchParkSource {
    async fn fetch_parks(
        &self,
        query: &ParkQuery,
        token: &CancellationToken,
    ) -> Result<Vec<ParkRecord>> {
        let controller = AbortController::new().map_err(network)?;
        let signal = controller.signal();
        let work = pin!(self.request(query, &signal));

        match future::select(work, token.cancelled()).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                controller.abort();
                Err(Error::Cancelled)
            }
        }
    }
}
