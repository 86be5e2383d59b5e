//! reqwest による公園データ取得
//!
//! クエリ構築とレスポンスの正規化は common 側。ここは通信とキャンセルだけ。

use async_trait::async_trait;
use nyc_finder_common::{
    decode_response, CancellationToken, Error, ParkQuery, ParkRecord, ParkSource,
};
pub struct HttpParkSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpParkSource {
    pub fn new(endpoint: impl Into<String>) -> crate::error::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nyc-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn request(&self, query: &ParkQuery) -> nyc_finder_common::Result<Vec<ParkRecord>> {
        log::debug!("GET {}", query.url(&self.endpoint));

        let response = self
            .client
            .get(&self.endpoint)
            .query(&query.params())
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RequestFailed(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        decode_response(&body)
    }
}

#[async_trait(?Send)]
impl ParkSource for HttpParkSource {
    async fn fetch_parks(
        &self,
        query: &ParkQuery,
        token: &CancellationToken,
    ) -> nyc_finder_common::Result<Vec<ParkRecord>> {
        // キャンセルされたらリクエストのFutureごと破棄（接続も閉じる）
        token.run(self.request(query)).await
    }
}
