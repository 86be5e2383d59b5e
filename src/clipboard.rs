//! システムクリップボード（arboard）

use async_trait::async_trait;
use nyc_finder_common::{ClipboardWriter, Error};

#[derive(Debug, Default)]
pub struct SystemClipboard;

#[async_trait(?Send)]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> nyc_finder_common::Result<()> {
        // ヘッドレス環境（DISPLAY無し等）では作成自体が失敗する
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::ClipboardDenied(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::ClipboardDenied(e.to_string()))
    }
}
