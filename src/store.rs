//! ファイルベースのキーバリューストア
//!
//! キーごとに `<dir>/<key>.json` を1つ持つ。ブラウザの localStorage の代わり。

use nyc_finder_common::{Error, KeyValueStore};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }


    /// キーに対応するファイル（パス区切りなどは `_` に置換）
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> nyc_finder_common::Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::StorageUnavailable(format!("{}: {}", path.display(), e))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> nyc_finder_common::Result<()> {
        let path = self.path_for(key);
        std::fs::create_dir_all(&self.dir)
            .and_then(|()| std::fs::write(&path, value))
            .map_err(|e| Error::StorageUnavailable(format!("{}: {}", path.display(), e)))
    }
}
