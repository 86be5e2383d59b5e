//! 一時通知（トースト）
//!
//! 同時に表示するのは1件だけ。新しい通知は現在の通知を置き換える。
//! 各通知は連番を持ち、期限切れの処理は自分の連番の通知だけを消す。

/// 自動で消えるまでの時間
pub const NOTIFICATION_DURATION_MS: u64 = 2200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub expires_at_ms: u64,
}

#[derive(Debug, Default)]
pub struct Notifier {
    next_id: u64,
    current: Option<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// 表示中の通知
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// 通知を表示（既存の通知は置き換え）
    pub fn show(&mut self, message: impl Into<String>, now_ms: u64) -> &Notification {
        self.next_id += 1;
        self.current.insert(Notification {
            id: self.next_id,
            message: message.into(),
            expires_at_ms: now_ms.saturating_add(NOTIFICATION_DURATION_MS),
        })
    }

    /// 明示的に閉じる
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// 指定IDの通知が表示中なら閉じる（タイマーからの呼び出し用）
    pub fn dismiss_if(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// 期限切れなら閉じる
    pub fn expire(&mut self, now_ms: u64) -> bool {
        if self
            .current
            .as_ref()
            .is_some_and(|n| now_ms >= n.expires_at_ms)
        {
            self.current = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_expire() {
        let mut notifier = Notifier::new();
        notifier.show("Link copied", 1_000);

        assert!(!notifier.expire(1_000 + NOTIFICATION_DURATION_MS - 1));
        assert_eq!(notifier.current().map(|n| n.message.as_str()), Some("Link copied"));
        assert!(notifier.expire(1_000 + NOTIFICATION_DURATION_MS));
        assert_eq!(notifier.current().map(|n| n.message.as_str()), None);
    }

    #[test]
    fn test_new_message_replaces_current() {
        let mut notifier = Notifier::new();
        let first = notifier.show("Link copied", 0).id;
        let second = notifier.show("Unable to copy link", 1_000).id;

        assert_ne!(first, second);
        assert_eq!(notifier.current().map(|n| n.message.as_str()), Some("Unable to copy link"));

        // 古いタイマーは新しい通知を消さない
        assert!(!notifier.dismiss_if(first));
        assert_eq!(notifier.current().map(|n| n.message.as_str()), Some("Unable to copy link"));
        assert!(!notifier.expire(NOTIFICATION_DURATION_MS));
        assert!(notifier.dismiss_if(second));
        assert_eq!(notifier.current(), None);
    }

    #[test]
    fn test_dismiss_clears() {
        let mut notifier = Notifier::new();
        notifier.show("Link copied", 0);
        notifier.dismiss();
        assert_eq!(notifier.current().map(|n| n.message.as_str()), None);
        assert!(!notifier.expire(u64::MAX));
    }
}
