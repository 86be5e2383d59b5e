//! デバウンス
//!
//! 値が `delay_ms` の間変化しなかったときだけ確定値を更新する。
//! 時刻は呼び出し側が渡す（ブラウザは gloo のタイマー、CLIは tokio）。

/// 検索語のデバウンス既定値
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline_ms: u64,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    settled: T,
    pending: Option<Pending<T>>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// 初期値は即座に確定済み
    pub fn new(initial: T, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            settled: initial,
            pending: None,
        }
    }

    /// 確定済みの値
    pub fn settled(&self) -> &T {
        &self.settled
    }

    /// 新しい値を受け取り、タイマーを再始動する。期限を返す
    pub fn update(&mut self, value: T, now_ms: u64) -> u64 {
        let deadline_ms = now_ms.saturating_add(self.delay_ms);
        self.pending = Some(Pending { value, deadline_ms });
        deadline_ms
    }

    /// 期限を過ぎていれば確定する。確定値が変わったときだけ `Some`
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now_ms >= p.deadline_ms);
        if !due {
            return None;
        }

        let pending = self.pending.take()?;
        if pending.value == self.settled {
            return None;
        }
        self.settled = pending.value.clone();
        Some(pending.value)
    }

    /// 保留中の値を破棄（アンマウント時）
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_value_is_settled() {
        let debouncer = Debouncer::new("park".to_string(), 300);
        assert_eq!(debouncer.settled(), "park");
        assert_eq!(debouncer.clone().poll(u64::MAX), None);
    }

    #[test]
    fn test_rapid_updates_emit_only_last() {
        let mut debouncer = Debouncer::new(String::new(), 300);
        let mut emitted = Vec::new();

        // 100msごとに入力（300ms以内に次の入力）
        for (i, text) in ["p", "pr", "pro", "pros"].iter().enumerate() {
            let now = i as u64 * 100;
            debouncer.update(text.to_string(), now);
            if let Some(v) = debouncer.poll(now + 99) {
                emitted.push(v);
            }
        }

        assert!(emitted.is_empty());
        assert_eq!(debouncer.poll(300 + 299), None);
        if let Some(v) = debouncer.poll(300 + 300) {
            emitted.push(v);
        }

        assert_eq!(emitted, vec!["pros".to_string()]);
        assert_eq!(debouncer.settled(), "pros");
        assert_eq!(debouncer.poll(10_000), None);
    }

    #[test]
    fn test_update_restarts_timer() {
        let mut debouncer = Debouncer::new(0u32, 300);
        assert_eq!(debouncer.update(1, 0), 300);
        assert_eq!(debouncer.update(2, 250), 550);
        assert_eq!(debouncer.poll(300), None);
        assert_eq!(debouncer.poll(550), Some(2));
    }

    #[test]
    fn test_returning_to_settled_value_emits_nothing() {
        let mut debouncer = Debouncer::new("lake".to_string(), 300);
        debouncer.update("lak".to_string(), 0);
        debouncer.update("lake".to_string(), 50);
        assert_eq!(debouncer.poll(400), None);
        assert_eq!(debouncer.poll(10_000), None);
        assert_eq!(debouncer.settled(), "lake");
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let mut debouncer = Debouncer::new(String::new(), 300);
        debouncer.update("zoo".to_string(), 0);
        debouncer.cancel();
        assert_eq!(debouncer.poll(1_000), None);
        assert_eq!(debouncer.settled(), "");
    }
}
