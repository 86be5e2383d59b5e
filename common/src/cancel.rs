//! 検索リクエストのキャンセルトークン
//!
//! オーケストレータが保持し、新しいリクエストを出すたびに前のトークンを
//! キャンセルする。アダプタは `cancelled()` と通信処理を競わせる。

use crate::error::{Error, Result};
use futures::future::{self, Either};
use futures::task::AtomicWaker;
use std::future::Future;
use std::pin::{pin, Pin};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

#[derive(Debug, Default)]
struct Inner {
    cancelled: AtomicBool,
    waker: AtomicWaker,
}

/// キャンセルトークン（クローンは同じ状態を共有）
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<Inner>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// キャンセル済みにして待機中のタスクを起こす
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Ordering::SeqCst);
        self.inner.waker.wake();
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// キャンセルされたら完了するFuture
    pub fn cancelled(&self) -> Cancelled {
        Cancelled {
            inner: Arc::clone(&self.inner),
        }
    }

    /// `fut` を実行し、先にキャンセルされたら `Error::Cancelled`
    ///
    /// 完了後にキャンセル済みと分かった場合も `Error::Cancelled` を返す。
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let work = pin!(fut);
        match future::select(work, self.cancelled()).await {
            Either::Left((result, _)) => {
                if self.is_cancelled() {
                    Err(Error::Cancelled)
                } else {
                    result
                }
            }
            Either::Right(((), _)) => Err(Error::Cancelled),
        }
    }
}

/// `CancellationToken::cancelled` のFuture
#[derive(Debug)]
pub struct Cancelled {
    inner: Arc<Inner>,
}

impl Future for Cancelled {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.inner.cancelled.load(Ordering::SeqCst) {
            return Poll::Ready(());
        }
        self.inner.waker.register(cx.waker());
        // register と cancel の競合を拾うため再確認
        if self.inner.cancelled.load(Ordering::SeqCst) {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    }
}
