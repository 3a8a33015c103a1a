pub mod gate;
pub mod latch;

/// Exclusive access to some resource held on behalf of one party.
///
/// `acquire()` may block. The returned guard calls `release()` when dropped,
/// so the resource is handed back on every exit path, unwinding included.
pub trait Lock: Sized {
    fn acquire(&self) -> LockGuard<'_, Self>;
    fn release(&self);
}

pub struct LockGuard<'a, L: Lock> {
    pub(crate) lock: &'a L,
}

impl<L: Lock> Drop for LockGuard<'_, L> {
    fn drop(&mut self) {
        self.lock.release()
    }
}
