use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// View state is only ever replaced wholesale or updated in place by a single
// handler, so a poisoned lock still holds consistent data.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
