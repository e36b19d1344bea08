//! Locking shim shared by the `std` and `no_std` builds.
//!
//! With `std`, wraps [`std::sync::Mutex`] and treats poisoning as recoverable:
//! the engine never holds a guard across caller code, so a poisoned lock still
//! protects consistent state. Without `std`, `spin::Mutex` is re-exported,
//! whose `lock` has the same infallible signature.

#[cfg(feature = "std")]
pub struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Mutex;
