//! State handle abstraction
//!
//! The view owns state in reactive signals; services only need to read and
//! mutate it. Both operations return `None` once the owner is gone (the
//! component unmounted while a task was still running).

pub trait StateStore<T>: Clone + 'static {
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;

    fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}
