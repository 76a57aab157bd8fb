use crate::clipper::clipper_instance::ClipperInstance;
use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Free list of engine instances. Each `get` hands out an instance owned by the
/// caller alone until the guard drops, so concurrent operations never share
/// scratch buffers.
pub struct ClipperPool<T: ClipperInstance> {
    instances: Mutex<Vec<Box<T>>>,
}

impl<T: ClipperInstance> Default for ClipperPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ClipperInstance> ClipperPool<T> {
    pub fn new() -> Self {
        Self {
            instances: Mutex::new(Vec::new()),
        }
    }

    // Instances are cleaned on every hand-over, so a poisoned list is still usable.
    fn lock(&self) -> MutexGuard<'_, Vec<Box<T>>> {
        self.instances.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self) -> PooledInstance<'_, T> {
        let mut instance = self.lock().pop().unwrap_or_else(|| Box::new(T::new()));

        instance.clean();

        PooledInstance {
            pool: self,
            instance: Some(instance),
        }
    }

    fn put(&self, mut instance: Box<T>) {
        instance.clean();
        self.lock().push(instance);
    }

    /// Number of idle instances.
    pub fn idle(&self) -> usize {
        self.lock().len()
    }

    pub fn drain(&self) {
        self.lock().clear();
    }
}

pub struct PooledInstance<'a, T: ClipperInstance> {
    pool: &'a ClipperPool<T>,
    instance: Option<Box<T>>,
}

impl<T: ClipperInstance> Deref for PooledInstance<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.instance.as_deref().expect("instance is present until drop")
    }
}

impl<T: ClipperInstance> DerefMut for PooledInstance<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.instance
            .as_deref_mut()
            .expect("instance is present until drop")
    }
}

impl<T: ClipperInstance> Drop for PooledInstance<'_, T> {
    fn drop(&mut self) {
        if let Some(instance) = self.instance.take() {
            self.pool.put(instance);
        }
    }
}
