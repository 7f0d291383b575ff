use std::sync::{Arc, Mutex, Weak};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    listeners: Vec<(u64, Listener<T>)>,
    next_id: u64,
}

/// A single shared value with a listener list. Every mutation notifies all
/// current subscribers with the settled value, synchronously, before
/// control returns to the caller that triggered it. Subscribers only ever
/// see the latest value, never a backlog.
pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                listeners: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.lock().unwrap().value.clone()
    }

    pub fn set(&self, value: T) {
        self.update(|_| value);
    }

    /// Replace the value under the lock, then notify. The lock is released
    /// before listeners run, so a listener may read or mutate again.
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        let (snapshot, listeners) = {
            let mut guard = self.inner.lock().unwrap();
            let next = f(guard.value.clone());
            guard.value = next.clone();
            let listeners: Vec<Listener<T>> =
                guard.listeners.iter().map(|(_, l)| l.clone()).collect();
            (next, listeners)
        };
        for listener in listeners {
            listener(&snapshot);
        }
    }

    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription<T> {
        let mut guard = self.inner.lock().unwrap();
        let id = guard.next_id;
        guard.next_id += 1;
        guard.listeners.push((id, Arc::new(f)));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }
}

/// Removes its listener when dropped. Holding only a weak reference makes
/// teardown order irrelevant: dropping after the observable is gone is a
/// no-op.
pub struct Subscription<T> {
    id: u64,
    inner: Weak<Mutex<Inner<T>>>,
}

impl<T> Subscription<T> {
    pub fn unsubscribe(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            if let Ok(mut guard) = inner.lock() {
                guard.listeners.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn set_notifies_synchronously() {
        let value = Observable::new(0u32);
        let seen = Arc::new(AtomicUsize::new(0));
        let seen2 = seen.clone();
        let sub = value.subscribe(move |v| {
            seen2.store(*v as usize, Ordering::SeqCst);
        });

        value.set(7);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
        drop(sub);
    }

    #[test]
    fn unsubscribed_listeners_are_not_called() {
        let value = Observable::new(0u32);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls2 = calls.clone();
        let sub = value.subscribe(move |_| {
            calls2.fetch_add(1, Ordering::SeqCst);
        });

        value.set(1);
        sub.unsubscribe();
        value.set(2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_a_subscription_after_the_observable_is_safe() {
        let value = Observable::new(0u32);
        let sub = value.subscribe(|_| {});
        drop(value);
        drop(sub);
    }

    #[test]
    fn a_listener_may_read_the_value_again() {
        let value = Observable::new(0u32);
        let inner = value.clone();
        let seen = Arc::new(AtomicUsize::new(0));
        let seen2 = seen.clone();
        let _sub = value.subscribe(move |_| {
            seen2.store(inner.get() as usize, Ordering::SeqCst);
        });

        value.set(3);
        assert_eq!(seen.load(Ordering::SeqCst), 3);
    }
}
