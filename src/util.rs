use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

/// Free-list of scratch buffers reused while assembling composite bodies.
///
/// Buffers come back dirty; `acquire` clears before handing out, so a buffer
/// dropped mid-encode (including during a panic unwind) is still safe to
/// reuse.
static POOL: Mutex<Vec<Vec<u8>>> = Mutex::new(Vec::new());

pub(crate) struct Scratch(Vec<u8>);

pub(crate) fn acquire() -> Scratch {
    let mut buf = POOL
        .lock()
        .unwrap_or_else(|err| err.into_inner())
        .pop()
        .unwrap_or_default();
    buf.clear();
    Scratch(buf)
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let buf = std::mem::take(&mut self.0);
        POOL.lock().unwrap_or_else(|err| err.into_inner()).push(buf);
    }
}

impl Deref for Scratch {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Scratch {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::acquire;

    #[test]
    fn acquire_returns_an_empty_buffer() {
        {
            let mut buf = acquire();
            buf.extend_from_slice(b"leftover");
        }
        let buf = acquire();
        assert!(buf.is_empty());
    }

    #[test]
    fn concurrent_acquire() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let mut buf = acquire();
                        buf.push(i);
                        assert_eq!(buf.len(), 1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
