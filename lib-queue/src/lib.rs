#![cfg_attr(not(test), no_std)]

use core::fmt;
use core::iter::ExactSizeIterator;
use core::iter::Iterator;

/// Fixed capacity FIFO ring buffer. Items always come out in the order they were pushed, which is
/// what consumers on another execution context (e.g. a UI loop) rely on.
///
pub struct Queue<T: Sized, const SIZE: usize> {
    pub(crate) data: [Option<T>; SIZE],

    /// Amount of items currently in the queue.
    pub(crate) size: usize,

    /// Index of the oldest item in the queue (i.e. the next item to be taken from the queue)
    pub(crate) bottom: usize,
}

impl<T: Sized, const SIZE: usize> Queue<T, SIZE> {
    const NONE_T: Option<T> = None;

    pub const fn new() -> Queue<T, SIZE> {
        Queue {
            data: [Self::NONE_T; SIZE],
            size: 0,
            bottom: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == SIZE
    }

    /// Pushes an element to the back of the queue, making room by evicting the oldest element if
    /// the queue is full. The evicted element is returned so the caller can account for it. With a
    /// capacity of zero the pushed item itself is handed back.
    ///
    pub fn push_evicting(&mut self, item: T) -> Option<T> {
        if SIZE == 0 {
            return Some(item);
        }
        let evicted = if self.is_full() { self.next() } else { None };
        self.data[(self.bottom + self.size) % SIZE] = Some(item);
        self.size += 1;
        evicted
    }
}

impl<T: Sized + core::fmt::Debug, const SIZE: usize> fmt::Debug for Queue<T, SIZE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue [size: {}/{}]", self.size, SIZE)
    }
}

impl<T: Sized, const SIZE: usize> Iterator for Queue<T, SIZE> {
    type Item = T;

    /// Removes the oldest element from the queue or returns None if the queue is empty.
    ///
    fn next(&mut self) -> Option<T> {
        if self.size > 0 {
            let item = self.data[self.bottom].take();
            self.bottom = (self.bottom + 1) % SIZE;
            self.size -= 1;
            return item;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

impl<T: Sized, const SIZE: usize> ExactSizeIterator for Queue<T, SIZE> {
    fn len(&self) -> usize {
        self.size
    }
}
