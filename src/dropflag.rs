//! This module is for testing only

use std::rc::Rc;
use std::cell::Cell;

/// Shared tally of how many `Counted` values were dropped.
#[derive(Clone)]
pub struct DropCounter {
    dropped: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter { dropped: Rc::new(Cell::new(0)) }
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }
}

/// A value that reports its drop to a `DropCounter`. Clones report separately.
#[derive(Clone)]
pub struct Counted {
    pub value: i32,
    counter: DropCounter,
}

impl Counted {
    pub fn new(value: i32, counter: &DropCounter) -> Counted {
        Counted { value, counter: counter.clone() }
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.counter.dropped.set(self.counter.dropped.get() + 1);
    }
}

#[test]
fn dropflag() {
    let counter = DropCounter::new();
    let counted = Counted::new(1, &counter);
    let twin = counted.clone();
    assert_eq!(0, counter.dropped());
    std::mem::drop(counted);
    assert_eq!(1, counter.dropped());
    std::mem::drop(twin);
    assert_eq!(2, counter.dropped());
}
