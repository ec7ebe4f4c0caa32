// Shared helpers for the integration tests.
#![allow(dead_code)]

use std::fmt::Debug;

use shapewalk::{Combine, Visit};

/// Records every visited element as its `Debug` text.
#[derive(Debug, Default)]
pub struct Trace {
    pub seen: Vec<String>,
}

impl<T: Debug + ?Sized, X> Visit<T, X> for Trace {
    fn visit(&mut self, value: &T, _: X) {
        self.seen.push(format!("{value:?}"));
    }
}

/// Folds every element into a `Vec` of its `Debug` text.
pub struct Collect;

impl<T: Debug + ?Sized, X> Combine<Vec<String>, T, X> for Collect {
    fn combine(&mut self, mut acc: Vec<String>, value: &T, _: X) -> Vec<String> {
        acc.push(format!("{value:?}"));
        acc
    }
}

// Traverse a value with a fresh `Trace` and compare the visited elements.
#[macro_export]
macro_rules! assert_visits {
    ($value:expr, [$($expected:expr),* $(,)?]) => {{
        let mut trace = $crate::cases::Trace::default();
        shapewalk::traverse(&$value, &mut trace);
        let expected: Vec<&str> = vec![$($expected),*];
        pretty_assertions::assert_eq!(trace.seen, expected);
    }};
}
