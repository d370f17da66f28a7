//! Props passed to view components and their structural comparison.
//!
//! The value domain is closed: records, sequences, numbers, strings, booleans
//! and callables. The bridge compares the props of a render request against
//! the props on screen to decide whether the view must be replaced.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::screen::ScreenAction;

/// A record of named props.
pub type Props = BTreeMap<String, PropValue>;

/// Action consumer handed to a view. Two callables are equal only if they are
/// the same allocation.
#[derive(Clone)]
pub struct Callable(Rc<dyn Fn(ScreenAction)>);

impl Callable {
    pub fn new(f: impl Fn(ScreenAction) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, action: ScreenAction) {
        (self.0)(action)
    }

    pub fn same_as(&self, other: &Callable) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable({:p})", Rc::as_ptr(&self.0).cast::<()>())
    }
}

#[derive(Clone, Debug)]
pub enum PropValue {
    Record(Props),
    Sequence(Vec<PropValue>),
    Number(f64),
    Text(String),
    Bool(bool),
    Callable(Callable),
}

impl PropValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Number prop as a non-negative integer index.
    pub fn as_index(&self) -> Option<usize> {
        self.as_number()
            .filter(|n| *n >= 0.0 && n.fract() == 0.0)
            .map(|n| n as usize)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[PropValue]> {
        match self {
            PropValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Props> {
        match self {
            PropValue::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            PropValue::Callable(c) => Some(c),
            _ => None,
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        props_are_same(self, other)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<u8> for PropValue {
    fn from(n: u8) -> Self {
        PropValue::Number(f64::from(n))
    }
}

impl From<usize> for PropValue {
    fn from(n: usize) -> Self {
        PropValue::Number(n as f64)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<Callable> for PropValue {
    fn from(c: Callable) -> Self {
        PropValue::Callable(c)
    }
}

impl From<Props> for PropValue {
    fn from(record: Props) -> Self {
        PropValue::Record(record)
    }
}

impl<T: Into<PropValue>> From<Vec<T>> for PropValue {
    fn from(items: Vec<T>) -> Self {
        PropValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Deep structural equality.
///
/// Records must have identical key sets, sequences identical lengths, and all
/// nested values must match. Callables match by identity, numbers by IEEE
/// `==`, and values of different variants never match.
pub fn props_are_same(previous: &PropValue, now: &PropValue) -> bool {
    match (previous, now) {
        (PropValue::Record(a), PropValue::Record(b)) => records_are_same(a, b),
        (PropValue::Sequence(a), PropValue::Sequence(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| props_are_same(x, y))
        }
        (PropValue::Number(a), PropValue::Number(b)) => a == b,
        (PropValue::Text(a), PropValue::Text(b)) => a == b,
        (PropValue::Bool(a), PropValue::Bool(b)) => a == b,
        (PropValue::Callable(a), PropValue::Callable(b)) => a.same_as(b),
        _ => false,
    }
}

/// [`props_are_same`] for two records.
pub fn records_are_same(previous: &Props, now: &Props) -> bool {
    previous.len() == now.len()
        && previous
            .iter()
            .all(|(key, value)| now.get(key).is_some_and(|other| props_are_same(value, other)))
}

/// Builds a [`Props`] record from `key => value` pairs.
#[macro_export]
macro_rules! props {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut record = $crate::props::Props::new();
        $(record.insert(::std::string::String::from($key), $crate::props::PropValue::from($value));)*
        record
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props;

    fn noop() -> Callable {
        Callable::new(|_| {})
    }

    #[test]
    fn nested_value_difference_is_detected() {
        let a = props! { "outer" => props! { "inner" => 1.0 }, "flag" => true };
        let b = props! { "outer" => props! { "inner" => 2.0 }, "flag" => true };
        assert!(!records_are_same(&a, &b));
    }

    #[test]
    fn extra_key_is_not_a_subset_match() {
        let a = props! { "x" => 1.0 };
        let b = props! { "x" => 1.0, "y" => 2.0 };
        assert!(!records_are_same(&a, &b));
        assert!(!records_are_same(&b, &a));
    }

    #[test]
    fn same_size_records_with_different_keys_differ() {
        let a = props! { "x" => 1.0 };
        let b = props! { "y" => 1.0 };
        assert!(!records_are_same(&a, &b));
    }

    #[test]
    fn sequences_compare_length_and_position() {
        let short = PropValue::from(vec![1.0, 2.0]);
        let long = PropValue::from(vec![1.0, 2.0, 3.0]);
        let swapped = PropValue::from(vec![2.0, 1.0]);
        assert!(!props_are_same(&short, &long));
        assert!(!props_are_same(&short, &swapped));
        assert!(props_are_same(&short, &PropValue::from(vec![1.0, 2.0])));
    }

    #[test]
    fn callables_compare_by_identity() {
        let f = noop();
        let g = noop();
        assert!(props_are_same(&f.clone().into(), &f.into()));
        assert!(!props_are_same(&noop().into(), &g.into()));
    }

    #[test]
    fn variants_never_cross_match() {
        assert!(!props_are_same(&PropValue::from(1.0), &PropValue::from(true)));
        assert!(!props_are_same(&PropValue::from("1"), &PropValue::from(1.0)));
        assert!(!props_are_same(
            &PropValue::from(Vec::<PropValue>::new()),
            &PropValue::from(Props::new())
        ));
    }

    #[test]
    fn deep_equal_records_match() {
        let f = noop();
        let a = props! {
            "position" => 2u8,
            "items" => vec![props! { "from" => 0usize, "to" => 1usize }],
            "label" => "map",
            "consume_action" => f.clone(),
        };
        let b = props! {
            "position" => 2u8,
            "items" => vec![props! { "from" => 0usize, "to" => 1usize }],
            "label" => "map",
            "consume_action" => f,
        };
        assert!(records_are_same(&a, &b));
        assert_eq!(PropValue::from(a), PropValue::from(b));
    }

    #[test]
    fn index_rejects_fractions_and_negatives() {
        assert_eq!(PropValue::from(3usize).as_index(), Some(3));
        assert_eq!(PropValue::from(1.5).as_index(), None);
        assert_eq!(PropValue::from(-1.0).as_index(), None);
    }
}
