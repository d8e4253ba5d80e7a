/// A zero-based position into the iteration order of an [`OrderedDict`](crate::OrderedDict).
///
/// Indexing by `Position` addresses entries by where they sit in the key sequence,
/// as opposed to indexing by `&key`.
///
/// # Examples
///
/// ```
/// use ordered_dict::{OrderedDict, Position};
///
/// let mut dict = OrderedDict::new();
/// dict.insert("b", 20);
/// dict.insert("a", 10);
///
/// assert_eq!(dict[Position(0)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position(pub usize);
