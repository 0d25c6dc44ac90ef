/// Construction parameters for [`UnionFind`](crate::UnionFind).
///
/// `None` entries in `elements` stand for absent elements and make
/// construction fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config<T> {
    pub elements: Vec<Option<T>>,
    pub allow_find_return_none: bool,
}

impl<T> Default for Config<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            allow_find_return_none: false,
        }
    }
}

impl<T> Config<T> {
    pub fn with_elements(elements: impl IntoIterator<Item = T>) -> Self {
        Self {
            elements: elements.into_iter().map(Some).collect(),
            ..Self::default()
        }
    }

    /// Makes `find` answer `Ok(None)` for unknown elements instead of failing.
    pub fn allow_find_return_none(self) -> Self {
        Self {
            allow_find_return_none: true,
            ..self
        }
    }
}
