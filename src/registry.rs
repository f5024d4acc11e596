// MIT/Apache2 License

/// An insertion-ordered map from caller-chosen names to image handles.
///
/// Entries are only ever added or replaced. Registering a name twice replaces the handle under that
/// name; the entry keeps its original position in the iteration order.
#[derive(Debug, Clone)]
pub struct ImageRegistry<I> {
    entries: Vec<(String, I)>,
}

impl<I> Default for ImageRegistry<I> {
    #[inline]
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<I> ImageRegistry<I> {
    /// Create a new, empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `image` with `name`, returning the handle it replaced, if any.
    #[inline]
    pub fn insert(&mut self, name: impl Into<String>, image: I) -> Option<I> {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, image)),
            None => {
                self.entries.push((name, image));
                None
            }
        }
    }

    /// Get the handle registered under `name`.
    #[inline]
    pub fn get(&self, name: &str) -> crate::Result<&I> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, image)| image)
            .ok_or_else(|| crate::Error::NotFound(name.to_string()))
    }

    /// Is there a handle registered under `name`?
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// The number of registered names.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the registered names and handles, in the order the names were first registered.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &I)> + '_ {
        self.entries.iter().map(|(key, image)| (key.as_str(), image))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_last_write_wins() {
        let mut registry = ImageRegistry::new();
        assert_eq!(registry.insert("hero", 1), None);
        assert_eq!(registry.insert("hero", 2), Some(1));
        assert_eq!(registry.get("hero"), Ok(&2));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregistered_names() {
        let mut registry = ImageRegistry::new();
        registry.insert("hero", ());

        for name in &["", "Hero", "hero ", "villain"] {
            assert_eq!(registry.get(name), Err(Error::NotFound(name.to_string())));
            assert!(!registry.contains(name));
        }
    }

    #[test]
    fn test_insertion_order() {
        let mut registry = ImageRegistry::new();
        registry.insert("sky", 'a');
        registry.insert("ground", 'b');
        registry.insert("sky", 'c');
        registry.insert("tree", 'd');

        let entries: Vec<_> = registry.iter().collect();
        assert_eq!(entries, vec![("sky", &'c'), ("ground", &'b'), ("tree", &'d')]);
        assert!(!registry.is_empty());
    }
}
