//! Background palette: the fixed, ordered set of root-element classes the
//! trigger cycles through.

use crate::error::DemoError;

pub const DEFAULT_PALETTE: [&str; 5] = [
    "bg-default",
    "bg-sunset",
    "bg-ocean",
    "bg-forest",
    "bg-lavender",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundPalette {
    classes: Vec<String>,
}

impl Default for BackgroundPalette {
    fn default() -> Self {
        Self {
            classes: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BackgroundPalette {
    pub fn new<I, S>(classes: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
        if classes.is_empty() {
            return Err(DemoError::EmptyPalette);
        }
        Ok(Self { classes })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false: construction rejects an empty list.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class at `index`, wrapping around the palette.
    pub fn class_at(&self, index: usize) -> &str {
        &self.classes[index % self.classes.len()]
    }

    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.classes.len()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_has_five_distinct_classes() {
        let p = BackgroundPalette::default();
        assert_eq!(p.len(), 5);

        let mut names: Vec<&str> = p.classes().iter().map(String::as_str).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn next_index_wraps() {
        let p = BackgroundPalette::default();
        assert_eq!(p.next_index(0), 1);
        assert_eq!(p.next_index(4), 0);
        assert_eq!(p.class_at(7), p.class_at(2));
    }

    #[test]
    fn empty_palette_is_rejected() {
        let err = BackgroundPalette::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, DemoError::EmptyPalette));
    }
}
