//! Annotators recognize terms that belong to an annotation category.
//!
//! Annotators are immutable after construction and can be shared between
//! pipelines running on different threads.

use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

/// Decides whether a text belongs to the annotator's category.
pub trait Annotator: Send + Sync {
    fn accept(&self, text: &str) -> bool;
}

impl<A: Annotator + ?Sized> Annotator for Arc<A> {
    fn accept(&self, text: &str) -> bool {
        (**self).accept(text)
    }
}

impl<A: Annotator + ?Sized> Annotator for &A {
    fn accept(&self, text: &str) -> bool {
        (**self).accept(text)
    }
}

/// Accepts single words from a fixed, case-insensitive vocabulary.
#[derive(Debug, Clone)]
pub struct OneWordAnnotator {
    words: AHashSet<String>,
}

impl OneWordAnnotator {
    pub fn new<I, W>(words: I) -> OneWordAnnotator
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        OneWordAnnotator {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Annotator for OneWordAnnotator {
    fn accept(&self, text: &str) -> bool {
        if text.chars().any(char::is_uppercase) {
            self.words.contains(&text.to_lowercase())
        } else {
            self.words.contains(text)
        }
    }
}

pub const DEFAULT_COLORS: &[&str] = &[
    "white", "navy", "blue", "aqua", "teal", "olive", "green", "lime", "yellow", "orange", "red",
    "maroon", "fuchsia", "purple", "silver", "gray", "black", "brown",
];

pub const DEFAULT_ANIMALS: &[&str] = &["fox", "dog", "cat", "horse", "cow", "duck"];

static DEFAULT_COLOR_ANNOTATOR: LazyLock<ColorAnnotator> =
    LazyLock::new(|| ColorAnnotator::new(DEFAULT_COLORS));

static DEFAULT_ANIMAL_ANNOTATOR: LazyLock<AnimalAnnotator> =
    LazyLock::new(|| AnimalAnnotator::new(DEFAULT_ANIMALS));

/// Accepts color names.
#[derive(Debug, Clone)]
pub struct ColorAnnotator(OneWordAnnotator);

impl ColorAnnotator {
    pub fn new<I, W>(colors: I) -> ColorAnnotator
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        ColorAnnotator(OneWordAnnotator::new(colors))
    }

    /// Shared annotator over [`DEFAULT_COLORS`].
    pub fn with_default_colors() -> &'static ColorAnnotator {
        &DEFAULT_COLOR_ANNOTATOR
    }
}

impl Annotator for ColorAnnotator {
    fn accept(&self, text: &str) -> bool {
        self.0.accept(text)
    }
}

/// Accepts animal names.
#[derive(Debug, Clone)]
pub struct AnimalAnnotator(OneWordAnnotator);

impl AnimalAnnotator {
    pub fn new<I, W>(animals: I) -> AnimalAnnotator
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        AnimalAnnotator(OneWordAnnotator::new(animals))
    }

    /// Shared annotator over [`DEFAULT_ANIMALS`].
    pub fn with_default_animals() -> &'static AnimalAnnotator {
        &DEFAULT_ANIMAL_ANNOTATOR
    }
}

impl Annotator for AnimalAnnotator {
    fn accept(&self, text: &str) -> bool {
        self.0.accept(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_word_annotator_ignores_case() {
        let annotator = OneWordAnnotator::new(["Red", "blue"]);
        assert_eq!(annotator.len(), 2);
        assert!(annotator.accept("red"));
        assert!(annotator.accept("RED"));
        assert!(annotator.accept("Blue"));
        assert!(!annotator.accept("green"));
        assert!(!annotator.accept("red dog"));
    }

    #[test]
    fn test_default_annotators() {
        let colors = ColorAnnotator::with_default_colors();
        for color in DEFAULT_COLORS {
            assert!(colors.accept(color));
        }
        assert!(!colors.accept("fox"));
        assert!(std::ptr::eq(colors, ColorAnnotator::with_default_colors()));

        let animals = AnimalAnnotator::with_default_animals();
        assert!(animals.accept("Fox"));
        assert!(!animals.accept("brown"));
    }

    #[test]
    fn test_shared_annotator() {
        let annotator: Arc<dyn Annotator> = Arc::new(AnimalAnnotator::new(["owl"]));
        let clone = Arc::clone(&annotator);
        let handle = std::thread::spawn(move || clone.accept("owl"));
        assert!(handle.join().unwrap());
        assert!(!annotator.accept("fox"));
    }
}
