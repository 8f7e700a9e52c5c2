// SPDX-License-Identifier: MPL-2.0
//! Story content: the page type and the book compiled into the binary.
//!
//! Pages are addressed by their position in the slice. The `id` field is
//! carried along with the content but never used to look a page up.

mod data;

pub use data::STORY_PAGES;

/// One page of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryPage {
    pub id: u32,
    pub title: &'static str,
    /// Body text; line breaks are significant and rendered as-is.
    pub content: &'static str,
    /// Text shown in place of the illustration.
    pub image_description: &'static str,
}

impl StoryPage {
    pub const fn new(
        id: u32,
        title: &'static str,
        content: &'static str,
        image_description: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            content,
            image_description,
        }
    }
}

/// Returns the page at `index`, if the book has one.
#[must_use]
pub fn page_at(pages: &[StoryPage], index: usize) -> Option<&StoryPage> {
    pages.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_book_is_not_empty() {
        assert!(!STORY_PAGES.is_empty());
    }

    #[test]
    fn bundled_pages_have_text() {
        for page in STORY_PAGES {
            assert!(!page.title.is_empty(), "page {} has no title", page.id);
            assert!(!page.content.is_empty(), "page {} has no content", page.id);
            assert!(
                !page.image_description.is_empty(),
                "page {} has no image description",
                page.id
            );
        }
    }

    #[test]
    fn page_at_is_positional() {
        let pages = [
            StoryPage::new(42, "a", "a", "a"),
            StoryPage::new(7, "b", "b", "b"),
        ];
        assert_eq!(page_at(&pages, 1).map(|p| p.title), Some("b"));
        assert!(page_at(&pages, 2).is_none());
    }
}
