use crate::anchors::BLOCK_MARKER;
use std::mem;

/// Lazily groups pages into course blocks.
///
/// A page containing [`BLOCK_MARKER`] starts a new block and flushes the one
/// accumulated so far. Other pages are appended to the current block, so a
/// course spanning several pages comes out as one string. Text found before
/// the first marker page is emitted as a leading block of its own.
#[derive(Debug)]
pub struct Segments<I> {
    pages: I,
    current: String,
}

impl<I> Iterator for Segments<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        for page in self.pages.by_ref() {
            let page = page.as_ref();

            if page.contains(BLOCK_MARKER) {
                if !self.current.is_empty() {
                    return Some(mem::replace(&mut self.current, page.to_string()));
                }
                self.current = page.to_string();
            } else {
                self.current.push_str(page);
            }
        }

        (!self.current.is_empty()).then(|| mem::take(&mut self.current))
    }
}

/// Splits a sequence of page texts into raw course blocks
pub fn segment<I>(pages: I) -> Segments<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Segments {
        pages: pages.into_iter(),
        current: String::new(),
    }
}

/// Whether a block opens with a course (as opposed to front matter)
pub fn is_course_block(block: &str) -> bool {
    block.contains(BLOCK_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker_page(name: &str) -> String {
        format!("{name}\n{BLOCK_MARKER}\n")
    }

    #[test]
    fn test_one_block_per_marker_page() {
        let pages = [marker_page("a"), marker_page("b"), marker_page("c")];
        let blocks: Vec<_> = segment(&pages).collect();

        assert_eq!(blocks, pages);
    }

    #[test]
    fn test_continuation_pages_are_appended() {
        let pages = [
            marker_page("a"),
            "a, page 2\n".to_string(),
            "a, page 3\n".to_string(),
            marker_page("b"),
            "b, page 2\n".to_string(),
        ];
        let blocks: Vec<_> = segment(&pages).collect();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], format!("{}a, page 2\na, page 3\n", pages[0]));
        assert_eq!(blocks[1], format!("{}b, page 2\n", pages[3]));
    }

    #[test]
    fn test_front_matter_is_a_leading_block() {
        let pages = ["Title page\n".to_string(), marker_page("a")];
        let blocks: Vec<_> = segment(&pages).collect();

        assert_eq!(blocks, ["Title page\n".to_string(), marker_page("a")]);
        assert!(!is_course_block(&blocks[0]));
        assert!(is_course_block(&blocks[1]));
    }

    #[test]
    fn test_concatenation_is_preserved() {
        let pages = [
            "cover\n".to_string(),
            String::new(),
            marker_page("a"),
            "more a\n".to_string(),
            marker_page("b"),
            marker_page("c"),
            "tail\n".to_string(),
        ];

        let blocks: String = segment(&pages).collect();
        assert_eq!(blocks, pages.concat());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(segment(Vec::<String>::new()).count(), 0);
        assert_eq!(segment(["", ""]).count(), 0);
    }

    #[test]
    fn test_is_lazy() {
        let mut pulled = 0;
        let pages = [marker_page("a"), marker_page("b"), marker_page("c")];
        let mut blocks = segment(pages.iter().inspect(|_| pulled += 1));

        assert!(blocks.next().is_some());
        drop(blocks);
        assert_eq!(pulled, 2);
    }
}
