use include_dir::{include_dir, Dir};
use serde::Deserialize;

static THEORY_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/theory");

/// One page of the theory screen
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TheoryPage {
    pub order: u32,
    pub title: String,
    pub paragraphs: Vec<String>,
}

/// All bundled pages in reading order
pub fn pages() -> Result<Vec<TheoryPage>, serde_json::Error> {
    let mut pages = THEORY_DIR
        .files()
        .filter(|f| f.path().extension().is_some_and(|ext| ext == "json"))
        .filter_map(|f| f.contents_utf8())
        .map(serde_json::from_str::<TheoryPage>)
        .collect::<Result<Vec<_>, _>>()?;
    pages.sort_by_key(|p| p.order);
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_load_in_order() {
        let pages = pages().unwrap();
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[0].title, "Intervalos");
        assert!(pages.windows(2).all(|w| w[0].order < w[1].order));
    }

    #[test]
    fn test_pages_have_text() {
        for page in pages().unwrap() {
            assert!(!page.title.is_empty());
            assert!(!page.paragraphs.is_empty(), "{} is empty", page.title);
        }
    }

    #[test]
    fn test_notation_page_mentions_infinity() {
        let pages = pages().unwrap();
        assert!(pages
            .iter()
            .flat_map(|p| p.paragraphs.iter())
            .any(|line| line.contains("+∞")));
    }
}
