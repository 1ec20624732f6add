use async_trait::async_trait;
use azania_shell::{Page, PageResolver, Resolution, ResolveResult};

use crate::pages::{AboutPage, ContactPage, HomePage, ProgramsPage};

/// Resolves the pages of the academy website.
#[derive(Debug, Clone, Copy)]
pub struct AcademyPages;

fn normalise(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        m => m,
    }
}

#[async_trait(?Send)]
impl PageResolver for AcademyPages {
    async fn resolve(&self, path: &str) -> ResolveResult<Resolution> {
        let page = match normalise(path) {
            "/" | "/home" => Page::of::<HomePage>("HomePage"),
            "/about" => Page::of::<AboutPage>("AboutPage"),
            "/programs" => Page::of::<ProgramsPage>("ProgramsPage"),
            "/contact" => Page::of::<ContactPage>("ContactPage"),
            _ => return Ok(Resolution::NotFound),
        };

        Ok(Resolution::Resolved(page))
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn resolve(path: &str) -> Option<&'static str> {
        block_on(AcademyPages.resolve(path))
            .unwrap()
            .into_page()
            .map(|m| m.name())
    }

    #[test]
    fn known_pages() {
        assert_eq!(resolve("/"), Some("HomePage"));
        assert_eq!(resolve("/home"), Some("HomePage"));
        assert_eq!(resolve("/about"), Some("AboutPage"));
        assert_eq!(resolve("/programs"), Some("ProgramsPage"));
        assert_eq!(resolve("/contact"), Some("ContactPage"));
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(resolve("/about/"), Some("AboutPage"));
        assert_eq!(resolve("//"), Some("HomePage"));
    }

    #[test]
    fn unknown_page_is_not_found() {
        assert_eq!(
            block_on(AcademyPages.resolve("/admissions")).unwrap(),
            Resolution::NotFound
        );
    }
}
