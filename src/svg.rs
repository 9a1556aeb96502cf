use quick_xml::{
    Reader,
    events::{Event, attributes::AttrError},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("empty document")]
    Empty,
    #[error("root element is <{0}>, expected <svg>")]
    NotSvg(String),
    #[error("element <{0}> is never closed")]
    Unclosed(String),
    #[error("content after the root element")]
    TrailingContent,
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attr(#[from] AttrError),
}

/// What a well-formed SVG document declares about itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgInfo {
    pub view_box: Option<String>,
    pub title: Option<String>,
    pub elements: usize,
}

/// Checks that `markup` is a single well-formed `<svg>` document.
pub fn inspect(markup: &str) -> Result<SvgInfo, SvgError> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().check_end_names = true;

    let mut info = SvgInfo::default();
    let mut open: Vec<String> = Vec::new();
    let mut root_seen = false;
    let mut in_title = false;

    loop {
        let event = reader.read_event()?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if open.is_empty() {
                    if root_seen {
                        return Err(SvgError::TrailingContent);
                    }
                    if name != "svg" {
                        return Err(SvgError::NotSvg(name));
                    }
                    root_seen = true;
                    if let Some(attr) = e.try_get_attribute("viewBox")? {
                        info.view_box = Some(attr.unescape_value()?.into_owned());
                    }
                }
                info.elements += 1;
                if matches!(event, Event::Start(_)) {
                    in_title = name == "title" && info.title.is_none();
                    open.push(name);
                }
            }
            Event::End(_) => {
                open.pop();
                in_title = false;
            }
            Event::Text(ref t) => {
                let text = t.unescape()?;
                if open.is_empty() {
                    if !text.trim().is_empty() {
                        return Err(SvgError::TrailingContent);
                    }
                } else if in_title {
                    info.title = Some(text.trim().to_string());
                }
            }
            Event::CData(_) if open.is_empty() => return Err(SvgError::TrailingContent),
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(name) = open.pop() {
        return Err(SvgError::Unclosed(name));
    }
    if !root_seen {
        return Err(SvgError::Empty);
    }
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::LOGO_SVG;

    #[test]
    fn logo_is_well_formed() {
        let info = inspect(LOGO_SVG).unwrap();
        assert_eq!(info.view_box.as_deref(), Some("0 0 93.35 122.88"));
        assert_eq!(info.title.as_deref(), Some("man-abs-six-pack"));
        assert_eq!(info.elements, 3);
    }

    #[test]
    fn accepts_prolog_and_comments() {
        let doc = "<?xml version=\"1.0\"?>\n<!-- logo -->\n<svg xmlns=\"http://www.w3.org/2000/svg\"><rect/></svg>\n";
        let info = inspect(doc).unwrap();
        assert_eq!(info.elements, 2);
        assert_eq!(info.view_box, None);
    }

    #[test]
    fn rejects_other_roots() {
        assert!(matches!(inspect("<html></html>"), Err(SvgError::NotSvg(n)) if n == "html"));
    }

    #[test]
    fn rejects_unclosed_and_mismatched() {
        assert!(inspect("<svg><path d=\"M0,0\">").is_err());
        assert!(matches!(inspect("<svg><g></svg>"), Err(SvgError::Xml(_))));
    }

    #[test]
    fn rejects_empty_and_trailing() {
        assert!(matches!(inspect(""), Err(SvgError::Empty)));
        assert!(matches!(inspect("   "), Err(SvgError::Empty)));
        assert!(matches!(inspect("<svg/><svg/>"), Err(SvgError::TrailingContent)));
        assert!(matches!(inspect("<svg/>junk"), Err(SvgError::TrailingContent)));
    }
}
