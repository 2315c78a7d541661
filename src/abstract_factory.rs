//! Abstract Factory: a page is assembled from links and trays obtained
//! from a `Factory`. Swapping the factory swaps the whole family of parts
//! (list markup or table markup) without touching the assembly code.

use crate::config::AbstractFactoryConfig;
use crate::error::{PatternError, Result};
use html_escape::{encode_double_quoted_attribute, encode_text};
use itertools::Itertools;
use std::io::Write;
use tracing::{debug, info};

/// Anything that can sit inside a tray or a page.
pub trait Item {
    fn caption(&self) -> &str;
    fn make_html(&self) -> String;
}

/// A captioned group of items.
pub trait Tray: Item {
    fn add(&mut self, item: Box<dyn Item>);

    /// Hands the finished tray over as a plain item.
    fn into_item(self: Box<Self>) -> Box<dyn Item>;
}

pub trait Page {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn add(&mut self, item: Box<dyn Item>);
    fn make_html(&self) -> String;

    fn output(&self, out: &mut dyn Write) -> Result<()> {
        info!(title = self.title(), author = self.author(), "writing page");
        out.write_all(self.make_html().as_bytes())?;
        Ok(())
    }
}

pub trait Factory {
    fn create_link(&self, caption: &str, url: &str) -> Box<dyn Item>;
    fn create_tray(&self, caption: &str) -> Box<dyn Tray>;
    fn create_page(&self, title: &str, author: &str) -> Box<dyn Page>;
}

/// Picks a factory by name.
pub fn factory_for(name: &str) -> Result<Box<dyn Factory>> {
    debug!(name, "selecting factory");
    match name {
        "list" => Ok(Box::new(ListFactory)),
        "table" => Ok(Box::new(TableFactory)),
        other => Err(PatternError::UnknownFactory(other.to_string())),
    }
}

fn page_head(title: &str) -> String {
    let title = encode_text(title);
    format!("<html><head><title>{title}</title></head>\n<body>\n<h1>{title}</h1>\n")
}

fn page_tail(author: &str) -> String {
    format!("<hr><address>{}</address></body></html>\n", encode_text(author))
}

// ============================================================================
// List family
// ============================================================================

pub struct ListFactory;

impl Factory for ListFactory {
    fn create_link(&self, caption: &str, url: &str) -> Box<dyn Item> {
        Box::new(ListLink {
            caption: caption.to_string(),
            url: url.to_string(),
        })
    }

    fn create_tray(&self, caption: &str) -> Box<dyn Tray> {
        Box::new(ListTray {
            caption: caption.to_string(),
            items: Vec::new(),
        })
    }

    fn create_page(&self, title: &str, author: &str) -> Box<dyn Page> {
        Box::new(ListPage {
            title: title.to_string(),
            author: author.to_string(),
            content: Vec::new(),
        })
    }
}

struct ListLink {
    caption: String,
    url: String,
}

impl Item for ListLink {
    fn caption(&self) -> &str {
        &self.caption
    }

    fn make_html(&self) -> String {
        format!(
            "  <li><a href=\"{}\">{}</a></li>\n",
            encode_double_quoted_attribute(&self.url),
            encode_text(&self.caption)
        )
    }
}

struct ListTray {
    caption: String,
    items: Vec<Box<dyn Item>>,
}

impl Item for ListTray {
    fn caption(&self) -> &str {
        &self.caption
    }

    fn make_html(&self) -> String {
        format!(
            "<li>\n{}\n<ul>\n{}</ul>\n</li>\n",
            encode_text(&self.caption),
            self.items.iter().map(|item| item.make_html()).join("")
        )
    }
}

impl Tray for ListTray {
    fn add(&mut self, item: Box<dyn Item>) {
        self.items.push(item);
    }

    fn into_item(self: Box<Self>) -> Box<dyn Item> {
        self
    }
}

struct ListPage {
    title: String,
    author: String,
    content: Vec<Box<dyn Item>>,
}

impl Page for ListPage {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn add(&mut self, item: Box<dyn Item>) {
        self.content.push(item);
    }

    fn make_html(&self) -> String {
        format!(
            "{}<ul>\n{}</ul>\n{}",
            page_head(&self.title),
            self.content.iter().map(|item| item.make_html()).join(""),
            page_tail(&self.author)
        )
    }
}

// ============================================================================
// Table family
// ============================================================================

pub struct TableFactory;

impl Factory for TableFactory {
    fn create_link(&self, caption: &str, url: &str) -> Box<dyn Item> {
        Box::new(TableLink {
            caption: caption.to_string(),
            url: url.to_string(),
        })
    }

    fn create_tray(&self, caption: &str) -> Box<dyn Tray> {
        Box::new(TableTray {
            caption: caption.to_string(),
            items: Vec::new(),
        })
    }

    fn create_page(&self, title: &str, author: &str) -> Box<dyn Page> {
        Box::new(TablePage {
            title: title.to_string(),
            author: author.to_string(),
            content: Vec::new(),
        })
    }
}

struct TableLink {
    caption: String,
    url: String,
}

impl Item for TableLink {
    fn caption(&self) -> &str {
        &self.caption
    }

    fn make_html(&self) -> String {
        format!(
            "<td><a href=\"{}\">{}</a></td>\n",
            encode_double_quoted_attribute(&self.url),
            encode_text(&self.caption)
        )
    }
}

struct TableTray {
    caption: String,
    items: Vec<Box<dyn Item>>,
}

impl Item for TableTray {
    fn caption(&self) -> &str {
        &self.caption
    }

    fn make_html(&self) -> String {
        // The caption cell spans every item column; an empty tray still needs one.
        let colspan = self.items.len().max(1);
        format!(
            "<td><table width=\"100%\" border=\"1\"><tr>\
             <td bgcolor=\"#cccccc\" align=\"center\" colspan=\"{colspan}\"><b>{}</b></td>\
             </tr>\n<tr>\n{}</tr></table></td>\n",
            encode_text(&self.caption),
            self.items.iter().map(|item| item.make_html()).join("")
        )
    }
}

impl Tray for TableTray {
    fn add(&mut self, item: Box<dyn Item>) {
        self.items.push(item);
    }

    fn into_item(self: Box<Self>) -> Box<dyn Item> {
        self
    }
}

struct TablePage {
    title: String,
    author: String,
    content: Vec<Box<dyn Item>>,
}

impl Page for TablePage {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn add(&mut self, item: Box<dyn Item>) {
        self.content.push(item);
    }

    fn make_html(&self) -> String {
        format!(
            "{}<table width=\"80%\" border=\"3\">\n{}</table>\n{}",
            page_head(&self.title),
            self.content
                .iter()
                .map(|item| format!("<tr>{}</tr>", item.make_html()))
                .join(""),
            page_tail(&self.author)
        )
    }
}

/// Assembles the link page. Depends on nothing but the `Factory` roles.
pub fn build_link_page(factory: &dyn Factory) -> Box<dyn Page> {
    let mut news = factory.create_tray("Newspapers");
    news.add(factory.create_link("The Guardian", "https://www.theguardian.com/"));
    news.add(factory.create_link("Le Monde", "https://www.lemonde.fr/"));

    let mut engines = factory.create_tray("Search engines");
    engines.add(factory.create_link("DuckDuckGo", "https://duckduckgo.com/"));
    engines.add(factory.create_link("Wikipedia", "https://www.wikipedia.org/"));

    let mut search = factory.create_tray("Search");
    search.add(engines.into_item());
    search.add(factory.create_link("Rust docs", "https://doc.rust-lang.org/"));

    let mut page = factory.create_page("LinkPage", "pattern-vignettes");
    page.add(news.into_item());
    page.add(search.into_item());
    page
}

pub fn demo(config: &AbstractFactoryConfig, out: &mut dyn Write) -> Result<()> {
    let factory = factory_for(&config.factory)?;
    build_link_page(factory.as_ref()).output(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_for_known_names() {
        assert!(factory_for("list").is_ok());
        assert!(factory_for("table").is_ok());
    }

    #[test]
    fn test_factory_for_unknown_name() {
        let err = factory_for("xml").err().unwrap();
        assert!(matches!(err, PatternError::UnknownFactory(name) if name == "xml"));
    }

    #[test]
    fn test_list_page_markup() {
        let factory = ListFactory;
        let mut tray = factory.create_tray("Tray");
        tray.add(factory.create_link("A", "http://a/"));
        let mut page = factory.create_page("T", "me");
        page.add(tray.into_item());

        assert_eq!(
            page.make_html(),
            "<html><head><title>T</title></head>\n<body>\n<h1>T</h1>\n\
             <ul>\n<li>\nTray\n<ul>\n  <li><a href=\"http://a/\">A</a></li>\n</ul>\n</li>\n</ul>\n\
             <hr><address>me</address></body></html>\n"
        );
    }

    #[test]
    fn test_table_tray_colspan_matches_items() {
        let factory = TableFactory;
        let mut tray = factory.create_tray("T");
        tray.add(factory.create_link("A", "http://a/"));
        tray.add(factory.create_link("B", "http://b/"));
        let html = tray.make_html();
        assert!(html.contains("colspan=\"2\""));
        assert!(html.contains("<td><a href=\"http://b/\">B</a></td>"));
    }

    #[test]
    fn test_captions_are_escaped() {
        let link = ListFactory.create_link("Q&A <faq>", "http://x/?a=1&b=\"2\"");
        let html = link.make_html();
        assert!(html.contains("Q&amp;A &lt;faq&gt;"));
        assert!(html.contains("&quot;2&quot;"));
        assert_eq!(link.caption(), "Q&A <faq>");
    }

    #[test]
    fn test_same_assembly_different_families() {
        let list = build_link_page(&ListFactory).make_html();
        let table = build_link_page(&TableFactory).make_html();

        assert!(list.contains("<ul>") && !list.contains("<table"));
        assert!(table.contains("<table") && !table.contains("<ul>"));
        for html in [&list, &table] {
            assert!(html.contains("DuckDuckGo"));
            assert!(html.contains("<title>LinkPage</title>"));
        }
    }

    #[test]
    fn test_demo_with_unknown_factory_fails() {
        let config = AbstractFactoryConfig {
            factory: "svg".into(),
        };
        let mut out = Vec::new();
        assert!(demo(&config, &mut out).is_err());
        assert!(out.is_empty());
    }
}
