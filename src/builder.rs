//! Builder: a `Director` assembles a document step by step through the
//! `Builder` trait and never learns which format it is producing.

use crate::error::Result;
use std::io::Write;
use tracing::debug;

const TEXT_RULE: &str = "==========================================\n";

/// The steps a document is made of.
pub trait Builder {
    fn make_title(&mut self, title: &str);
    fn make_string(&mut self, text: &str);
    fn make_items(&mut self, items: &[&str]);
    fn close(&mut self);
}

pub struct Director<'a, B: Builder + ?Sized> {
    builder: &'a mut B,
}

impl<'a, B: Builder + ?Sized> Director<'a, B> {
    pub fn new(builder: &'a mut B) -> Self {
        Director { builder }
    }

    /// Runs the fixed greeting script against the builder.
    pub fn construct(&mut self) {
        debug!("constructing greeting document");
        self.builder.make_title("Greeting");
        self.builder.make_string("General greetings");
        self.builder.make_items(&["How are you?", "Hello.", "Hi."]);
        self.builder.make_string("Time-dependent greetings");
        self.builder
            .make_items(&["Good morning.", "Good afternoon", "Good evening"]);
        self.builder.close();
    }
}

/// Plain text renderer.
#[derive(Debug, Default)]
pub struct TextBuilder {
    content: String,
}

impl TextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl Builder for TextBuilder {
    fn make_title(&mut self, title: &str) {
        self.content.push_str(TEXT_RULE);
        self.content.push_str(&format!("【{title}】\n\n"));
    }

    fn make_string(&mut self, text: &str) {
        self.content.push_str(&format!("■ {text}\n\n"));
    }

    fn make_items(&mut self, items: &[&str]) {
        for item in items {
            self.content.push_str(&format!("* {item}\n"));
        }
    }

    fn close(&mut self) {
        self.content.push_str(TEXT_RULE);
    }
}

/// HTML renderer. Text content is escaped; the markup around it is not.
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    content: String,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }
}

impl Builder for HtmlBuilder {
    fn make_title(&mut self, title: &str) {
        self.content
            .push_str("<!DOCTYPE html>\n<html>\n<head>...</head>\n<body>\n");
        self.content.push_str(&format!(
            "<h1>{}</h1>\n\n",
            html_escape::encode_text(title)
        ));
    }

    fn make_string(&mut self, text: &str) {
        self.content
            .push_str(&format!("<p>{}</p>\n\n", html_escape::encode_text(text)));
    }

    fn make_items(&mut self, items: &[&str]) {
        self.content.push_str("<ul>\n");
        for item in items {
            self.content
                .push_str(&format!("  <li>{}</li>\n", html_escape::encode_text(item)));
        }
        self.content.push_str("</ul>\n");
    }

    fn close(&mut self) {
        self.content.push_str("</body>\n</html>");
    }
}

pub fn demo(out: &mut dyn Write) -> Result<()> {
    let mut text = TextBuilder::new();
    Director::new(&mut text).construct();
    writeln!(out, "{}", text.content())?;

    let mut html = HtmlBuilder::new();
    Director::new(&mut html).construct();
    writeln!(out, "{}", html.content())?;
    Ok(())
}
