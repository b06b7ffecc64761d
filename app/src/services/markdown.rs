// bluetick/src/services/markdown.rs

//! Article paragraphs are small markdown snippets: `#`..`###` headings,
//! `![alt](url)` images, `-`/`*` list items and `**bold**` spans. Each one is
//! parsed on its own and flattened into a single [`Block`].

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};
use serde::Serialize;

/// Deepest heading level the article layout has a style for.
const MAX_HEADING_LEVEL: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
  pub text: String,
  pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
  Heading { level: u8, text: String },
  Image { alt: String, url: String },
  ListItem { spans: Vec<Span> },
  Paragraph { spans: Vec<Span> },
}

enum Shape {
  Heading(u8),
  ListItem,
}

pub fn parse_paragraph(raw: &str) -> Block {
  let mut shape = None;
  let mut spans: Vec<Span> = Vec::new();
  let mut image: Option<(String, String)> = None;
  let mut in_image = false;
  let mut bold_depth = 0usize;

  for event in Parser::new_ext(raw.trim(), Options::empty()) {
    match event {
      Event::Start(Tag::Heading { level, .. }) => {
        shape.get_or_insert(Shape::Heading((level as u8).min(MAX_HEADING_LEVEL)));
      }
      Event::Start(Tag::Item) => {
        shape.get_or_insert(Shape::ListItem);
      }
      Event::Start(Tag::Image { dest_url, .. }) => {
        in_image = true;
        image.get_or_insert_with(|| (String::new(), dest_url.into_string()));
      }
      Event::End(TagEnd::Image) => in_image = false,
      Event::Start(Tag::Strong) => bold_depth += 1,
      Event::End(TagEnd::Strong) => bold_depth = bold_depth.saturating_sub(1),
      Event::Text(text) | Event::Code(text) | Event::InlineHtml(text) | Event::Html(text) => {
        if in_image {
          if let Some((alt, _)) = image.as_mut() {
            alt.push_str(&text);
          }
        } else {
          push_span(&mut spans, &text, bold_depth > 0);
        }
      }
      Event::SoftBreak | Event::HardBreak if !in_image => push_span(&mut spans, " ", bold_depth > 0),
      _ => {}
    }
  }

  match (shape, image) {
    (Some(Shape::Heading(level)), _) => Block::Heading {
      level,
      text: spans.into_iter().map(|s| s.text).collect::<String>().trim().to_string(),
    },
    (Some(Shape::ListItem), _) => Block::ListItem { spans },
    (None, Some((alt, url))) if spans.is_empty() => Block::Image { alt, url },
    (None, _) => Block::Paragraph { spans },
  }
}

pub fn render(body: &[String]) -> Vec<Block> {
  body.iter().map(|p| parse_paragraph(p)).collect()
}

/// Text of a paragraph as it should be read aloud. Images have none.
pub fn plain_text(raw: &str) -> Option<String> {
  let text = match parse_paragraph(raw) {
    Block::Heading { text, .. } => text,
    Block::Image { .. } => return None,
    Block::ListItem { spans } | Block::Paragraph { spans } => spans.into_iter().map(|s| s.text).collect(),
  };
  if text.trim().is_empty() {
    None
  } else {
    Some(text)
  }
}

/// Escapes visitor input for an HTML body.
pub fn escape_text(raw: &str) -> String {
  let mut out = String::with_capacity(raw.len());
  html::push_html(&mut out, std::iter::once(Event::Text(raw.into())));
  out
}

// The parser may split one run of text into several events.
fn push_span(spans: &mut Vec<Span>, text: &str, bold: bool) {
  match spans.last_mut() {
    Some(last) if last.bold == bold => last.text.push_str(text),
    _ => spans.push(Span {
      text: text.to_string(),
      bold,
    }),
  }
}
