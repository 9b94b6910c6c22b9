//! Result link extraction from search engine HTML.
//!
//! [`ResultExtractor`] scans markup as a flat stream of start and end tag
//! tokens and records the `href` of every anchor that opens inside a result
//! heading (`<h3 class="r">`). The scan is driven by the `html5ever`
//! tokenizer alone, without tree construction: unclosed tags, stray end tags
//! and unknown entities never abort it, and no element stack is kept.
//!
//! Only a single "inside a result heading" flag is tracked. Every `</h3>`
//! token clears it, whether or not a heading is open, so a heading nested
//! inside a marked heading ends the marked region early. End tags of other
//! elements never touch it.

use crate::error::SearchError;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use html5ever::TokenizerResult;
use std::cell::{Cell, RefCell};

/// Tag name of the element that opens a primary search result.
pub const RESULT_HEADING_TAG: &str = "h3";

/// Exact `class` attribute value marking a primary result heading.
pub const RESULT_MARKER_CLASS: &str = "r";

/// Streaming scanner that collects result links page by page.
///
/// Feed one page of markup, read the links with [`drain`](Self::drain), then
/// [`reset`](Self::reset) before the next page. Without a reset, links from
/// successive pages accumulate.
#[derive(Debug, Default)]
pub struct ResultExtractor {
    in_result: bool,
    links: Vec<String>,
}

impl ResultExtractor {
    /// Create an extractor with empty scan state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `markup` and append every result link found to the internal list.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Parse`] if the tokenizer stops before the end
    /// of the input.
    pub fn feed(&mut self, markup: &str) -> Result<(), SearchError> {
        let sink = ScanSink {
            in_result: Cell::new(self.in_result),
            links: RefCell::default(),
        };
        let input = BufferQueue::default();
        input.push_back(StrTendril::from_slice(markup));

        let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
        let outcome = tokenizer.feed(&input);
        tokenizer.end();
        if !matches!(outcome, TokenizerResult::Done) {
            return Err(SearchError::Parse("HTML scan stopped early".into()));
        }

        self.in_result = tokenizer.sink.in_result.get();
        self.links.extend(tokenizer.sink.links.take());
        Ok(())
    }

    /// Copy of the links collected since the last [`reset`](Self::reset), in
    /// document order.
    ///
    /// Does not clear the list.
    pub fn drain(&self) -> Vec<String> {
        self.links.clone()
    }

    /// Clear collected links and the result-heading flag.
    pub fn reset(&mut self) {
        self.links.clear();
        self.in_result = false;
    }

    /// Reset, scan one document, and return its result links.
    ///
    /// # Errors
    ///
    /// Same as [`feed`](Self::feed).
    pub fn extract(&mut self, markup: &str) -> Result<Vec<String>, SearchError> {
        self.reset();
        self.feed(markup)?;
        Ok(self.drain())
    }
}

/// Token sink for one [`ResultExtractor::feed`] call.
struct ScanSink {
    in_result: Cell<bool>,
    links: RefCell<Vec<String>>,
}

impl ScanSink {
    fn start_tag(&self, tag: &Tag) {
        match &*tag.name {
            "a" if self.in_result.get() => {
                let mut links = self.links.borrow_mut();
                links.extend(
                    tag.attrs
                        .iter()
                        .filter(|attr| &*attr.name.local == "href")
                        .map(|attr| String::from(&*attr.value)),
                );
            }
            RESULT_HEADING_TAG => {
                let marked = tag.attrs.iter().any(|attr| {
                    &*attr.name.local == "class" && &*attr.value == RESULT_MARKER_CLASS
                });
                if marked {
                    self.in_result.set(true);
                }
                // `<h3 .../>` is an open immediately followed by a close.
                if tag.self_closing {
                    self.in_result.set(false);
                }
            }
            _ => {}
        }
    }
}

impl TokenSink for ScanSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let Token::TagToken(tag) = token else {
            return TokenSinkResult::Continue;
        };
        match tag.kind {
            TagKind::StartTag => {
                self.start_tag(&tag);
                // Script and style bodies are text, not markup.
                match &*tag.name {
                    "script" if !tag.self_closing => TokenSinkResult::RawData(RawKind::ScriptData),
                    "style" if !tag.self_closing => TokenSinkResult::RawData(RawKind::Rawtext),
                    _ => TokenSinkResult::Continue,
                }
            }
            TagKind::EndTag => {
                if &*tag.name == RESULT_HEADING_TAG {
                    self.in_result.set(false);
                }
                TokenSinkResult::Continue
            }
        }
    }
}
