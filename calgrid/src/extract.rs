//! Turning event markup into a title and time.
//!
//! Calendar UIs render the same event several ways: with a dedicated title
//! element, or with the time and title flattened into one text node inside the
//! event's button. Each rendering is handled by a [`TitleStrategy`]; the
//! [`TextExtractor`] tries them in order and takes the first non-empty title.

use crate::{data::EventFragment, page::FragmentHandle};

pub trait TitleStrategy {
    /// Candidate title for `fragment`, or `None` if this strategy doesn't apply.
    fn title(&self, fragment: &dyn FragmentHandle) -> Option<String>;
}

/// Text of the dedicated title element.
#[derive(Debug, Default, Clone, Copy)]
pub struct DedicatedTitle;

impl TitleStrategy for DedicatedTitle {
    fn title(&self, fragment: &dyn FragmentHandle) -> Option<String> {
        fragment.title_text()
    }
}

/// The control's full text with the time label cut out, for markup where both
/// are rendered as one string (`"10:00 Meeting"`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ControlTextWithoutTime;

impl TitleStrategy for ControlTextWithoutTime {
    fn title(&self, fragment: &dyn FragmentHandle) -> Option<String> {
        let time = fragment.time_text()?;
        let time = time.trim();
        if time.is_empty() {
            return None;
        }
        let text = fragment.control_text()?;
        Some(text.replace(time, ""))
    }
}

/// The control's full text, as is, when there is no time label to cut out.
#[derive(Debug, Default, Clone, Copy)]
pub struct ControlText;

impl TitleStrategy for ControlText {
    fn title(&self, fragment: &dyn FragmentHandle) -> Option<String> {
        let has_time = fragment.time_text().is_some_and(|t| !t.trim().is_empty());
        if has_time {
            return None;
        }
        fragment.control_text()
    }
}

pub struct TextExtractor {
    strategies: Vec<Box<dyn TitleStrategy>>,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
            .with_strategy(DedicatedTitle)
            .with_strategy(ControlTextWithoutTime)
            .with_strategy(ControlText)
    }
}

impl TextExtractor {
    /// An extractor with no strategies. Every fragment resolves to an empty title.
    pub fn new() -> Self {
        Self { strategies: vec![] }
    }

    /// Append a strategy, tried after all those already added.
    pub fn with_strategy(mut self, strategy: impl TitleStrategy + 'static) -> Self {
        self.strategies.push(Box::new(strategy));
        self
    }

    /// Title resolved by the first strategy giving non-blank text, normalized.
    /// Empty if none does.
    pub fn title(&self, fragment: &dyn FragmentHandle) -> String {
        self.strategies
            .iter()
            .filter_map(|strategy| strategy.title(fragment))
            .map(|title| normalize_whitespace(&title))
            .find(|title| !title.is_empty())
            .unwrap_or_default()
    }

    /// Extract title, time and geometry. `Err` carries the reason the fragment
    /// can't become an event.
    pub fn extract(&self, fragment: &dyn FragmentHandle) -> Result<EventFragment, Skipped> {
        let title = self.title(fragment);
        if title.is_empty() {
            return Err(Skipped::EmptyTitle);
        }
        let Some(rect) = fragment.bounding_box() else {
            return Err(Skipped::Unmeasurable);
        };
        Ok(EventFragment {
            title,
            time: fragment.time_text(),
            rect,
        })
    }
}

/// Why a fragment was dropped before association.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Skipped {
    EmptyTitle,
    Unmeasurable,
}

/// Trim, and collapse inner runs of whitespace (including line breaks) to one space.
pub fn normalize_whitespace(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for word in input.split_whitespace() {
        if !output.is_empty() {
            output.push(' ');
        }
        output.push_str(word);
    }
    output
}
