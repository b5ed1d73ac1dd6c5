// Locators
//
// A locator is an immutable (strategy, value) pair describing how to search
// for a page element. Class-name lookups are normalized to a CSS class
// selector at construction, since the W3C wire protocol has no class-name
// strategy of its own.

use std::fmt;

/// How a locator's value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// XPath expression
    XPath,
    /// CSS selector
    Css,
    /// Element `id` attribute
    Id,
    /// Exact anchor link text
    LinkText,
    /// Single class name (normalized to a `.class` CSS selector)
    ClassName,
}

impl Strategy {
    fn as_str(&self) -> &'static str {
        match self {
            Strategy::XPath => "xpath",
            Strategy::Css => "css",
            Strategy::Id => "id",
            Strategy::LinkText => "link text",
            Strategy::ClassName => "class name",
        }
    }
}

/// An immutable (strategy, value) pair identifying how to find an element
///
/// Identity is equality of the pair; the wire-protocol query is derived
/// deterministically from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    strategy: Strategy,
    value: String,
    query: String,
}

impl Locator {
    fn new(strategy: Strategy, value: impl Into<String>) -> Self {
        let value = value.into();
        let query = match strategy {
            Strategy::ClassName => format!(".{value}"),
            _ => value.clone(),
        };
        Self {
            strategy,
            value,
            query,
        }
    }

    /// Locate by XPath expression.
    pub fn xpath(expression: impl Into<String>) -> Self {
        Self::new(Strategy::XPath, expression)
    }

    /// Locate by CSS selector.
    pub fn css(selector: impl Into<String>) -> Self {
        Self::new(Strategy::Css, selector)
    }

    /// Locate by element id.
    pub fn id(id: impl Into<String>) -> Self {
        Self::new(Strategy::Id, id)
    }

    /// Locate an anchor by its exact link text.
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::new(Strategy::LinkText, text)
    }

    /// Locate by a single class name.
    pub fn class_name(class: impl Into<String>) -> Self {
        Self::new(Strategy::ClassName, class)
    }

    /// The locator strategy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The raw value as supplied at construction.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The wire-protocol form used when querying the browser.
    pub(crate) fn as_webdriver(&self) -> fantoccini::Locator<'_> {
        match self.strategy {
            Strategy::XPath => fantoccini::Locator::XPath(&self.query),
            Strategy::Css | Strategy::ClassName => fantoccini::Locator::Css(&self.query),
            Strategy::Id => fantoccini::Locator::Id(&self.query),
            Strategy::LinkText => fantoccini::Locator::LinkText(&self.query),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.strategy.as_str(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_strategy_and_value() {
        let locator = Locator::xpath("//a[contains(text(), 'Sign In')]");
        assert_eq!(
            locator.to_string(),
            "xpath '//a[contains(text(), 'Sign In')]'"
        );
    }

    #[test]
    fn class_name_normalizes_to_css_query() {
        let locator = Locator::class_name("button-text");
        assert_eq!(locator.value(), "button-text");
        assert_eq!(locator.strategy(), Strategy::ClassName);
        assert!(matches!(
            locator.as_webdriver(),
            fantoccini::Locator::Css(".button-text")
        ));
    }

    #[test]
    fn identity_is_equality_of_the_pair() {
        assert_eq!(Locator::id("rcc-confirm-button"), Locator::id("rcc-confirm-button"));
        assert_ne!(Locator::id("logo"), Locator::css("logo"));
        assert_ne!(Locator::xpath("//a"), Locator::xpath("//button"));
    }
}
