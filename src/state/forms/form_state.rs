//! Search form state and its mutators

use crate::neighborhoods;
use crate::state::selection::{self, NeighborhoodSelection};

/// Values held by the search form.
///
/// Every mutator replaces exactly one field. Nothing here validates input;
/// empty or malformed strings are forwarded to the endpoint as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub url: String,
    pub selected_neighborhoods: NeighborhoodSelection,
    pub notion_db_title: String,
    /// Last submission error, empty when there is none
    pub error: String,
}

impl FormState {
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.notion_db_title = title.into();
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = error.into();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// Toggle a neighborhood checkbox.
    ///
    /// Values outside the static neighborhood list are ignored so the
    /// selection stays a subset of it.
    pub fn toggle_neighborhood(&mut self, value: &str) {
        if !neighborhoods::is_known(value) {
            tracing::debug!(value, "Ignoring toggle for unknown neighborhood");
            return;
        }
        self.selected_neighborhoods = selection::toggle(&self.selected_neighborhoods, value);
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.selected_neighborhoods.contains(value)
    }

    /// Mutable access to the text behind a focused field, if it is a text field
    fn text_mut(&mut self, focus: FormFocus) -> Option<&mut String> {
        match focus {
            FormFocus::Url => Some(&mut self.url),
            FormFocus::Title => Some(&mut self.notion_db_title),
            FormFocus::Neighborhoods | FormFocus::Submit => None,
        }
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, focus: FormFocus, c: char) {
        if let Some(text) = self.text_mut(focus) {
            text.push(c);
        }
    }

    /// Remove the last character from the focused text field
    pub fn pop_char(&mut self, focus: FormFocus) {
        if let Some(text) = self.text_mut(focus) {
            text.pop();
        }
    }
}

/// Which part of the form receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Url,
    Neighborhoods,
    Title,
    Submit,
}

impl FormFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::Url => Self::Neighborhoods,
            Self::Neighborhoods => Self::Title,
            Self::Title => Self::Submit,
            Self::Submit => Self::Url,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Url => Self::Submit,
            Self::Neighborhoods => Self::Url,
            Self::Title => Self::Neighborhoods,
            Self::Submit => Self::Title,
        }
    }

    pub fn is_text_field(&self) -> bool {
        matches!(self, Self::Url | Self::Title)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Url => "Craigslist URL",
            Self::Neighborhoods => "Neighborhoods",
            Self::Title => "Notion Database Title",
            Self::Submit => "Submit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod mutators {
        use super::*;

        #[test]
        fn test_new_form_is_empty() {
            let form = FormState::default();
            assert_eq!(form.url, "");
            assert!(form.selected_neighborhoods.is_empty());
            assert_eq!(form.notion_db_title, "");
            assert!(!form.has_error());
        }

        #[test]
        fn test_set_url_leaves_other_fields() {
            let mut form = FormState::default();
            form.set_title("T");
            form.set_error("boom");
            form.toggle_neighborhood("1");
            form.set_url("http://x");

            assert_eq!(form.url, "http://x");
            assert_eq!(form.notion_db_title, "T");
            assert_eq!(form.error, "boom");
            assert!(form.is_selected("1"));
        }

        #[test]
        fn test_set_title_accepts_empty() {
            let mut form = FormState::default();
            form.set_title("Listings");
            form.set_title("");
            assert_eq!(form.notion_db_title, "");
        }

        #[test]
        fn test_clear_error() {
            let mut form = FormState::default();
            form.set_error("Submission failed. Please try again.");
            assert!(form.has_error());
            form.clear_error();
            assert_eq!(form.error, "");
        }

        #[test]
        fn test_toggle_neighborhood_twice_unselects() {
            let mut form = FormState::default();
            form.toggle_neighborhood("3");
            assert!(form.is_selected("3"));
            form.toggle_neighborhood("3");
            assert!(!form.is_selected("3"));
        }

        #[test]
        fn test_toggle_unknown_neighborhood_is_ignored() {
            let mut form = FormState::default();
            form.toggle_neighborhood("not-a-neighborhood");
            assert!(form.selected_neighborhoods.is_empty());
        }
    }

    mod text_editing {
        use super::*;

        #[test]
        fn test_push_char_targets_focused_field() {
            let mut form = FormState::default();
            form.push_char(FormFocus::Url, 'h');
            form.push_char(FormFocus::Title, 'T');
            assert_eq!(form.url, "h");
            assert_eq!(form.notion_db_title, "T");
        }

        #[test]
        fn test_push_char_ignored_on_non_text_focus() {
            let mut form = FormState::default();
            form.push_char(FormFocus::Neighborhoods, 'x');
            form.push_char(FormFocus::Submit, 'x');
            assert_eq!(form, FormState::default());
        }

        #[test]
        fn test_pop_char() {
            let mut form = FormState::default();
            form.set_url("abc");
            form.pop_char(FormFocus::Url);
            assert_eq!(form.url, "ab");
        }

        #[test]
        fn test_pop_char_on_empty_field() {
            let mut form = FormState::default();
            form.pop_char(FormFocus::Title);
            assert_eq!(form.notion_db_title, "");
        }
    }

    mod focus {
        use super::*;

        #[test]
        fn test_next_cycles_through_all() {
            let mut focus = FormFocus::default();
            let mut seen = vec![focus];
            for _ in 0..3 {
                focus = focus.next();
                seen.push(focus);
            }
            assert_eq!(
                seen,
                vec![
                    FormFocus::Url,
                    FormFocus::Neighborhoods,
                    FormFocus::Title,
                    FormFocus::Submit
                ]
            );
            assert_eq!(focus.next(), FormFocus::Url);
        }

        #[test]
        fn test_prev_is_inverse_of_next() {
            for focus in [
                FormFocus::Url,
                FormFocus::Neighborhoods,
                FormFocus::Title,
                FormFocus::Submit,
            ] {
                assert_eq!(focus.next().prev(), focus);
            }
        }

        #[test]
        fn test_is_text_field() {
            assert!(FormFocus::Url.is_text_field());
            assert!(FormFocus::Title.is_text_field());
            assert!(!FormFocus::Neighborhoods.is_text_field());
            assert!(!FormFocus::Submit.is_text_field());
        }
    }
}
