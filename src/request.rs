use serde::{Deserialize, Serialize};

use crate::error::DialogError;

fn default_title() -> String {
    "Confirm".to_string()
}

fn default_confirm_label() -> String {
    "Yes".to_string()
}

fn default_cancel_label() -> String {
    "Cancel".to_string()
}

/// Caller-supplied text fields for one dialog invocation.
///
/// Every field is optional at the call site; omitted fields take the
/// documented defaults, both through `Default`/the builder setters and
/// through serde when the request arrives over a wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogRequest {
    /// Heading line. Default `"Confirm"`.
    #[serde(default = "default_title")]
    pub title: String,
    /// Body text, word-wrapped to the dialog width. Default empty.
    pub message: String,
    /// Label of the confirming control. Default `"Yes"`.
    #[serde(default = "default_confirm_label")]
    pub confirm_label: String,
    /// Label of the cancelling control. Default `"Cancel"`.
    #[serde(default = "default_cancel_label")]
    pub cancel_label: String,
}

impl Default for DialogRequest {
    fn default() -> Self {
        Self {
            title: default_title(),
            message: String::new(),
            confirm_label: default_confirm_label(),
            cancel_label: default_cancel_label(),
        }
    }
}

impl DialogRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Synchronous validation, run before anything touches the screen.
    ///
    /// Control labels must carry visible text, and single-line fields must
    /// not embed control characters (they would corrupt cell layout).
    pub fn validate(&self) -> Result<(), DialogError> {
        if self.confirm_label.trim().is_empty() {
            return Err(DialogError::InvalidRequest(
                "confirm label is empty".to_string(),
            ));
        }
        if self.cancel_label.trim().is_empty() {
            return Err(DialogError::InvalidRequest(
                "cancel label is empty".to_string(),
            ));
        }
        for (field, value) in [
            ("title", &self.title),
            ("confirm label", &self.confirm_label),
            ("cancel label", &self.cancel_label),
        ] {
            if value.chars().any(char::is_control) {
                return Err(DialogError::InvalidRequest(format!(
                    "{field} contains control characters"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let request = DialogRequest::new();
        assert_eq!(request.title, "Confirm");
        assert_eq!(request.message, "");
        assert_eq!(request.confirm_label, "Yes");
        assert_eq!(request.cancel_label, "Cancel");
    }

    #[test]
    fn builder_overrides_fields() {
        let request = DialogRequest::new()
            .title("T")
            .message("M")
            .confirm_label("Y")
            .cancel_label("N");
        assert_eq!(request.title, "T");
        assert_eq!(request.message, "M");
        assert_eq!(request.confirm_label, "Y");
        assert_eq!(request.cancel_label, "N");
    }

    #[test]
    fn serde_fills_omitted_fields_with_defaults() {
        let request: DialogRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, DialogRequest::default());

        let request: DialogRequest =
            serde_json::from_str(r#"{"title":"Delete?","cancel_label":"Keep"}"#).unwrap();
        assert_eq!(request.title, "Delete?");
        assert_eq!(request.message, "");
        assert_eq!(request.confirm_label, "Yes");
        assert_eq!(request.cancel_label, "Keep");
    }

    #[test]
    fn empty_labels_fail_validation() {
        let request = DialogRequest::new().confirm_label("   ");
        assert!(matches!(
            request.validate(),
            Err(DialogError::InvalidRequest(_))
        ));

        let request = DialogRequest::new().cancel_label("");
        assert!(matches!(
            request.validate(),
            Err(DialogError::InvalidRequest(_))
        ));
    }

    #[test]
    fn control_characters_fail_validation() {
        let request = DialogRequest::new().title("line\nbreak");
        assert!(matches!(
            request.validate(),
            Err(DialogError::InvalidRequest(_))
        ));
    }

    #[test]
    fn multiline_message_is_valid() {
        let request = DialogRequest::new().message("first line\nsecond line");
        assert!(request.validate().is_ok());
    }
}
