use tracing::{error, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::NodeRef;

pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!(message, "No window to alert on");
        return;
    };

    if let Err(error) = window.alert_with_message(message) {
        error!(error = ?error, message, "Alert failed");
    }
}

pub fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

/// Inline style that hides an element. Visible elements get no inline style
/// so their stylesheet `display` applies.
pub fn hidden_unless(visible: bool) -> Option<&'static str> {
    (!visible).then_some("display: none")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_elements_keep_stylesheet_display() {
        assert_eq!(hidden_unless(true), None);
        assert_eq!(hidden_unless(false), Some("display: none"));
    }
}
