/// Blocking browser alert. Outside the browser the message is only logged.
pub fn alert(message: &str) {
    log::warn!("alert: {}", message);
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Smoothly scrolls the element with `id` to the top of the viewport.
pub fn scroll_into_view(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));
        if let Some(element) = element {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        } else {
            log::debug!("scroll target #{} not mounted", id);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_are_noops_without_a_window() {
        alert("Error updating request status");
        scroll_into_view("pending-panel");
    }
}
