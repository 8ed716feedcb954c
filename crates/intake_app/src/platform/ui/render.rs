use intake_core::{AppViewModel, Condition, LookupStatus, ProductFormView};

use super::constants::*;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![HEADING.to_string()];

    let action = match (view.status, view.lookup_enabled) {
        (LookupStatus::Loading, _) => "[Looking up...]",
        (LookupStatus::Ready, true) => "[Lookup]",
        (LookupStatus::Ready, false) => "[Lookup] (disabled)",
    };
    lines.push(format!("Scan barcode: {}  {}", view.code, action));

    let status = match view.status {
        LookupStatus::Loading => "Loading...",
        LookupStatus::Ready => "Ready",
    };
    lines.push(format!("Status: {status}"));
    lines.push(format!("Current Code: {}", view.code));
    lines.push(format!("Last Action: {}", view.last_message));
    lines.push(format!(
        "Product Found: {}",
        if view.product_found { "Yes" } else { "No" }
    ));

    if let Some(alert) = &view.alert {
        lines.push(format!("{ALERT_PREFIX}{alert} (:dismiss)"));
    }

    if let Some(form) = &view.form {
        lines.extend(render_form(form));
    }

    lines
}

fn render_form(form: &ProductFormView) -> Vec<String> {
    let mut lines = vec![String::new()];
    lines.push(format!("Title: {}", form.title));
    lines.push(format!(
        "Condition: {}  ({})",
        form.condition,
        condition_choices(form.condition)
    ));
    lines.extend(labelled_block("Description", &form.description));
    lines.push(format!("Price: {}", form.price));

    if let Some(info) = &form.additional {
        lines.push("Additional Information".to_string());
        lines.push(format!("  Brand: {}", info.brand));
        lines.push(format!("  Category: {}", info.category));
        lines.push(format!("  UPC: {}", info.upc));
    }

    lines.push("[Save as Draft]  [Proceed]".to_string());
    lines
}

fn condition_choices(selected: Condition) -> String {
    Condition::ALL
        .iter()
        .map(|condition| {
            if *condition == selected {
                format!("*{condition}*")
            } else {
                condition.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

/// First line follows the label; continuation lines are indented under it.
fn labelled_block(label: &str, text: &str) -> Vec<String> {
    let mut body = text.lines();
    let first = body.next().unwrap_or_default();
    let indent = " ".repeat(label.len() + 2);
    std::iter::once(format!("{label}: {first}"))
        .chain(body.map(|line| format!("{indent}{line}")))
        .collect()
}
