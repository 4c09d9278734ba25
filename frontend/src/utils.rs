use js_sys::Date;
use wasm_bindgen::JsValue;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `2024-03-05T10:00:00Z` → `Mar 5, 2024`. Unparseable input is returned
/// unchanged; `None` renders as an empty string.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return String::new();
    };
    let date = Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    let month = MONTHS
        .get(date.get_month() as usize)
        .copied()
        .unwrap_or_default();
    format!("{} {}, {}", month, date.get_date(), date.get_full_year())
}

/// Strip scripts, event handlers and other unsafe markup from article HTML
/// before it is injected with `set_inner_html`.
pub fn sanitize_html(raw: &str) -> String {
    ammonia::Builder::default()
        .add_generic_attributes(&["class", "style"])
        .clean(raw)
        .to_string()
}

/// `[scope] message` on the browser console.
pub fn log_error(scope: &str, message: &str) {
    web_sys::console::error_1(&JsValue::from_str(&format!("[{}] {}", scope, message)));
}

/// Bullets standing in for `secret`; never fewer than eight.
pub fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count().max(8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_scripts_and_handlers() {
        let cleaned = sanitize_html(r#"<p onclick="x()">Hi<script>alert(1)</script></p>"#);
        assert_eq!(cleaned, "<p>Hi</p>");
    }

    #[test]
    fn mask_never_reveals_length_below_eight() {
        assert_eq!(mask("abc").chars().count(), 8);
        assert_eq!(mask("0123456789").chars().count(), 10);
    }
}
