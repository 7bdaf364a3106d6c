//! The in-page script that presses "load more" until the plan is used up.

use crate::pagination::PaginationPlan;

const TEMPLATE: &str = r#"
const done = arguments[arguments.length - 1];
const selector = LOAD_MORE_SELECTOR;
const sleep = (ms) => new Promise((r) => setTimeout(r, ms));
(async () => {
    let clicks = 0;
    for (let i = 0; i < LOAD_PAGES; i++) {
        const button = document.querySelector(selector);
        if (!button) break;
        button.scrollIntoView();
        button.click();
        clicks++;
        await sleep(CLICK_TIMEOUT);
    }
    done(clicks);
})();
"#;

/// Renders the async load-more script for `plan`.
///
/// The script resolves with the number of clicks it actually made, which can
/// be lower than planned when the button disappears early.
pub fn render(plan: &PaginationPlan, load_more_selector: &str) -> String {
    // A JSON string literal is also a valid JS string literal.
    let selector = serde_json::to_string(load_more_selector).unwrap_or_else(|_| "\"\"".into());
    TEMPLATE
        .replace("LOAD_MORE_SELECTOR", &selector)
        .replace("LOAD_PAGES", &plan.load_actions.to_string())
        .replace("CLICK_TIMEOUT", &plan.timeout_ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_plan_values() {
        let plan = PaginationPlan {
            load_actions: 2,
            timeout_ms: 3000,
        };
        let js = render(&plan, "div.more button");
        assert!(js.contains("i < 2;"));
        assert!(js.contains("sleep(3000)"));
        assert!(js.contains(r#"const selector = "div.more button";"#));
        assert!(!js.contains("LOAD_PAGES"));
    }

    #[test]
    fn selector_quotes_are_escaped() {
        let plan = PaginationPlan {
            load_actions: 0,
            timeout_ms: 10,
        };
        let js = render(&plan, r#"a[title="more"]"#);
        assert!(js.contains(r#""a[title=\"more\"]""#));
        assert!(js.contains("i < 0;"));
    }
}
