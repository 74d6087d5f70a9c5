use chrono::DateTime;
use qrcodes_core::{Destination, PageViewModel, QrCode, RenderState};

use super::constants::*;

pub fn render(view: &PageViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "{title}  [{key}] {label}",
        title = view.title,
        key = KEY_CREATE,
        label = view.primary_action.label
    ));
    lines.push("─".repeat(RULE_WIDTH));

    if let Some(notice) = &view.notice {
        lines.push(format!("! Could not load QR codes: {notice}"));
    }

    match &view.body {
        RenderState::Loading => {
            lines.push("Loading…".to_string());
            lines.extend(SKELETON_WIDTHS.iter().map(|width| format!("  {}", "░".repeat(*width))));
        }
        RenderState::Empty { target } => {
            lines.push(format!("  {EMPTY_HEADING}"));
            lines.push(format!("  {EMPTY_BODY}"));
            lines.push(format!(
                "  [{key}] {label} → {target}",
                key = KEY_CREATE,
                label = view.primary_action.label
            ));
        }
        RenderState::Populated { items, stale } => {
            if *stale {
                lines.push(UPDATING_MARKER.to_string());
            }
            lines.push(format!(
                "{:>3}  {:<tw$}  {:<pw$}  {:<12}  {:<10}  {:>6}  {}",
                "#",
                "Title",
                "Product",
                "Destination",
                "Discount",
                "Scans",
                "Created",
                tw = TITLE_WIDTH,
                pw = PRODUCT_WIDTH
            ));
            lines.extend(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, code)| format_row(index + 1, code)),
            );
        }
    }

    lines.push("─".repeat(RULE_WIDTH));
    lines.push(HELP_LINE.to_string());
    lines
}

fn format_row(row: usize, code: &QrCode) -> String {
    format!(
        "{:>3}  {:<tw$}  {:<pw$}  {:<12}  {:<10}  {:>6}  {}",
        row,
        truncate(&code.title, TITLE_WIDTH),
        truncate(code.product_title.as_deref().unwrap_or("Deleted product"), PRODUCT_WIDTH),
        destination_label(code.destination),
        code.discount_code.as_deref().unwrap_or("-"),
        code.scans,
        format_created(&code.created_at),
        tw = TITLE_WIDTH,
        pw = PRODUCT_WIDTH
    )
}

fn destination_label(destination: Destination) -> &'static str {
    match destination {
        Destination::Product => "Product page",
        Destination::Checkout => "Checkout",
    }
}

fn format_created(created_at: &str) -> String {
    if created_at.is_empty() {
        return "-".to_string();
    }
    DateTime::parse_from_rfc3339(created_at)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| created_at.to_string())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
