//! Terminal rendering of page state.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use shop_client::CsrfToken;
use shop_model::SelectionSet;
use shop_storefront::state::{OptionButton, ProductSession, VariantStatus};
use shop_storefront::{AppState, Settings};

/// Print everything the commands changed.
pub fn print_state(state: &AppState) {
    if let Some(session) = &state.product {
        print_product(session);
    }
    if state.cart.empty_message_visible {
        println!("Your cart is empty.");
    }
    if let Some(quantity) = state.cart_badge {
        println!("Cart: {quantity} item(s)");
    }
    if let Some(url) = &state.account.redirect {
        println!("Account deactivated. Continue at {url}");
    }
    if let Some(notice) = &state.notice {
        eprintln!("{}", notice.message());
    }
}

fn print_product(session: &ProductSession) {
    let page = &session.page;
    println!("Product: {}", page.product_id);

    if !page.groups.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Option"),
            header_cell("Value"),
            header_cell("Id"),
            header_cell("State"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);

        for group in &page.groups {
            for button in &group.buttons {
                table.add_row(vec![
                    Cell::new(&group.option_type.name),
                    Cell::new(&button.value.name),
                    dim_cell(button.value.id),
                    state_cell(button_state(button, &session.selection)),
                ]);
            }
        }
        println!("{table}");
    }

    let variant = page
        .add_to_cart
        .product_variant_id
        .map_or_else(|| "-".to_string(), |id| id.to_string());
    let matching = page
        .add_to_cart
        .no_of_variants
        .map_or_else(|| "-".to_string(), |n| n.to_string());
    let status = match page.status {
        VariantStatus::Pending => "no selection",
        VariantStatus::Available => "available",
        VariantStatus::Unavailable => "unavailable",
    };
    println!("Variant: {variant} ({matching} matching, {status})");

    match page.quantity.max {
        Some(max) => println!("Quantity: {} (max {max})", page.quantity.value),
        None => println!("Quantity: {}", page.quantity.value),
    }
}

/// How a button reads on the page.
pub fn button_state(button: &OptionButton, selection: &SelectionSet) -> &'static str {
    if selection.contains_value(button.value.id) {
        "selected"
    } else if button.disabled {
        "disabled"
    } else {
        "available"
    }
}

pub fn print_settings(settings: &Settings, path: &std::path::Path) {
    let client = &settings.client;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);

    let cookie = match client.cookie.as_deref() {
        None => "not set",
        Some(header) if CsrfToken::from_cookie_header(header).is_some() => "set (with CSRF token)",
        Some(_) => "set (no CSRF token)",
    };

    let rows = [
        ("file", path.display().to_string()),
        ("base_url", client.base_url.clone()),
        ("option_selection", client.endpoints.option_selection.clone()),
        ("cart_action", client.endpoints.cart_action.clone()),
        ("deactivate_account", client.endpoints.deactivate_account.clone()),
        ("timeout_secs", client.timeout_secs.to_string()),
        ("retry.max_attempts", client.retry.max_attempts.to_string()),
        (
            "retry.backoff_ms",
            format!(
                "{}..{}",
                client.retry.initial_backoff_ms, client.retry.max_backoff_ms
            ),
        ),
        ("cookie", cookie.to_string()),
    ];
    for (name, value) in rows {
        table.add_row(vec![Cell::new(name), Cell::new(value)]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn state_cell(state: &str) -> Cell {
    match state {
        "selected" => Cell::new(state).fg(Color::Green).add_attribute(Attribute::Bold),
        "disabled" => dim_cell(state),
        _ => Cell::new(state),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
