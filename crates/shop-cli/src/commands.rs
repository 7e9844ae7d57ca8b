//! Subcommand implementations.
//!
//! Every command drives a [`Storefront`] the way the page would: it sends
//! the same messages a user's clicks produce and waits for the requests
//! they trigger.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use tracing::debug;

use shop_client::HttpStorefront;
use shop_model::{OptionValueId, ProductDetail, ProductVariantId};
use shop_storefront::state::CartItemRow;
use shop_storefront::{
    AccountMessage, AppState, CartMessage, Message, ProductMessage, Settings, Storefront,
};

use crate::cli::{AddToCartArgs, CartCommand, Cli, Pick, SelectArgs};

/// Effective settings: the settings file with flag overrides applied.
pub fn load_settings(cli: &Cli) -> (Settings, PathBuf) {
    let path = cli.config.clone().unwrap_or_else(Settings::config_path);
    let mut settings = Settings::load_from(&path);
    if let Some(base_url) = &cli.base_url {
        settings.client.base_url.clone_from(base_url);
    }
    if let Some(cookie) = &cli.cookie {
        settings.client.cookie = Some(cookie.clone());
    }
    (settings, path)
}

pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    if settings.client.cookie.is_some() {
        tracing::warn!("The cookie is not saved; pass --cookie on each run");
    }
    settings.save_to(path).map_err(anyhow::Error::msg)?;
    println!("Saved settings to {}", path.display());
    Ok(())
}

fn connect(settings: &Settings) -> Result<Storefront> {
    let client = HttpStorefront::new(settings.client.clone())
        .with_context(|| format!("connect to {}", settings.client.base_url))?;
    Ok(Storefront::new(Arc::new(client)))
}

/// Read a product page catalog.
pub fn load_catalog(path: &Path) -> Result<ProductDetail> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse catalog {}", path.display()))
}

/// Map `TYPE=VALUE` picks onto option value ids.
pub fn resolve_picks(detail: &ProductDetail, picks: &[Pick]) -> Result<Vec<OptionValueId>> {
    picks
        .iter()
        .map(|pick| {
            if detail.group(&pick.option_type).is_none() {
                bail!(
                    "product {} has no option type '{}'",
                    detail.product_id,
                    pick.option_type
                );
            }
            detail
                .find_value(&pick.option_type, &pick.value)
                .map(|value| value.id)
                .with_context(|| {
                    format!("'{}' is not a value of '{}'", pick.value, pick.option_type)
                })
        })
        .collect()
}

/// Load the product page and click each pick in order.
async fn select(storefront: &mut Storefront, args: &SelectArgs) -> Result<()> {
    let detail = load_catalog(&args.catalog)?;
    let ids = resolve_picks(&detail, &args.picks)?;
    storefront.dispatch(Message::Product(ProductMessage::PageLoaded(detail)));

    for (pick, id) in args.picks.iter().zip(ids) {
        let enabled = storefront
            .state()
            .product
            .as_ref()
            .is_some_and(|session| session.page.is_enabled(id));
        if !enabled {
            bail!(
                "{}={} is not selectable with the current selection",
                pick.option_type,
                pick.value
            );
        }

        debug!("Clicking {}={} ({})", pick.option_type, pick.value, id);
        storefront.dispatch(Message::Product(ProductMessage::OptionValueClicked(id)));
        storefront.settle().await;

        if storefront.state().notice.as_ref().is_some_and(|n| n.is_error()) {
            break;
        }
    }
    Ok(())
}

pub async fn run_select(settings: &Settings, args: &SelectArgs) -> Result<AppState> {
    let mut storefront = connect(settings)?;
    select(&mut storefront, args).await?;
    Ok(storefront.state().clone())
}

pub async fn run_add_to_cart(settings: &Settings, args: &AddToCartArgs) -> Result<AppState> {
    let mut storefront = connect(settings)?;
    select(&mut storefront, &args.select).await?;

    storefront.dispatch(Message::Product(ProductMessage::QuantityChanged(
        args.quantity,
    )));
    storefront.dispatch(Message::Product(ProductMessage::AddToCartClicked));
    storefront.settle().await;
    Ok(storefront.state().clone())
}

pub async fn run_cart(settings: &Settings, command: &CartCommand) -> Result<AppState> {
    let mut storefront = connect(settings)?;
    let (row, message) = match *command {
        CartCommand::Update { variant, quantity } => (
            CartItemRow::new(variant, quantity),
            CartMessage::UpdateClicked(ProductVariantId(variant)),
        ),
        CartCommand::Delete { variant } => (
            CartItemRow::new(variant, 0),
            CartMessage::DeleteClicked(ProductVariantId(variant)),
        ),
    };

    storefront.dispatch(Message::Cart(CartMessage::PageLoaded(vec![row])));
    storefront.dispatch(Message::Cart(message));
    storefront.settle().await;
    Ok(storefront.state().clone())
}

pub async fn run_deactivate(settings: &Settings) -> Result<AppState> {
    let mut storefront = connect(settings)?;
    storefront.dispatch(Message::Account(AccountMessage::DeactivateConfirmed));
    storefront.settle().await;
    Ok(storefront.state().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "product_id": 7,
        "options": [
            {"option_type": {"name": "Color", "position": 0},
             "values": [{"id": 1, "name": "Red"}, {"id": 2, "name": "Blue"}]},
            {"option_type": {"name": "Size", "position": 1},
             "values": [{"id": 11, "name": "M"}]}
        ]
    }"#;

    fn pick(option_type: &str, value: &str) -> Pick {
        Pick {
            option_type: option_type.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_load_catalog_and_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, CATALOG).unwrap();

        let detail = load_catalog(&path).unwrap();
        let ids = resolve_picks(&detail, &[pick("Color", "Blue"), pick("Size", "M")]).unwrap();
        assert_eq!(ids, vec![OptionValueId(2), OptionValueId(11)]);
    }

    #[test]
    fn test_resolve_unknown_pick() {
        let detail: ProductDetail = serde_json::from_str(CATALOG).unwrap();

        let err = resolve_picks(&detail, &[pick("Fit", "Slim")]).unwrap_err();
        assert!(err.to_string().contains("no option type 'Fit'"));

        let err = resolve_picks(&detail, &[pick("Color", "Green")]).unwrap_err();
        assert!(err.to_string().contains("'Green' is not a value of 'Color'"));
    }

    #[test]
    fn test_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().starts_with("read "));
    }
}
