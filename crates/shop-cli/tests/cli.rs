//! Argument parsing tests.

use std::path::PathBuf;

use clap::Parser;

use shop_cli::cli::{AccountCommand, CartCommand, Cli, Command, Pick, parse_pick};

#[test]
fn test_select_collects_picks_in_order() {
    let cli = Cli::try_parse_from([
        "shop",
        "select",
        "--catalog",
        "shirt.json",
        "--pick",
        "Color=Red",
        "--pick",
        "Size = M",
    ])
    .unwrap();

    let Command::Select(args) = cli.command else {
        panic!("expected select");
    };
    assert_eq!(args.catalog, PathBuf::from("shirt.json"));
    assert_eq!(
        args.picks,
        vec![
            Pick {
                option_type: "Color".to_string(),
                value: "Red".to_string()
            },
            Pick {
                option_type: "Size".to_string(),
                value: "M".to_string()
            },
        ]
    );
}

#[test]
fn test_malformed_pick_is_rejected() {
    let result = Cli::try_parse_from(["shop", "select", "--catalog", "c.json", "--pick", "Red"]);
    assert!(result.is_err());

    assert!(parse_pick("=Red").is_err());
    assert!(parse_pick("Color=").is_err());
    assert_eq!(
        parse_pick("Color=Dark=Blue").unwrap().value,
        "Dark=Blue".to_string()
    );
}

#[test]
fn test_add_to_cart_defaults_to_one() {
    let cli = Cli::try_parse_from(["shop", "add-to-cart", "--catalog", "mug.json"]).unwrap();
    let Command::AddToCart(args) = cli.command else {
        panic!("expected add-to-cart");
    };
    assert_eq!(args.quantity, 1);
    assert!(args.select.picks.is_empty());
}

#[test]
fn test_cart_subcommands() {
    let cli = Cli::try_parse_from([
        "shop", "cart", "update", "--variant", "12", "--quantity", "3",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Command::Cart(CartCommand::Update {
            variant: 12,
            quantity: 3
        })
    ));

    let cli = Cli::try_parse_from(["shop", "cart", "delete", "--variant", "12"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Cart(CartCommand::Delete { variant: 12 })
    ));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "shop",
        "account",
        "deactivate",
        "--base-url",
        "https://shop.test/",
        "--cookie",
        "csrftoken=abc",
        "--config",
        "/tmp/shop.toml",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Command::Account(AccountCommand::Deactivate)
    ));
    assert_eq!(cli.base_url.as_deref(), Some("https://shop.test/"));
    assert_eq!(cli.cookie.as_deref(), Some("csrftoken=abc"));
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/shop.toml")));
}

#[test]
fn test_flags_override_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "[client]\nbase_url = \"https://file.test/\"\ntimeout_secs = 9\n").unwrap();

    let cli = Cli::try_parse_from([
        "shop",
        "config",
        "show",
        "--config",
        path.to_str().unwrap(),
        "--base-url",
        "https://flag.test/",
    ])
    .unwrap();

    let (settings, settings_path) = shop_cli::commands::load_settings(&cli);
    assert_eq!(settings_path, path);
    assert_eq!(settings.client.base_url, "https://flag.test/");
    assert_eq!(settings.client.timeout_secs, 9);
    assert_eq!(settings.client.cookie, None);
}

#[test]
fn test_config_save_leaves_cookie_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");

    let cli = Cli::try_parse_from([
        "shop",
        "config",
        "save",
        "--config",
        path.to_str().unwrap(),
        "--cookie",
        "sessionid=s1; csrftoken=t1",
    ])
    .unwrap();

    let (settings, settings_path) = shop_cli::commands::load_settings(&cli);
    assert!(settings.client.cookie.is_some());
    shop_cli::commands::save_settings(&settings, &settings_path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(!written.contains("csrftoken"));
}
