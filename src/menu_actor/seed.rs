//! Initial menu loaded at startup.
//!
//! Menu items are created administratively rather than through the web interface. The seed file
//! is a JSON array of [`MenuItemCreate`] entries:
//!
//! ```json
//! [
//!   { "name": "Miso Soup", "price": "3.50" },
//!   { "name": "Salmon Nigiri", "price": 6.25 }
//! ]
//! ```
//!
//! Prices may be written as strings or numbers.

use super::MenuError;
use crate::clients::MenuClient;
use crate::model::MenuItemCreate;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

/// Reads the seed file at `path`.
///
/// A missing file is not an error: the restaurant simply starts with an empty menu.
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<Vec<MenuItemCreate>, MenuError> {
    let path = path.as_ref();
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Menu seed file not found, starting with an empty menu");
            return Ok(Vec::new());
        }
        Err(e) => return Err(MenuError::Seed(format!("{}: {e}", path.display()))),
    };

    parse_seed(&raw).map_err(|e| MenuError::Seed(format!("{}: {e}", path.display())))
}

/// Parses the JSON body of a seed file.
pub fn parse_seed(raw: &str) -> Result<Vec<MenuItemCreate>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Adds every seed entry to the menu and returns how many were created.
///
/// Invalid entries (blank name, negative price, duplicate name) are logged and skipped so one bad
/// line does not keep the restaurant closed. Communication failures abort the seeding.
pub async fn seed_menu(menu: &MenuClient, items: Vec<MenuItemCreate>) -> Result<usize, MenuError> {
    let mut created = 0;
    for item in items {
        let name = item.name.clone();
        match menu.create_item(item).await {
            Ok(id) => {
                created += 1;
                info!(%id, name = %name, "Seeded menu item");
            }
            Err(e @ MenuError::ActorCommunicationError(_)) => return Err(e),
            Err(e) => warn!(name = %name, error = %e, "Skipping menu seed entry"),
        }
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_seed_accepts_string_and_number_prices() {
        let items = parse_seed(
            r#"[
                { "name": "Miso Soup", "price": "3.50" },
                { "name": "Salmon Nigiri", "price": 6.25 }
            ]"#,
        )
        .unwrap();

        assert_eq!(
            items,
            vec![
                MenuItemCreate::new("Miso Soup", dec!(3.50)),
                MenuItemCreate::new("Salmon Nigiri", dec!(6.25)),
            ]
        );
    }

    #[test]
    fn test_parse_seed_rejects_malformed_json() {
        assert!(parse_seed(r#"[{ "name": "Tea" }]"#).is_err());
    }

    #[tokio::test]
    async fn test_missing_seed_file_is_empty_menu() {
        let items = load_seed_file("/definitely/not/here/menu.json").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_seed_menu_skips_invalid_entries() {
        let (actor, menu) = crate::menu_actor::new(8);
        tokio::spawn(actor.run(()));

        let created = seed_menu(
            &menu,
            vec![
                MenuItemCreate::new("Edamame", dec!(4.00)),
                MenuItemCreate::new("Edamame", dec!(5.00)),
                MenuItemCreate::new("", dec!(1.00)),
                MenuItemCreate::new("Mochi", dec!(3.75)),
            ],
        )
        .await
        .unwrap();

        assert_eq!(created, 2);
        let names: Vec<String> = menu
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, ["Edamame", "Mochi"]);
    }
}
