//! Request and response types for the three entity levels.
//!
//! View types (`*Out`) are what the API serializes; they carry the derived
//! counts alongside the stored columns and map straight off the count
//! queries via `FromRow`. Create/patch types mirror the accepted bodies:
//! create requires every field, patch makes every field optional and treats
//! absent and null alike.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct MenuCreate {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct MenuUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct MenuOut {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub submenus_count: i64,
    pub dishes_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct SubmenuCreate {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmenuUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct SubmenuOut {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub menu_id: Uuid,
    pub dishes_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct DishCreate {
    pub title: String,
    pub description: String,
    /// Accepted as a JSON number or decimal string.
    pub price: Decimal,
}

#[derive(Debug, Default, Deserialize)]
pub struct DishUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct DishOut {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: Decimal,
    pub submenu_id: Uuid,
}

/// Monetary output is always a string with exactly two fractional digits.
/// Half-away-from-zero matches how NUMERIC(8,2) rounds on insert.
fn serialize_price<S: Serializer>(price: &Decimal, s: S) -> Result<S::Ok, S::Error> {
    let mut p = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    p.rescale(2);
    s.serialize_str(&p.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn dish(price: Decimal) -> DishOut {
        DishOut {
            id: Uuid::nil(),
            title: "D1".into(),
            description: "d".into(),
            price,
            submenu_id: Uuid::nil(),
        }
    }

    #[test]
    fn price_serializes_with_two_fraction_digits() {
        let v = serde_json::to_value(dish(dec("9.5"))).unwrap();
        assert_eq!(v["price"], "9.50");
        let v = serde_json::to_value(dish(dec("5"))).unwrap();
        assert_eq!(v["price"], "5.00");
        let v = serde_json::to_value(dish(dec("12.345"))).unwrap();
        assert_eq!(v["price"], "12.35");
    }

    #[test]
    fn dish_create_accepts_numeric_price() {
        let input: DishCreate =
            serde_json::from_value(serde_json::json!({
                "title": "D1",
                "description": "d",
                "price": 5
            }))
            .unwrap();
        assert_eq!(input.price, dec("5"));

        let input: DishCreate =
            serde_json::from_value(serde_json::json!({
                "title": "D1",
                "description": "d",
                "price": "9.50"
            }))
            .unwrap();
        assert_eq!(input.price, dec("9.50"));
    }

    #[test]
    fn patch_bodies_accept_empty_and_null_fields() {
        let patch: MenuUpdate = serde_json::from_str("{}").unwrap();
        assert!(patch.title.is_none() && patch.description.is_none());

        let patch: DishUpdate =
            serde_json::from_value(serde_json::json!({
                "title": null,
                "price": "7.25"
            }))
            .unwrap();
        assert!(patch.title.is_none());
        assert_eq!(patch.price, Some(dec("7.25")));
    }
}
