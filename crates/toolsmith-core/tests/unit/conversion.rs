//! Conversion helpers through the crate-root re-exports.

use serde::Serialize;
use serde_json::json;
use toolsmith_core::{
    Decimal, EnumVariants, Error, change_type, enum_variants, parse_enum, to_date_string,
    to_enum, to_property_map,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
enum Priority {
    Low,
    Normal,
    Urgent,
}

enum_variants!(Priority { Low, Normal, Urgent });

#[derive(Serialize)]
struct Ticket {
    id: u32,
    title: String,
    priority: Priority,
    opened: String,
}

#[test]
fn test_change_type_dispatch() {
    let value = json!("12.50");
    assert_eq!(change_type::<f64>(&value).unwrap(), 12.5);
    assert_eq!(change_type::<Decimal>(&value).unwrap().as_str(), "12.5");
    assert!(matches!(
        change_type::<i32>(&value).unwrap_err(),
        Error::Format { .. }
    ));
    assert_eq!(change_type::<String>(&value).unwrap(), "12.50");
}

#[test]
fn test_enum_round_trip_through_names() {
    for variant in Priority::variants() {
        assert_eq!(to_enum::<Priority>(variant.name(), false).unwrap(), *variant);
        let lower = variant.name().to_lowercase();
        assert_eq!(parse_enum::<Priority>(&lower).unwrap(), *variant);
    }
}

#[test]
fn test_enum_miss_is_conversion_error() {
    let err = to_enum::<Priority>("urgent", false).unwrap_err();
    assert!(err.is_conversion());
}

#[test]
fn test_ticket_projection_and_date() {
    let ticket = Ticket {
        id: 41,
        title: "Disk full".into(),
        priority: Priority::Urgent,
        opened: "2024-06-01T17:30:00Z".into(),
    };

    let map = to_property_map(&ticket).unwrap();
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["id", "title", "priority", "opened"]);
    assert_eq!(map["priority"], json!("Urgent"));

    let opened = to_date_string(&map["opened"]).unwrap();
    assert_eq!(opened, "06/01/2024 5:30:00 PM");
    assert_eq!(to_date_string(&map["id"]).unwrap(), "");
}
