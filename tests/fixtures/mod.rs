//! Registries shared across test groups

use enum_ext::{EnumDefinition, EnumRegistry, HostType, RegistryBuilder};
use serde_json::{Map, Value};

pub const TEST_TYPES: [&str; 5] = ["unit_test", "spec", "view", "controller", "integration"];

pub const STATUSES: [&str; 6] = [
    "in_cart",
    "waiting_for_payment",
    "payed",
    "ready_for_shipment",
    "on_delivery",
    "delivered",
];

/// `EnumExtMock.test_type` with nested sets, not yet finalized
pub fn test_type_builder() -> RegistryBuilder {
    let mut builder = RegistryBuilder::new();
    builder.host(HostType::new("EnumExtMock").columns(["id", "test_type"]));
    builder
        .define_enum("EnumExtMock", "test_type", EnumDefinition::sequential(TEST_TYPES).unwrap())
        .unwrap();
    builder
        .register_sets(
            "EnumExtMock",
            "test_type",
            [
                ("raw_level", vec!["unit_test", "spec"]),
                ("high_level", vec!["view", "controller", "integration"]),
                ("fast", vec!["raw_level", "controller"]),
                ("minitest", vec!["raw_level", "high_level"]),
            ],
        )
        .unwrap();
    builder
}

pub fn test_type_registry() -> EnumRegistry {
    test_type_builder().finalize().unwrap()
}

/// `Request.status` with delivery sets, not yet finalized
pub fn request_builder() -> RegistryBuilder {
    let mut builder = RegistryBuilder::new();
    builder.host(HostType::new("Request").columns(["id", "status", "order_id", "updated_at"]));
    builder
        .define_enum("Request", "status", EnumDefinition::sequential(STATUSES).unwrap())
        .unwrap();
    builder
        .register_sets(
            "Request",
            "status",
            [
                ("delivery_set", vec!["payed", "ready_for_shipment", "on_delivery", "delivered"]),
                ("in_warehouse", vec!["ready_for_shipment"]),
                ("in_basket", vec!["in_cart", "waiting_for_payment"]),
            ],
        )
        .unwrap();
    builder
}

pub fn record(enum_name: &str, key: &str) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("id".to_string(), Value::from(1));
    map.insert(enum_name.to_string(), Value::String(key.to_string()));
    map
}
