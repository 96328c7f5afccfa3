/// Configuration loading tests
use enum_ext::config::EnumExtConfig;
use enum_ext::{OptionPair, Translator};
use std::io::Write;

const CONFIG: &str = r#"
[settings]
default_locale = "en"

[models.Request]
columns = ["id", "status", "updated_at"]

[models.Request.enums.status]
values = ["in_cart", "waiting_for_payment", "payed", "ready_for_shipment", "on_delivery", "delivered"]
translate = true

[models.Request.enums.status.sets]
delivery_set = ["payed", "ready_for_shipment", "on_delivery", "delivered"]
in_warehouse = ["ready_for_shipment"]
shipped = ["on_delivery", "delivered"]
not_shipped = ["in_warehouse", "payed"]

[models."Admin::Order"]
table = "orders"

[models."Admin::Order".enums.priority]
values = { low = 1, normal = 5, urgent = 10 }
humanize = { low = "Low", urgent = "Urgent!" }

[locales.en.activerecord.attributes.request.statuses]
in_cart = "In cart"
payed = "Payed"
ready_for_shipment = "Ready for shipment"

[locales.ru.activerecord.attributes.request.statuses]
payed = "Оплачен"
"#;

fn write_config() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONFIG.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_build() {
    let file = write_config();
    let config = EnumExtConfig::load(Some(file.path())).unwrap();
    let (registry, catalog) = config.build_registry().unwrap();

    let status = registry.get("Request", "status").unwrap();
    assert_eq!(status.set_keys("not_shipped").unwrap(), vec!["payed", "ready_for_shipment"]);
    assert_eq!(status.set_options("in_warehouse").unwrap()[0].text, "Ready for shipment");

    catalog.set_locale("ru");
    assert_eq!(catalog.locale(), "ru");
    assert_eq!(status.options()[2], OptionPair::key("Оплачен", "payed"));
}

#[test]
fn test_explicit_codes_and_table() {
    let file = write_config();
    let config = EnumExtConfig::load(Some(file.path())).unwrap();
    let (registry, _) = config.build_registry().unwrap();

    let priority = registry.get("Admin::Order", "priority").unwrap();
    assert_eq!(priority.host().table, "orders");
    assert_eq!(
        priority.options_i(),
        vec![OptionPair::code("Low", 1), OptionPair::code("Urgent!", 10)]
    );
    assert_eq!(
        priority.mass_assign("urgent").unwrap().to_sql(),
        "UPDATE orders SET priority = 10"
    );
}

#[test]
fn test_cyclic_config_is_rejected() {
    let config = EnumExtConfig::parse(
        r#"
[models.Request.enums.status]
values = ["a", "b"]
sets = { first = ["second"], second = ["first"] }
"#,
    )
    .unwrap();

    let err = config.build_registry().unwrap_err();
    assert!(format!("{:#}", err).contains("cyclic set reference"));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = EnumExtConfig::load(Some(dir.path().join("missing.toml").as_path())).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}
