use crate::fixtures::{record, request_builder, test_type_builder};
use enum_ext::enums::missing_translations;
use enum_ext::{Catalog, DisplayValue, EnumExtError, OptionPair, Record, RecordFn};
use std::sync::Arc;

fn humanized_builder() -> enum_ext::RegistryBuilder {
    let mut builder = test_type_builder();
    builder
        .humanize(
            "EnumExtMock",
            "test_type",
            [
                ("unit_test", DisplayValue::literal("Unit::Test")),
                ("spec", DisplayValue::deferred(|| anyhow::bail!("undefined method for nil"))),
                ("view", DisplayValue::deferred(|| Err(anyhow::anyhow!("division by zero")))),
            ],
        )
        .unwrap();
    builder
        .humanize(
            "EnumExtMock",
            "test_type",
            [
                (
                    "controller",
                    DisplayValue::per_record(|r| Ok(format!("{} tests", r.enum_key("test_type").unwrap_or_default()))),
                ),
                ("integration", DisplayValue::literal("Integration")),
            ],
        )
        .unwrap();
    builder
}

#[test]
fn test_options_degrade_instead_of_failing() {
    let registry = humanized_builder().finalize().unwrap();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();

    assert_eq!(
        ext.options(),
        vec![
            OptionPair::key("Unit::Test", "unit_test"),
            OptionPair::key("Cannot create option for spec ( proc fails to evaluate )", "spec"),
            OptionPair::key("Cannot create option for view ( proc fails to evaluate )", "view"),
            OptionPair::key("Cannot create option for controller because of a lambda", "controller"),
            OptionPair::key("Integration", "integration"),
        ]
    );
}

#[test]
fn test_options_with_codes_match_definition() {
    let registry = humanized_builder().finalize().unwrap();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();

    let keys = ext.options();
    let codes = ext.options_i();
    assert_eq!(keys.len(), codes.len());
    for (with_key, with_code) in keys.iter().zip(&codes) {
        assert_eq!(with_key.text, with_code.text);
        let key = match &with_key.value {
            enum_ext::OptionValue::Key(key) => key.as_str(),
            other => panic!("Expected key value, got {:?}", other),
        };
        assert_eq!(
            with_code.value,
            enum_ext::OptionValue::Code(ext.definition().code(key).unwrap())
        );
    }
}

#[test]
fn test_set_options_follow_set_members() {
    let registry = humanized_builder().finalize().unwrap();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();

    assert_eq!(
        ext.set_options("fast").unwrap(),
        vec![
            OptionPair::key("Unit::Test", "unit_test"),
            OptionPair::key("Cannot create option for spec ( proc fails to evaluate )", "spec"),
            OptionPair::key("Cannot create option for controller because of a lambda", "controller"),
        ]
    );
    assert_eq!(ext.set_options_i("raw_level").unwrap()[0], OptionPair::code("Unit::Test", 0));
    assert_eq!(ext.set_localizations("high_level").unwrap().len(), 3);
}

#[test]
fn test_set_options_without_localizations_return_sentinel() {
    let registry = test_type_builder().finalize().unwrap();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();

    let text = "Enum translations call missed. Did you forget to call translate test_type";
    assert_eq!(ext.set_options("fast").unwrap(), vec![OptionPair::key(text, text)]);
    assert_eq!(ext.set_options_i("fast").unwrap(), missing_translations("test_type"));
}

#[test]
fn test_display_text_for_records() {
    let registry = humanized_builder().finalize().unwrap();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();

    assert_eq!(ext.display_text(&record("test_type", "unit_test"), None).unwrap(), "Unit::Test");
    assert_eq!(
        ext.display_text(&record("test_type", "controller"), None).unwrap(),
        "controller tests"
    );
}

#[test]
fn test_display_text_propagates_failures() {
    let registry = humanized_builder().finalize().unwrap();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();

    assert_eq!(
        ext.display_text(&record("test_type", "view"), None),
        Err(EnumExtError::EvaluationFailure {
            key: "view".to_string(),
            message: "division by zero".to_string(),
        })
    );
}

#[test]
fn test_display_text_override_block() {
    let registry = humanized_builder().finalize().unwrap();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();

    let block: RecordFn = Arc::new(|r: &dyn Record| -> anyhow::Result<String> {
        Ok(format!("#{} {}", r.attribute("id").unwrap_or_default(), r.enum_key("test_type").unwrap_or_default()))
    });
    assert_eq!(
        ext.display_text(&record("test_type", "view"), Some(&block)).unwrap(),
        "#1 view"
    );
}

fn shouting_block() -> RecordFn {
    Arc::new(|r: &dyn Record| -> anyhow::Result<String> {
        let key = r.enum_key("status").unwrap_or_default();
        Ok(key.replace('_', " ").to_uppercase())
    })
}

#[test]
fn test_humanize_with_block() {
    let mut builder = request_builder();
    builder.humanize_with("Request", "status", shouting_block()).unwrap();
    let registry = builder.finalize().unwrap();
    let ext = registry.get("Request", "status").unwrap();

    assert_eq!(ext.options()[1], OptionPair::key("WAITING FOR PAYMENT", "waiting_for_payment"));
    assert_eq!(
        ext.set_options("in_warehouse").unwrap(),
        vec![OptionPair::key("READY FOR SHIPMENT", "ready_for_shipment")]
    );
    assert_eq!(ext.display_text(&record("status", "on_delivery"), None).unwrap(), "ON DELIVERY");
}

#[test]
fn test_humanize_after_block_wins() {
    let mut builder = request_builder();
    builder.humanize_with("Request", "status", shouting_block()).unwrap();
    builder.humanize("Request", "status", [("payed", "Paid!")]).unwrap();
    let registry = builder.finalize().unwrap();
    let ext = registry.get("Request", "status").unwrap();

    assert_eq!(ext.display_text(&record("status", "payed"), None).unwrap(), "Paid!");
    assert_eq!(ext.options()[2], OptionPair::key("Paid!", "payed"));
    // Keys not named again keep the block's text
    assert_eq!(ext.display_text(&record("status", "in_cart"), None).unwrap(), "IN CART");
}

#[test]
fn test_translate_after_block_wins() {
    let scope = "activerecord.attributes.request.statuses";
    let catalog = Arc::new(
        Catalog::new("en")
            .with_locale("en", [(format!("{}.payed", scope), "Payed"), (format!("{}.delivered", scope), "Delivered")])
            .with_locale("ru", [(format!("{}.payed", scope), "Оплачен")]),
    );
    let mut builder = request_builder();
    builder.humanize_with("Request", "status", shouting_block()).unwrap();
    builder.translate("Request", "status", catalog.clone(), None).unwrap();
    let registry = builder.finalize().unwrap();
    let ext = registry.get("Request", "status").unwrap();

    assert_eq!(ext.display_text(&record("status", "payed"), None).unwrap(), "Payed");
    assert_eq!(ext.options()[2], OptionPair::key("Payed", "payed"));

    catalog.set_locale("ru");
    assert_eq!(ext.display_text(&record("status", "payed"), None).unwrap(), "Оплачен");
}
