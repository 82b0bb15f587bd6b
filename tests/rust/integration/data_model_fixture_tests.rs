use pivotgraph::data_catalog::{
    pivot_options, DataCatalogError, DataModel, DataModelConfig, FieldType, Pivot,
    UnicityConstraint,
};

fn fixture_path() -> String {
    format!(
        "{}/tests/fixtures/fraud_model.yaml",
        env!("CARGO_MANIFEST_DIR")
    )
}

fn load_model() -> DataModel {
    DataModelConfig::from_file(fixture_path())
        .expect("fixture should load")
        .into_data_model()
        .expect("fixture should validate")
}

#[test]
fn test_fixture_loads_and_validates() {
    let model = load_model();

    assert_eq!(model.table_count(), 3);

    let transactions = model.get_table("transactions").unwrap();
    assert_eq!(transactions.name, "Transactions");
    assert_eq!(transactions.fields.len(), 8);
    assert_eq!(transactions.links_to_single.len(), 2);

    let object_id = transactions.field_by_id("object_id").unwrap();
    assert_eq!(object_id.unicity, UnicityConstraint::ActiveUniqueConstraint);

    let labels = transactions.field_by_id("labels").unwrap();
    assert_eq!(labels.data_type, FieldType::StringArray);
    assert!(labels.nullable);

    assert_eq!(
        model.get_table("events"),
        Err(DataCatalogError::Table {
            table_id: "events".to_string()
        })
    );
}

#[test]
fn test_transaction_pivot_options() {
    let model = load_model();
    let transactions = model.get_table("transactions").unwrap();

    let pivots = pivot_options(transactions, &model);

    // Direct string fields in declaration order, then depth-first link paths.
    let ids: Vec<&str> = pivots.iter().map(|pivot| pivot.id()).collect();
    assert_eq!(
        ids,
        vec![
            "object_id",
            "currency",
            "status",
            "account_id",
            "counterparty_id",
            "account",
            "account.company",
            "counterparty",
            "counterparty.company",
        ]
    );

    for pivot in &pivots {
        assert_eq!(pivot.base_table_id(), "transactions");
    }

    let account_company = pivots
        .iter()
        .find(|pivot| pivot.id() == "account.company")
        .unwrap();
    assert_eq!(account_company.display_value(), "account.company");
    match account_company {
        Pivot::Link(link) => {
            assert_eq!(link.path_link_ids, vec!["account", "company"]);
        }
        Pivot::Field(_) => panic!("account.company should be a link pivot"),
    }
}

#[test]
fn test_account_pivot_options() {
    let model = load_model();
    let accounts = model.get_table("accounts").unwrap();

    let pivots = pivot_options(accounts, &model);

    let ids: Vec<&str> = pivots.iter().map(|pivot| pivot.id()).collect();
    assert_eq!(
        ids,
        vec!["object_id", "name", "country", "company_id", "company"]
    );
}

#[test]
fn test_company_pivot_options_are_direct_only() {
    let model = load_model();
    let companies = model.get_table("companies").unwrap();

    let pivots = pivot_options(companies, &model);

    assert!(pivots
        .iter()
        .all(|pivot| matches!(pivot, Pivot::Field(_))));
    let ids: Vec<&str> = pivots.iter().map(|pivot| pivot.id()).collect();
    assert_eq!(ids, vec!["object_id", "name"]);
}
