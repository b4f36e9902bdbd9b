use rowscan::{Mapper, Record, Registry, Value};
use tests::MemRows;

#[derive(Debug, Default, Record)]
struct Audit {
    pub created_by: String,
    pub updated_by: String,
}

#[derive(Debug, Default, Record)]
struct Address {
    pub street: String,
    pub city: String,

    #[embed]
    pub audit: Audit,
}

#[derive(Debug, Default, Record)]
struct Customer {
    pub id: i64,

    #[embed]
    pub address: Address,

    // Declared after the embedded record, so it wins the `city` column
    #[tag(sql = "city")]
    pub home_city: String,
}

#[test]
fn embedded_fields_are_flattened() {
    let registry = Registry::new();
    let field_map = registry.field_map::<Customer>();

    assert_eq!(
        field_map.sorted_names(),
        ["city", "created_by", "id", "street", "updated_by"]
    );
    assert_eq!(field_map.get("id").unwrap(), &[0]);
    assert_eq!(field_map.get("street").unwrap(), &[1, 0]);
    assert_eq!(field_map.get("created_by").unwrap(), &[1, 2, 0]);
    assert_eq!(field_map.get("city").unwrap(), &[2]);

    // Embedded types are cached on the way
    assert!(registry.is_cached::<Address>());
    assert!(registry.is_cached::<Audit>());
    assert_eq!(registry.len(), 3);
}

#[test]
fn scans_into_nested_records() {
    let mapper = Mapper::default();
    let mut rows = MemRows::positioned(
        vec!["id", "street", "city", "created_by", "updated_by"],
        vec![vec![
            Value::from(1_i64),
            Value::from("1 Main St"),
            Value::from("Springfield"),
            Value::from("admin"),
            Value::from("system"),
        ]],
    );

    let mut customer = Customer::default();
    mapper.scan(&mut customer, &mut rows).unwrap();

    assert_eq!(customer.id, 1);
    assert_eq!(customer.address.street, "1 Main St");
    assert_eq!(customer.address.audit.created_by, "admin");
    assert_eq!(customer.address.audit.updated_by, "system");

    // The outer field shadows the embedded one
    assert_eq!(customer.home_city, "Springfield");
    assert_eq!(customer.address.city, "");
}

#[test]
fn later_embedded_record_shadows_earlier_fields() {
    #[derive(Debug, Default, Record)]
    struct Named {
        pub name: String,
    }

    #[derive(Debug, Default, Record)]
    struct Pet {
        pub name: String,

        #[embed]
        pub owner: Named,
    }

    let mapper = Mapper::default();
    let mut rows = MemRows::positioned(vec!["name"], vec![vec![Value::from("rex")]]);

    let mut pet = Pet::default();
    mapper.scan(&mut pet, &mut rows).unwrap();

    assert_eq!(pet.name, "");
    assert_eq!(pet.owner.name, "rex");
}

#[test]
fn private_and_skipped_embeds_are_ignored() {
    #[derive(Debug, Default, Record)]
    struct Order {
        pub id: i64,

        #[embed]
        #[tag(sql = "-")]
        pub shipping: Address,

        #[embed]
        billing: Address,
    }

    let registry = Registry::new();
    assert_eq!(registry.field_map::<Order>().sorted_names(), ["id"]);
    assert!(!registry.is_cached::<Address>());

    let mut rows = MemRows::positioned(
        vec!["id", "street"],
        vec![vec![Value::from(9_i64), Value::from("2 Elm St")]],
    );

    let mut order = Order::default();
    Mapper::new(registry.into()).scan(&mut order, &mut rows).unwrap();

    assert_eq!(order.id, 9);
    assert_eq!(order.shipping.street, "");
    assert_eq!(order.billing.street, "");
}
