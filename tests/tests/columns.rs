use pretty_assertions::assert_eq;
use rowscan::{Mapper, Record, Registry};

#[allow(non_snake_case)]
#[derive(Debug, Default, Record)]
struct Profile {
    pub user_id: i64,

    #[tag(sql = "display_name")]
    pub name: String,

    pub Bio: String,

    #[tag(sql = "-")]
    pub avatar: Vec<u8>,

    #[allow(dead_code)]
    internal: i64,
}

#[derive(Debug, Default, Record)]
struct Empty {
    #[allow(dead_code)]
    hidden: i64,
}

#[test]
fn columns_are_sorted_and_normalized() {
    assert_eq!(
        rowscan::columns::<Profile>(),
        "bio, display_name, user_id"
    );
    assert_eq!(rowscan::columns::<Profile>(), rowscan::columns::<Profile>());
}

#[test]
fn aliased_columns() {
    assert_eq!(
        rowscan::columns_aliased::<Profile>("pr"),
        "pr.bio AS pr_bio, pr.display_name AS pr_display_name, pr.user_id AS pr_user_id"
    );
}

#[test]
fn record_without_columns() {
    assert_eq!(rowscan::columns::<Empty>(), "");
    assert_eq!(rowscan::columns_aliased::<Empty>("e"), "");
}

#[test]
fn columns_follow_registry_config() {
    let mut builder = Registry::builder();
    builder.name_mapper(|name| name.to_uppercase());
    let mapper = Mapper::from(builder.build());

    assert_eq!(mapper.columns::<Profile>(), "BIO, DISPLAY_NAME, USER_ID");
}
