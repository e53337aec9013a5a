use linkdb_domain::{ColumnDef, DataType, Record, RecordId, TableSchema, Value};
use linkdb_store::statement;
use proptest::prelude::*;

// 任意文本值（包括引号、分号这类 SQL 元字符）
fn arb_text() -> impl Strategy<Value = String> {
  proptest::collection::vec(any::<char>(), 1..48).prop_map(|chars| chars.into_iter().collect())
}

fn links_schema() -> TableSchema {
  TableSchema::new(
    "links",
    "id",
    vec![
      ColumnDef::new("title", DataType::Text),
      ColumnDef::new("description", DataType::Text),
      ColumnDef::new("url", DataType::Text),
    ],
  )
  .unwrap()
}

proptest! {
  // 值永远走绑定参数：参数个数恒等于列数（UPDATE 多一个主键参数），
  // 语句文本里只出现 ?N 占位符，不出现值本身
  #[test]
  fn insert_binds_every_value(title in arb_text(), description in arb_text(), url in arb_text()) {
    let schema = links_schema();

    let mut record = Record::new();
    record.set("title", Value::from(title));
    record.set("description", Value::from(description));
    record.set("url", Value::from(url));

    let stmt = statement::insert(&schema, &record).unwrap();
    prop_assert_eq!(stmt.params.len(), record.len());
    prop_assert_eq!(stmt.sql.matches('?').count(), record.len());
  }

  #[test]
  fn update_binds_values_then_id(title in arb_text()) {
    let schema = links_schema();

    let mut record = Record::new();
    record.set("title", Value::from(title));

    let stmt = statement::update(&schema, RecordId::new(1), &record).unwrap();
    prop_assert_eq!(stmt.params.len(), record.len() + 1);
    prop_assert_eq!(stmt.params.last(), Some(&Value::Integer(1)));
  }

  // 标识符括引永远成对，内部引号翻倍后不可能提前闭合
  #[test]
  fn quote_ident_is_balanced(name in arb_text()) {
    let quoted = statement::quote_ident(&name);
    prop_assert!(quoted.starts_with('"'));
    prop_assert!(quoted.ends_with('"'));
    prop_assert_eq!(quoted.matches('"').count() % 2, 0);
  }
}
