//! 语句拼装测试
//!
//! 语句文本 + 参数绑定顺序就是本层对外的契约，逐条断言。

use linkdb_domain::{ColumnDef, DataType, Record, RecordId, StoreError, TableSchema, Value};
use linkdb_store::statement::{self, quote_ident};

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

fn sample_record() -> Record<'static> {
  let mut record = Record::new();
  record.set("title", Value::from("A"));
  record.set("description", Value::from("B"));
  record.set("url", Value::from("C"));
  record
}

// ===============================================
// quote_ident 测试
// ===============================================

#[test]
fn test_quote_ident_plain() {
  assert_eq!(quote_ident("links"), "\"links\"");
}

#[test]
fn test_quote_ident_escapes_quotes() {
  assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
  assert_eq!(quote_ident("\""), "\"\"\"\"");
}

// ===============================================
// SELECT / EXISTS / DELETE 测试
// ===============================================

#[test]
fn test_select_all_statement() {
  let stmt = statement::select_all(&links_schema());
  assert_eq!(
    stmt.sql,
    "SELECT \"id\", \"title\", \"description\", \"url\" FROM \"links\""
  );
  assert!(stmt.params.is_empty());
}

#[test]
fn test_select_by_id_statement() {
  let stmt = statement::select_by_id(&links_schema(), RecordId::new(7));
  assert_eq!(
    stmt.sql,
    "SELECT \"id\", \"title\", \"description\", \"url\" FROM \"links\" WHERE \"id\" = ?1"
  );
  assert_eq!(stmt.params, vec![Value::Integer(7)]);
}

#[test]
fn test_exists_statement() {
  let stmt = statement::exists(&links_schema(), RecordId::new(7));
  assert_eq!(
    stmt.sql,
    "SELECT 1 FROM \"links\" WHERE \"id\" = ?1 LIMIT 1"
  );
  assert_eq!(stmt.params, vec![Value::Integer(7)]);
}

#[test]
fn test_delete_statement() {
  let stmt = statement::delete(&links_schema(), RecordId::new(7));
  assert_eq!(stmt.sql, "DELETE FROM \"links\" WHERE \"id\" = ?1");
  assert_eq!(stmt.params, vec![Value::Integer(7)]);
}

// ===============================================
// INSERT 测试
// ===============================================

#[test]
fn test_insert_statement() {
  let schema = links_schema();
  let record = sample_record();

  let stmt = statement::insert(&schema, &record).unwrap();
  assert_eq!(
    stmt.sql,
    "INSERT INTO \"links\" (\"title\", \"description\", \"url\") VALUES (?1, ?2, ?3)"
  );
  assert_eq!(
    stmt.params,
    vec![Value::from("A"), Value::from("B"), Value::from("C")]
  );
}

#[test]
fn test_insert_uses_record_order_and_present_columns() {
  let schema = links_schema();

  // 只有部分列，且顺序与模式不同：按记录顺序生成
  let mut record = Record::new();
  record.set("url", Value::from("C"));
  record.set("title", Value::from("A"));

  let stmt = statement::insert(&schema, &record).unwrap();
  assert_eq!(
    stmt.sql,
    "INSERT INTO \"links\" (\"url\", \"title\") VALUES (?1, ?2)"
  );
  assert_eq!(stmt.params, vec![Value::from("C"), Value::from("A")]);
}

#[test]
fn test_insert_rejects_empty_record() {
  let schema = links_schema();
  let record = Record::new();

  match statement::insert(&schema, &record) {
    Err(StoreError::EmptyRecord) => {}
    other => panic!("Expected EmptyRecord, got {other:?}"),
  }
}

#[test]
fn test_insert_rejects_unknown_column() {
  let schema = links_schema();
  let mut record = Record::new();
  record.set("color", Value::from("red"));

  match statement::insert(&schema, &record) {
    Err(StoreError::UnknownColumn { name }) => assert_eq!(name, "color"),
    other => panic!("Expected UnknownColumn, got {other:?}"),
  }
}

#[test]
fn test_insert_rejects_identity_column() {
  let schema = links_schema();
  let mut record = Record::new();
  record.set("id", Value::Integer(1));
  record.set("title", Value::from("A"));

  match statement::insert(&schema, &record) {
    Err(StoreError::IdentityColumnInValues { name }) => assert_eq!(name, "id"),
    other => panic!("Expected IdentityColumnInValues, got {other:?}"),
  }
}

// ===============================================
// UPDATE 测试
// ===============================================

#[test]
fn test_update_statement() {
  let schema = links_schema();
  let record = sample_record();

  let stmt = statement::update(&schema, RecordId::new(7), &record).unwrap();
  assert_eq!(
    stmt.sql,
    "UPDATE \"links\" SET \"title\" = ?1, \"description\" = ?2, \"url\" = ?3 WHERE \"id\" = ?4"
  );
  // 主键参数排在所有列参数之后
  assert_eq!(
    stmt.params,
    vec![
      Value::from("A"),
      Value::from("B"),
      Value::from("C"),
      Value::Integer(7),
    ]
  );
}

#[test]
fn test_update_with_partial_record() {
  let schema = links_schema();
  let mut record = Record::new();
  record.set("description", Value::from("B2"));

  let stmt = statement::update(&schema, RecordId::new(3), &record).unwrap();
  assert_eq!(
    stmt.sql,
    "UPDATE \"links\" SET \"description\" = ?1 WHERE \"id\" = ?2"
  );
  assert_eq!(stmt.params, vec![Value::from("B2"), Value::Integer(3)]);
}

#[test]
fn test_update_rejects_identity_column() {
  let schema = links_schema();
  let mut record = Record::new();
  record.set("title", Value::from("A"));
  record.set("id", Value::Integer(9));

  match statement::update(&schema, RecordId::new(7), &record) {
    Err(StoreError::IdentityColumnInValues { name }) => assert_eq!(name, "id"),
    other => panic!("Expected IdentityColumnInValues, got {other:?}"),
  }
}

#[test]
fn test_update_rejects_empty_record() {
  let schema = links_schema();
  let record = Record::new();
  assert!(statement::update(&schema, RecordId::new(7), &record).is_err());
}

// ===============================================
// 注入防护
// ===============================================

#[test]
fn test_values_never_reach_statement_text() {
  let schema = links_schema();
  let hostile = "'; DROP TABLE links; --";

  let mut record = Record::new();
  record.set("title", Value::from(hostile));

  let stmt = statement::insert(&schema, &record).unwrap();
  assert!(!stmt.sql.contains(hostile));
  assert_eq!(stmt.params, vec![Value::from(hostile)]);

  let stmt = statement::update(&schema, RecordId::new(1), &record).unwrap();
  assert!(!stmt.sql.contains(hostile));
}
