//! SQLite 实现
//!
//! `SqliteStore` 持有一个连接和一份构造时内省好的模式描述符。
//! 每个操作自己 prepare 一条语句、绑定参数、做一次往返，
//! 语句在作用域结束时确定性释放（成功或失败都一样）。
//!
//! 模式内省只在 `open` 时做一次（PRAGMA table_info），
//! 之后所有操作都走显式描述符，不再做运行时元数据反射。

use std::borrow::Cow;
use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection, Row};

use linkdb_domain::{
  ColumnDef, DataType, Record, RecordId, Result, StoreError, TableSchema, Value,
};

use crate::options::ConnectOptions;
use crate::service::DatabaseService;
use crate::statement::{self, quote_ident};

/// SQLite 数据访问服务
///
/// `DatabaseService` 的唯一实现，由模式描述符参数化。
/// 固定列的表和"运行时发现列"的表走同一份代码，
/// 差异只在 `open` 时内省出的描述符上。
#[derive(Debug)]
pub struct SqliteStore {
  conn: Connection,
  schema: TableSchema,
}

impl SqliteStore {
  /// 打开数据库并内省目标表的模式
  ///
  /// 内省失败（表不存在、没有主键列）在这里就报错，
  /// 不会等到第一次 CRUD 调用才暴露。
  ///
  /// # Examples
  ///
  /// use linkdb_store::{ConnectOptions, SqliteStore};
  ///
  /// let options = ConnectOptions::new("/tmp/links.db", "links");
  /// let store = SqliteStore::open(&options)?;
  ///
  pub fn open(options: &ConnectOptions) -> Result<Self> {
    let conn = open_connection(&options.database)?;
    Self::from_connection(conn, &options.table)
  }

  /// 用一个已有连接构造服务（内存库、测试共用）
  pub fn from_connection(conn: Connection, table: &str) -> Result<Self> {
    let schema = introspect_schema(&conn, table)?;
    Ok(Self { conn, schema })
  }

  /// 内省好的模式描述符
  pub fn schema(&self) -> &TableSchema {
    &self.schema
  }

  pub(crate) fn connection(&self) -> &Connection {
    &self.conn
  }

  // 把一个查询结果行物化成记录：第 0 列是主键，其余按模式顺序
  fn map_row(&self, row: &Row<'_>) -> rusqlite::Result<Record<'static>> {
    let id: i64 = row.get(0)?;
    let mut record = Record::with_identity(RecordId::new(id));

    for (index, col) in self.schema.columns().iter().enumerate() {
      let value = from_sql_value(row.get_ref(index + 1)?);
      record.set(col.name.clone(), value);
    }

    Ok(record)
  }
}

impl DatabaseService for SqliteStore {
  fn fetch_all(&self) -> Result<Vec<Record<'static>>> {
    let stmt = statement::select_all(&self.schema);
    let msg = format!(
      "an error occurred while retrieving all rows from '{}'",
      self.schema.table()
    );

    let mut prepared = self.conn.prepare(&stmt.sql).map_err(sql_err(&msg))?;
    let mut rows = prepared.query([]).map_err(sql_err(&msg))?;

    let mut records = Vec::new();
    while let Some(row) = rows.next().map_err(sql_err(&msg))? {
      records.push(self.map_row(row).map_err(sql_err(&msg))?);
    }

    Ok(records)
  }

  fn fetch(&self, id: RecordId) -> Result<Option<Record<'static>>> {
    let stmt = statement::select_by_id(&self.schema, id);
    let msg = format!("an error occurred while retrieving row with id={id}");

    let mut prepared = self.conn.prepare(&stmt.sql).map_err(sql_err(&msg))?;
    let mut rows = prepared
      .query(params_from_iter(stmt.params.iter().map(to_sql_value)))
      .map_err(sql_err(&msg))?;

    match rows.next().map_err(sql_err(&msg))? {
      Some(row) => Ok(Some(self.map_row(row).map_err(sql_err(&msg))?)),
      None => Ok(None),
    }
  }

  fn exists(&self, id: RecordId) -> Result<bool> {
    let stmt = statement::exists(&self.schema, id);
    let msg = format!("an error occurred while checking for a row with id={id}");

    let mut prepared = self.conn.prepare(&stmt.sql).map_err(sql_err(&msg))?;
    prepared
      .exists(params_from_iter(stmt.params.iter().map(to_sql_value)))
      .map_err(sql_err(&msg))
  }

  fn insert(&self, record: &mut Record<'static>) -> Result<()> {
    // 已持久化的记录直接拒绝，避免先写库再发现 identity 冲突
    if let Some(current) = record.identity() {
      return Err(StoreError::IdentityAlreadySet { current });
    }

    // 借用结束前把参数转成引擎自己的值类型，腾出记录的可变借用
    let (sql, params) = {
      let stmt = statement::insert(&self.schema, record)?;
      let params: Vec<rusqlite::types::Value> = stmt.params.iter().map(to_sql_value).collect();
      (stmt.sql, params)
    };

    let msg = format!(
      "an error occurred while inserting a new row into '{}'",
      self.schema.table()
    );

    let mut prepared = self.conn.prepare(&sql).map_err(sql_err(&msg))?;
    prepared
      .execute(params_from_iter(params))
      .map_err(sql_err(&msg))?;

    // 用存储端生成的主键回填 identity；记录已持久化过则在这里报错
    let id = self.conn.last_insert_rowid();
    record.assign_identity(RecordId::new(id))
  }

  fn update(&self, id: RecordId, record: &Record<'_>) -> Result<()> {
    let stmt = statement::update(&self.schema, id, record)?;
    let msg = format!("an error occurred while updating row with id={id}");

    let mut prepared = self.conn.prepare(&stmt.sql).map_err(sql_err(&msg))?;
    prepared
      .execute(params_from_iter(stmt.params.iter().map(to_sql_value)))
      .map_err(sql_err(&msg))?;

    Ok(())
  }

  fn delete(&self, id: RecordId) -> Result<()> {
    let stmt = statement::delete(&self.schema, id);
    let msg = format!("an error occurred while deleting row with id={id}");

    let mut prepared = self.conn.prepare(&stmt.sql).map_err(sql_err(&msg))?;

    // 影响行数被有意忽略：删除不存在的 id 是幂等 no-op
    prepared
      .execute(params_from_iter(stmt.params.iter().map(to_sql_value)))
      .map_err(sql_err(&msg))?;

    Ok(())
  }

  fn column_names(&self) -> Vec<String> {
    self.schema.column_names()
  }
}

/// 内省目标表的模式（PRAGMA table_info）
///
/// 返回的描述符：pk 列作为主键列，其余列按目录顺序作为数据列。
/// SQLite 允许任意列声明类型，映射不到四种基础类型的按 TEXT 处理。
///
/// 失败情况（都以 `StoreError` 上报）：
/// - 表不存在（table_info 没有任何行）
/// - 没有主键列，或主键是复合主键
pub fn introspect_schema(conn: &Connection, table: &str) -> Result<TableSchema> {
  let sql = format!("PRAGMA table_info({})", quote_ident(table));
  let msg = format!("an error occurred while introspecting table '{table}'");

  let mut prepared = conn.prepare(&sql).map_err(sql_err(&msg))?;
  let mut rows = prepared.query([]).map_err(sql_err(&msg))?;

  let mut id_column: Option<String> = None;
  let mut columns = Vec::new();

  while let Some(row) = rows.next().map_err(sql_err(&msg))? {
    // table_info 的列: cid, name, type, notnull, dflt_value, pk
    let name: String = row.get(1).map_err(sql_err(&msg))?;
    let decl_type: String = row.get(2).map_err(sql_err(&msg))?;
    let pk: i64 = row.get(5).map_err(sql_err(&msg))?;

    if pk > 0 {
      if id_column.is_some() {
        return Err(StoreError::message(format!(
          "table '{table}' has a composite primary key, which is not supported"
        )));
      }
      id_column = Some(name);
    } else {
      let data_type = DataType::from_sql_type(&decl_type).unwrap_or(DataType::Text);
      columns.push(ColumnDef::new(name, data_type));
    }
  }

  let id_column = id_column.ok_or_else(|| {
    StoreError::message(format!(
      "table '{table}' does not exist or has no primary key column"
    ))
  })?;

  TableSchema::new(table, id_column, columns)
}

fn open_connection(database: &Path) -> Result<Connection> {
  Connection::open(database).map_err(|err| {
    StoreError::store(
      format!("failed to open database at '{}'", database.display()),
      err,
    )
  })
}

// 域值 -> 引擎值（文本/二进制克隆为拥有数据）
fn to_sql_value(value: &Value<'_>) -> rusqlite::types::Value {
  match value {
    Value::Null => rusqlite::types::Value::Null,
    Value::Integer(i) => rusqlite::types::Value::Integer(*i),
    Value::Real(r) => rusqlite::types::Value::Real(*r),
    Value::Text(s) => rusqlite::types::Value::Text(s.clone().into_owned()),
    Value::Blob(b) => rusqlite::types::Value::Blob(b.clone().into_owned()),
  }
}

// 引擎值 -> 域值（非 UTF-8 文本按 lossy 处理，不 panic）
fn from_sql_value(value: ValueRef<'_>) -> Value<'static> {
  match value {
    ValueRef::Null => Value::Null,
    ValueRef::Integer(i) => Value::Integer(i),
    ValueRef::Real(r) => Value::Real(r),
    ValueRef::Text(bytes) => Value::Text(Cow::Owned(String::from_utf8_lossy(bytes).into_owned())),
    ValueRef::Blob(bytes) => Value::Blob(Cow::Owned(bytes.to_vec())),
  }
}

fn sql_err(message: &str) -> impl Fn(rusqlite::Error) -> StoreError + '_ {
  move |err| StoreError::store(message, err)
}
