//! 值对象
//!
//! 定义数据访问层中的动态类型标量值:
//! - `Null`: NULL 值
//! - `Integer`: 64-bit 整数
//! - `Real`: 64-bit 浮点数
//! - `Text`: UTF-8 字符串(使用 Cow 避免拷贝)
//! - `Blob`: 二进制数据(使用 Cow 避免拷贝)

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::data_type::DataType;

/// 值对象：表中单元格的值
///
/// 表示一行记录中某一列的值，动态类型。
/// 使用 `Cow` 来避免不必要的拷贝，可以持有借用数据或拥有数据。
///
/// 声明周期: 'v (可能引用外部数据，避免拷贝)
/// 线程安全: Send + Sync
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value<'v> {
  /// NULL 值
  Null,
  /// 64-bit 整数
  Integer(i64),
  /// 64-bit 浮点数
  Real(f64),
  /// UTF-8 字符串(使用 Cow 避免拷贝)
  Text(#[serde(borrow)] Cow<'v, str>),
  /// 二进制数据(使用 Cow 避免拷贝)
  Blob(#[serde(borrow)] Cow<'v, [u8]>),
}

// 确保 Value 是 Send + Sync
unsafe impl<'v> Send for Value<'v> {}
unsafe impl<'v> Sync for Value<'v> {}

impl<'v> Value<'v> {
  /// 转换为所有权的值
  ///
  /// 将借用数据克隆为拥有数据，返回 `Value<'static>`。
  ///
  /// # Examples
  ///
  /// use linkdb_domain::Value;
  /// use std::borrow::Cow;
  ///
  /// let value = Value::Text(Cow::Borrowed("hello"));
  /// let owned = value.into_owned();
  ///
  pub fn into_owned(self) -> Value<'static> {
    match self {
      Value::Null => Value::Null,
      Value::Integer(i) => Value::Integer(i),
      Value::Real(r) => Value::Real(r),
      Value::Text(cow) => Value::Text(Cow::Owned(cow.into_owned())),
      Value::Blob(cow) => Value::Blob(Cow::Owned(cow.into_owned())),
    }
  }

  /// 获取值的类型
  ///
  /// 返回对应的 `DataType`。NULL 没有自己的类型，约定归到 Integer。
  ///
  /// # Examples
  ///
  /// use linkdb_domain::{DataType, Value};
  ///
  /// assert_eq!(Value::Integer(123).data_type(), DataType::Integer);
  /// assert_eq!(Value::Real(3.14).data_type(), DataType::Real);
  ///
  pub fn data_type(&self) -> DataType {
    match self {
      Value::Null => DataType::Integer,
      Value::Integer(_) => DataType::Integer,
      Value::Real(_) => DataType::Real,
      Value::Text(_) => DataType::Text,
      Value::Blob(_) => DataType::Blob,
    }
  }

  /// 是否为 NULL
  pub fn is_null(&self) -> bool {
    matches!(self, Value::Null)
  }

  /// 尝试转换为 i64
  ///
  /// 如果值是 `Integer`, 返回 `Some(i64)`, 否则返回 `None`。
  ///
  /// # Examples
  ///
  /// use linkdb_domain::Value;
  ///
  /// assert_eq!(Value::Integer(123).as_integer(), Some(123));
  /// assert_eq!(Value::Real(3.14).as_integer(), None);
  ///
  pub fn as_integer(&self) -> Option<i64> {
    match self {
      Value::Integer(i) => Some(*i),
      _ => None,
    }
  }

  /// 尝试转换为 f64
  ///
  /// 如果值是 `Real`, 返回 `Some(f64)`, 否则返回 `None`。
  pub fn as_real(&self) -> Option<f64> {
    match self {
      Value::Real(r) => Some(*r),
      _ => None,
    }
  }

  /// 尝试转换为 &str
  ///
  /// 如果值是 `Text`, 返回 `Some(&str)`, 否则返回 `None`。
  ///
  /// # Examples
  ///
  /// use linkdb_domain::Value;
  /// use std::borrow::Cow;
  ///
  /// let value = Value::Text(Cow::Borrowed("hello"));
  /// assert_eq!(value.as_text(), Some("hello"));
  ///
  pub fn as_text(&self) -> Option<&str> {
    match self {
      Value::Text(s) => Some(s.as_ref()),
      _ => None,
    }
  }

  /// 尝试转换为 &[u8]
  ///
  /// 如果值是 `Blob`, 返回 `Some(&[u8])`, 否则返回 `None`。
  pub fn as_blob(&self) -> Option<&[u8]> {
    match self {
      Value::Blob(cow) => Some(cow.as_ref()),
      _ => None,
    }
  }
}

// 常用构造的便捷转换（表单文本、整数输入直接进 Record）

impl From<i64> for Value<'static> {
  fn from(i: i64) -> Self {
    Value::Integer(i)
  }
}

impl From<f64> for Value<'static> {
  fn from(r: f64) -> Self {
    Value::Real(r)
  }
}

impl<'v> From<&'v str> for Value<'v> {
  fn from(s: &'v str) -> Self {
    Value::Text(Cow::Borrowed(s))
  }
}

impl From<String> for Value<'static> {
  fn from(s: String) -> Self {
    Value::Text(Cow::Owned(s))
  }
}

impl<'v> From<&'v [u8]> for Value<'v> {
  fn from(b: &'v [u8]) -> Self {
    Value::Blob(Cow::Borrowed(b))
  }
}

impl From<Vec<u8>> for Value<'static> {
  fn from(b: Vec<u8>) -> Self {
    Value::Blob(Cow::Owned(b))
  }
}
