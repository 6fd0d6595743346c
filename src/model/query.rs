//! Read queries accepted by [`super::TodoModel::read`].

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::ModelError;
use crate::repositories::TodoFilter;

/// What to look up when reading todos.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TodoQuery {
    /// Every todo, unfiltered.
    #[default]
    All,
    /// The todo with this id.
    Id(i32),
    /// Todos matching every set field of the filter.
    Filter(TodoFilter),
}

impl TodoQuery {
    pub(crate) fn into_filter(self) -> Option<TodoFilter> {
        match self {
            Self::All => None,
            Self::Id(id) => Some(TodoFilter::id(id)),
            Self::Filter(filter) => Some(filter),
        }
    }
}

impl From<i32> for TodoQuery {
    fn from(id: i32) -> Self {
        Self::Id(id)
    }
}

impl From<TodoFilter> for TodoQuery {
    fn from(filter: TodoFilter) -> Self {
        Self::Filter(filter)
    }
}

/// Parses an id the way a lenient integer parser would: optional surrounding
/// whitespace and sign, then the leading run of digits. Trailing garbage is
/// ignored, so `"12abc"` is id 12.
impl FromStr for TodoQuery {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_leading_int(s)
            .map(Self::Id)
            .ok_or_else(|| ModelError::validation(format!("'{}' is not a todo id", s)))
    }
}

impl TryFrom<&str> for TodoQuery {
    type Error = ModelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// JSON queries: `null` reads everything, a number or numeric string is an id,
/// an object is a field filter.
impl TryFrom<Value> for TodoQuery {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::All),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
                .and_then(|id| i32::try_from(id).ok())
                .map(Self::Id)
                .ok_or_else(|| ModelError::validation(format!("'{}' is not a todo id", n))),
            Value::String(s) => s.parse(),
            Value::Object(_) => serde_json::from_value::<TodoFilter>(value)
                .map(Self::Filter)
                .map_err(|e| ModelError::validation(format!("Invalid todo filter: {}", e))),
            other => Err(ModelError::validation(format!("Unsupported todo query: {}", other))),
        }
    }
}

impl fmt::Display for TodoQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Id(id) => write!(f, "id={}", id),
            Self::Filter(filter) => write!(f, "{:?}", filter),
        }
    }
}

fn parse_leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
