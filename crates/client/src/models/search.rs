//! Structured search results.
//!
//! Loggly search responses have the shape
//! `{"context": {...}, "data": <array|object>, ...}`. [`materialize`] turns a
//! classified response into a [`SearchResult`]: the echoed query context, the
//! matched events (or facet buckets for faceted searches), and every other
//! top-level key untouched.
//!
//! # Invariants
//! - A result holds only events or only facets, chosen by `is_faceted` at
//!   construction.
//! - Item order is payload order. Nothing is sorted, deduplicated or filtered.
//! - Decoding is all-or-nothing: a shape mismatch anywhere yields
//!   [`ClientError::MalformedPayload`] and no partial result.

use serde_json::{Map, Number, Value};

use crate::error::{ClientError, Result};
use crate::response::ClassifiedResponse;
use crate::serde_helpers::value_as_u64;

/// Insertion-ordered attribute bag.
pub type Fields = Map<String, Value>;

/// The query parameters Loggly echoes back with a search.
///
/// Loggly's `from` and `until` keys are exposed as `from_date` and `until_date`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchContext {
    from_date: Option<Value>,
    until_date: Option<Value>,
    fields: Fields,
}

impl SearchContext {
    fn from_fields(context: Fields) -> Self {
        let mut result = Self::default();
        for (key, value) in context {
            match key.as_str() {
                "from" => result.from_date = Some(value),
                "until" => result.until_date = Some(value),
                _ => {
                    result.fields.insert(key, value);
                }
            }
        }
        result
    }

    pub fn rows(&self) -> Option<u64> {
        self.fields.get("rows").and_then(value_as_u64)
    }

    pub fn start(&self) -> Option<u64> {
        self.fields.get("start").and_then(value_as_u64)
    }

    pub fn from_date(&self) -> Option<&str> {
        self.from_date.as_ref().and_then(Value::as_str)
    }

    pub fn until_date(&self) -> Option<&str> {
        self.until_date.as_ref().and_then(Value::as_str)
    }

    pub fn query(&self) -> Option<&str> {
        self.fields.get("query").and_then(Value::as_str)
    }

    pub fn order(&self) -> Option<&str> {
        self.fields.get("order").and_then(Value::as_str)
    }

    /// Look up any context key, using `from_date`/`until_date` for the renamed ones.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match key {
            "from_date" => self.from_date.as_ref(),
            "until_date" => self.until_date.as_ref(),
            _ => self.fields.get(key),
        }
    }

    /// Keys other than the renamed `from`/`until`.
    pub fn fields(&self) -> &Fields {
        &self.fields
    }
}

/// One matched log entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Event {
    fields: Fields,
}

impl Event {
    pub fn text(&self) -> Option<&str> {
        self.str_field("text")
    }

    pub fn timestamp(&self) -> Option<&str> {
        self.str_field("timestamp")
    }

    pub fn inputname(&self) -> Option<&str> {
        self.str_field("inputname")
    }

    /// Numeric or string, depending on the account.
    pub fn inputid(&self) -> Option<&Value> {
        self.fields.get("inputid")
    }

    pub fn ip(&self) -> Option<&str> {
        self.str_field("ip")
    }

    pub fn isjson(&self) -> Option<bool> {
        self.fields.get("isjson").and_then(Value::as_bool)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// One bucket of a faceted search.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    facet: String,
    count: Number,
}

impl Facet {
    pub fn facet(&self) -> &str {
        &self.facet
    }

    /// The count exactly as Loggly sent it.
    pub fn count(&self) -> &Number {
        &self.count
    }

    pub fn count_u64(&self) -> Option<u64> {
        self.count.as_u64()
    }
}

/// Items of a search result.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchItems {
    Events(Vec<Event>),
    Facets(Vec<Facet>),
}

impl SearchItems {
    pub fn len(&self) -> usize {
        match self {
            SearchItems::Events(events) => events.len(),
            SearchItems::Facets(facets) => facets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A decoded search response.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    is_faceted: bool,
    context: Option<SearchContext>,
    items: SearchItems,
    extra: Fields,
}

impl SearchResult {
    /// Decode a search body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MalformedPayload`] if the text is not a JSON
    /// object or `context`/`data` have the wrong JSON type for the mode.
    pub fn from_json_str(text: &str, is_faceted: bool) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ClientError::MalformedPayload(format!("search body is not JSON: {e}")))?;
        Self::from_value(value, is_faceted)
    }

    /// Decode an already-parsed search body.
    pub fn from_value(value: Value, is_faceted: bool) -> Result<Self> {
        let payload = match value {
            Value::Object(payload) => payload,
            other => return Err(malformed("search body", "an object", &other)),
        };

        let mut context = None;
        let mut items = if is_faceted {
            SearchItems::Facets(Vec::new())
        } else {
            SearchItems::Events(Vec::new())
        };
        let mut extra = Fields::new();

        for (key, value) in payload {
            match key.as_str() {
                "context" => match value {
                    Value::Object(fields) => context = Some(SearchContext::from_fields(fields)),
                    other => return Err(malformed("context", "an object", &other)),
                },
                "data" if is_faceted => items = SearchItems::Facets(decode_facets(value)?),
                "data" => items = SearchItems::Events(decode_events(value)?),
                _ => {
                    extra.insert(key, value);
                }
            }
        }

        Ok(Self {
            is_faceted,
            context,
            items,
            extra,
        })
    }

    pub fn is_faceted(&self) -> bool {
        self.is_faceted
    }

    pub fn context(&self) -> Option<&SearchContext> {
        self.context.as_ref()
    }

    pub fn items(&self) -> &SearchItems {
        &self.items
    }

    /// Matched events. Empty for faceted results.
    pub fn events(&self) -> &[Event] {
        match &self.items {
            SearchItems::Events(events) => events,
            SearchItems::Facets(_) => &[],
        }
    }

    /// Facet buckets. Empty for event results.
    pub fn facets(&self) -> &[Facet] {
        match &self.items {
            SearchItems::Facets(facets) => facets,
            SearchItems::Events(_) => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of matches Loggly reports (`numFound`).
    pub fn num_found(&self) -> Option<u64> {
        self.extra.get("numFound").and_then(value_as_u64)
    }

    pub fn gmt_offset(&self) -> Option<&Value> {
        self.extra.get("gmt_offset")
    }

    pub fn gap(&self) -> Option<&Value> {
        self.extra.get("gap")
    }

    /// Any top-level key other than `context` and `data`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    pub fn extra(&self) -> &Fields {
        &self.extra
    }
}

/// Decode a classified search response.
pub fn materialize(response: &ClassifiedResponse, is_faceted: bool) -> Result<SearchResult> {
    SearchResult::from_json_str(response.body_text(), is_faceted)
}

fn decode_events(data: Value) -> Result<Vec<Event>> {
    let entries = match data {
        Value::Array(entries) => entries,
        other => return Err(malformed("data", "an array of events", &other)),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            Value::Object(fields) => Ok(Event { fields }),
            other => Err(malformed(&format!("data[{index}]"), "an object", &other)),
        })
        .collect()
}

fn decode_facets(data: Value) -> Result<Vec<Facet>> {
    let buckets = match data {
        Value::Object(buckets) => buckets,
        other => return Err(malformed("data", "an object of facet counts", &other)),
    };

    buckets
        .into_iter()
        .map(|(facet, count)| match count {
            Value::Number(count) => Ok(Facet { facet, count }),
            other => Err(malformed(&format!("data.{facet}"), "a number", &other)),
        })
        .collect()
}

fn malformed(location: &str, expected: &str, found: &Value) -> ClientError {
    let kind = match found {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    ClientError::MalformedPayload(format!("{location} must be {expected}, found {kind}"))
}
