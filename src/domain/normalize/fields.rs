//! Tolerant field access over untyped provider payloads.
//!
//! Every accessor returns a usable value. When the payload is missing a
//! field, carries the wrong type or an out-of-range number, the accessor
//! substitutes a default and records a [`ValidationDefault`].

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::domain::foundation::{clamp_or, SignedUnit, UnitInterval};

/// Why a field was replaced or repaired.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DefaultReason {
    Missing,
    WrongType,
    OutOfRange { original: f64 },
    UnknownLabel { label: String },
    CoercedFromString,
    GeneratedId,
    DuplicateId,
    UnknownReference,
}

impl fmt::Display for DefaultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultReason::Missing => write!(f, "missing"),
            DefaultReason::WrongType => write!(f, "wrong type"),
            DefaultReason::OutOfRange { original } => write!(f, "out of range ({})", original),
            DefaultReason::UnknownLabel { label } => write!(f, "unknown label '{}'", label),
            DefaultReason::CoercedFromString => write!(f, "number given as string"),
            DefaultReason::GeneratedId => write!(f, "identifier generated"),
            DefaultReason::DuplicateId => write!(f, "duplicate identifier replaced"),
            DefaultReason::UnknownReference => write!(f, "reference to unknown record"),
        }
    }
}

/// A malformed or missing field that was silently repaired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationDefault {
    pub field: String,
    pub reason: DefaultReason,
}

/// Collects validation defaults while a payload is read.
#[derive(Debug, Default)]
pub struct DefaultLog {
    events: Vec<ValidationDefault>,
}

impl DefaultLog {
    pub fn record(&mut self, field: impl Into<String>, reason: DefaultReason) {
        let field = field.into();
        debug!(field = %field, reason = %reason, "Validation default applied");
        self.events.push(ValidationDefault { field, reason });
    }

    pub fn into_events(self) -> Vec<ValidationDefault> {
        self.events
    }
}

/// Read-only view of one JSON object at a known path.
pub struct Fields<'v> {
    object: Option<&'v Map<String, Value>>,
    path: String,
}

impl<'v> Fields<'v> {
    /// Views `value` as an object; anything else reads as an empty object.
    pub fn new(value: &'v Value, path: impl Into<String>, log: &mut DefaultLog) -> Self {
        let path = path.into();
        let object = match value {
            Value::Object(map) => Some(map),
            Value::Null => {
                log.record(path.as_str(), DefaultReason::Missing);
                None
            }
            _ => {
                log.record(path.as_str(), DefaultReason::WrongType);
                None
            }
        };
        Self { object, path }
    }

    fn field_path(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path, name)
        }
    }

    pub fn raw(&self, name: &str) -> Option<&'v Value> {
        self.object.and_then(|map| map.get(name)).filter(|v| !v.is_null())
    }

    fn number(&self, name: &str, log: &mut DefaultLog) -> Option<f64> {
        match self.raw(name) {
            None => {
                log.record(self.field_path(name), DefaultReason::Missing);
                None
            }
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => {
                    log.record(self.field_path(name), DefaultReason::CoercedFromString);
                    Some(parsed)
                }
                _ => {
                    log.record(self.field_path(name), DefaultReason::WrongType);
                    None
                }
            },
            Some(_) => {
                log.record(self.field_path(name), DefaultReason::WrongType);
                None
            }
        }
    }

    fn clamped(&self, name: &str, min: f64, max: f64, default: f64, log: &mut DefaultLog) -> f64 {
        match self.number(name, log) {
            None => default,
            Some(value) => {
                let clamped = clamp_or(value, min, max, default);
                if clamped != value {
                    log.record(self.field_path(name), DefaultReason::OutOfRange { original: value });
                }
                clamped
            }
        }
    }

    /// Any finite number.
    pub fn real(&self, name: &str, default: f64, log: &mut DefaultLog) -> f64 {
        self.clamped(name, f64::MIN, f64::MAX, default, log)
    }

    pub fn non_negative(&self, name: &str, default: f64, log: &mut DefaultLog) -> f64 {
        self.clamped(name, 0.0, f64::MAX, default, log)
    }

    pub fn unit(&self, name: &str, default: f64, log: &mut DefaultLog) -> UnitInterval {
        UnitInterval::new(self.clamped(name, 0.0, 1.0, default, log))
    }

    /// A signed impact; missing means no impact.
    pub fn signed(&self, name: &str, log: &mut DefaultLog) -> SignedUnit {
        SignedUnit::new(self.clamped(name, -1.0, 1.0, 0.0, log))
    }

    pub fn boolean(&self, name: &str, default: bool, log: &mut DefaultLog) -> bool {
        match self.raw(name) {
            Some(Value::Bool(b)) => *b,
            None => {
                log.record(self.field_path(name), DefaultReason::Missing);
                default
            }
            Some(_) => {
                log.record(self.field_path(name), DefaultReason::WrongType);
                default
            }
        }
    }

    pub fn text(&self, name: &str, default: &str, log: &mut DefaultLog) -> String {
        match self.raw(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => {
                log.record(self.field_path(name), DefaultReason::WrongType);
                n.to_string()
            }
            None => {
                log.record(self.field_path(name), DefaultReason::Missing);
                default.to_string()
            }
            Some(_) => {
                log.record(self.field_path(name), DefaultReason::WrongType);
                default.to_string()
            }
        }
    }

    /// Non-blank string, if present.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        match self.raw(name) {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// A closed label parsed with `parse`; unknown labels fall back.
    pub fn label<T: Copy>(
        &self,
        name: &str,
        parse: fn(&str) -> Option<T>,
        default: T,
        log: &mut DefaultLog,
    ) -> T {
        match self.raw(name) {
            Some(Value::String(s)) => parse(s).unwrap_or_else(|| {
                log.record(self.field_path(name), DefaultReason::UnknownLabel { label: s.clone() });
                default
            }),
            None => {
                log.record(self.field_path(name), DefaultReason::Missing);
                default
            }
            Some(_) => {
                log.record(self.field_path(name), DefaultReason::WrongType);
                default
            }
        }
    }

    /// A list of strings; non-string entries are dropped.
    pub fn strings(&self, name: &str, log: &mut DefaultLog) -> Vec<String> {
        match self.raw(name) {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| match item {
                    Value::String(s) => Some(s.clone()),
                    _ => {
                        log.record(format!("{}[{}]", self.field_path(name), i), DefaultReason::WrongType);
                        None
                    }
                })
                .collect(),
            Some(Value::String(s)) => {
                log.record(self.field_path(name), DefaultReason::WrongType);
                vec![s.clone()]
            }
            None => {
                log.record(self.field_path(name), DefaultReason::Missing);
                Vec::new()
            }
            Some(_) => {
                log.record(self.field_path(name), DefaultReason::WrongType);
                Vec::new()
            }
        }
    }

    /// The elements of an array field, each with its indexed path.
    pub fn items(&self, name: &str, log: &mut DefaultLog) -> Vec<(String, &'v Value)> {
        match self.raw(name) {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| (format!("{}[{}]", self.field_path(name), i), item))
                .collect(),
            None => {
                log.record(self.field_path(name), DefaultReason::Missing);
                Vec::new()
            }
            Some(_) => {
                log.record(self.field_path(name), DefaultReason::WrongType);
                Vec::new()
            }
        }
    }

    /// A map of name to number, with each value clamped into `[min, max]`.
    pub fn number_map(
        &self,
        name: &str,
        min: f64,
        max: f64,
        log: &mut DefaultLog,
    ) -> BTreeMap<String, f64> {
        let Some(raw) = self.raw(name) else {
            log.record(self.field_path(name), DefaultReason::Missing);
            return BTreeMap::new();
        };
        let inner = Fields::new(raw, self.field_path(name), log);
        inner
            .object
            .into_iter()
            .flat_map(|map| map.keys())
            .filter_map(|key| {
                let number = inner.number(key, log)?;
                let clamped = clamp_or(number, min, max, 0.0);
                if clamped != number {
                    log.record(inner.field_path(key), DefaultReason::OutOfRange { original: number });
                }
                Some((key.clone(), clamped))
            })
            .collect()
    }

    /// An arbitrary JSON object carried through unchanged.
    pub fn json_map(&self, name: &str, log: &mut DefaultLog) -> BTreeMap<String, Value> {
        match self.raw(name) {
            Some(Value::Object(map)) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            None => BTreeMap::new(),
            Some(_) => {
                log.record(self.field_path(name), DefaultReason::WrongType);
                BTreeMap::new()
            }
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unit_clamps_and_records() {
        let value = json!({"p": 1.7, "q": "0.25", "r": true});
        let mut log = DefaultLog::default();
        let fields = Fields::new(&value, "opt", &mut log);

        assert_eq!(fields.unit("p", 0.5, &mut log).value(), 1.0);
        assert_eq!(fields.unit("q", 0.5, &mut log).value(), 0.25);
        assert_eq!(fields.unit("r", 0.5, &mut log).value(), 0.5);
        assert_eq!(fields.unit("missing", 0.3, &mut log).value(), 0.3);

        let events = log.into_events();
        assert_eq!(events[0], ValidationDefault {
            field: "opt.p".to_string(),
            reason: DefaultReason::OutOfRange { original: 1.7 },
        });
        assert_eq!(events[1].reason, DefaultReason::CoercedFromString);
        assert_eq!(events[2].reason, DefaultReason::WrongType);
        assert_eq!(events[3].reason, DefaultReason::Missing);
    }

    #[test]
    fn zero_is_a_real_value() {
        let value = json!({"p": 0});
        let mut log = DefaultLog::default();
        let fields = Fields::new(&value, "", &mut log);
        assert_eq!(fields.unit("p", 0.5, &mut log).value(), 0.0);
        assert!(log.into_events().is_empty());
    }

    #[test]
    fn non_object_reads_as_empty() {
        let value = json!("just text");
        let mut log = DefaultLog::default();
        let fields = Fields::new(&value, "impact", &mut log);
        assert_eq!(fields.text("title", "Untitled", &mut log), "Untitled");
        assert_eq!(log.into_events()[0].reason, DefaultReason::WrongType);
    }

    #[test]
    fn strings_drop_non_strings() {
        let value = json!({"pros": ["cheap", 3, "fast"]});
        let mut log = DefaultLog::default();
        let fields = Fields::new(&value, "", &mut log);
        assert_eq!(fields.strings("pros", &mut log), vec!["cheap", "fast"]);
        assert_eq!(log.into_events()[0].field, "pros[1]");
    }

    #[test]
    fn labels_fall_back_on_unknown_values() {
        use crate::domain::foundation::RiskLevel;
        let value = json!({"a": "Very High", "b": "apocalyptic"});
        let mut log = DefaultLog::default();
        let fields = Fields::new(&value, "", &mut log);
        assert_eq!(fields.label("a", RiskLevel::from_label, RiskLevel::Medium, &mut log), RiskLevel::VeryHigh);
        assert_eq!(fields.label("b", RiskLevel::from_label, RiskLevel::Medium, &mut log), RiskLevel::Medium);
    }

    #[test]
    fn number_map_clamps_entries() {
        let value = json!({"support": {"army": 1.4, "guilds": -0.2, "bad": "x"}});
        let mut log = DefaultLog::default();
        let fields = Fields::new(&value, "", &mut log);
        let map = fields.number_map("support", -1.0, 1.0, &mut log);
        assert_eq!(map.get("army"), Some(&1.0));
        assert_eq!(map.get("guilds"), Some(&-0.2));
        assert!(!map.contains_key("bad"));
    }
}
