//! Priority levels para tarefas do ClickUp
//!
//! A API aceita valores de 1 a 4 na escrita:
//! - 1 = Urgent
//! - 2 = High
//! - 3 = Normal (padrão)
//! - 4 = Low
//!
//! Na leitura a task traz um objeto (`{"id": "2", "priority": "high", ...}`)
//! ou `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Nível de prioridade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Urgent = 1,
    High = 2,
    #[default]
    Normal = 3,
    Low = 4,
}

impl Priority {
    /// Converte para o valor inteiro usado pela API
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            1 => Some(Priority::Urgent),
            2 => Some(Priority::High),
            3 => Some(Priority::Normal),
            4 => Some(Priority::Low),
            _ => None,
        }
    }

    /// Aceita o número ("1".."4") ou o nome ("urgent", "high", ...)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Ok(n) = value.parse::<i32>() {
            return Self::from_i32(n);
        }
        match value.to_ascii_lowercase().as_str() {
            "urgent" => Some(Priority::Urgent),
            "high" => Some(Priority::High),
            "normal" => Some(Priority::Normal),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Normal => "normal",
            Priority::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

// Aceita número, string numérica, nome, ou o objeto da task; inválido → None
fn priority_from_value(value: &Value) -> Option<Priority> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| Priority::from_i32(n as i32)),
        Value::String(s) => Priority::parse(s),
        Value::Object(map) => map
            .get("id")
            .and_then(priority_from_value)
            .or_else(|| map.get("priority").and_then(priority_from_value)),
        _ => None,
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(priority_from_value(&value).unwrap_or_default())
    }
}

/// Deserializer para `Option<Priority>` onde `null` e valores inválidos viram `None`
pub fn opt_priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(priority_from_value))
}
