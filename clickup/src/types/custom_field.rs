//! Custom Fields do ClickUp
//!
//! ⚠️ IMPORTANTE: Checkbox fields usam string "true"/"false", NÃO boolean!
//! ⚠️ IMPORTANTE: Timestamps são em MILISSEGUNDOS, não segundos!

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::flex::{self, FlexId};

/// Definição de um custom field (e o valor atual, quando embutido numa task)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    /// ID do custom field (UUID)
    pub id: String,

    pub name: String,

    /// Tipo do campo: "text", "drop_down", "labels", "date", "users", ...
    #[serde(rename = "type")]
    pub field_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_config: Option<TypeConfig>,

    #[serde(deserialize_with = "flex::opt_i64", skip_serializing_if = "Option::is_none")]
    pub date_created: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_from_guests: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Valor atual (formato depende do tipo; ausente nas definições de lista)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonValue>,
}

impl CustomField {
    /// Opções de dropdown/labels, vazio para os demais tipos
    pub fn options(&self) -> &[DropdownOption] {
        self.type_config
            .as_ref()
            .map(|tc| tc.options.as_slice())
            .unwrap_or(&[])
    }

    /// Busca uma opção pelo nome (case-insensitive)
    pub fn option_named(&self, name: &str) -> Option<&DropdownOption> {
        let target = name.trim().to_lowercase();
        self.options()
            .iter()
            .find(|o| o.name.to_lowercase() == target)
    }
}

/// Configuração específica de cada tipo de campo
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeConfig {
    /// Para dropdown/labels: opções disponíveis
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<DropdownOption>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<JsonValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_time: Option<bool>,
}

/// Opção de dropdown/labels
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownOption {
    pub id: String,

    /// Nome da opção (`label` em campos do tipo labels)
    #[serde(alias = "label")]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub orderindex: Option<FlexId>,
}

/// Valor enviado em `POST /task/{id}/field/{field_id}` como `{"value": ...}`
///
/// ⚠️ CRÍTICO: Checkbox usa String("true"/"false"), NÃO bool!
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomFieldValue {
    /// text, email, phone, url, checkbox, dropdown (option id)
    Text(String),
    /// number, currency, rating, date (ms)
    Number(f64),
    /// labels: lista de option ids
    Labels(Vec<String>),
    /// users / tasks: delta `{"add": [...], "rem": [...]}`
    Relation { add: Vec<JsonValue>, rem: Vec<JsonValue> },
    /// location e formatos não mapeados
    Raw(JsonValue),
}

impl CustomFieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// ⚠️ Checkbox usa string "true"/"false"
    pub fn checkbox(checked: bool) -> Self {
        Self::Text(if checked { "true" } else { "false" }.to_string())
    }

    /// Dropdown: id da opção selecionada
    pub fn dropdown(option_id: impl Into<String>) -> Self {
        Self::Text(option_id.into())
    }

    pub fn labels(option_ids: Vec<String>) -> Self {
        Self::Labels(option_ids)
    }

    /// ⚠️ Date: timestamp em MILISSEGUNDOS
    pub fn date(timestamp_ms: i64) -> Self {
        Self::Number(timestamp_ms as f64)
    }

    /// Users: adiciona/remove ids de usuário
    pub fn users(add: Vec<i64>, rem: Vec<i64>) -> Self {
        Self::Relation {
            add: add.into_iter().map(JsonValue::from).collect(),
            rem: rem.into_iter().map(JsonValue::from).collect(),
        }
    }

    /// Rating (0-5)
    pub fn rating(rating: i32) -> Self {
        Self::Number(rating.clamp(0, 5) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checkbox_uses_string() {
        assert_eq!(
            serde_json::to_value(CustomFieldValue::checkbox(true)).unwrap(),
            json!("true")
        );
        assert_eq!(
            serde_json::to_value(CustomFieldValue::checkbox(false)).unwrap(),
            json!("false")
        );
    }

    #[test]
    fn test_date_uses_milliseconds() {
        // 2023-01-01 00:00:00 UTC
        let value = serde_json::to_value(CustomFieldValue::date(1672531200000)).unwrap();
        assert_eq!(value.as_f64(), Some(1672531200000.0));
    }

    #[test]
    fn test_rating_clamps() {
        assert_eq!(CustomFieldValue::rating(10), CustomFieldValue::Number(5.0));
    }

    #[test]
    fn test_users_delta_shape() {
        assert_eq!(
            serde_json::to_value(CustomFieldValue::users(vec![1], vec![])).unwrap(),
            json!({"add": [1], "rem": []})
        );
    }

    #[test]
    fn test_field_definition_from_list() {
        let field: CustomField = serde_json::from_value(json!({
            "id": "0ed63eec-1c50-4190-91c1-59b4b17557f6",
            "name": "Client",
            "type": "drop_down",
            "date_created": "1566400407303",
            "type_config": {
                "options": [
                    {"id": "a1", "name": "Acme", "color": null, "orderindex": 0},
                    {"id": "b2", "name": "Globex", "orderindex": "1"}
                ]
            }
        }))
        .unwrap();

        assert_eq!(field.field_type, "drop_down");
        assert_eq!(field.date_created, Some(1566400407303));
        assert_eq!(field.options().len(), 2);
        assert_eq!(field.option_named("globex").map(|o| o.id.as_str()), Some("b2"));
        assert!(field.value.is_none());
    }
}
