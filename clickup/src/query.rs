//! Query encoder com as convenções da API do ClickUp
//!
//! - escalares saem uma única vez: `key=value`
//! - booleanos só saem quando `true` (`false` ≡ ausente)
//! - inteiro zero ≡ ausente (sentinela de "sem filtro" em paginação/datas)
//! - listas repetem a chave com sufixo `[]`: `statuses[]=a&statuses[]=b`
//!
//! As chaves saem em ordem lexicográfica para que a saída seja determinística.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum QueryValue {
    Scalar(String),
    List(Vec<String>),
}

/// Builder de query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    entries: BTreeMap<String, QueryValue>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escalar textual; string vazia é tratada como ausente
    pub fn str(mut self, key: &str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref();
        if value.is_empty() {
            self.entries.remove(key);
        } else {
            self.entries
                .insert(key.to_string(), QueryValue::Scalar(value.to_string()));
        }
        self
    }

    /// Escalar opcional
    pub fn opt_str(self, key: &str, value: Option<impl AsRef<str>>) -> Self {
        match value {
            Some(v) => self.str(key, v),
            None => self,
        }
    }

    /// Inteiro; zero é tratado como ausente
    pub fn int(mut self, key: &str, value: i64) -> Self {
        if value == 0 {
            self.entries.remove(key);
            self
        } else {
            self.entries
                .insert(key.to_string(), QueryValue::Scalar(value.to_string()));
            self
        }
    }

    /// Booleano; só emitido quando `true`
    pub fn bool(mut self, key: &str, value: bool) -> Self {
        if value {
            self.entries
                .insert(key.to_string(), QueryValue::Scalar("true".to_string()));
        } else {
            self.entries.remove(key);
        }
        self
    }

    /// Lista; cada elemento vira um `key[]=item`, na ordem de entrada
    pub fn list<I, S>(mut self, key: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let items: Vec<String> = items
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        if items.is_empty() {
            self.entries.remove(key);
        } else {
            self.entries.insert(key.to_string(), QueryValue::List(items));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gera a query string (sem o `?` inicial)
    pub fn encode(&self) -> String {
        let mut pairs = Vec::new();

        for (key, value) in &self.entries {
            let key = urlencoding::encode(key);
            match value {
                QueryValue::Scalar(v) => {
                    pairs.push(format!("{}={}", key, urlencoding::encode(v)));
                }
                QueryValue::List(items) => {
                    for item in items {
                        pairs.push(format!("{}[]={}", key, urlencoding::encode(item)));
                    }
                }
            }
        }

        pairs.join("&")
    }

    /// Query string vazia vira `None`
    pub fn into_encoded(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.encode())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_task_listing_example() {
        let query = Query::new()
            .bool("include_closed", true)
            .list("statuses", ["open", "in progress"])
            .list("assignees", ["123"]);

        assert_eq!(
            query.encode(),
            "assignees[]=123&include_closed=true&statuses[]=open&statuses[]=in%20progress"
        );
    }

    #[test]
    fn test_false_zero_and_empty_are_absent() {
        let query = Query::new()
            .bool("archived", false)
            .int("page", 0)
            .str("order_by", "")
            .list::<_, &str>("tags", []);

        assert!(query.is_empty());
        assert_eq!(query.encode(), "");
        assert_eq!(query.into_encoded(), None);
    }

    #[test]
    fn test_scalar_emitted_once_last_wins() {
        let query = Query::new().int("page", 1).int("page", 3);
        assert_eq!(query.encode(), "page=3");
    }

    #[test]
    fn test_setting_false_removes_previous_true() {
        let query = Query::new().bool("reverse", true).bool("reverse", false);
        assert!(query.is_empty());
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let query = Query::new()
            .str("task_id", "task/with?chars")
            .list("assignees", ["user+1@example.com"]);

        assert_eq!(
            query.encode(),
            "assignees[]=user%2B1%40example.com&task_id=task%2Fwith%3Fchars"
        );
    }

    #[test]
    fn test_negative_integers_are_kept() {
        assert_eq!(Query::new().int("offset", -5).encode(), "offset=-5");
    }

    proptest! {
        #[test]
        fn prop_list_emits_one_pair_per_element_in_order(
            items in proptest::collection::vec("[a-z0-9 ]{0,8}", 1..8)
        ) {
            let encoded = Query::new().list("statuses", &items).encode();
            let pairs: Vec<&str> = encoded.split('&').collect();

            prop_assert_eq!(pairs.len(), items.len());
            for (pair, item) in pairs.iter().zip(&items) {
                let expected = format!("statuses[]={}", urlencoding::encode(item));
                prop_assert_eq!(*pair, expected.as_str());
            }
        }

        #[test]
        fn prop_scalar_appears_at_most_once(values in proptest::collection::vec(-1000i64..1000, 1..6)) {
            let mut query = Query::new();
            for v in &values {
                query = query.int("page", *v);
            }
            let encoded = query.encode();
            prop_assert!(encoded.matches("page=").count() <= 1);
        }
    }
}
