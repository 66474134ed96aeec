//! Custom Field Manager: leitura das definições e escrita de valores

use serde::Deserialize;
use serde_json::json;

use crate::client::{require_id, ClickUpClient};
use crate::error::{ClickUpError, Result, ResultExt};
use crate::transport::Request;
use crate::types::{CustomField, CustomFieldValue};

pub struct CustomFieldManager<'a> {
    client: &'a ClickUpClient,
}

impl<'a> CustomFieldManager<'a> {
    pub(crate) fn new(client: &'a ClickUpClient) -> Self {
        Self { client }
    }

    /// Custom fields acessíveis numa lista
    pub async fn list(&self, list_id: &str) -> Result<Vec<CustomField>> {
        const OP: &str = "list custom fields";
        let list_id = require_id(list_id).op(OP)?;

        #[derive(Deserialize)]
        struct FieldsResponse {
            fields: Vec<CustomField>,
        }

        let req = Request::get(self.client.v2("/list/{}/field", &[list_id]));
        let response: FieldsResponse = self.client.execute(req).await.op(OP)?;

        tracing::debug!("📋 Lista {} tem {} custom fields", list_id, response.fields.len());
        Ok(response.fields)
    }

    /// Grava o valor de um campo numa task
    pub async fn set_value(
        &self,
        task_id: &str,
        field_id: &str,
        value: &CustomFieldValue,
    ) -> Result<()> {
        const OP: &str = "set custom field value";
        let task_id = require_id(task_id).op(OP)?;
        let field_id = require_id(field_id).op(OP)?;

        let req = Request::post(self.client.v2("/task/{}/field/{}", &[task_id, field_id]))
            .with_json(&json!({ "value": value }))
            .op(OP)?;
        self.client.execute_discard(req).await.op(OP)
    }

    /// Resolve uma opção de dropdown pelo nome e grava o id dela
    pub async fn set_dropdown_by_name(
        &self,
        list_id: &str,
        task_id: &str,
        field_id: &str,
        option_name: &str,
    ) -> Result<()> {
        const OP: &str = "set custom field value";

        let fields = self.list(list_id).await?;
        let field = fields
            .iter()
            .find(|f| f.id == field_id)
            .ok_or_else(|| {
                ClickUpError::UnknownOption(format!(
                    "custom field {} not found in list {}",
                    field_id, list_id
                ))
            })
            .op(OP)?;

        let option = field
            .option_named(option_name)
            .ok_or_else(|| {
                ClickUpError::UnknownOption(format!(
                    "option {:?} not found in custom field {}",
                    option_name, field.name
                ))
            })
            .op(OP)?;

        tracing::info!("✅ Opção '{}' → {}", option.name, option.id);
        self.set_value(task_id, field_id, &CustomFieldValue::dropdown(option.id.clone()))
            .await
    }

    pub async fn remove_value(&self, task_id: &str, field_id: &str) -> Result<()> {
        const OP: &str = "remove custom field value";
        let task_id = require_id(task_id).op(OP)?;
        let field_id = require_id(field_id).op(OP)?;

        let req = Request::delete(self.client.v2("/task/{}/field/{}", &[task_id, field_id]));
        self.client.execute_discard(req).await.op(OP)
    }
}
