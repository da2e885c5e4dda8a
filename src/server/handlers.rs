//! MCP tool handlers for the address book server.
//!
//! Each tool maps onto one [`DirectoryService`] operation and answers with
//! pretty-printed JSON text.

use crate::birthdays::weekday_name;
use crate::models::Record;
use crate::services::{parse_today, DirectoryService, NewContactParams};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes the address book as tools.
#[derive(Clone)]
pub struct AddressBookMcpServer {
    directory: Arc<dyn DirectoryService>,
    server_name: String,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for AddressBookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: self.server_name.clone(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("In-memory address book - stores contacts with validated 10-digit phone numbers and birthdays, and reports whose birthday falls in the next seven days.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactParams {
    name: String,
    #[serde(default)]
    phones: Option<Vec<String>>,
    /// DD.MM.YYYY or YYYY-MM-DD
    #[serde(default)]
    birthday: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct NameParams {
    name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct PhoneParams {
    name: String,
    phone: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct EditPhoneParams {
    name: String,
    old_phone: String,
    new_phone: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SetBirthdayParams {
    name: String,
    /// DD.MM.YYYY or YYYY-MM-DD
    birthday: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListContactsParams {
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct BirthdaysParams {
    /// YYYY-MM-DD; defaults to the server's today
    #[serde(default)]
    today: Option<String>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn invalid_params(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn record_json(record: &Record) -> serde_json::Value {
    serde_json::json!({
        "name": record.name(),
        "phones": record.phones(),
        "birthday": record.birthday(),
        "display": record.to_string(),
    })
}

fn json_result(value: serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(&value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

// Tool router implementation
#[tool_router]
impl AddressBookMcpServer {
    /// Create a new address book MCP server.
    pub fn new(directory: Arc<dyn DirectoryService>, server_name: impl Into<String>) -> Self {
        Self {
            directory,
            server_name: server_name.into(),
            tool_router: Self::tool_router(),
        }
    }

    /// Create or replace a contact.
    #[tool(
        description = "Create a contact with optional 10-digit phone numbers and birthday. A contact with the same name is replaced."
    )]
    async fn add_contact(
        &self,
        params: Parameters<AddContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let record = self
            .directory
            .add_contact(NewContactParams {
                name: params.name,
                phones: params.phones.unwrap_or_default(),
                birthday: params.birthday,
            })
            .await
            .map_err(to_mcp_error)?;

        json_result(record_json(&record))
    }

    #[tool(description = "Append a 10-digit phone number to an existing contact")]
    async fn add_phone(
        &self,
        params: Parameters<PhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let record = self
            .directory
            .add_phone(&params.name, &params.phone)
            .await
            .map_err(to_mcp_error)?;

        json_result(record_json(&record))
    }

    #[tool(description = "Remove every occurrence of a phone number from a contact")]
    async fn remove_phone(
        &self,
        params: Parameters<PhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let record = self
            .directory
            .remove_phone(&params.name, &params.phone)
            .await
            .map_err(to_mcp_error)?;

        json_result(record_json(&record))
    }

    #[tool(description = "Replace the first matching phone number of a contact")]
    async fn edit_phone(
        &self,
        params: Parameters<EditPhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let record = self
            .directory
            .edit_phone(&params.name, &params.old_phone, &params.new_phone)
            .await
            .map_err(to_mcp_error)?;

        json_result(record_json(&record))
    }

    #[tool(description = "Check whether a contact has a given phone number")]
    async fn find_phone(
        &self,
        params: Parameters<PhoneParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let found = self
            .directory
            .find_phone(&params.name, &params.phone)
            .await;

        json_result(serde_json::json!({
            "name": params.name,
            "phone": found,
            "found": found.is_some(),
        }))
    }

    #[tool(description = "Set or replace a contact's birthday")]
    async fn set_birthday(
        &self,
        params: Parameters<SetBirthdayParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let record = self
            .directory
            .set_birthday(&params.name, &params.birthday)
            .await
            .map_err(to_mcp_error)?;

        json_result(record_json(&record))
    }

    #[tool(description = "Look up a contact by exact name")]
    async fn find_contact(
        &self,
        params: Parameters<NameParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let record = self.directory.find_contact(&params.name).await;

        json_result(serde_json::json!({
            "found": record.is_some(),
            "contact": record.as_ref().map(record_json),
        }))
    }

    #[tool(description = "Delete a contact by name. Deleting an unknown name does nothing.")]
    async fn delete_contact(
        &self,
        params: Parameters<NameParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let deleted = self.directory.delete_contact(&params.name).await;

        json_result(serde_json::json!({
            "name": params.name,
            "deleted": deleted,
        }))
    }

    #[tool(description = "List contacts in the order they were added")]
    async fn list_contacts(
        &self,
        params: Parameters<ListContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let records = self.directory.list_contacts().await;
        let total = records.len();
        let limit = params.limit.unwrap_or(total);

        json_result(serde_json::json!({
            "total": total,
            "contacts": records.iter().take(limit).map(record_json).collect::<Vec<_>>(),
        }))
    }

    /// Report the birthdays of the coming seven days grouped by weekday.
    #[tool(
        description = "List contacts whose birthday falls in the seven days starting today, grouped by the weekday to celebrate on. Weekend birthdays move to Monday, except on a Monday run where they are left out."
    )]
    async fn birthdays_per_week(
        &self,
        params: Parameters<BirthdaysParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let today = params
            .today
            .as_deref()
            .map(parse_today)
            .transpose()
            .map_err(invalid_params)?;

        let birthdays = self.directory.birthdays_per_week(today).await;
        tracing::debug!(count = birthdays.len(), "MCP Handler: birthdays_per_week");

        json_result(serde_json::json!({
            "birthdays": birthdays,
            "days": birthdays
                .iter()
                .map(|(day, names)| serde_json::json!({
                    "weekday": weekday_name(day),
                    "names": names,
                }))
                .collect::<Vec<_>>(),
        }))
    }
}
