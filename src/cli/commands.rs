use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow, bail};
use chrono::Local;
use serde::Serialize;
use serde_json::{Map, Value};

use workon::client::sample_data::sample_input_document;
use workon::client::{ClientError, WorkOnClient};
use workon::modules::rbga_requests::core::constants::APPROVAL_HISTORY_YES;
use workon::modules::rbga_requests::use_cases::get_workitem_attachments::handler::AttachmentsResponse;
use workon::modules::rbga_requests::use_cases::get_workitem_details::handler::DetailQuery;

use crate::settings::CliSettings;

const INPUT_REQUIRED_FIELDS: [&str; 3] = ["summary", "applicant", "data"];

/// Contents of a `workon create --input` document.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInput {
    pub summary: String,
    pub applicant: String,
    pub data: Map<String, Value>,
    pub source_system: Option<String>,
}

pub fn read_input(path: &Path) -> anyhow::Result<CreateInput> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Input file '{}' not found", path.display()))?;
    let document: Value = serde_json::from_str(&raw).context("Invalid JSON in input file")?;
    parse_input(&document)
}

pub fn parse_input(document: &Value) -> anyhow::Result<CreateInput> {
    let Some(object) = document.as_object() else {
        bail!("Input file must contain a JSON object");
    };
    let missing: Vec<&str> = INPUT_REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !object.contains_key(*field))
        .collect();
    if !missing.is_empty() {
        bail!(
            "Missing required fields in input file: {}",
            missing.join(", ")
        );
    }

    let text = |field: &str| {
        object[field]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Field {field} must be a string"))
    };
    Ok(CreateInput {
        summary: text("summary")?,
        applicant: text("applicant")?,
        data: object["data"]
            .as_object()
            .cloned()
            .ok_or_else(|| anyhow!("Field data must be an object"))?,
        source_system: object
            .get("sourceSystem")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

pub fn response_file_name(prefix: &str, stamp: &str) -> String {
    format!("{prefix}_{stamp}.json")
}

pub fn save_json(dir: &Path, file_name: &str, value: &impl Serialize) -> anyhow::Result<PathBuf> {
    let path = dir.join(file_name);
    let raw = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, raw).with_context(|| format!("could not write {}", path.display()))?;
    Ok(path)
}

/// Prefers the server's own `{"error": ...}` message over the raw body.
fn describe(err: ClientError) -> anyhow::Error {
    if let (ClientError::Status { status, .. }, Some(message)) = (&err, err.server_message()) {
        return anyhow!("{message} (HTTP {status})");
    }
    anyhow::Error::new(err)
}

pub async fn create(
    client: &WorkOnClient,
    settings: &CliSettings,
    input: &Path,
    draft: bool,
    save_dir: &Path,
) -> anyhow::Result<()> {
    let request = read_input(input)?;
    let source_system = request
        .source_system
        .as_deref()
        .unwrap_or(&settings.source_system);

    println!("Reading request data from: {}", input.display());
    println!("Summary: {}", request.summary);
    println!("Applicant: {}", request.applicant);
    println!("Source System: {source_system}");

    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let file_name = response_file_name("workon_request", &stamp);
    let saved = if draft {
        println!("Creating draft request...");
        let created = client
            .create_draft_rbga_request(
                &request.summary,
                &request.applicant,
                &request.data,
                Some(source_system),
            )
            .await
            .map_err(describe)?;
        println!("{}", created.message);
        println!("Request ID: {}", created.key);
        save_json(save_dir, &file_name, &created)?
    } else {
        println!("Creating request...");
        let created = client
            .create_rbga_request(
                &request.summary,
                &request.applicant,
                &request.data,
                Some(source_system),
            )
            .await
            .map_err(describe)?;
        println!("Request created successfully!");
        println!("Request ID: {}", created.key);
        save_json(save_dir, &file_name, &created)?
    };
    println!("Full response saved to: {}", saved.display());
    Ok(())
}

pub fn detail_query(approval_history: bool, custom_fields: Vec<String>) -> DetailQuery {
    DetailQuery {
        approval_history: approval_history.then(|| APPROVAL_HISTORY_YES.to_string()),
        custom_fields: (!custom_fields.is_empty()).then_some(custom_fields),
        system_fields: None,
    }
}

pub async fn view(client: &WorkOnClient, request_key: &str, query: &DetailQuery) -> anyhow::Result<()> {
    println!("Fetching details for request: {request_key}");
    let detail = client
        .get_workitem_detail(request_key, query)
        .await
        .map_err(describe)?;

    println!("Request ID: {}", detail.key);
    println!("Summary: {}", detail.summary);
    println!("Status: {}", detail.status.label());
    println!(
        "Resolution: {}",
        detail.resolution.as_deref().unwrap_or("N/A")
    );
    println!("Created: {}", detail.created_at.to_rfc3339());
    println!("Updated: {}", detail.updated_at.to_rfc3339());

    if let Some(data) = &detail.data {
        for (label, field) in [
            ("Description", "rbga.field.description"),
            ("Comments", "rbga.field.comments"),
            ("Workflow Type", "rbga.field.workflowType"),
        ] {
            if let Some(value) = data.get(field).and_then(Value::as_str) {
                println!("{label}: {value}");
            }
        }
        let approvers = data
            .get("rbga.field.approver1")
            .and_then(|block| block.get("approvers"))
            .and_then(Value::as_array);
        if let Some(approvers) = approvers {
            println!("Approvers (Level 1): {} approver(s)", approvers.len());
            for (index, approver) in approvers.iter().enumerate() {
                let userid = approver.get("userid").and_then(Value::as_str).unwrap_or("?");
                println!("  {}. {userid}", index + 1);
            }
        }
    }
    if let Some(fields) = &detail.custom_fields {
        println!("Custom Fields:");
        for (name, value) in fields {
            println!("  {name}: {value}");
        }
    }
    if let Some(history) = &detail.approval_history {
        println!("Approval History:");
        for entry in history {
            println!(
                "  {} by {} at {}: {}",
                entry.action,
                entry.user,
                entry.timestamp.to_rfc3339(),
                entry.comment
            );
        }
    }
    Ok(())
}

pub async fn status(client: &WorkOnClient, request_key: &str) -> anyhow::Result<()> {
    println!("Fetching status for request: {request_key}");
    let status = client
        .get_request_status(request_key)
        .await
        .map_err(describe)?;

    println!("requestKey: {}", status.request_key);
    println!("resolution: {}", status.resolution);
    for localized in &status.status {
        println!("  {}: {}", localized.locale_name, localized.i8n_value);
    }
    Ok(())
}

pub async fn attachments(
    client: &WorkOnClient,
    request_key: &str,
    user: &str,
    name: Option<&str>,
    all: bool,
) -> anyhow::Result<()> {
    if !all && name.is_none() {
        bail!("Pass --name FILE or --all");
    }
    println!("Fetching attachments for request: {request_key}");
    match client
        .get_attachments(request_key, user, name, all)
        .await
        .map_err(describe)?
    {
        AttachmentsResponse::All { attachments, count } => {
            println!("{count} attachment(s)");
            for attachment in attachments {
                println!(
                    "  {} ({}, {} bytes encoded)",
                    attachment.filename,
                    attachment.id,
                    attachment.file.len()
                );
            }
        }
        AttachmentsResponse::One { attachment } => {
            println!("Attachment: {} ({})", attachment.filename, attachment.id);
            println!("{}", attachment.file);
        }
    }
    Ok(())
}

pub fn sample(settings: &CliSettings, output: &Path) -> anyhow::Result<()> {
    let document = sample_input_document(&settings.source_system);
    let raw = serde_json::to_string_pretty(&document)?;
    std::fs::write(output, raw).with_context(|| format!("could not write {}", output.display()))?;
    println!("Created: {}", output.display());
    Ok(())
}
