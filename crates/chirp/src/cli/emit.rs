//! The `chirp emit` command.

use anyhow::Context;
use chirp_core::{AttachmentValue, Attachments, Logger, Severity};
use clap::Args;
use std::path::Path;

/// Arguments for the `emit` command.
#[derive(Args, Debug)]
pub struct EmitArgs {
    /// Severity of the record (debug, info, warning, error, fatal; prefixes allowed)
    pub level: String,

    /// Message text
    #[arg(default_value = "")]
    pub message: String,

    /// Attachment as key=value; values are parsed as JSON when possible
    #[arg(long = "kv", value_name = "KEY=VALUE")]
    pub attachments: Vec<String>,

    /// Minimum severity to emit (overrides config and LOG_SEVERITY_LEVEL)
    #[arg(long)]
    pub threshold: Option<String>,

    /// Record format: plain or json (overrides config and LOG_OUTPUT_FORMAT)
    #[arg(long)]
    pub format: Option<String>,

    /// Fully escape JSON records
    #[arg(long)]
    pub escape_json: bool,
}

/// Execute the emit command. A fatal record exits the process with status 1.
pub fn execute(args: EmitArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path).with_env();
    if let Some(threshold) = args.threshold {
        config.logging.level = threshold;
    }
    if let Some(format) = args.format {
        config.logging.format = format;
    }
    config.logging.escape_json |= args.escape_json;

    let severity = chirp_core::parse_severity(&args.level)
        .with_context(|| format!("invalid record level {:?}", args.level))?;
    let attachments = parse_attachments(&args.attachments)?;

    tracing::debug!(?severity, attachments = attachments.len(), "emitting record");

    let logger = Logger::from_config(&config.logging);
    match severity {
        Severity::Fatal => logger.fatal_kv(&args.message, &attachments),
        _ => logger.emit(severity, &args.message, Some(&attachments)),
    }
    Ok(())
}

/// Parse `key=value` pairs. Values that are valid JSON keep their type
/// (`42`, `true`, `null`, `{"a":1}`); anything else is text.
pub(crate) fn parse_attachments(pairs: &[String]) -> anyhow::Result<Attachments> {
    let mut attachments = Attachments::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .with_context(|| format!("attachment {pair:?} is not in KEY=VALUE form"))?;
        if key.is_empty() {
            anyhow::bail!("attachment {pair:?} has an empty key");
        }
        let value = serde_json::from_str::<serde_json::Value>(raw)
            .map(AttachmentValue::from)
            .unwrap_or_else(|_| AttachmentValue::Text(raw.to_string()));
        attachments.insert(key, value);
    }
    Ok(attachments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_typed_values() {
        let attachments =
            parse_attachments(&pairs(&["code=500", "ok=true", "none=null", "ratio=0.5"])).unwrap();
        assert_eq!(attachments.get("code"), Some(&AttachmentValue::Int(500)));
        assert_eq!(attachments.get("ok"), Some(&AttachmentValue::Bool(true)));
        assert_eq!(attachments.get("none"), Some(&AttachmentValue::Null));
        assert_eq!(attachments.get("ratio"), Some(&AttachmentValue::Float(0.5)));
    }

    #[test]
    fn test_parse_text_values() {
        let attachments = parse_attachments(&pairs(&["branch=münch", "empty=", "eq=a=b"])).unwrap();
        assert_eq!(
            attachments.get("branch"),
            Some(&AttachmentValue::Text("münch".to_string()))
        );
        assert_eq!(
            attachments.get("empty"),
            Some(&AttachmentValue::Text(String::new()))
        );
        assert_eq!(
            attachments.get("eq"),
            Some(&AttachmentValue::Text("a=b".to_string()))
        );
    }

    #[test]
    fn test_parse_nested_json() {
        let attachments = parse_attachments(&pairs(&[r#"user={"id":42}"#])).unwrap();
        assert_eq!(
            attachments.get("user").map(|v| v.to_string()),
            Some(r#"{"id":42}"#.to_string())
        );
    }

    #[test]
    fn test_parse_rejects_malformed_pairs() {
        assert!(parse_attachments(&pairs(&["novalue"])).is_err());
        assert!(parse_attachments(&pairs(&["=1"])).is_err());
    }
}
