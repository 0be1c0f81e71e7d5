//! # pag-cli
//!
//! Command-line renderer for PagSeguro cart forms.
//!
//! Loads an order from a TOML or JSON file and prints the form fields
//! PagSeguro expects, either as `name=value` lines or as JSON.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use pag_core::{Order, OrderRequest};
use pag_form::{FormEncoder, FormField, PagSeguroConfig};
use std::path::{Path, PathBuf};
use tracing::info;

/// Output format for rendered fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `name=value` per line
    Lines,
    /// JSON array of `{name, value}`
    Json,
}

/// Render a PagSeguro cart checkout form from an order file
#[derive(Debug, Parser)]
#[command(name = "pagseguro-form", version, about)]
pub struct Cli {
    /// Order file (.json, otherwise TOML)
    pub order_file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,

    /// Merchant email, overrides PAGSEGURO_EMAIL
    #[arg(long)]
    pub email: Option<String>,
}

/// Load and normalize an order file
pub fn load_order(path: &Path) -> anyhow::Result<Order> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let request = if is_json {
        OrderRequest::from_json(&content)
    } else {
        OrderRequest::from_toml(&content)
    }
    .with_context(|| format!("Failed to parse {}", path.display()))?;

    let order = request.into_order()?;
    info!(
        "Loaded order {} with {} products from {}",
        order.id().unwrap_or("<no id>"),
        order.products().len(),
        path.display()
    );
    Ok(order)
}

/// Merchant config from the environment; `email` replaces `PAGSEGURO_EMAIL`
pub fn resolve_config(email: Option<&str>) -> anyhow::Result<PagSeguroConfig> {
    Ok(PagSeguroConfig::from_env_with_email(email.map(str::to_string))?)
}

/// Render fields in the requested format
pub fn render(
    fields: &[FormField],
    format: OutputFormat,
    checkout_url: &str,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Lines => {
            let mut out = format!("# POST {}\n", checkout_url);
            for field in fields {
                out.push_str(&format!("{}={}\n", field.name, field.value));
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(fields)? + "\n"),
    }
}

/// Run the command
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let config = resolve_config(cli.email.as_deref())?;
    let order = load_order(&cli.order_file)?;

    let encoder = FormEncoder::new(config);
    let fields = encoder.encode(&order)?;

    render(&fields, cli.format, &encoder.config().checkout_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["pagseguro-form", "order.toml"]).unwrap();
        assert_eq!(cli.order_file, PathBuf::from("order.toml"));
        assert_eq!(cli.format, OutputFormat::Lines);
        assert_eq!(cli.email, None);

        let cli = Cli::try_parse_from([
            "pagseguro-form",
            "order.json",
            "--format",
            "json",
            "--email",
            "loja@example.com.br",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.email.as_deref(), Some("loja@example.com.br"));
    }

    #[test]
    fn test_missing_order_file_arg() {
        assert!(Cli::try_parse_from(["pagseguro-form"]).is_err());
    }

    #[test]
    fn test_resolve_config_validates_flag() {
        assert!(resolve_config(Some("loja@example.com.br")).is_ok());
        assert!(resolve_config(Some("loja")).is_err());
    }

    #[test]
    fn test_email_flag_keeps_env_settings() {
        std::env::set_var("PAGSEGURO_ENCODING", "ISO-8859-1");
        std::env::set_var("PAGSEGURO_CHECKOUT_URL", "https://sandbox.example/checkout");

        let config = resolve_config(Some("loja@example.com.br"));

        std::env::remove_var("PAGSEGURO_ENCODING");
        std::env::remove_var("PAGSEGURO_CHECKOUT_URL");

        let config = config.unwrap();
        assert_eq!(config.email, "loja@example.com.br");
        assert_eq!(config.encoding, "ISO-8859-1");
        assert_eq!(config.checkout_url, "https://sandbox.example/checkout");
    }

    #[test]
    fn test_render_lines() {
        let fields = vec![
            FormField::new("tipo", "CP"),
            FormField::new("item_valor_1", "1050"),
        ];
        let out = render(&fields, OutputFormat::Lines, "https://example.com/checkout").unwrap();
        assert_eq!(
            out,
            "# POST https://example.com/checkout\ntipo=CP\nitem_valor_1=1050\n"
        );
    }

    #[test]
    fn test_render_json() {
        let fields = vec![FormField::new("tipo", "CP")];
        let out = render(&fields, OutputFormat::Json, "unused").unwrap();
        let parsed: Vec<FormField> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, fields);
    }

    #[test]
    fn test_run_with_sample_order() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/order.example.toml");
        let cli = Cli {
            order_file: path,
            format: OutputFormat::Lines,
            email: Some("loja@example.com.br".into()),
        };

        let out = run(&cli).unwrap();
        assert!(out.contains("email_cobranca=loja@example.com.br\n"));
        assert!(out.contains("item_valor_1=2990\n"));
        assert!(out.contains("cliente_nome=Maria Silva\n"));
        assert!(out.contains("cliente_tel=30000000\n"));
        assert!(out.contains("extras=-5.00\n"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_order(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
