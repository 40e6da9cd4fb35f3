// ==========================================
// 软包装报价系统 - 命令行入口
// ==========================================
// quote:   读取报价请求 JSON（文件或 stdin）→ 输出报价 JSON 到 stdout
// catalog: 输出材料库 JSON
// 失败时 stderr 输出错误类别,退出码按类别固定
// ==========================================

use anyhow::Context;
use clap::{Parser, Subcommand};
use pouch_quote::api::{ApiError, QuoteApi};
use pouch_quote::catalog::MaterialCatalog;
use pouch_quote::config::{config_keys, ConfigManager, QuoteConfigReader};
use pouch_quote::logging::{self, LogFormat};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pouch-quote")]
#[command(about = "Flexible-packaging pouch quotation engine")]
#[command(version)]
struct Cli {
    /// Emit logs as JSON (stderr)
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a quote request
    Quote {
        /// Request JSON file ("-" or omitted reads stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Configuration JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Material catalog file (.csv/.xlsx/.xls)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Explanation locale (zh-CN, en)
        #[arg(short, long)]
        locale: Option<String>,

        /// Multiply the tax-inclusive total by the SKU count
        #[arg(long)]
        sku_multiply: bool,
    },

    /// Print the material catalog
    Catalog {
        /// Material catalog file (.csv/.xlsx/.xls); builtin table when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_with_format(if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    });

    if let Err(err) = run(cli) {
        let code = match err.downcast_ref::<ApiError>() {
            Some(api_err) => {
                eprintln!("{}: {}", api_err.kind(), api_err);
                api_err.exit_code()
            }
            None => {
                eprintln!("ERROR: {:#}", err);
                1
            }
        };
        std::process::exit(code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Quote {
            input,
            config,
            catalog,
            locale,
            sku_multiply,
        } => {
            let mut manager = ConfigManager::load(config.as_deref()).map_err(ApiError::from)?;
            if let Some(locale) = locale {
                manager.set(config_keys::EXPLAIN_LOCALE, &locale);
            }
            if sku_multiply {
                manager.set(config_keys::SKU_MULTIPLIES_TOTAL, "true");
            }
            let quote_config = manager.load_quote_config().map_err(ApiError::from)?;

            let api = QuoteApi::new(quote_config, load_catalog(catalog.as_deref())?);
            let request = read_input(input.as_deref())?;
            let response = api.quote_json(&request)?;

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Catalog { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            println!("{}", serde_json::to_string_pretty(catalog.list())?);
        }
    }
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<MaterialCatalog, ApiError> {
    match path {
        Some(path) => Ok(MaterialCatalog::from_file(path)?),
        None => Ok(MaterialCatalog::builtin()),
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("读取请求文件失败: {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("读取标准输入失败")?;
            Ok(buf)
        }
    }
}
