// ==========================================
// 仓储库存管理系统 - 命令行入口
// ==========================================
// 用法:
//   reliable-inventory [--config PATH] [--snapshot PATH] <command> [options]
//
// 命令:
//   alerts        [--window N] [--today YYYY-MM-DD] [--format text|json|csv]
//   products      [--search T] [--category all|N] [--sort name|sku|price] [--dir asc|desc]
//   inventory     [WAREHOUSE_ID] [检索选项同 products]
//   warehouses
//   destinations  WAREHOUSE_ID
// ==========================================

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;
use std::sync::Arc;

use reliable_inventory::api::{write_report_csv, AlertApi, ExpirationReport, InventoryApi};
use reliable_inventory::config::{AppConfig, ConfigManager};
use reliable_inventory::engine::{ExpirationClassifier, QueryOptions};
use reliable_inventory::i18n;
use reliable_inventory::repository::SnapshotRepository;

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    snapshot: Option<PathBuf>,
    command: String,
    positional: Vec<String>,
    window: Option<i64>,
    today: Option<NaiveDate>,
    format: Option<String>,
    query: QueryOptions,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<CliArgs> {
    let mut cli = CliArgs::default();

    while let Some(arg) = args.next() {
        if !arg.starts_with("--") {
            if cli.command.is_empty() {
                cli.command = arg;
            } else {
                cli.positional.push(arg);
            }
            continue;
        }

        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| anyhow!("参数 {} 缺少取值", name))
        };

        match arg.as_str() {
            "--config" => cli.config = Some(PathBuf::from(value("--config")?)),
            "--snapshot" => cli.snapshot = Some(PathBuf::from(value("--snapshot")?)),
            "--window" => {
                let raw = value("--window")?;
                cli.window = Some(raw.parse().with_context(|| format!("无效窗口天数: {}", raw))?);
            }
            "--today" => {
                let raw = value("--today")?;
                cli.today = Some(ExpirationClassifier::parse_date(&raw)?);
            }
            "--format" => cli.format = Some(value("--format")?),
            "--search" => cli.query.search_text = value("--search")?,
            "--category" => cli.query.category = value("--category")?.parse()?,
            "--sort" => cli.query.sort_field = value("--sort")?.parse()?,
            "--dir" => cli.query.sort_direction = value("--dir")?.parse()?,
            flag => bail!("未知参数: {}", flag),
        }
    }

    if cli.command.is_empty() {
        bail!("缺少命令 (alerts / products / inventory / warehouses / destinations)");
    }
    Ok(cli)
}

fn warehouse_id_arg(cli: &CliArgs) -> Result<Option<i64>> {
    cli.positional
        .first()
        .map(|raw| {
            raw.parse::<i64>()
                .with_context(|| format!("无效仓库ID: {}", raw))
        })
        .transpose()
}

/// 本地时区的今天（未指定 --today 时的参考日期）
fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report_text(report: &ExpirationReport) {
    let total = report.total_alerts.to_string();
    let expired_count = report.expired.len().to_string();
    let nearing_count = report.nearing.len().to_string();
    let window = report.window_days.to_string();

    println!("{}", i18n::t_with_args("alert.total", &[("count", total.as_str())]));

    println!(
        "\n{}",
        i18n::t_with_args("alert.expired_title", &[("count", expired_count.as_str())])
    );
    if report.expired.is_empty() {
        println!("  {}", i18n::t("alert.none_expired"));
    }
    for entry in &report.expired {
        println!(
            "  [{}] {} ({}) @ {} / {}  qty={}",
            entry.status_text,
            entry.record.product.name,
            entry.record.product.sku,
            entry.warehouse_name,
            entry.record.location_label(),
            entry.record.quantity
        );
    }

    println!(
        "\n{}",
        i18n::t_with_args(
            "alert.nearing_title",
            &[("days", window.as_str()), ("count", nearing_count.as_str())],
        )
    );
    if report.nearing.is_empty() {
        println!("  {}", i18n::t("alert.none_nearing"));
    }
    for entry in &report.nearing {
        println!(
            "  [{} | {}] {} ({}) @ {} / {}  qty={}",
            i18n::severity_label(entry.severity),
            entry.status_text,
            entry.record.product.name,
            entry.record.product.sku,
            entry.warehouse_name,
            entry.record.location_label(),
            entry.record.quantity
        );
    }
}

async fn run(cli: CliArgs, config: AppConfig) -> Result<()> {
    let snapshot_path = cli.snapshot.clone().unwrap_or(config.snapshot_path.clone());
    let repo = Arc::new(SnapshotRepository::load(&snapshot_path).await?);

    match cli.command.as_str() {
        "alerts" => {
            let api = AlertApi::new(repo);
            let window = cli.window.unwrap_or(config.alert_window_days);
            let today = cli.today.unwrap_or_else(local_today);
            let report = api.expiration_report(window, today).await?;

            match cli.format.as_deref().unwrap_or("text") {
                "text" => print_report_text(&report),
                "json" => print_json(&report)?,
                "csv" => write_report_csv(&report, std::io::stdout().lock())?,
                other => bail!("未知输出格式: {}", other),
            }
        }
        "products" => {
            let api = InventoryApi::new(repo);
            print_json(&api.catalog(&cli.query).await?)?;
        }
        "inventory" => {
            let api = InventoryApi::new(repo);
            match warehouse_id_arg(&cli)? {
                Some(id) => print_json(&api.search_warehouse_inventory(id, &cli.query).await?)?,
                None => print_json(&api.all_inventory(&cli.query).await?)?,
            }
        }
        "warehouses" => {
            let api = InventoryApi::new(repo);
            print_json(&api.warehouse_overview().await?)?;
        }
        "destinations" => {
            let api = InventoryApi::new(repo);
            let id = warehouse_id_arg(&cli)?.ok_or_else(|| anyhow!("destinations 需要仓库ID"))?;
            print_json(&api.transfer_destinations(id).await?)?;
        }
        other => bail!("未知命令: {}", other),
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = parse_args(std::env::args().skip(1))?;

    let config_path = cli.config.clone().or_else(ConfigManager::default_config_path);
    let config = ConfigManager::load(config_path.as_deref())?;

    reliable_inventory::logging::init(&config.log_filter);
    i18n::set_locale(&config.locale);

    tracing::debug!("{} v{}", reliable_inventory::APP_NAME, reliable_inventory::VERSION);
    tracing::info!(
        config = ?config_path.as_ref().map(|p| p.display().to_string()),
        snapshot = %config.snapshot_path.display(),
        window_days = config.alert_window_days,
        locale = %config.locale,
        "配置加载完成"
    );

    run(cli, config).await
}
