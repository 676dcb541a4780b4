// ==========================================
// 仓储库存管理系统 - 预警报告导出
// ==========================================
// 格式: CSV（首行表头,已过期在前,临期在后）
// ==========================================

use serde::Serialize;
use std::io::Write;

use crate::api::alert_api::{AlertEntry, ExpirationReport};
use crate::api::error::ApiResult;
use crate::domain::types::Severity;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    bucket: &'a str,
    warehouse_id: i64,
    warehouse: &'a str,
    sku: &'a str,
    product: &'a str,
    quantity: u32,
    storage_location: &'a str,
    expiration_date: String,
    days_remaining: i64,
    severity: Severity,
}

impl<'a> CsvRow<'a> {
    fn new(bucket: &'a str, entry: &'a AlertEntry) -> Self {
        Self {
            bucket,
            warehouse_id: entry.warehouse_id,
            warehouse: &entry.warehouse_name,
            sku: &entry.record.product.sku,
            product: &entry.record.product.name,
            quantity: entry.record.quantity,
            storage_location: entry.record.location_label(),
            expiration_date: entry.expiration_date.format("%Y-%m-%d").to_string(),
            days_remaining: entry.days_remaining,
            severity: entry.severity,
        }
    }
}

/// 将预警报告写出为 CSV
pub fn write_report_csv<W: Write>(report: &ExpirationReport, writer: W) -> ApiResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entry in &report.expired {
        csv_writer.serialize(CsvRow::new("expired", entry))?;
    }
    for entry in &report.nearing {
        csv_writer.serialize(CsvRow::new("nearing", entry))?;
    }

    csv_writer.flush()?;
    Ok(())
}
