// src/export.rs
//! Spreadsheet export of the admin member table.
use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::pengurus::Pengurus;
use crate::models::struktur_jabatan::StrukturJabatan;

pub const HEADERS: [&str; 3] = ["Nama", "Jabatan", "Periode"];
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub nama: String,
    pub jabatan: String,
    pub periode: String,
}

pub fn rows(pengurus: &[&Pengurus], jabatan: &[StrukturJabatan]) -> Vec<ExportRow> {
    pengurus
        .iter()
        .map(|p| ExportRow {
            nama: p.nama.clone(),
            jabatan: p
                .jabatan(jabatan)
                .map(|j| j.nama_jabatan.clone())
                .unwrap_or_else(|| "-".to_string()),
            periode: p.periode.clone(),
        })
        .collect()
}

pub fn to_csv(rows: &[ExportRow]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(UTF8_BOM.to_vec());

    let csv_err = |e: csv::Error| AppError::Export(format!("Gagal membuat CSV: {}", e));
    writer.write_record(HEADERS).map_err(csv_err)?;
    for row in rows {
        writer
            .write_record([&row.nama, &row.jabatan, &row.periode])
            .map_err(csv_err)?;
    }
    writer
        .into_inner()
        .map_err(|e| AppError::Export(format!("Gagal membuat CSV: {}", e)))
}

fn build_workbook(rows: &[ExportRow]) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Pengurus")?;

    let header_format = Format::new().set_bold();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }
    worksheet.set_column_width(0, 40.0)?;
    worksheet.set_column_width(1, 25.0)?;
    worksheet.set_column_width(2, 15.0)?;

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write(r, 0, row.nama.as_str())?;
        worksheet.write(r, 1, row.jabatan.as_str())?;
        worksheet.write(r, 2, row.periode.as_str())?;
    }

    workbook.save_to_buffer()
}

pub fn to_xlsx(rows: &[ExportRow]) -> Result<Vec<u8>, AppError> {
    build_workbook(rows).map_err(|e| AppError::Export(format!("Gagal membuat file Excel: {}", e)))
}

/// `pengurus-<periode>-<YYYYMMDD_HHMMSS>.<ext>`
pub fn export_filename(periode_label: &str, format: ExportFormat, now: DateTime<Local>) -> String {
    format!(
        "pengurus-{}-{}.{}",
        periode_label,
        now.format("%Y%m%d_%H%M%S"),
        format.extension()
    )
}
