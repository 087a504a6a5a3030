//! Spreadsheet export of company records.
//!
//! Columns come from [`models::company::EXPORT_COLUMNS`]; rows keep the order
//! they were handed in. Exporting an empty list is a `NotFound`. Text longer
//! than one cell can hold is cut at [`MAX_CELL_CHARS`].

use rust_xlsxwriter::{Format, Workbook, XlsxError};

use models::company::{self, CellValue, EXPORT_COLUMNS};

use crate::errors::ServiceError;

pub const SHEET_NAME: &str = "CompanyDetails";
pub const CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const FILE_NAME: &str = "company_details_export.xlsx";
/// Excel's per-cell string limit.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Header plus one row of cells per record, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<CellValue>>,
}

pub fn tabulate(records: &[company::Model]) -> Result<ExportTable, ServiceError> {
    if records.is_empty() {
        return Err(ServiceError::NotFound("No data to export".into()));
    }
    let header = EXPORT_COLUMNS.iter().map(|c| company::column_name(*c)).collect();
    let rows = records
        .iter()
        .map(|m| EXPORT_COLUMNS.iter().map(|c| m.cell(*c)).collect())
        .collect();
    Ok(ExportTable { header, rows })
}

fn fit_cell(s: &str) -> &str {
    match s.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

fn xlsx_err(e: XlsxError) -> ServiceError {
    ServiceError::Export(e.to_string())
}

/// Render a table as a single-sheet `.xlsx` workbook held in memory.
pub fn render_xlsx(table: &ExportTable) -> Result<Vec<u8>, ServiceError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME).map_err(xlsx_err)?;

        for (col, name) in table.header.iter().enumerate() {
            let col = u16::try_from(col).map_err(|_| ServiceError::Export("too many columns".into()))?;
            sheet.write_string_with_format(0, col, *name, &bold).map_err(xlsx_err)?;
        }

        for (idx, cells) in table.rows.iter().enumerate() {
            let row = u32::try_from(idx + 1).map_err(|_| ServiceError::Export("too many rows".into()))?;
            for (col, cell) in cells.iter().enumerate() {
                let col = u16::try_from(col).map_err(|_| ServiceError::Export("too many columns".into()))?;
                match cell {
                    CellValue::Text(s) => {
                        sheet.write_string(row, col, fit_cell(s)).map_err(xlsx_err)?;
                    }
                    CellValue::Number(n) => {
                        sheet.write_number(row, col, *n).map_err(xlsx_err)?;
                    }
                    CellValue::Empty => {}
                }
            }
        }
        sheet.autofit();
    }
    workbook.save_to_buffer().map_err(xlsx_err)
}

pub fn export_companies(records: &[company::Model]) -> Result<Vec<u8>, ServiceError> {
    render_xlsx(&tabulate(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use calamine::{open_workbook_from_rs, Reader, Xlsx};
    use chrono::Utc;

    /// Sheet names and the rows of `CompanyDetails` as display strings.
    fn read_back(bytes: Vec<u8>) -> anyhow::Result<(Vec<String>, Vec<Vec<String>>)> {
        let mut wb: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
        let names = wb.sheet_names();
        let range = wb.worksheet_range(SHEET_NAME)?;
        let rows = range.rows().map(|r| r.iter().map(|c| c.to_string()).collect()).collect();
        Ok((names, rows))
    }

    fn record(id: i32, isin: &str) -> company::Model {
        company::Model {
            id,
            company_name: format!("Company {id}"),
            paid_up_capital: Some("5,00,000".into()),
            face_value: Some(10.0),
            no_of_shares: Some(50_000),
            shareholders_demat: None,
            shareholders_physical: None,
            contact_person: None,
            designation: None,
            company_address: None,
            cin: None,
            contact_no: Some("9876543210".into()),
            email: None,
            gstin: None,
            company_type: None,
            listing_status: Some("Unlisted".into()),
            isin_no: isin.into(),
            created_at: Utc::now().into(),
        }
    }

    #[test]
    fn empty_input_is_not_found() {
        assert!(matches!(tabulate(&[]), Err(ServiceError::NotFound(_))));
        assert!(matches!(export_companies(&[]), Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn one_row_per_record_in_given_order() {
        let records = vec![record(3, "INE000000003"), record(1, "INE000000001")];
        let table = tabulate(&records).unwrap();
        assert_eq!(table.header.len(), EXPORT_COLUMNS.len());
        assert_eq!(table.header[0], "isin_no");
        assert_eq!(table.header[1], "company_name");
        assert!(!table.header.contains(&"id"));
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], CellValue::Text("INE000000003".into()));
        assert_eq!(table.rows[1][0], CellValue::Text("INE000000001".into()));
        assert!(table.rows.iter().all(|r| r.len() == table.header.len()));
    }

    #[test]
    fn renders_a_zip_container() {
        let bytes = export_companies(&[record(1, "INE000000001")]).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn workbook_has_header_and_one_row_per_record() -> anyhow::Result<()> {
        let records = vec![record(2, "INE000000002"), record(1, "INE000000001")];
        let (names, rows) = read_back(export_companies(&records)?)?;

        assert_eq!(names, vec![SHEET_NAME.to_string()]);
        assert_eq!(rows.len(), 3);
        let expected: Vec<String> = EXPORT_COLUMNS.iter().map(|c| company::column_name(*c).to_string()).collect();
        assert_eq!(rows[0], expected);
        assert_eq!(rows[1][0], "INE000000002");
        assert_eq!(rows[2][0], "INE000000001");
        assert_eq!(rows[1][1], "Company 2");
        Ok(())
    }

    #[test]
    fn overlong_address_is_cut_to_cell_limit() -> anyhow::Result<()> {
        let mut long = record(1, "INE000000001");
        long.company_address = Some("x".repeat(40_000));
        let records = vec![long, record(2, "INE000000002")];
        let (_, rows) = read_back(export_companies(&records)?)?;

        assert_eq!(rows.len(), 3);
        let col = EXPORT_COLUMNS
            .iter()
            .position(|c| company::column_name(*c) == "company_address")
            .expect("address column exported");
        assert_eq!(rows[1][col].chars().count(), MAX_CELL_CHARS);
        Ok(())
    }

    #[test]
    fn cell_cut_respects_char_boundaries() {
        let short = "Mumbai";
        assert_eq!(fit_cell(short), short);
        let wide = "€".repeat(MAX_CELL_CHARS + 5);
        assert_eq!(fit_cell(&wide).chars().count(), MAX_CELL_CHARS);
    }
}
