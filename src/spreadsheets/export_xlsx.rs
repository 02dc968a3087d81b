use crate::domain::{Price, Property};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Workbook, XlsxError};

const HEADERS: [&str; 9] = [
    "ID",
    "Title",
    "Category",
    "City",
    "Location",
    "Price",
    "Area (sqft)",
    "Bedrooms",
    "Listed",
];

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Builds the workbook bytes for a derived view, one row per property in display order.
pub fn properties_workbook(properties: &[&Property]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(xlsx_err(header))?;
    }

    for (i, p) in properties.iter().enumerate() {
        let r = (i + 1) as u32;

        worksheet.write_string(r, 0, &p.id).map_err(xlsx_err("id"))?;
        worksheet.write_string(r, 1, &p.title).map_err(xlsx_err("title"))?;
        worksheet
            .write_string(r, 2, &p.category)
            .map_err(xlsx_err("category"))?;
        worksheet.write_string(r, 3, &p.city).map_err(xlsx_err("city"))?;
        worksheet
            .write_string(r, 4, &p.location)
            .map_err(xlsx_err("location"))?;

        // Sentinel stays text so the column does not pretend it is zero
        let written = match p.price {
            Price::Numeric(amount) => worksheet.write_number(r, 5, amount),
            Price::OnRequest => worksheet.write_string(r, 5, "Price on Request"),
        };
        written.map_err(xlsx_err("price"))?;

        if let Some(square) = p.attributes.square {
            worksheet.write_number(r, 6, square).map_err(xlsx_err("area"))?;
        }
        if let Some(bedroom) = p.attributes.bedroom {
            worksheet
                .write_number(r, 7, bedroom as f64)
                .map_err(xlsx_err("bedrooms"))?;
        }

        let listed = p.created_at.as_deref().unwrap_or("");
        worksheet.write_string(r, 8, listed).map_err(xlsx_err("listed"))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

pub fn export_properties_xlsx(properties: &[&Property]) -> ResultResp {
    let buffer = properties_workbook(properties)?;
    xlsx_response(buffer, "properties.xlsx")
}
