use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, ensure};
use umya_spreadsheet::Spreadsheet;
use umya_spreadsheet::Style;
use umya_spreadsheet::structs::{
    Border, HorizontalAlignmentValues, PatternValues, VerticalAlignmentValues,
};

use crate::schema::{self, CellValue, Column};

pub const SHEET_NAME: &str = "Template Bank Soal";
pub const DEFAULT_OUTPUT_PATH: &str = "public/template-bank-soal.xlsx";

// umya-spreadsheet turns an ARGB matching one of its built-in indexed colors
// (white included) into indexed="n"; lowercase hex keeps rgb="...".
pub const HEADER_FILL_ARGB: &str = "ff4472c4";
pub const HEADER_FONT_ARGB: &str = "ffffffff";
pub const HEADER_FONT_SIZE: f64 = 11.0;
pub const HEADER_ROW_HEIGHT: f64 = 30.0;
pub const DATA_ROW_HEIGHT: f64 = 40.0;

fn set_thin_borders(style: &mut Style) {
    let borders = style.get_borders_mut();
    borders.get_left_mut().set_border_style(Border::BORDER_THIN);
    borders.get_right_mut().set_border_style(Border::BORDER_THIN);
    borders.get_top_mut().set_border_style(Border::BORDER_THIN);
    borders.get_bottom_mut().set_border_style(Border::BORDER_THIN);
}

/// Blue fill, bold white text, centered, thin borders.
fn header_style() -> Style {
    let mut style = Style::default();

    let pattern = style.get_fill_mut().get_pattern_fill_mut();
    pattern.set_pattern_type(PatternValues::Solid);
    pattern.get_foreground_color_mut().set_argb(HEADER_FILL_ARGB);
    pattern.get_background_color_mut().set_argb(HEADER_FILL_ARGB);

    let font = style.get_font_mut();
    font.set_bold(true);
    font.set_size(HEADER_FONT_SIZE);
    font.get_color_mut().set_argb(HEADER_FONT_ARGB);

    let alignment = style.get_alignment_mut();
    alignment.set_horizontal(HorizontalAlignmentValues::Center);
    alignment.set_vertical(VerticalAlignmentValues::Center);

    set_thin_borders(&mut style);
    style
}

/// Thin borders, top-aligned, wrapped.
fn data_style() -> Style {
    let mut style = Style::default();

    let alignment = style.get_alignment_mut();
    alignment.set_vertical(VerticalAlignmentValues::Top);
    alignment.set_wrap_text(true);

    set_thin_borders(&mut style);
    style
}

/// Content and layout of a template, rendered in one go by [`Template::write`].
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    sheet_name: String,
    header: Vec<&'static str>,
    rows: Vec<Vec<CellValue>>,
    column_widths: Vec<f64>,
    header_height: f64,
    data_height: f64,
}

#[derive(Debug, Default)]
pub struct TemplateBuilder {
    sheet_name: String,
    header: Vec<&'static str>,
    rows: Vec<Vec<CellValue>>,
    column_widths: Vec<f64>,
    header_height: Option<f64>,
    data_height: Option<f64>,
}

impl TemplateBuilder {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        TemplateBuilder {
            sheet_name: sheet_name.into(),
            ..Default::default()
        }
    }

    pub fn header(mut self, names: Vec<&'static str>) -> Self {
        self.header = names;
        self
    }

    pub fn row(mut self, values: Vec<CellValue>) -> Self {
        self.rows.push(values);
        self
    }

    pub fn column_widths(mut self, widths: Vec<f64>) -> Self {
        self.column_widths = widths;
        self
    }

    pub fn row_heights(mut self, header: f64, data: f64) -> Self {
        self.header_height = Some(header);
        self.data_height = Some(data);
        self
    }

    pub fn build(self) -> Result<Template> {
        ensure!(!self.header.is_empty(), "header kosong");
        let width = self.header.len();
        for (i, row) in self.rows.iter().enumerate() {
            ensure!(
                row.len() == width,
                "baris {} berisi {} kolom, header berisi {width}",
                i + 2,
                row.len()
            );
        }
        ensure!(
            self.column_widths.len() == width,
            "jumlah lebar kolom ({}) tidak sama dengan jumlah kolom ({width})",
            self.column_widths.len()
        );

        Ok(Template {
            sheet_name: self.sheet_name,
            header: self.header,
            rows: self.rows,
            column_widths: self.column_widths,
            header_height: self.header_height.unwrap_or(HEADER_ROW_HEIGHT),
            data_height: self.data_height.unwrap_or(DATA_ROW_HEIGHT),
        })
    }
}

impl Template {
    /// The question-bank import template.
    pub fn bank_soal() -> Result<Template> {
        let builder = schema::example_rows().iter().fold(
            TemplateBuilder::new(SHEET_NAME).header(schema::header()),
            |builder, example| builder.row(example.values()),
        );
        builder
            .column_widths(Column::ALL.iter().map(|c| c.width()).collect())
            .row_heights(HEADER_ROW_HEIGHT, DATA_ROW_HEIGHT)
            .build()
    }

    pub fn render(&self) -> Result<Spreadsheet> {
        let mut book = umya_spreadsheet::new_file_empty_worksheet();
        let sheet = book
            .new_sheet(self.sheet_name.as_str())
            .map_err(|e| anyhow!("Gagal membuat sheet {}: {e}", self.sheet_name))?;

        // Coordinates are 1-based (col, row).
        let header_style = header_style();
        for (col, name) in (1u32..).zip(&self.header) {
            let cell = sheet.get_cell_mut((col, 1));
            cell.set_value_string(*name);
            cell.set_style(header_style.clone());
        }
        sheet.get_row_dimension_mut(&1).set_height(self.header_height);

        let data_style = data_style();
        for (row, values) in (2u32..).zip(&self.rows) {
            for (col, value) in (1u32..).zip(values) {
                let cell = sheet.get_cell_mut((col, row));
                // set_value would turn "true" and "5" into bool/number cells.
                match value {
                    CellValue::Blank => {}
                    CellValue::Text(s) => {
                        cell.set_value_string(*s);
                    }
                    CellValue::Number(n) => {
                        cell.set_value_number(*n);
                    }
                }
                cell.set_style(data_style.clone());
            }
            sheet.get_row_dimension_mut(&row).set_height(self.data_height);
        }

        for (col, width) in (1u32..).zip(&self.column_widths) {
            sheet.get_column_dimension_by_number_mut(&col).set_width(*width);
        }

        Ok(book)
    }

    /// Renders the template and writes it to `path`, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let book = self.render()?;
        umya_spreadsheet::writer::xlsx::write(&book, path)
            .with_context(|| format!("Gagal menyimpan file: {}", path.display()))?;
        Ok(())
    }
}

pub fn generate(output_path: &Path) -> Result<()> {
    Template::bank_soal()?.write(output_path)
}

fn output_path(args: impl IntoIterator<Item = std::ffi::OsString>) -> PathBuf {
    let mut args = args.into_iter();
    let _exe = args.next();
    args.next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH))
}

pub fn run(args: impl IntoIterator<Item = std::ffi::OsString>) -> Result<()> {
    let output = output_path(args);
    generate(&output)?;
    println!("✅ File Excel template berhasil dibuat: {}", output.display());
    Ok(())
}
