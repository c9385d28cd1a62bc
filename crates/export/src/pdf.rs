//! PDF table rendering of soil records.
//!
//! The document is a single table on US Letter pages with one-inch margins:
//! a header row (grey background, whitesmoke bold Helvetica 12pt text, 12pt
//! bottom padding) followed by one body row per record (beige background,
//! Helvetica 10pt). All cells are centered and outlined by a black 1pt grid.
//! Rows that do not fit on a page continue on the next one.
//!
//! Layout is computed in points by [`TableLayout`] and converted to
//! millimetres only when drawing.

use crate::error::{ExportError, ExportResult};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};
use soil_core::SoilRecord;
use std::io::{BufWriter, Write};
use std::ops::Range;

const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;
const MARGIN: f32 = 72.0;

const HEADER_FONT_SIZE: f32 = 12.0;
const BODY_FONT_SIZE: f32 = 10.0;
const LEADING_FACTOR: f32 = 1.2;
const HORIZONTAL_PADDING: f32 = 6.0;
const TOP_PADDING: f32 = 3.0;
const BODY_BOTTOM_PADDING: f32 = 3.0;
const HEADER_BOTTOM_PADDING: f32 = 12.0;
const GRID_LINE_WIDTH: f32 = 1.0;

const GREY: (f32, f32, f32) = (0.5, 0.5, 0.5);
const WHITESMOKE: (f32, f32, f32) = (0.961, 0.961, 0.961);
const BEIGE: (f32, f32, f32) = (0.961, 0.961, 0.863);
const BLACK: (f32, f32, f32) = (0.0, 0.0, 0.0);

/// Approximate Helvetica advance width in thousandths of an em.
fn helvetica_advance(ch: char, bold: bool) -> f32 {
    match ch {
        '0'..='9' | '_' | '$' => 556.0,
        ' ' | '.' | ',' | ':' | ';' | '!' | '/' => 278.0,
        'i' | 'j' | 'l' => 222.0,
        '-' | '(' | ')' | 'r' => 333.0,
        'f' | 't' => 278.0,
        'm' => 833.0,
        'w' => 722.0,
        'M' => 833.0,
        'W' => 944.0,
        'I' => 278.0,
        c if c.is_ascii_lowercase() => {
            if bold {
                611.0
            } else {
                556.0
            }
        }
        c if c.is_ascii_uppercase() => 722.0,
        _ => 556.0,
    }
}

/// Width of `text` in points at `font_size`.
pub fn text_width(text: &str, font_size: f32, bold: bool) -> f32 {
    text.chars()
        .map(|ch| helvetica_advance(ch, bold))
        .sum::<f32>()
        * font_size
        / 1000.0
}

/// Computed table geometry, in points.
#[derive(Debug, Clone)]
pub struct TableLayout {
    /// Row 0 is the header.
    rows: Vec<Vec<String>>,
    column_widths: Vec<f32>,
    /// Uniform shrink factor applied when the natural width exceeds the page.
    scale: f32,
}

impl TableLayout {
    /// Lay out a header row plus one row per record.
    pub fn new(records: &[SoilRecord]) -> Self {
        let mut rows = Vec::with_capacity(records.len() + 1);
        rows.push(
            SoilRecord::FIELD_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect::<Vec<_>>(),
        );
        rows.extend(records.iter().map(|r| r.display_values().to_vec()));

        let column_count = SoilRecord::FIELD_NAMES.len();
        let mut natural = vec![0.0_f32; column_count];
        for (index, row) in rows.iter().enumerate() {
            let (size, bold) = if index == 0 {
                (HEADER_FONT_SIZE, true)
            } else {
                (BODY_FONT_SIZE, false)
            };
            for (column, cell) in row.iter().enumerate() {
                let width = text_width(cell, size, bold) + 2.0 * HORIZONTAL_PADDING;
                natural[column] = natural[column].max(width);
            }
        }

        let total: f32 = natural.iter().sum();
        let available = PAGE_WIDTH - 2.0 * MARGIN;
        let scale = if total > available {
            available / total
        } else {
            1.0
        };

        Self {
            rows,
            column_widths: natural.into_iter().map(|w| w * scale).collect(),
            scale,
        }
    }

    /// Number of table rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_widths(&self) -> &[f32] {
        &self.column_widths
    }

    pub fn table_width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    fn font_size(&self, row: usize) -> f32 {
        let size = if row == 0 {
            HEADER_FONT_SIZE
        } else {
            BODY_FONT_SIZE
        };
        size * self.scale
    }

    fn bottom_padding(&self, row: usize) -> f32 {
        let padding = if row == 0 {
            HEADER_BOTTOM_PADDING
        } else {
            BODY_BOTTOM_PADDING
        };
        padding * self.scale
    }

    /// Height of a row in points.
    pub fn row_height(&self, row: usize) -> f32 {
        self.font_size(row) * LEADING_FACTOR + TOP_PADDING * self.scale + self.bottom_padding(row)
    }

    /// Split rows into pages; every row lands on exactly one page.
    pub fn pages(&self) -> Vec<Range<usize>> {
        let available = PAGE_HEIGHT - 2.0 * MARGIN;
        let mut pages = Vec::new();
        let mut start = 0;
        let mut used = 0.0;

        for row in 0..self.rows.len() {
            let height = self.row_height(row);
            if used + height > available && row > start {
                pages.push(start..row);
                start = row;
                used = 0.0;
            }
            used += height;
        }
        pages.push(start..self.rows.len());
        pages
    }

    fn left(&self) -> f32 {
        MARGIN + (PAGE_WIDTH - 2.0 * MARGIN - self.table_width()) / 2.0
    }
}

fn rgb((r, g, b): (f32, f32, f32)) -> Color {
    Color::Rgb(Rgb::new(r, g, b, None))
}

fn mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

fn rect(left: f32, bottom: f32, right: f32, top: f32, mode: PaintMode) -> Rect {
    Rect::new(mm(left), mm(bottom), mm(right), mm(top)).with_mode(mode)
}

fn pdf_error(e: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf(e.to_string())
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn draw_row(
    layer: &PdfLayerReference,
    layout: &TableLayout,
    fonts: &Fonts,
    row: usize,
    top: f32,
) -> f32 {
    let height = layout.row_height(row);
    let bottom = top - height;
    let left = layout.left();
    let right = left + layout.table_width();
    let header = row == 0;

    layer.set_fill_color(rgb(if header { GREY } else { BEIGE }));
    layer.add_rect(rect(left, bottom, right, top, PaintMode::Fill));

    let font_size = layout.font_size(row);
    let font = if header { &fonts.bold } else { &fonts.regular };
    let baseline = bottom + layout.bottom_padding(row) + 0.2 * font_size;

    layer.set_outline_color(rgb(BLACK));
    layer.set_outline_thickness(GRID_LINE_WIDTH);
    layer.set_fill_color(rgb(if header { WHITESMOKE } else { BLACK }));

    let mut x = left;
    for (cell, width) in layout.rows[row].iter().zip(&layout.column_widths) {
        layer.add_rect(rect(x, bottom, x + width, top, PaintMode::Stroke));
        let text_x = x + (width - text_width(cell, font_size, header)) / 2.0;
        layer.use_text(cell.as_str(), font_size, mm(text_x), mm(baseline), font);
        x += width;
    }

    bottom
}

/// Render the records table as a PDF document into `writer`.
pub fn write_pdf<W: Write>(writer: W, records: &[SoilRecord]) -> ExportResult<TableLayout> {
    let layout = TableLayout::new(records);
    let pages = layout.pages();

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Soil Carbon Data",
        mm(PAGE_WIDTH),
        mm(PAGE_HEIGHT),
        "Table",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?,
    };

    for (index, page_rows) in pages.iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Table")
        };
        let layer = doc.get_page(page).get_layer(layer);

        let mut top = PAGE_HEIGHT - MARGIN;
        for row in page_rows.clone() {
            top = draw_row(&layer, &layout, &fonts, row, top);
        }
    }

    let mut out = BufWriter::new(writer);
    doc.save(&mut out).map_err(pdf_error)?;
    out.flush()?;
    Ok(layout)
}
