//! Printable shopping-list rendering
//!
//! Renders the list as a paginated A4 document: categories are laid out in
//! a two-column grid, each as a small table with a header bar, a column
//! header row, and one checkbox row per entry. Quantities render
//! right-aligned when present. An empty list still yields a valid document
//! containing only the page header.

use crate::error::PdfError;
use crate::list::models::ListEntry;
use chrono::Local;
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
};
use std::cmp::Ordering;

// Page geometry, in millimeters (A4).
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 14.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

// Two columns of category tables with a gutter between them.
const COLS: usize = 2;
const GUTTER: f32 = 5.6;
const BLOCK_GAP: f32 = 4.2;
const ROW_HEIGHT: f32 = 7.0;

// Font sizes, in points.
const TITLE_FONT_SIZE: f32 = 18.0;
const CATEGORY_FONT_SIZE: f32 = 12.0;
const TEXT_FONT_SIZE: f32 = 10.0;

const PT_TO_MM: f32 = 0.352_778;

/// Label for entries whose category is empty after trimming.
const UNCATEGORIZED_LABEL: &str = "Everything else";

/// Color palette; reads as clear contrasts in grayscale.
mod palette {
    use printpdf::{Color, Rgb};

    fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::Rgb(Rgb::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            None,
        ))
    }

    pub fn title() -> Color {
        rgb(0x1F, 0x29, 0x33) // dark slate
    }
    pub fn subtitle() -> Color {
        rgb(0x6B, 0x72, 0x80) // muted gray
    }
    pub fn category_bg() -> Color {
        rgb(0xE5, 0xE7, 0xEB) // light gray
    }
    pub fn header_rule() -> Color {
        rgb(0xD1, 0xD5, 0xDB) // soft divider
    }
    pub fn checkbox_border() -> Color {
        rgb(0x9C, 0xA3, 0xAF)
    }
    pub fn checkbox_fill() -> Color {
        rgb(0xF3, 0xF4, 0xF6)
    }
    pub fn item_text() -> Color {
        rgb(0x11, 0x18, 0x27) // near-black
    }
    pub fn quantity_text() -> Color {
        rgb(0x4B, 0x56, 0x63) // mid-gray
    }
    pub fn row_stripe() -> Color {
        rgb(0xF9, 0xFA, 0xFB)
    }
}

/// Renders the list into PDF bytes, stamped with the current local time.
pub fn render_shopping_list(entries: &[ListEntry]) -> Result<Vec<u8>, PdfError> {
    let generated_at = Local::now().format("%Y-%m-%d %H:%M").to_string();
    render_with_timestamp(entries, &generated_at)
}

fn render_with_timestamp(entries: &[ListEntry], generated_at: &str) -> Result<Vec<u8>, PdfError> {
    let (doc, page, layer_index) =
        PdfDocument::new("Shopping List", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut layer = doc.get_page(page).get_layer(layer_index);
    let mut y = draw_document_header(&layer, &bold, &regular, generated_at);

    let col_width = (CONTENT_WIDTH - GUTTER) / COLS as f32;
    let mut col = 0usize;
    let mut pair_bottom = y;

    for (key, group) in group_by_category(entries) {
        // Category bar + column headers + one row per entry.
        let block_height = ROW_HEIGHT * (group.len() as f32 + 2.0);

        if y + block_height > PAGE_HEIGHT - MARGIN {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "content");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = MARGIN;
            col = 0;
            pair_bottom = y;
        }

        let x = MARGIN + col as f32 * (col_width + GUTTER);
        let end_y = draw_category_block(
            &layer,
            &bold,
            &regular,
            x,
            y,
            col_width,
            category_label(&key),
            &group,
        );
        pair_bottom = pair_bottom.max(end_y);

        col += 1;
        if col >= COLS {
            col = 0;
            y = pair_bottom + BLOCK_GAP;
        }
    }

    Ok(doc.save_to_bytes()?)
}

/// Groups entries by trimmed category, preserving input order within each
/// group. The empty category sorts last; the rest sort alphabetically,
/// ignoring case.
fn group_by_category(entries: &[ListEntry]) -> Vec<(String, Vec<&ListEntry>)> {
    let mut groups: Vec<(String, Vec<&ListEntry>)> = Vec::new();
    for entry in entries {
        let key = entry.category.trim();
        match groups.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some((_, group)) => group.push(entry),
            None => groups.push((key.to_string(), vec![entry])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b)),
    });
    groups
}

fn category_label(key: &str) -> &str {
    if key.is_empty() {
        UNCATEGORIZED_LABEL
    } else {
        key
    }
}

/// Converts a distance from the top edge into the bottom-up page
/// coordinate printpdf expects.
fn from_top(y: f32) -> Mm {
    Mm(PAGE_HEIGHT - y)
}

/// Baseline position for text whose cap top sits at `y_top`.
fn baseline(y_top: f32, font_size_pt: f32) -> Mm {
    from_top(y_top + font_size_pt * PT_TO_MM * 0.8)
}

/// Rough Helvetica string width; close enough to right-align the short
/// quantity strings this layout deals with.
fn approx_text_width(text: &str, font_size_pt: f32) -> f32 {
    text.chars().count() as f32 * font_size_pt * 0.5 * PT_TO_MM
}

fn rect_from_top(x: f32, y_top: f32, width: f32, height: f32, mode: PaintMode) -> Rect {
    Rect::new(
        Mm(x),
        Mm(PAGE_HEIGHT - y_top - height),
        Mm(x + width),
        Mm(PAGE_HEIGHT - y_top),
    )
    .with_mode(mode)
}

/// Draws the document title, timestamp, and a horizontal rule. Returns the
/// vertical offset where content starts.
fn draw_document_header(
    layer: &PdfLayerReference,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
    generated_at: &str,
) -> f32 {
    layer.set_fill_color(palette::title());
    layer.use_text(
        "Shopping List",
        TITLE_FONT_SIZE,
        Mm(MARGIN),
        baseline(MARGIN, TITLE_FONT_SIZE),
        bold,
    );

    let subtitle_y = MARGIN + 7.5;
    layer.set_fill_color(palette::subtitle());
    layer.use_text(
        generated_at,
        TEXT_FONT_SIZE,
        Mm(MARGIN),
        baseline(subtitle_y, TEXT_FONT_SIZE),
        regular,
    );

    let rule_y = subtitle_y + 5.6;
    layer.set_outline_color(palette::header_rule());
    layer.set_outline_thickness(0.5);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN), from_top(rule_y)), false),
            (Point::new(Mm(PAGE_WIDTH - MARGIN), from_top(rule_y)), false),
        ],
        is_closed: false,
    });

    rule_y + BLOCK_GAP
}

/// Draws one category table at the given position and returns the vertical
/// offset just below its last row.
#[allow(clippy::too_many_arguments)]
fn draw_category_block(
    layer: &PdfLayerReference,
    bold: &IndirectFontRef,
    regular: &IndirectFontRef,
    x: f32,
    y_top: f32,
    width: f32,
    label: &str,
    entries: &[&ListEntry],
) -> f32 {
    let item_col_width = width * 0.7;
    let text_x = x + 7.8;
    let qty_right = x + width - 2.8;

    // Category header bar
    layer.set_fill_color(palette::category_bg());
    layer.add_rect(rect_from_top(x, y_top, width, ROW_HEIGHT, PaintMode::Fill));

    layer.set_fill_color(palette::title());
    layer.use_text(
        label,
        CATEGORY_FONT_SIZE,
        Mm(x + 2.8),
        baseline(y_top + 1.2, CATEGORY_FONT_SIZE),
        bold,
    );

    let mut y = y_top + ROW_HEIGHT;

    // Column headers (Item / Qty)
    layer.set_fill_color(palette::subtitle());
    layer.use_text(
        "Item",
        TEXT_FONT_SIZE,
        Mm(text_x),
        baseline(y + 1.0, TEXT_FONT_SIZE),
        regular,
    );
    let qty_width = approx_text_width("Qty", TEXT_FONT_SIZE);
    layer.use_text(
        "Qty",
        TEXT_FONT_SIZE,
        Mm(qty_right - qty_width),
        baseline(y + 1.0, TEXT_FONT_SIZE),
        regular,
    );

    y += ROW_HEIGHT;

    for (row, entry) in entries.iter().enumerate() {
        // Alternating row background for readability
        if row % 2 == 0 {
            layer.set_fill_color(palette::row_stripe());
            layer.add_rect(rect_from_top(x, y - 0.7, width, ROW_HEIGHT, PaintMode::Fill));
        }

        // Checkbox
        let box_size = 3.5;
        let box_y = y + (ROW_HEIGHT - box_size) / 2.0;
        layer.set_fill_color(palette::checkbox_fill());
        layer.set_outline_color(palette::checkbox_border());
        layer.set_outline_thickness(0.8);
        layer.add_rect(rect_from_top(
            x + 2.1,
            box_y,
            box_size,
            box_size,
            PaintMode::FillStroke,
        ));

        // Item text
        layer.set_fill_color(palette::item_text());
        layer.use_text(
            entry.item.as_str(),
            TEXT_FONT_SIZE,
            Mm(text_x),
            baseline(y + 1.0, TEXT_FONT_SIZE),
            regular,
        );

        // Quantity, right-aligned when present
        if !entry.quantity.is_empty() {
            let qty_x = qty_right - approx_text_width(&entry.quantity, TEXT_FONT_SIZE);
            layer.set_fill_color(palette::quantity_text());
            layer.use_text(
                entry.quantity.as_str(),
                TEXT_FONT_SIZE,
                Mm(qty_x.max(x + item_col_width)),
                baseline(y + 1.0, TEXT_FONT_SIZE),
                regular,
            );
        }

        y += ROW_HEIGHT;
    }

    y
}
