//! Kitchen ticket renderer
//!
//! Renders a KOT into a monospace print-ready document: header with
//! station, table, date and order-id suffix, one line per item with the
//! quantity right-aligned, indented instruction lines, and a footer
//! timestamp.

use chrono::{DateTime, Local};

use shared::kot::KotTicket;

/// Kitchen ticket renderer
pub struct TicketRenderer {
    width: usize,
}

impl TicketRenderer {
    /// Create a renderer with the given document width in characters
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Render a ticket to its print document
    pub fn render(&self, ticket: &KotTicket) -> String {
        let mut doc = Document::new(self.width);

        self.render_header(&mut doc, ticket);
        self.render_items(&mut doc, ticket);
        self.render_footer(&mut doc, ticket);

        doc.build()
    }

    fn render_header(&self, doc: &mut Document, ticket: &KotTicket) {
        doc.center(ticket.station.label());
        doc.center(&format!("KOT {}", ticket.ticket_number));

        if let Some(table) = ticket.table_number {
            doc.center(&format!("Table {}", table));
        }

        let suffix = order_id_suffix(&ticket.order_id);
        doc.center(&format!("Order {} ({})", ticket.order_number, suffix));
        doc.center(&format_date(ticket.created_at));
        doc.sep_double();
    }

    fn render_items(&self, doc: &mut Document, ticket: &KotTicket) {
        for item in &ticket.items {
            doc.split(&item.name, &format!("x{}", item.quantity));

            if let Some(note) = &item.instructions
                && !note.is_empty()
            {
                doc.line(&format!("  * {}", note));
            }
        }
        doc.sep_single();
    }

    fn render_footer(&self, doc: &mut Document, ticket: &KotTicket) {
        if ticket.is_printed {
            doc.center("*** REPRINT ***");
        }
        doc.center(&format_time(chrono::Utc::now().timestamp_millis()));
    }
}

impl Default for TicketRenderer {
    fn default() -> Self {
        Self::new(32)
    }
}

/// Last 6 characters of the order id, for quick matching against receipts
fn order_id_suffix(order_id: &str) -> String {
    let chars: Vec<char> = order_id.chars().collect();
    let start = chars.len().saturating_sub(6);
    chars[start..].iter().collect()
}

/// Format unix millis as DD/MM/YYYY HH:mm in local time
fn format_date(ts: i64) -> String {
    match DateTime::from_timestamp_millis(ts) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%d/%m/%Y %H:%M")
            .to_string(),
        None => "unknown time".to_string(),
    }
}

/// Format unix millis as HH:mm:ss in local time
fn format_time(ts: i64) -> String {
    match DateTime::from_timestamp_millis(ts) {
        Some(dt) => dt.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => "unknown time".to_string(),
    }
}

// ============================================================================
// Document builder
// ============================================================================

/// Plain-text monospace document builder
struct Document {
    width: usize,
    out: String,
}

impl Document {
    fn new(width: usize) -> Self {
        Self {
            width,
            out: String::new(),
        }
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn center(&mut self, text: &str) {
        let pad = self.width.saturating_sub(text.chars().count()) / 2;
        self.out.push_str(&" ".repeat(pad));
        self.line(text);
    }

    /// Left text with right-aligned suffix, e.g. `Butter Chicken        x2`
    fn split(&mut self, left: &str, right: &str) {
        let used = left.chars().count() + right.chars().count();
        if used >= self.width {
            self.line(&format!("{left} {right}"));
        } else {
            let pad = self.width - used;
            self.line(&format!("{left}{}{right}", " ".repeat(pad)));
        }
    }

    fn sep_single(&mut self) {
        let sep = "-".repeat(self.width);
        self.line(&sep);
    }

    fn sep_double(&mut self) {
        let sep = "=".repeat(self.width);
        self.line(&sep);
    }

    fn build(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::kot::{Station, TicketLine, TicketStatus};

    fn sample_ticket() -> KotTicket {
        KotTicket {
            id: "tic-1".to_string(),
            ticket_number: "KOT-7".to_string(),
            order_id: "64a1f2c3d4e5f60718293a4b".to_string(),
            order_number: "A1023".to_string(),
            station: Station::Kitchen,
            items: vec![
                TicketLine {
                    name: "Butter Chicken".to_string(),
                    quantity: 2,
                    instructions: Some("extra gravy".to_string()),
                },
                TicketLine {
                    name: "Garlic Naan".to_string(),
                    quantity: 4,
                    instructions: None,
                },
            ],
            status: TicketStatus::Pending,
            is_printed: false,
            printed_at: None,
            printed_by: None,
            table_number: Some(12),
            order_status: None,
            created_at: 1705912335000,
        }
    }

    #[test]
    fn test_render_ticket_content() {
        let renderer = TicketRenderer::new(32);
        let doc = renderer.render(&sample_ticket());

        assert!(doc.contains("Kitchen"));
        assert!(doc.contains("KOT KOT-7"));
        assert!(doc.contains("Table 12"));
        // Order-id suffix, not the full id
        assert!(doc.contains("(293a4b)"));
        assert!(!doc.contains("64a1f2c3d4e5f60718293a4b"));
        assert!(doc.contains("Butter Chicken"));
        assert!(doc.contains("x2"));
        assert!(doc.contains("  * extra gravy"));
        assert!(doc.contains("Garlic Naan"));
    }

    #[test]
    fn test_item_quantity_right_aligned() {
        let renderer = TicketRenderer::new(32);
        let doc = renderer.render(&sample_ticket());

        let line = doc
            .lines()
            .find(|l| l.starts_with("Garlic Naan"))
            .expect("item line missing");
        assert_eq!(line.chars().count(), 32);
        assert!(line.ends_with("x4"));
    }

    #[test]
    fn test_reprint_marker() {
        let renderer = TicketRenderer::new(32);
        let mut ticket = sample_ticket();
        ticket.is_printed = true;

        let doc = renderer.render(&ticket);
        assert!(doc.contains("*** REPRINT ***"));
    }
}
