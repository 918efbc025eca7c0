//! Wire types for the ClinicCloud search service.
//!
//! The service speaks Spanish field names on the wire (`titulo`,
//! `texto_resumen`, ...); serde renames keep the Rust side idiomatic.
//! Everything beyond `id` is display data — the client never interprets it.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Document identifier as sent by the service: an integer or a string.
///
/// Only used for selection equality, and only within one result set —
/// there is no cross-request identity guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Int(i64),
    Text(String),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Int(n) => write!(f, "{n}"),
            DocumentId::Text(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(rename = "nombre")]
    pub name: String,
}

/// One search result record. Field order on screen follows the result
/// cards of the ClinicCloud web client: category, title, authors, date,
/// summary, source link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "texto_resumen", default)]
    pub summary: Option<String>,
    #[serde(rename = "url_fuente", default)]
    pub source_url: Option<String>,
    /// ISO-8601 date string, kept raw; formatted lazily for display.
    #[serde(rename = "fecha_publicacion", default)]
    pub publication_date: Option<String>,
    #[serde(rename = "autor", default)]
    pub authors: Vec<String>,
    #[serde(rename = "categoria", default)]
    pub category: Option<Category>,
}

impl Document {
    pub fn category_label(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("Uncategorized")
    }

    pub fn authors_label(&self) -> String {
        if self.authors.is_empty() {
            "Unknown author".to_string()
        } else {
            self.authors.join(", ")
        }
    }

    /// `DD/MM/YYYY`, or a placeholder when the date is absent or malformed.
    pub fn date_label(&self) -> String {
        self.publication_date
            .as_deref()
            .and_then(parse_iso_date)
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "Date unavailable".to_string())
    }

    pub fn summary_label(&self) -> &str {
        self.summary
            .as_deref()
            .unwrap_or("No summary available for this document.")
    }
}

/// Accepts `YYYY-MM-DD` with or without a trailing time component.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_document() {
        let json = r#"{
            "id": 7,
            "titulo": "Cefaleas tensionales",
            "texto_resumen": "Resumen del documento.",
            "url_fuente": "https://example.org/doc/7",
            "fecha_publicacion": "2024-03-15",
            "autor": ["García, M.", "López, A."],
            "categoria": {"nombre": "Neurología"}
        }"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, DocumentId::Int(7));
        assert_eq!(doc.title, "Cefaleas tensionales");
        assert_eq!(doc.category_label(), "Neurología");
        assert_eq!(doc.authors_label(), "García, M., López, A.");
        assert_eq!(doc.date_label(), "15/03/2024");
    }

    #[test]
    fn test_deserialize_sparse_document() {
        // Only id and titulo are guaranteed; everything else may be
        // null or missing entirely.
        let json = r#"{"id": "doc-9", "titulo": "Sin metadatos", "texto_resumen": null}"#;

        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.id, DocumentId::Text("doc-9".to_string()));
        assert!(doc.summary.is_none());
        assert!(doc.authors.is_empty());
        assert_eq!(doc.category_label(), "Uncategorized");
        assert_eq!(doc.authors_label(), "Unknown author");
        assert_eq!(doc.date_label(), "Date unavailable");
        assert_eq!(
            doc.summary_label(),
            "No summary available for this document."
        );
    }

    #[test]
    fn test_date_label_tolerates_datetime_and_garbage() {
        let mut doc: Document =
            serde_json::from_str(r#"{"id": 1, "titulo": "t"}"#).unwrap();

        doc.publication_date = Some("2023-11-02T00:00:00".to_string());
        assert_eq!(doc.date_label(), "02/11/2023");

        doc.publication_date = Some("not-a-date".to_string());
        assert_eq!(doc.date_label(), "Date unavailable");
    }

    #[test]
    fn test_id_equality_is_typed() {
        assert_eq!(DocumentId::Int(3), DocumentId::Int(3));
        assert_ne!(DocumentId::Int(3), DocumentId::Text("3".to_string()));
    }
}
